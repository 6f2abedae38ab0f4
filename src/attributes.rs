use std::collections::BTreeMap;
use std::fmt;

use scraper::ElementRef;

/// Attribute name to value, copied out of an element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMap(BTreeMap<String, String>);

impl AttributeMap {
    pub fn from_element(element: &ElementRef<'_>) -> Self {
        element
            .value()
            .attrs()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// What changed going from `self` (origin) to `other` (modified).
    pub fn diff(&self, other: &Self) -> AttributeDiff {
        let mut diff = AttributeDiff::default();

        for (key, value) in &self.0 {
            match other.0.get(key) {
                None => diff.removed.push((key.clone(), value.clone())),
                Some(new) if new != value => diff.changed.push(Change {
                    key: key.clone(),
                    from: value.clone(),
                    to: new.clone(),
                }),
                Some(_) => {}
            }
        }

        for (key, value) in &other.0 {
            if !self.0.contains_key(key) {
                diff.added.push((key.clone(), value.clone()));
            }
        }

        diff
    }
}

impl FromIterator<(String, String)> for AttributeMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub key: String,
    pub from: String,
    pub to: String,
}

/// Attribute-level difference between the origin element and its match.
/// Entries are sorted by attribute name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeDiff {
    pub added: Vec<(String, String)>,
    pub removed: Vec<(String, String)>,
    pub changed: Vec<Change>,
}

impl AttributeDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }
}

impl fmt::Display for AttributeDiff {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "attributes unchanged");
        }
        for change in &self.changed {
            writeln!(f, "~ {}: \"{}\" -> \"{}\"", change.key, change.from, change.to)?;
        }
        for (key, value) in &self.removed {
            writeln!(f, "- {key}=\"{value}\"")?;
        }
        for (key, value) in &self.added {
            writeln!(f, "+ {key}=\"{value}\"")?;
        }
        Ok(())
    }
}
