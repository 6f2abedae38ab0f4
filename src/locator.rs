use std::path::Path;

use scraper::{ElementRef, Html};
use tracing::{debug, error};

use crate::attributes::AttributeMap;
use crate::config::FinderConfig;
use crate::document;

/// Outcome of looking an element up by id. Callers have to decide what a
/// missing element means for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

impl<T> Lookup<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lookup<U> {
        match self {
            Self::Found(value) => Lookup::Found(f(value)),
            Self::NotFound => Lookup::NotFound,
        }
    }

    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::NotFound => None,
        }
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::NotFound, Self::Found)
    }
}

/// Owned copy of the element found in the origin document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginElement {
    pub tag_name: String,
    pub attributes: AttributeMap,
}

impl OriginElement {
    pub fn from_element(element: &ElementRef<'_>) -> Self {
        Self {
            tag_name: element.value().name().to_string(),
            attributes: AttributeMap::from_element(element),
        }
    }
}

pub struct Locator {
    target_id: String,
}

impl Locator {
    pub fn new(config: &FinderConfig) -> Self {
        Self {
            target_id: config.target_id.clone(),
        }
    }

    pub fn target_id(&self) -> &str {
        &self.target_id
    }

    /// First element whose `id` equals the target.
    pub fn find<'a>(&self, html: &'a Html) -> Lookup<ElementRef<'a>> {
        document::elements(html)
            .find(|element| element.value().id() == Some(self.target_id.as_str()))
            .into()
    }

    /// Loads `path` and looks the target up. A file that cannot be read is
    /// logged and reported as `NotFound`.
    pub fn locate(&self, path: &Path) -> Lookup<OriginElement> {
        let html = match document::load(path) {
            Ok(html) => html,
            Err(err) => {
                error!("{err}");
                return Lookup::NotFound;
            }
        };

        let lookup = self.find(&html).map(|element| OriginElement::from_element(&element));
        if let Lookup::Found(origin) = &lookup {
            debug!(
                "Found <{}> with {} attribute(s) for id '{}'",
                origin.tag_name,
                origin.attributes.len(),
                self.target_id
            );
        }
        lookup
    }
}
