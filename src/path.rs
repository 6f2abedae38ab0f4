use scraper::ElementRef;

/// Tag names from the root down to `element` itself, e.g. `html > body > div > a`.
///
/// Only tag names: no sibling indices, no attribute qualifiers. `None` gives
/// an empty string.
pub fn build(element: Option<ElementRef<'_>>, separator: &str) -> String {
    let Some(element) = element else {
        return String::new();
    };

    let mut tags: Vec<&str> = element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .map(|parent| parent.value().name())
        .collect();
    tags.reverse();
    tags.push(element.value().name());

    tags.join(separator)
}
