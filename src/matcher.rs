use std::path::Path;

use fancy_regex::Regex;
use scraper::{ElementRef, Html};
use tracing::{debug, error, warn};

use crate::config::FinderConfig;
use crate::document;
use crate::error::{FinderError, Result};

const HREF_KEY: &str = "href";
const CLASS_KEY: &str = "class";
const TITLE_KEY: &str = "title";

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| FinderError::Pattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Re-identifies the target button in a modified document by its `href`,
/// `title` and `class` instead of its id.
pub struct Matcher {
    href: Regex,
    title: Regex,
    class: Regex,
}

impl Matcher {
    pub fn new(config: &FinderConfig) -> Result<Self> {
        Ok(Self {
            href: compile(&config.href_pattern)?,
            title: compile(&config.title_pattern)?,
            class: compile(&config.class_pattern)?,
        })
    }

    /// Elements surviving all three filters, in document order.
    pub fn candidates<'a>(&self, html: &'a Html) -> Vec<ElementRef<'a>> {
        let mut elements: Vec<ElementRef<'a>> = document::elements(html)
            .filter(|element| {
                element
                    .value()
                    .attr(HREF_KEY)
                    .is_some_and(|href| self.accepts_href(href))
            })
            .collect();
        debug!("{} element(s) with matching {HREF_KEY}", elements.len());

        elements.retain(|element| self.accepts_title(attr(element, TITLE_KEY)));
        debug!("{} element(s) left after {TITLE_KEY} filter", elements.len());

        elements.retain(|element| self.accepts_class(attr(element, CLASS_KEY)));
        debug!("{} element(s) left after {CLASS_KEY} filter", elements.len());

        elements
    }

    pub fn find<'a>(&self, html: &'a Html) -> Option<ElementRef<'a>> {
        self.candidates(html).into_iter().next()
    }

    /// Loads `path` and runs [`Matcher::find`] over it; `None` when the file
    /// cannot be read.
    pub fn find_in_file<T>(&self, path: &Path, f: impl FnOnce(Option<ElementRef<'_>>) -> T) -> T {
        match document::load(path) {
            Ok(html) => f(self.find(&html)),
            Err(err) => {
                error!("{err}");
                f(None)
            }
        }
    }

    /// The href stage searches rather than full-matches, so a trailing `$`
    /// also matches before one final line terminator.
    fn accepts_href(&self, href: &str) -> bool {
        matches(&self.href, href) || matches(&self.href, strip_final_line_terminator(href))
    }

    fn accepts_title(&self, title: &str) -> bool {
        title.is_empty() || matches(&self.title, title)
    }

    fn accepts_class(&self, class: &str) -> bool {
        class.is_empty() || matches(&self.class, class)
    }
}

fn attr<'a>(element: &ElementRef<'a>, key: &str) -> &'a str {
    element.value().attr(key).unwrap_or("")
}

fn strip_final_line_terminator(value: &str) -> &str {
    value
        .strip_suffix("\r\n")
        .or_else(|| value.strip_suffix(['\n', '\r', '\u{85}', '\u{2028}', '\u{2029}']))
        .unwrap_or(value)
}

fn matches(regex: &Regex, value: &str) -> bool {
    regex.is_match(value).unwrap_or_else(|err| {
        warn!("Pattern {} failed on \"{value}\": {err}", regex.as_str());
        false
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn matcher() -> Matcher {
        Matcher::new(&FinderConfig::default()).unwrap()
    }

    fn ids(elements: &[ElementRef<'_>]) -> Vec<String> {
        elements
            .iter()
            .map(|e| e.value().id().unwrap_or_default().to_string())
            .collect()
    }

    #[test]
    fn each_filter_excludes_its_own_failure() {
        let html = Html::parse_document(
            r##"<body>
                <a id="bad-href" href="/ok" class="btn" title="Make-Button">1</a>
                <a id="bad-title" href="#ok" class="btn" title="Do-Something">2</a>
                <a id="bad-class" href="#ok" class="link" title="Make-Button">3</a>
                <a id="good" href="#check-and-ok" class="btn btn-success" title="Make-Button">4</a>
            </body>"##,
        );

        assert_eq!(ids(&matcher().candidates(&html)), ["good"]);
    }

    #[test]
    fn empty_title_and_class_are_kept() {
        let html = Html::parse_document(
            r##"<a id="bare" href="#ok">x</a><a id="blank" href="#ok" title="" class="">y</a>"##,
        );
        assert_eq!(ids(&matcher().candidates(&html)), ["bare", "blank"]);
    }

    #[test]
    fn returns_first_survivor_in_document_order() {
        let html = Html::parse_document(
            r##"<div><a id="first" href="#book">1</a></div><a id="second" href="#ok">2</a>"##,
        );
        let found = matcher().find(&html).unwrap();
        assert_eq!(found.value().id(), Some("first"));
    }

    #[test]
    fn href_is_case_sensitive() {
        let html = Html::parse_document(r##"<a href="#OK">x</a>"##);
        assert!(matcher().find(&html).is_none());
    }

    #[test]
    fn no_href_match_yields_nothing() {
        let html = Html::parse_document(r#"<a href="/home" class="btn">x</a><button>ok</button>"#);
        assert!(matcher().candidates(&html).is_empty());
        assert!(matcher().find(&html).is_none());
    }

    #[test]
    fn href_dollar_allows_final_line_terminator() {
        let html = Html::parse_document(
            "<a id=\"nl\" href=\"#ok\n\">x</a><a id=\"crlf\" href=\"#ok\r\n\">y</a>",
        );
        assert_eq!(ids(&matcher().candidates(&html)), ["nl", "crlf"]);

        let m = matcher();
        assert!(m.accepts_href("#ok\u{2028}"));
        assert!(!m.accepts_href("#ok\n\n"));
        assert!(!m.accepts_href("#o\nk"));
    }

    #[test]
    fn unreadable_file_yields_none() {
        let dir = tempfile::TempDir::new().unwrap();
        let found = matcher().find_in_file(&dir.path().join("missing.html"), |e| e.is_some());
        assert!(!found);
    }

    proptest! {
        #[test]
        fn href_pattern_is_hash_prefix_then_ok(href in "[#a-z -]{0,12}") {
            let expected = href.starts_with('#') && href[1..].contains("ok");
            prop_assert_eq!(matcher().accepts_href(&href), expected);
        }

        #[test]
        fn class_filter_is_empty_or_btn_prefix(class in "[a-z -]{0,10}") {
            let expected = class.is_empty() || class.starts_with("btn");
            prop_assert_eq!(matcher().accepts_class(&class), expected);
        }

        #[test]
        fn title_filter_is_empty_or_contains_marker(prefix in "[A-Za-z ]{0,6}", marked in any::<bool>()) {
            let title = if marked { format!("{prefix}Make-Button") } else { prefix.clone() };
            let expected = title.is_empty() || title.contains("Make-Button");
            prop_assert_eq!(matcher().accepts_title(&title), expected);
        }
    }
}
