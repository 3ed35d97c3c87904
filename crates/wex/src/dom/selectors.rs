// ABOUTME: Priority-ordered structural selectors used to locate the article root.
// ABOUTME: The first selector with any match wins; its first match in document order is the candidate.

use dom_query::{Document, Matcher, Selection};
use once_cell::sync::Lazy;

/// A structural match pattern: a tag name, optionally restricted to a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementSelector {
    pub tag: &'static str,
    pub class: Option<&'static str>,
}

impl ElementSelector {
    /// Matches any element with the given tag name.
    pub const fn tag(tag: &'static str) -> Self {
        Self { tag, class: None }
    }

    /// Matches elements with the given tag name carrying `class`.
    pub const fn classed(tag: &'static str, class: &'static str) -> Self {
        Self {
            tag,
            class: Some(class),
        }
    }

    /// The CSS form of this pattern, e.g. `div.article-content`.
    pub fn css(&self) -> String {
        match self.class {
            Some(class) => format!("{}.{}", self.tag, class),
            None => self.tag.to_string(),
        }
    }
}

/// Article root patterns, highest priority first.
///
/// Semantic containers come before generic content-class containers.
pub const CONTENT_SELECTORS: &[ElementSelector] = &[
    ElementSelector::tag("article"),
    ElementSelector::tag("main"),
    ElementSelector::classed("div", "content"),
    ElementSelector::classed("div", "article-content"),
    ElementSelector::classed("div", "main-content"),
];

static CONTENT_MATCHERS: Lazy<Vec<Matcher>> = Lazy::new(|| {
    CONTENT_SELECTORS
        .iter()
        .map(|sel| Matcher::new(&sel.css()).expect("valid content selector"))
        .collect()
});

/// Returns the article root for `doc`, or `None` when no pattern matches.
///
/// Each pattern rescans the whole document before the next one is tried, so a
/// lower-priority container is never chosen while a higher-priority one
/// exists anywhere on the page.
pub fn select_candidate(doc: &Document) -> Option<Selection<'_>> {
    CONTENT_MATCHERS
        .iter()
        .map(|matcher| doc.select_matcher(matcher).first())
        .find(|sel| sel.exists())
}
