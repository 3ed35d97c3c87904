// ABOUTME: Metadata extractor reading title, description, author and publish date.
// ABOUTME: Never fails; absent fields come back as empty strings.

use dom_query::{Document, Matcher};
use once_cell::sync::Lazy;

use crate::result::ArticleMetadata;

static TITLE: Lazy<Matcher> = Lazy::new(|| Matcher::new("title").expect("valid title selector"));
static DESCRIPTION: Lazy<Matcher> = Lazy::new(|| {
    Matcher::new(r#"meta[name="description"]"#).expect("valid description selector")
});
static AUTHOR: Lazy<Matcher> =
    Lazy::new(|| Matcher::new(r#"meta[name="author"]"#).expect("valid author selector"));
static PUBLISHED: Lazy<Matcher> = Lazy::new(|| {
    Matcher::new(r#"meta[property="article:published_time"]"#).expect("valid published selector")
});

/// Reads the `content` attribute of the first element matching `matcher`.
///
/// Only the first match is consulted: if it lacks `content`, the result is
/// empty even when a later match carries one.
fn first_content(doc: &Document, matcher: &Matcher) -> String {
    doc.select_matcher(matcher)
        .first()
        .attr("content")
        .map(|v| v.to_string())
        .unwrap_or_default()
}

/// Extracts page metadata from a parsed document.
pub fn extract_metadata(doc: &Document) -> ArticleMetadata {
    let title = doc.select_matcher(&TITLE).first();
    ArticleMetadata {
        title: if title.exists() {
            title.text().to_string()
        } else {
            String::new()
        },
        description: first_content(doc, &DESCRIPTION),
        author: first_content(doc, &AUTHOR),
        published: first_content(doc, &PUBLISHED),
    }
}
