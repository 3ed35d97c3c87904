// ABOUTME: Extraction pipeline turning raw page markup into ArticleContent.
// ABOUTME: Parses once, reads metadata, selects and prunes the article root, serializes it.

use dom_query::Document;

use crate::dom::cleaners::prune_noise;
use crate::dom::selectors::select_candidate;
use crate::error::Error;
use crate::metadata::extract_metadata;
use crate::result::ArticleContent;

/// Extracts the article body and metadata from raw HTML markup.
///
/// The document is owned by this call and dropped before it returns. HTML
/// parsing never fails, so empty markup is just a page without content. Fails
/// with `ContentNotFound` when no content selector matches; metadata is never
/// returned on failure.
pub fn extract(markup: &str) -> Result<ArticleContent, Error> {
    let doc = Document::from(markup);
    let metadata = extract_metadata(&doc);

    let candidate = select_candidate(&doc).ok_or_else(|| Error::content_not_found("extract"))?;
    prune_noise(&candidate);
    let content = candidate.inner_html().trim().to_string();

    Ok(ArticleContent { content, metadata })
}
