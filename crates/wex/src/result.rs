// ABOUTME: ArticleContent and ArticleMetadata structs holding the output of one extraction.
// ABOUTME: Both serialize to JSON; empty metadata fields are omitted.

use serde::Serialize;

/// Page-level metadata read from the document head.
///
/// Every field defaults to an empty string when the page does not carry it.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct ArticleMetadata {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub author: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub published: String,
}

impl ArticleMetadata {
    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// The result of extracting a page: pruned article HTML plus its metadata.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct ArticleContent {
    pub content: String,
    pub metadata: ArticleMetadata,
}
