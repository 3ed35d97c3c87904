// ABOUTME: Output format conversion for extracted article HTML.
// ABOUTME: Renders HTML as GitHub-flavored Markdown using htmd.

//! Output format conversion module.
//!
//! Converts the pruned article HTML into Markdown. On top of htmd's CommonMark
//! rules (headings, emphasis, links, images, lists, blockquotes, code, tables)
//! this adds the GitHub-flavored pieces: `~~strikethrough~~` and task-list
//! checkboxes.

use htmd::element_handler::{HandlerResult, Handlers};
use htmd::options::{CodeBlockStyle, HeadingStyle, Options};
use htmd::{Element, HtmlToMarkdown};

use crate::error::Error;

/// Tags whose content never reaches the Markdown output.
const SKIPPED_TAGS: &[&str] = &["script", "style", "noscript"];

/// Tags rendered as GitHub-flavored strikethrough.
const STRIKE_TAGS: &[&str] = &["del", "s", "strike"];

fn attr_value<'a>(element: &'a Element, name: &str) -> Option<&'a str> {
    element
        .attrs
        .iter()
        .find(|attr| &*attr.name.local == name)
        .map(|attr| &*attr.value)
}

fn strikethrough(handlers: &dyn Handlers, element: Element) -> Option<HandlerResult> {
    let content = handlers.walk_children(element.node).content;
    if content.trim().is_empty() {
        return Some(content.into());
    }
    Some(format!("~~{}~~", content).into())
}

/// Renders checkbox inputs as task-list markers; other inputs are dropped.
fn task_list_marker(_: &dyn Handlers, element: Element) -> Option<HandlerResult> {
    let is_checkbox = attr_value(&element, "type")
        .map(|t| t.eq_ignore_ascii_case("checkbox"))
        .unwrap_or(false);
    if !is_checkbox {
        return Some(String::new().into());
    }
    let marker = if attr_value(&element, "checked").is_some() {
        "[x] "
    } else {
        "[ ] "
    };
    Some(marker.into())
}

fn converter() -> HtmlToMarkdown {
    HtmlToMarkdown::builder()
        .options(Options {
            heading_style: HeadingStyle::Atx,
            code_block_style: CodeBlockStyle::Fenced,
            ..Default::default()
        })
        .skip_tags(SKIPPED_TAGS.to_vec())
        .add_handler(STRIKE_TAGS.to_vec(), strikethrough)
        .add_handler(vec!["input"], task_list_marker)
        .build()
}

/// Converts an HTML fragment to GitHub-flavored Markdown.
///
/// The output is returned as produced by the converter; callers trim it.
/// The same input always yields the same output.
pub fn to_markdown(html: &str) -> Result<String, Error> {
    converter().convert(html).map_err(conversion_error)
}

fn conversion_error(e: std::io::Error) -> Error {
    Error::conversion("to_markdown", Some(anyhow::Error::new(e)))
}
