// ABOUTME: Main library entry point for wex, the web article extractor.
// ABOUTME: Re-exports the public API: extract, to_markdown, Client, ClientBuilder, Error, result types.

//! wex - isolate the article on a web page and render it as HTML or Markdown.
//!
//! The core is synchronous and works on markup you already have:
//!
//! ```
//! let html = "<html><head><title>T</title></head><body>\
//!             <article><p>Hello <b>world</b></p><script>evil()</script></article>\
//!             </body></html>";
//!
//! let article = wex::extract(html)?;
//! assert_eq!(article.content, "<p>Hello <b>world</b></p>");
//! assert_eq!(article.metadata.title, "T");
//!
//! let markdown = wex::to_markdown(&article.content)?;
//! assert_eq!(markdown.trim(), "Hello **world**");
//! # Ok::<(), wex::Error>(())
//! ```
//!
//! [`Client`] adds fetching on top:
//!
//! ```no_run
//! use wex::{Client, OutputFormat};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), wex::Error> {
//!     let client = Client::builder().build()?;
//!     let article = client.parse("https://example.com/article").await?;
//!     println!("{}", Client::render(&article, OutputFormat::Markdown)?);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod dom;
pub mod error;
pub mod extract;
pub mod formats;
pub mod metadata;
pub mod options;
pub mod resource;
pub mod result;

pub use crate::client::Client;
pub use crate::error::{Error, ErrorCode};
pub use crate::extract::extract;
pub use crate::formats::to_markdown;
pub use crate::options::{ClientBuilder, Options, OutputFormat};
pub use crate::result::{ArticleContent, ArticleMetadata};
