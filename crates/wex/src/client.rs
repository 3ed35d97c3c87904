// ABOUTME: The Client struct that fetches a page and runs the extraction pipeline on it.
// ABOUTME: Provides async parse() for URLs and render() for HTML or Markdown output.

use crate::error::Error;
use crate::extract::extract;
use crate::formats::to_markdown;
use crate::options::{ClientBuilder, OutputFormat, Options};
use crate::resource::{fetch, FetchOptions};
use crate::result::ArticleContent;

/// Fetches pages and extracts their article content.
///
/// Each call to [`Client::parse`] is independent; the client holds only its
/// configuration and a pooled HTTP client, so it can be shared across tasks.
#[derive(Debug, Clone)]
pub struct Client {
    opts: Options,
    http_client: reqwest::Client,
}

impl Client {
    /// Create a new ClientBuilder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new Client with the given options.
    pub fn new(opts: Options) -> Result<Self, Error> {
        let http_client = match opts.http_client.clone() {
            Some(client) => client,
            None => reqwest::Client::builder()
                .user_agent(&opts.user_agent)
                .timeout(opts.timeout)
                .gzip(true)
                .brotli(true)
                .deflate(true)
                .build()
                .map_err(|e| {
                    Error::fetch(
                        "",
                        "build_client",
                        Some(anyhow::anyhow!("failed to build HTTP client: {}", e)),
                    )
                })?,
        };

        Ok(Self { opts, http_client })
    }

    /// The options this client was built with.
    pub fn options(&self) -> &Options {
        &self.opts
    }

    /// Fetch `url` and extract its article content.
    ///
    /// Extraction errors carry the URL that was fetched.
    pub async fn parse(&self, url: &str) -> Result<ArticleContent, Error> {
        let fetch_opts = FetchOptions {
            headers: self.opts.headers.clone(),
        };

        let fetched = fetch(&self.http_client, url, &fetch_opts).await?;
        let markup = fetched.text();

        extract(&markup).map_err(|e| e.with_url(url))
    }

    /// Render extracted content in the requested format.
    ///
    /// Markdown output is trimmed of surrounding whitespace.
    pub fn render(article: &ArticleContent, format: OutputFormat) -> Result<String, Error> {
        match format {
            OutputFormat::Html => Ok(article.content.clone()),
            OutputFormat::Markdown => Ok(to_markdown(&article.content)?.trim().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use pretty_assertions::assert_eq;

    const PAGE: &str = r#"<html><head><title>Mock</title><meta name="author" content="A. Writer"></head>
<body><nav>menu</nav><article><h1>Heading</h1><p>Body <em>text</em></p><aside>ad</aside></article></body></html>"#;

    #[tokio::test]
    async fn parse_returns_content_from_fetch() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/article");
            then.status(200)
                .header("content-type", "text/html; charset=utf-8")
                .body(PAGE);
        });

        let client = Client::builder().build().unwrap();
        let article = client.parse(&server.url("/article")).await;
        mock.assert();

        let article = article.expect("parse should succeed");
        assert_eq!(article.content, "<h1>Heading</h1><p>Body <em>text</em></p>");
        assert_eq!(article.metadata.title, "Mock");
        assert_eq!(article.metadata.author, "A. Writer");
    }

    #[tokio::test]
    async fn parse_sends_browser_user_agent() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/ua")
                .header("user-agent", crate::options::DEFAULT_USER_AGENT);
            then.status(200).body(PAGE);
        });

        let client = Client::builder().build().unwrap();
        client.parse(&server.url("/ua")).await.unwrap();
        mock.assert();
    }

    #[tokio::test]
    async fn parse_reports_missing_content_with_url() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/empty");
            then.status(200).body("<html><body><p>no container</p></body></html>");
        });

        let client = Client::builder().build().unwrap();
        let url = server.url("/empty");
        let err = client.parse(&url).await.expect_err("should not find content");
        assert!(err.is_content_not_found());
        assert_eq!(err.url, url);
    }

    #[tokio::test]
    async fn parse_propagates_fetch_errors() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/gone");
            then.status(500);
        });

        let client = Client::builder().build().unwrap();
        let err = client.parse(&server.url("/gone")).await.unwrap_err();
        assert!(err.is_fetch());
    }

    #[test]
    fn render_html_and_markdown() {
        let article = ArticleContent {
            content: "<p>Hello <b>world</b></p>".to_string(),
            ..Default::default()
        };
        assert_eq!(
            Client::render(&article, OutputFormat::Html).unwrap(),
            "<p>Hello <b>world</b></p>"
        );
        assert_eq!(
            Client::render(&article, OutputFormat::Markdown).unwrap(),
            "Hello **world**"
        );
    }
}
