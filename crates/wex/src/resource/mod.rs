// ABOUTME: Resource fetching for wex: HTTP GET of a single page.
// ABOUTME: Enforces http(s) URLs, a 200 status, a content-length limit, and decodes the body charset.

use std::collections::HashMap;

use bytes::Bytes;

use crate::error::Error;

/// Maximum allowed content length (10 MB).
pub const MAX_CONTENT_LENGTH: usize = 10 * 1024 * 1024;

/// Options for fetching a resource.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    pub headers: HashMap<String, String>,
}

/// Result of a successful fetch operation.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl FetchResult {
    /// Decode the body as text, using the charset from the content-type header
    /// or, failing that, byte-level detection.
    pub fn text(&self) -> String {
        decode_body(&self.body, self.content_type.as_deref())
    }
}

/// Decode body bytes to a String using charset from content-type header or detection.
pub fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    if let Some(charset) = content_type.and_then(extract_charset) {
        if let Some(encoding) = encoding_rs::Encoding::for_label(charset.as_bytes()) {
            let (decoded, _, _) = encoding.decode(body);
            return decoded.into_owned();
        }
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(body, true);
    let encoding = detector.guess(None, true);
    let (decoded, _, _) = encoding.decode(body);
    decoded.into_owned()
}

/// Extract charset value from Content-Type header.
fn extract_charset(content_type: &str) -> Option<String> {
    let lower = content_type.to_lowercase();
    lower.split(';').find_map(|part| {
        part.trim()
            .strip_prefix("charset=")
            .map(|charset| charset.trim_matches('"').trim_matches('\'').to_string())
    })
}

/// Validates that `url` is an absolute http(s) URL.
pub fn validate_url(url: &str) -> Result<url::Url, Error> {
    if url.is_empty() {
        return Err(Error::invalid_url(url, "fetch", None));
    }

    let parsed = url::Url::parse(url).map_err(|e| {
        Error::invalid_url(url, "fetch", Some(anyhow::anyhow!("invalid URL: {}", e)))
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        _ => Err(Error::invalid_url(
            url,
            "fetch",
            Some(anyhow::anyhow!("scheme must be http or https")),
        )),
    }
}

/// Fetch a page from the given URL.
///
/// No retries: any transport failure, oversize body, or status other than 200
/// is returned to the caller.
pub async fn fetch(
    client: &reqwest::Client,
    url: &str,
    opts: &FetchOptions,
) -> Result<FetchResult, Error> {
    let parsed_url = validate_url(url)?;

    let mut request = client.get(parsed_url);
    for (key, value) in &opts.headers {
        request = request.header(key, value);
    }

    let response = request.send().await.map_err(|e| {
        if e.is_timeout() {
            Error::timeout(url, "fetch", Some(anyhow::Error::new(e)))
        } else {
            Error::fetch(url, "fetch", Some(anyhow::anyhow!("error fetching URL: {}", e)))
        }
    })?;

    let status = response.status().as_u16();
    if status != 200 {
        return Err(Error::fetch(
            url,
            "fetch",
            Some(anyhow::anyhow!("bad status code: {}", status)),
        ));
    }

    if let Some(len) = response.content_length() {
        if len as usize > MAX_CONTENT_LENGTH {
            return Err(Error::fetch(
                url,
                "fetch",
                Some(anyhow::anyhow!("content too large")),
            ));
        }
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_lowercase());

    let body = response.bytes().await.map_err(|e| {
        if e.is_timeout() {
            Error::timeout(url, "fetch", Some(anyhow::Error::new(e)))
        } else {
            Error::fetch(
                url,
                "fetch",
                Some(anyhow::anyhow!("failed to read body: {}", e)),
            )
        }
    })?;

    if body.len() > MAX_CONTENT_LENGTH {
        return Err(Error::fetch(
            url,
            "fetch",
            Some(anyhow::anyhow!("content too large")),
        ));
    }

    Ok(FetchResult {
        content_type,
        body,
    })
}
