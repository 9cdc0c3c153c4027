// ABOUTME: HTTP fetching for directory result pages.
// ABOUTME: Handles request headers, content-length limits, timeouts, and charset decoding.

use std::collections::HashMap;

use bytes::Bytes;

use crate::error::ScrapeError;

/// Maximum allowed content length (10 MB).
pub const MAX_CONTENT_LENGTH: usize = 10 * 1024 * 1024;

/// Options for fetching a resource.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    pub headers: HashMap<String, String>,
}

/// Result of a completed request, whatever its status.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub status: u16,
    pub url: String,
    pub final_url: String,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl FetchResult {
    pub fn is_success(&self) -> bool {
        self.status < 400
    }

    /// Decode the body as text, using the content-type charset or detection.
    pub fn text(&self) -> String {
        decode_body(&self.body, self.content_type.as_deref())
    }
}

/// Decode body bytes to a String using charset from content-type header or detection.
fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
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

/// Fetch a resource from the given URL.
///
/// Error statuses are returned as a [`FetchResult`]; only transport failures,
/// timeouts, invalid URLs, and oversized bodies are errors.
pub async fn fetch(
    client: &reqwest::Client,
    url: &str,
    opts: &FetchOptions,
) -> Result<FetchResult, ScrapeError> {
    if url.is_empty() {
        return Err(ScrapeError::invalid_url(url, "Fetch", None));
    }

    let parsed_url = url::Url::parse(url).map_err(|e| {
        ScrapeError::invalid_url(url, "Fetch", Some(anyhow::anyhow!("invalid URL: {}", e)))
    })?;

    let scheme = parsed_url.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ScrapeError::invalid_url(
            url,
            "Fetch",
            Some(anyhow::anyhow!("scheme must be http or https")),
        ));
    }

    let mut request = client.get(parsed_url);
    for (key, value) in &opts.headers {
        request = request.header(key, value);
    }

    let response = request
        .send()
        .await
        .map_err(|e| ScrapeError::from_request(url, "Fetch", e))?;

    if let Some(len) = response.content_length() {
        if len as usize > MAX_CONTENT_LENGTH {
            return Err(ScrapeError::fetch(
                url,
                "Fetch",
                Some(anyhow::anyhow!("content too large")),
            ));
        }
    }

    let status = response.status().as_u16();
    let final_url = response.url().to_string();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_lowercase());

    let body = response
        .bytes()
        .await
        .map_err(|e| ScrapeError::from_request(url, "Fetch", e))?;

    if body.len() > MAX_CONTENT_LENGTH {
        return Err(ScrapeError::fetch(
            url,
            "Fetch",
            Some(anyhow::anyhow!("content too large")),
        ));
    }

    Ok(FetchResult {
        status,
        url: url.to_string(),
        final_url,
        content_type,
        body,
    })
}
