use crate::crawler::describe_transport_error;
use crate::url::DomainTarget;
use reqwest::Client;
use scraper::Html;
use std::time::Duration;

/// Homepage content retrieved for a domain
///
/// When no scheme produced a usable page the result is empty: no content,
/// no document and a size of zero. That is a degraded but valid outcome.
#[derive(Debug, Default)]
pub struct HomepageFetchResult {
    /// Homepage HTML, lossily decoded as UTF-8
    pub content: Option<String>,

    /// Raw body length in kilobytes (bytes / 1024), before any decoding
    pub size_kb: f64,

    /// Parsed markup, present exactly when `content` is
    pub document: Option<Html>,
}

impl HomepageFetchResult {
    /// Builds a result from the raw bytes of a non-empty homepage body
    pub fn from_body(body: &[u8]) -> Self {
        let size_kb = body.len() as f64 / 1024.0;
        let body = String::from_utf8_lossy(body).into_owned();
        let document = Html::parse_document(&body);

        Self {
            content: Some(body),
            size_kb,
            document: Some(document),
        }
    }

    /// Returns true if a homepage was retrieved
    pub fn is_fetched(&self) -> bool {
        self.content.is_some()
    }
}

/// Retrieves the homepage of a domain
///
/// # Request Flow
///
/// | Step | Condition | Action |
/// |------|-----------|--------|
/// | GET `https://` | status < 400, body non-empty | return page |
/// | GET `http://` | status < 400, body non-empty | return page |
/// | otherwise | | return empty result |
///
/// There are no retries. Each attempt is bounded by `timeout`.
pub async fn fetch_homepage(
    client: &Client,
    target: &DomainTarget,
    timeout: Duration,
) -> HomepageFetchResult {
    for url in target.candidates() {
        let response = match client.get(url.clone()).timeout(timeout).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!("Fetch of {} failed: {}", url, describe_transport_error(&e));
                continue;
            }
        };

        let status = response.status();
        if status.as_u16() >= 400 {
            tracing::debug!("Fetch of {} returned {}", url, status);
            continue;
        }

        match response.bytes().await {
            Ok(body) if !body.is_empty() => {
                tracing::debug!("Fetched {} ({} bytes)", url, body.len());
                return HomepageFetchResult::from_body(&body);
            }
            Ok(_) => {
                tracing::debug!("Fetch of {} returned an empty body", url);
            }
            Err(e) => {
                tracing::debug!(
                    "Reading body of {} failed: {}",
                    url,
                    describe_transport_error(&e)
                );
            }
        }
    }

    HomepageFetchResult::default()
}
