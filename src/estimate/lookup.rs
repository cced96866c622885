//! External search-index lookup (Serper)
//!
//! Sends a `site:` query and reads either the textual "About N results"
//! figure or, failing that, the number of organic results returned.

use crate::crawler::describe_transport_error;
use crate::estimate::index::{IndexEstimator, IndexSource, PageSignals};
use async_trait::async_trait;
use regex::Regex;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use std::sync::LazyLock;
use std::time::Duration;
use thiserror::Error;

static RESULT_COUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)About\s*([\d,]+)\s*results").expect("result count pattern is valid")
});

/// Why a lookup produced no usable signal
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("No API key configured")]
    MissingKey,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    #[error("Malformed payload: {0}")]
    Payload(String),

    #[error("Payload carries no result count")]
    NoSignal,
}

/// Index estimator backed by the Serper search API
pub struct SerperEstimator {
    client: Client,
    endpoint: String,
    api_key: String,
    timeout: Duration,
}

impl SerperEstimator {
    pub fn new(client: Client, endpoint: String, api_key: String, timeout: Duration) -> Self {
        Self {
            client,
            endpoint,
            api_key,
            timeout,
        }
    }

    /// Performs the lookup, reporting why it failed when it does
    pub async fn lookup(&self, domain: &str) -> Result<u64, LookupError> {
        if self.api_key.trim().is_empty() {
            return Err(LookupError::MissingKey);
        }

        let response = self
            .client
            .post(&self.endpoint)
            .header("X-API-KEY", &self.api_key)
            .json(&json!({ "q": format!("site:{}", domain) }))
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| LookupError::Transport(describe_transport_error(&e)))?;

        if response.status() != StatusCode::OK {
            return Err(LookupError::Status(response.status().as_u16()));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| LookupError::Payload(e.to_string()))?;

        parse_result_count(&payload)
    }
}

#[async_trait]
impl IndexEstimator for SerperEstimator {
    fn source(&self) -> IndexSource {
        IndexSource::External
    }

    async fn estimate(&self, domain: &str, _signals: PageSignals) -> Option<u64> {
        match self.lookup(domain).await {
            Ok(pages) => {
                tracing::debug!("Lookup for {} reported {} indexed pages", domain, pages);
                Some(pages)
            }
            Err(e) => {
                tracing::debug!("Lookup for {} unusable: {}", domain, e);
                None
            }
        }
    }
}

/// Extracts an indexed-page count from a search payload
///
/// # Rules
///
/// 1. An "About N results" phrase anywhere in the payload wins; thousands
///    separators are stripped.
/// 2. Otherwise an `organic` array yields `max(1, len)`.
/// 3. Otherwise there is no signal.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use traffic_gauge::estimate::parse_result_count;
///
/// let payload = json!({ "searchInformation": "About 1,230 results (0.21 seconds)" });
/// assert_eq!(parse_result_count(&payload).unwrap(), 1230);
/// ```
pub fn parse_result_count(payload: &Value) -> Result<u64, LookupError> {
    let text = payload.to_string();
    if let Some(captures) = RESULT_COUNT.captures(&text) {
        let digits: String = captures[1].chars().filter(|c| *c != ',').collect();
        return digits
            .parse::<u64>()
            .map_err(|e| LookupError::Payload(format!("bad result count '{}': {}", &captures[1], e)));
    }

    match payload.get("organic") {
        Some(Value::Array(results)) => Ok(results.len().max(1) as u64),
        _ => Err(LookupError::NoSignal),
    }
}
