//! Crawler module for homepage signals
//!
//! This module contains the network-facing stages of the estimation pipeline:
//! - Liveness probing over HTTPS, then HTTP
//! - Homepage retrieval and size measurement
//! - Internal link counting on the parsed homepage

mod fetcher;
mod parser;
mod prober;

pub use fetcher::{fetch_homepage, HomepageFetchResult};
pub use parser::count_internal_links;
pub use prober::{probe_domain, DomainProbeResult};

use crate::config::HttpConfig;
use reqwest::Client;

/// Builds the HTTP client shared by every stage
///
/// Timeouts are applied per request, since probing and fetching use
/// different limits. Redirects follow reqwest's default policy.
///
/// # Example
///
/// ```
/// use traffic_gauge::config::HttpConfig;
/// use traffic_gauge::crawler::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .gzip(true)
        .brotli(true)
        .build()
}

/// Short label for a transport failure, used in debug logs
pub(crate) fn describe_transport_error(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        "request timeout".to_string()
    } else if err.is_connect() {
        "connection failed".to_string()
    } else {
        err.to_string()
    }
}
