use crate::crawler::describe_transport_error;
use crate::url::DomainTarget;
use reqwest::Client;
use std::time::Duration;

/// Outcome of a liveness probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainProbeResult {
    pub alive: bool,
}

/// Checks whether a domain answers HEAD requests
///
/// Schemes are tried in preference order with one attempt each. The first
/// response below 400 marks the domain alive. Timeouts, connection errors and
/// error statuses are a negative signal and are never returned as errors.
pub async fn probe_domain(
    client: &Client,
    target: &DomainTarget,
    timeout: Duration,
) -> DomainProbeResult {
    for url in target.candidates() {
        match client.head(url.clone()).timeout(timeout).send().await {
            Ok(response) if response.status().as_u16() < 400 => {
                tracing::debug!("{} is alive ({})", url, response.status());
                return DomainProbeResult { alive: true };
            }
            Ok(response) => {
                tracing::debug!("Probe of {} returned {}", url, response.status());
            }
            Err(e) => {
                tracing::debug!("Probe of {} failed: {}", url, describe_transport_error(&e));
            }
        }
    }

    DomainProbeResult { alive: false }
}
