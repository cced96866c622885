//! Estimation pipeline and batch orchestration
//!
//! A [`Pipeline`] takes one domain through every stage in order:
//! probe → fetch → count links → estimate indexed pages → score visitors.
//! The batch helpers around it load the domain list, walk a slice of it
//! sequentially with a politeness pause between domains, and persist the
//! results.

mod batch;
mod input;
mod pacer;
mod runner;

pub use batch::run_batch;
pub use input::{load_domains, parse_domain_list, slice_bounds};
pub use pacer::{politeness_delay, Pacer, TokioPacer};
pub use runner::{run_gauge, RunReport};

use crate::config::{Config, EstimationParams, HttpConfig};
use crate::crawler::{build_http_client, count_internal_links, fetch_homepage, probe_domain};
use crate::estimate::{score_visitors, IndexStrategy, PageSignals, VisitorInputs};
use crate::output::{round_kb, DomainResult};
use crate::url::DomainTarget;
use crate::GaugeError;
use rand::Rng;
use reqwest::Client;
use std::time::Duration;

/// Stateless per-domain estimator
///
/// Holds the HTTP client, the timeouts, the calibration constants and the
/// index strategy. Nothing is carried over between domains; the random
/// source is supplied on every call.
pub struct Pipeline {
    client: Client,
    probe_timeout: Duration,
    fetch_timeout: Duration,
    params: EstimationParams,
    index: IndexStrategy,
}

impl Pipeline {
    /// Creates a pipeline from its parts
    pub fn new(
        client: Client,
        http: &HttpConfig,
        params: EstimationParams,
        index: IndexStrategy,
    ) -> Self {
        Self {
            client,
            probe_timeout: Duration::from_secs(http.probe_timeout_secs),
            fetch_timeout: Duration::from_secs(http.fetch_timeout_secs),
            params,
            index,
        }
    }

    /// Builds the client and index strategy described by the configuration
    pub fn from_config(config: &Config) -> Result<Self, GaugeError> {
        let client = build_http_client(&config.http)?;
        let index = IndexStrategy::from_config(config, client.clone());
        Ok(Self::new(client, &config.http, config.estimation, index))
    }

    /// Calibration constants in use
    pub fn params(&self) -> &EstimationParams {
        &self.params
    }

    /// Returns true if indexed pages are looked up externally first
    pub fn uses_external_lookup(&self) -> bool {
        self.index.has_external()
    }

    /// Runs every stage for one domain
    ///
    /// Network problems never surface here; they only weaken the signals.
    /// An error means the domain itself could not be processed.
    pub async fn process_domain<R: Rng + ?Sized>(
        &self,
        domain: &str,
        rng: &mut R,
    ) -> Result<DomainResult, GaugeError> {
        let target = DomainTarget::parse(domain)?;

        let probe = probe_domain(&self.client, &target, self.probe_timeout).await;

        // The parsed page is only needed for link counting
        let signals = {
            let page = fetch_homepage(&self.client, &target, self.fetch_timeout).await;
            PageSignals {
                size_kb: page.size_kb,
                internal_links: count_internal_links(page.document.as_ref(), target.domain()),
            }
        };

        let index = self.index.resolve(target.domain(), signals).await;

        let visitors = score_visitors(
            VisitorInputs {
                indexed_pages: index.pages,
                size_kb: signals.size_kb,
                internal_links: signals.internal_links,
                alive: probe.alive,
            },
            &self.params,
            rng,
        );

        Ok(DomainResult {
            domain: target.domain().to_string(),
            alive: probe.alive,
            homepage_kb: round_kb(signals.size_kb),
            internal_links: signals.internal_links,
            indexed_pages_est: index.pages,
            visitors_est_monthly: visitors,
            index_source: index.source,
            degraded: false,
        })
    }
}
