use crate::config::{Config, EstimationParams};
use crate::estimate::lookup::SerperEstimator;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Which strategy produced an indexed-page estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexSource {
    /// Reported by the external search API
    External,
    /// Inferred from homepage size and link density
    Heuristic,
}

/// Estimated number of search-indexed pages, always >= 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexEstimate {
    pub pages: u64,
    pub source: IndexSource,
}

/// Homepage signals available to the index estimators
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PageSignals {
    pub size_kb: f64,
    pub internal_links: usize,
}

/// A source of indexed-page estimates
///
/// Implementations return `None` when they have no usable signal. They must
/// not fail past this boundary, so callers can always fall back.
#[async_trait]
pub trait IndexEstimator: Send + Sync {
    /// The source tag attached to estimates from this strategy
    fn source(&self) -> IndexSource;

    /// Estimates indexed pages for `domain`
    async fn estimate(&self, domain: &str, signals: PageSignals) -> Option<u64>;
}

/// Closed-form indexed-page heuristic
///
/// `1 + (size_kb × size_mult) × (1 + sqrt(links + 1) × links_mult / 10)`,
/// rounded to the nearest integer and floored at 1. Larger, more densely
/// linked homepages are assumed to front larger sites. It is a proxy, not a
/// measurement.
///
/// # Example
///
/// ```
/// use traffic_gauge::config::EstimationParams;
/// use traffic_gauge::estimate::{heuristic_indexed_pages, PageSignals};
///
/// let signals = PageSignals { size_kb: 50.0, internal_links: 20 };
/// assert_eq!(heuristic_indexed_pages(signals, &EstimationParams::default()), 138);
/// ```
pub fn heuristic_indexed_pages(signals: PageSignals, params: &EstimationParams) -> u64 {
    let size_effect = signals.size_kb.max(0.0) * params.size_kb_multiplier;
    let link_effect = ((signals.internal_links + 1) as f64).sqrt() * params.links_multiplier;
    let pages = 1.0 + size_effect * (1.0 + link_effect / 10.0);

    pages.round().max(1.0) as u64
}

/// The heuristic as an [`IndexEstimator`]; it always has an answer
#[derive(Debug, Clone, Copy)]
pub struct HeuristicEstimator {
    params: EstimationParams,
}

impl HeuristicEstimator {
    pub fn new(params: EstimationParams) -> Self {
        Self { params }
    }

    /// Synchronous form of [`IndexEstimator::estimate`]
    pub fn pages(&self, signals: PageSignals) -> u64 {
        heuristic_indexed_pages(signals, &self.params)
    }
}

#[async_trait]
impl IndexEstimator for HeuristicEstimator {
    fn source(&self) -> IndexSource {
        IndexSource::Heuristic
    }

    async fn estimate(&self, _domain: &str, signals: PageSignals) -> Option<u64> {
        Some(self.pages(signals))
    }
}

/// Selection and fallback policy between the external lookup and the heuristic
///
/// The external estimator is consulted first when present. Whenever it has no
/// usable signal the heuristic answers instead, so resolution never fails.
pub struct IndexStrategy {
    external: Option<Box<dyn IndexEstimator>>,
    heuristic: HeuristicEstimator,
}

impl IndexStrategy {
    /// A strategy that only ever uses the heuristic
    pub fn heuristic_only(params: EstimationParams) -> Self {
        Self {
            external: None,
            heuristic: HeuristicEstimator::new(params),
        }
    }

    /// A strategy that tries `external` before the heuristic
    pub fn with_external(params: EstimationParams, external: Box<dyn IndexEstimator>) -> Self {
        Self {
            external: Some(external),
            heuristic: HeuristicEstimator::new(params),
        }
    }

    /// Builds the strategy described by the configuration
    ///
    /// The external lookup is wired in only when it is enabled and an API
    /// key is configured.
    pub fn from_config(config: &Config, client: Client) -> Self {
        if !config.lookup.is_usable() {
            if config.lookup.enabled {
                tracing::warn!("External lookup enabled but no API key configured; using heuristic");
            }
            return Self::heuristic_only(config.estimation);
        }

        let lookup = &config.lookup;
        let serper = SerperEstimator::new(
            client,
            lookup.endpoint.clone(),
            lookup.api_key.clone().unwrap_or_default(),
            Duration::from_secs(lookup.timeout_secs),
        );

        Self::with_external(config.estimation, Box::new(serper))
    }

    /// Returns true if an external estimator is configured
    pub fn has_external(&self) -> bool {
        self.external.is_some()
    }

    /// Resolves the indexed-page estimate for a domain
    pub async fn resolve(&self, domain: &str, signals: PageSignals) -> IndexEstimate {
        if let Some(external) = &self.external {
            if let Some(pages) = external.estimate(domain, signals).await {
                return IndexEstimate {
                    pages: pages.max(1),
                    source: external.source(),
                };
            }
            tracing::debug!("No usable lookup signal for {}, using heuristic", domain);
        }

        IndexEstimate {
            pages: self.heuristic.pages(signals),
            source: IndexSource::Heuristic,
        }
    }
}
