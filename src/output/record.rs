use crate::config::EstimationParams;
use crate::estimate::IndexSource;

/// Final estimate for one input domain
///
/// Built once by the pipeline and never modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainResult {
    pub domain: String,
    pub alive: bool,

    /// Homepage size in kilobytes, rounded to 2 decimals
    pub homepage_kb: f64,

    pub internal_links: usize,

    /// Estimated indexed pages, always >= 1
    pub indexed_pages_est: u64,

    /// Always within `[min_visitors, max_visitors]`
    pub visitors_est_monthly: u64,

    /// Strategy that produced `indexed_pages_est`
    pub index_source: IndexSource,

    /// True when safe defaults replaced a failed domain
    pub degraded: bool,
}

impl DomainResult {
    /// Safe-default record for a domain whose processing failed
    pub fn degraded(domain: impl Into<String>, params: &EstimationParams) -> Self {
        Self {
            domain: domain.into(),
            alive: false,
            homepage_kb: 0.0,
            internal_links: 0,
            indexed_pages_est: 1,
            visitors_est_monthly: params.min_visitors,
            index_source: IndexSource::Heuristic,
            degraded: true,
        }
    }
}

/// Rounds a size to 2 decimal places
pub(crate) fn round_kb(size_kb: f64) -> f64 {
    (size_kb * 100.0).round() / 100.0
}
