//! Statistics over a finished batch
//!
//! This module aggregates per-domain results into run-level figures and
//! prints them for the operator.

use crate::estimate::IndexSource;
use crate::output::record::DomainResult;

/// Number of domains listed in the top-visitors ranking
const TOP_DOMAINS: usize = 10;

/// Aggregate figures for one batch run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunStatistics {
    /// Domains processed (one result each)
    pub total: usize,

    /// Domains that answered the liveness probe
    pub alive: usize,

    /// Domains replaced by a degraded record
    pub degraded: usize,

    /// Estimates taken from the external lookup
    pub external_estimates: usize,

    /// Estimates produced by the heuristic
    pub heuristic_estimates: usize,

    pub total_visitors: u64,
    pub mean_visitors: f64,
    pub median_visitors: u64,

    /// Highest estimates, descending; ties keep input order
    pub top_domains: Vec<(String, u64)>,
}

impl RunStatistics {
    /// Aggregates a slice of results
    pub fn from_results(results: &[DomainResult]) -> Self {
        if results.is_empty() {
            return Self::default();
        }

        let total = results.len();
        let alive = results.iter().filter(|r| r.alive).count();
        let degraded = results.iter().filter(|r| r.degraded).count();
        let external_estimates = results
            .iter()
            .filter(|r| r.index_source == IndexSource::External)
            .count();

        let total_visitors = results
            .iter()
            .fold(0u64, |acc, r| acc.saturating_add(r.visitors_est_monthly));

        let mut visitors: Vec<u64> = results.iter().map(|r| r.visitors_est_monthly).collect();
        visitors.sort_unstable();
        let median_visitors = if total % 2 == 1 {
            visitors[total / 2]
        } else {
            let (low, high) = (visitors[total / 2 - 1], visitors[total / 2]);
            low / 2 + high / 2 + (low % 2 + high % 2) / 2
        };

        let mut ranked: Vec<&DomainResult> = results.iter().collect();
        ranked.sort_by(|a, b| b.visitors_est_monthly.cmp(&a.visitors_est_monthly));
        let top_domains = ranked
            .into_iter()
            .take(TOP_DOMAINS)
            .map(|r| (r.domain.clone(), r.visitors_est_monthly))
            .collect();

        Self {
            total,
            alive,
            degraded,
            external_estimates,
            heuristic_estimates: total - external_estimates,
            total_visitors,
            mean_visitors: total_visitors as f64 / total as f64,
            median_visitors,
            top_domains,
        }
    }

    /// Domains that did not answer the liveness probe
    pub fn dead(&self) -> usize {
        self.total - self.alive
    }

    /// Share of alive domains as a percentage
    pub fn alive_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.alive as f64 / self.total as f64) * 100.0
    }
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &RunStatistics) {
    println!("=== Run Statistics ===\n");

    println!("Overview:");
    println!("  Domains processed: {}", stats.total);
    println!(
        "  Alive: {} ({:.1}%), dead: {}",
        stats.alive,
        stats.alive_rate(),
        stats.dead()
    );
    println!("  Degraded records: {}", stats.degraded);
    println!();

    println!("Indexed Pages Source:");
    println!("  External lookup: {}", stats.external_estimates);
    println!("  Heuristic: {}", stats.heuristic_estimates);
    println!();

    println!("Visitors:");
    println!("  Total: {}", stats.total_visitors);
    println!("  Mean: {:.1}", stats.mean_visitors);
    println!("  Median: {}", stats.median_visitors);

    if !stats.top_domains.is_empty() {
        println!();
        println!("Top Domains:");
        for (domain, visitors) in &stats.top_domains {
            println!("  {:30} {:>12}", domain, visitors);
        }
    }
}
