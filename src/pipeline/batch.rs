use crate::config::PolitenessConfig;
use crate::output::DomainResult;
use crate::pipeline::pacer::{politeness_delay, Pacer};
use crate::pipeline::Pipeline;
use rand::Rng;

/// Processes domains one at a time, in order
///
/// Every domain yields exactly one result. If a domain cannot be processed,
/// a degraded record takes its place and the batch carries on. Between
/// domains the pacer waits for a random politeness delay; there is no pause
/// after the last one.
///
/// `first_index` is the position of `domains[0]` in the full input list and
/// is only used for progress lines.
pub async fn run_batch<R: Rng + ?Sized>(
    pipeline: &Pipeline,
    domains: &[String],
    first_index: usize,
    politeness: &PolitenessConfig,
    pacer: &dyn Pacer,
    rng: &mut R,
) -> Vec<DomainResult> {
    let mut results = Vec::with_capacity(domains.len());

    for (offset, domain) in domains.iter().enumerate() {
        let position = first_index + offset + 1;

        let result = match pipeline.process_domain(domain, &mut *rng).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!("{:05}. {:30} → ERROR: {}", position, domain, e);
                DomainResult::degraded(domain.as_str(), pipeline.params())
            }
        };

        tracing::info!(
            "{:05}. {:30} → {:>10} visits | alive={} | kb={:>8.2} | links={:>4} | idx={}",
            position,
            result.domain,
            result.visitors_est_monthly,
            result.alive,
            result.homepage_kb,
            result.internal_links,
            result.indexed_pages_est
        );

        results.push(result);

        if offset + 1 < domains.len() {
            pacer.pause(politeness_delay(politeness, &mut *rng)).await;
        }
    }

    results
}
