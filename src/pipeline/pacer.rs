use crate::config::PolitenessConfig;
use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;

/// Waits between consecutive domains
///
/// Injected into the batch loop so tests can observe the delays without
/// sleeping.
#[async_trait]
pub trait Pacer: Send + Sync {
    async fn pause(&self, delay: Duration);
}

/// Pacer that really sleeps on the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioPacer;

#[async_trait]
impl Pacer for TokioPacer {
    async fn pause(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}

/// Draws a politeness delay uniformly from the configured range
pub fn politeness_delay<R: Rng + ?Sized>(config: &PolitenessConfig, rng: &mut R) -> Duration {
    let millis = if config.delay_min_ms < config.delay_max_ms {
        rng.gen_range(config.delay_min_ms..=config.delay_max_ms)
    } else {
        config.delay_min_ms
    };
    Duration::from_millis(millis)
}
