use crate::config::EstimationParams;
use rand::Rng;

/// Signals combined into a visitor estimate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisitorInputs {
    pub indexed_pages: u64,
    pub size_kb: f64,
    pub internal_links: usize,
    pub alive: bool,
}

/// Visitor estimate before jitter and clamping
///
/// `floor(pages × (1 + kb/100) × (1 + ln(1 + links)/5) × scale)`. A domain
/// that failed the liveness probe keeps only `dead_domain_factor` of that,
/// but never less than `min_visitors`.
pub fn base_visitors(inputs: VisitorInputs, params: &EstimationParams) -> u64 {
    let score = inputs.indexed_pages as f64
        * (1.0 + inputs.size_kb.max(0.0) / 100.0)
        * (1.0 + (inputs.internal_links as f64).ln_1p() / 5.0);

    // Float to int casts saturate, so oversized scores land on u64::MAX
    let visitors = (score * params.visitors_scale).floor() as u64;

    if inputs.alive {
        visitors
    } else {
        let reduced = (visitors as f64 * params.dead_domain_factor).floor() as u64;
        reduced.max(params.min_visitors)
    }
}

/// Computes the final monthly visitor estimate
///
/// Applies a multiplicative jitter drawn uniformly from
/// `[jitter_low, jitter_high]` on top of [`base_visitors`], then clamps the
/// result to `[min_visitors, max_visitors]`. The random source is injected so
/// callers can seed it.
///
/// # Example
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use traffic_gauge::config::EstimationParams;
/// use traffic_gauge::estimate::{score_visitors, VisitorInputs};
///
/// let params = EstimationParams::default();
/// let inputs = VisitorInputs { indexed_pages: 138, size_kb: 50.0, internal_links: 20, alive: true };
/// let visitors = score_visitors(inputs, &params, &mut StdRng::seed_from_u64(7));
/// assert!((2997..=3663).contains(&visitors));
/// ```
pub fn score_visitors<R: Rng + ?Sized>(
    inputs: VisitorInputs,
    params: &EstimationParams,
    rng: &mut R,
) -> u64 {
    let visitors = base_visitors(inputs, params);

    let jitter = if params.jitter_low < params.jitter_high {
        rng.gen_range(params.jitter_low..=params.jitter_high)
    } else {
        params.jitter_low
    };
    let jittered = (visitors as f64 * jitter).floor() as u64;

    jittered.clamp(params.min_visitors, params.max_visitors)
}
