//! Estimation module
//!
//! This module turns homepage signals into numbers:
//! - Indexed-page estimation, either looked up through a search API or
//!   inferred from page size and link density
//! - The bounded, jittered monthly visitor estimate

mod index;
mod lookup;
mod visitors;

pub use index::{
    heuristic_indexed_pages, HeuristicEstimator, IndexEstimate, IndexEstimator, IndexSource,
    IndexStrategy, PageSignals,
};
pub use lookup::{parse_result_count, LookupError, SerperEstimator};
pub use visitors::{base_visitors, score_visitors, VisitorInputs};
