//! Output module for estimation results
//!
//! This module handles:
//! - The per-domain result record
//! - Writing results to CSV in input order
//! - Run statistics and the optional markdown summary

mod csv;
mod markdown;
mod record;
pub mod stats;

pub use self::csv::{format_csv, write_csv, CSV_HEADER};
pub use markdown::{format_markdown_summary, generate_markdown_summary, RunSummary};
pub use record::DomainResult;
pub(crate) use record::round_kb;
pub use stats::{print_statistics, RunStatistics};

use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;
