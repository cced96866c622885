//! Traffic-Gauge: a cheap-signal visitor estimator
//!
//! This crate estimates a bounded, partly randomized "monthly visitors" figure
//! for a batch of domains from public signals: liveness, homepage size,
//! internal link density and (optionally) a search-index page count.

pub mod config;
pub mod crawler;
pub mod estimate;
pub mod output;
pub mod pipeline;
pub mod url;

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Traffic-Gauge operations
#[derive(Debug, Error)]
pub enum GaugeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read domain list {path}: {source}")]
    Input {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid domain: {0}")]
    Url(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Domain input errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Domain is empty")]
    Empty,

    #[error("Domain '{0}' contains whitespace")]
    Whitespace(String),

    #[error("Domain '{0}' must not carry a scheme")]
    HasScheme(String),

    #[error("Failed to build URL for '{domain}': {message}")]
    Malformed { domain: String, message: String },
}

/// Result type alias for Traffic-Gauge operations
pub type Result<T> = std::result::Result<T, GaugeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for domain parsing
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::{Config, EstimationParams};
pub use estimate::{IndexEstimate, IndexSource};
pub use output::DomainResult;
pub use pipeline::Pipeline;
pub use crate::url::DomainTarget;
