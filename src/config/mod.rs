//! Configuration module for Traffic-Gauge
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use traffic_gauge::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("gauge.toml")).unwrap();
//! println!("Visitors scale: {}", config.estimation.visitors_scale);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, EstimationParams, HttpConfig, InputConfig, LookupConfig, OutputConfig,
    PolitenessConfig, RangeConfig,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
