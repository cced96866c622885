use crate::config::types::{
    Config, EstimationParams, HttpConfig, LookupConfig, PolitenessConfig, RangeConfig,
};
use crate::ConfigError;
use url::Url;

/// Search providers the external lookup knows how to query
const KNOWN_PROVIDERS: &[&str] = &["serper"];

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.input.domains_path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "domains_path cannot be empty".to_string(),
        ));
    }

    validate_range(&config.range)?;
    validate_http_config(&config.http)?;
    validate_lookup_config(&config.lookup)?;
    validate_estimation_params(&config.estimation)?;
    validate_politeness(&config.politeness)?;
    Ok(())
}

fn validate_range(range: &RangeConfig) -> Result<(), ConfigError> {
    if range.start > range.end {
        return Err(ConfigError::Validation(format!(
            "range start ({}) must not exceed end ({})",
            range.start, range.end
        )));
    }
    Ok(())
}

fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.probe_timeout_secs == 0 || config.fetch_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "probe and fetch timeouts must be >= 1s".to_string(),
        ));
    }

    Ok(())
}

fn validate_lookup_config(config: &LookupConfig) -> Result<(), ConfigError> {
    if !KNOWN_PROVIDERS.contains(&config.provider.as_str()) {
        return Err(ConfigError::Validation(format!(
            "unknown lookup provider '{}', expected one of {:?}",
            config.provider, KNOWN_PROVIDERS
        )));
    }

    let endpoint = Url::parse(&config.endpoint)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid lookup endpoint: {}", e)))?;

    if endpoint.scheme() != "http" && endpoint.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "Lookup endpoint '{}' must use HTTP(S)",
            config.endpoint
        )));
    }

    if config.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "lookup timeout must be >= 1s".to_string(),
        ));
    }

    Ok(())
}

/// Validates the calibration constants
pub(crate) fn validate_estimation_params(params: &EstimationParams) -> Result<(), ConfigError> {
    for (name, value) in [
        ("size_kb_multiplier", params.size_kb_multiplier),
        ("links_multiplier", params.links_multiplier),
        ("visitors_scale", params.visitors_scale),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "{} must be a positive number, got {}",
                name, value
            )));
        }
    }

    if params.min_visitors < 1 {
        return Err(ConfigError::Validation(
            "min_visitors must be >= 1".to_string(),
        ));
    }

    if params.min_visitors > params.max_visitors {
        return Err(ConfigError::Validation(format!(
            "min_visitors ({}) must not exceed max_visitors ({})",
            params.min_visitors, params.max_visitors
        )));
    }

    if !(0.0..=1.0).contains(&params.dead_domain_factor) {
        return Err(ConfigError::Validation(format!(
            "dead_domain_factor must be within [0, 1], got {}",
            params.dead_domain_factor
        )));
    }

    if !params.jitter_low.is_finite()
        || !params.jitter_high.is_finite()
        || params.jitter_low <= 0.0
        || params.jitter_low > params.jitter_high
    {
        return Err(ConfigError::Validation(format!(
            "jitter range must satisfy 0 < low <= high, got [{}, {}]",
            params.jitter_low, params.jitter_high
        )));
    }

    Ok(())
}

fn validate_politeness(config: &PolitenessConfig) -> Result<(), ConfigError> {
    if config.delay_min_ms > config.delay_max_ms {
        return Err(ConfigError::Validation(format!(
            "delay_min_ms ({}) must not exceed delay_max_ms ({})",
            config.delay_min_ms, config.delay_max_ms
        )));
    }
    Ok(())
}
