use serde::Deserialize;

/// Main configuration structure for Traffic-Gauge
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub input: InputConfig,
    #[serde(default)]
    pub range: RangeConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub lookup: LookupConfig,
    #[serde(default)]
    pub estimation: EstimationParams,
    #[serde(default)]
    pub politeness: PolitenessConfig,
}

/// Domain list location
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Path to a text file with one domain per line
    #[serde(rename = "domains-path")]
    pub domains_path: String,
}

/// Slice of the domain list to process, as a half-open index range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RangeConfig {
    #[serde(default)]
    pub start: usize,

    #[serde(default = "default_range_end")]
    pub end: usize,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            start: 0,
            end: default_range_end(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Path to the CSV results file; derived from the range when unset
    #[serde(rename = "csv-path", default)]
    pub csv_path: Option<String>,

    /// Path to an optional markdown run summary
    #[serde(rename = "summary-path", default)]
    pub summary_path: Option<String>,
}

impl OutputConfig {
    /// Returns the configured CSV path, or `visitors_<start>_<end>.csv` for
    /// the effective slice bounds
    pub fn csv_path_for(&self, start: usize, end: usize) -> String {
        self.csv_path
            .clone()
            .unwrap_or_else(|| format!("visitors_{}_{}.csv", start, end))
    }
}

/// HTTP client settings shared by the prober and the fetcher
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Timeout for the liveness HEAD request (seconds)
    #[serde(rename = "probe-timeout-secs", default = "default_probe_timeout")]
    pub probe_timeout_secs: u64,

    /// Timeout for the full homepage GET (seconds)
    #[serde(rename = "fetch-timeout-secs", default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            probe_timeout_secs: default_probe_timeout(),
            fetch_timeout_secs: default_fetch_timeout(),
        }
    }
}

/// External search lookup settings
#[derive(Debug, Clone, Deserialize)]
pub struct LookupConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_provider")]
    pub provider: String,

    #[serde(rename = "api-key", default)]
    pub api_key: Option<String>,

    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(rename = "timeout-secs", default = "default_lookup_timeout")]
    pub timeout_secs: u64,
}

impl LookupConfig {
    /// True when lookups are enabled and a non-empty key is present
    pub fn is_usable(&self) -> bool {
        self.enabled && self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            provider: default_provider(),
            api_key: None,
            endpoint: default_endpoint(),
            timeout_secs: default_lookup_timeout(),
        }
    }
}

/// Calibration constants for the estimation formulas
///
/// This is an immutable value handed to the pipeline at construction so the
/// formulas can be reproduced with any parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct EstimationParams {
    #[serde(rename = "size-kb-multiplier", default = "default_size_kb_multiplier")]
    pub size_kb_multiplier: f64,

    #[serde(rename = "links-multiplier", default = "default_links_multiplier")]
    pub links_multiplier: f64,

    #[serde(rename = "visitors-scale", default = "default_visitors_scale")]
    pub visitors_scale: f64,

    #[serde(rename = "min-visitors", default = "default_min_visitors")]
    pub min_visitors: u64,

    #[serde(rename = "max-visitors", default = "default_max_visitors")]
    pub max_visitors: u64,

    /// Share of the estimate kept for domains that failed the liveness probe
    #[serde(rename = "dead-domain-factor", default = "default_dead_domain_factor")]
    pub dead_domain_factor: f64,

    #[serde(rename = "jitter-low", default = "default_jitter_low")]
    pub jitter_low: f64,

    #[serde(rename = "jitter-high", default = "default_jitter_high")]
    pub jitter_high: f64,
}

impl Default for EstimationParams {
    fn default() -> Self {
        Self {
            size_kb_multiplier: default_size_kb_multiplier(),
            links_multiplier: default_links_multiplier(),
            visitors_scale: default_visitors_scale(),
            min_visitors: default_min_visitors(),
            max_visitors: default_max_visitors(),
            dead_domain_factor: default_dead_domain_factor(),
            jitter_low: default_jitter_low(),
            jitter_high: default_jitter_high(),
        }
    }
}

/// Delay inserted between consecutive domains
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PolitenessConfig {
    #[serde(rename = "delay-min-ms", default = "default_delay_min")]
    pub delay_min_ms: u64,

    #[serde(rename = "delay-max-ms", default = "default_delay_max")]
    pub delay_max_ms: u64,
}

impl Default for PolitenessConfig {
    fn default() -> Self {
        Self {
            delay_min_ms: default_delay_min(),
            delay_max_ms: default_delay_max(),
        }
    }
}

fn default_range_end() -> usize {
    usize::MAX
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64)".to_string()
}

fn default_probe_timeout() -> u64 {
    6
}

fn default_fetch_timeout() -> u64 {
    12
}

fn default_provider() -> String {
    "serper".to_string()
}

fn default_endpoint() -> String {
    "https://api.serper.dev/search".to_string()
}

fn default_lookup_timeout() -> u64 {
    12
}

fn default_size_kb_multiplier() -> f64 {
    2.0
}

fn default_links_multiplier() -> f64 {
    0.8
}

fn default_visitors_scale() -> f64 {
    10.0
}

fn default_min_visitors() -> u64 {
    1
}

fn default_max_visitors() -> u64 {
    50_000_000
}

fn default_dead_domain_factor() -> f64 {
    0.05
}

fn default_jitter_low() -> f64 {
    0.9
}

fn default_jitter_high() -> f64 {
    1.1
}

fn default_delay_min() -> u64 {
    1000
}

fn default_delay_max() -> u64 {
    1800
}
