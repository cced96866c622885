use crate::config::RangeConfig;
use crate::GaugeError;
use std::path::Path;

/// Reads the domain list, one domain per line
///
/// A missing or unreadable file is fatal for the run.
pub fn load_domains(path: &Path) -> Result<Vec<String>, GaugeError> {
    let content = std::fs::read_to_string(path).map_err(|source| GaugeError::Input {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_domain_list(&content))
}

/// Splits text into trimmed, non-blank lines
pub fn parse_domain_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Clamps the configured range to a list of `total` domains
///
/// Returns half-open `(start, end)` bounds; `start == end` means nothing to
/// process.
pub fn slice_bounds(total: usize, range: &RangeConfig) -> (usize, usize) {
    let end = range.end.min(total);
    let start = range.start.min(end);
    (start, end)
}
