use crate::output::record::DomainResult;
use crate::output::{OutputError, OutputResult};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Column order of the results file
pub const CSV_HEADER: [&str; 6] = [
    "domain",
    "alive",
    "homepage_kb",
    "internal_links",
    "indexed_pages_est",
    "visitors_est_monthly",
];

/// Writes results to a CSV file, one row per domain in the given order
pub fn write_csv(results: &[DomainResult], output_path: &Path) -> OutputResult<()> {
    let csv = format_csv(results);

    let write = || -> std::io::Result<()> {
        let mut file = File::create(output_path)?;
        file.write_all(csv.as_bytes())?;
        file.flush()
    };

    write().map_err(|source| OutputError::Write {
        path: output_path.display().to_string(),
        source,
    })
}

/// Formats results as CSV text with a header row
///
/// Booleans are written as `True`/`False` and sizes with two decimals, which
/// keeps files comparable with earlier exports.
pub fn format_csv(results: &[DomainResult]) -> String {
    let mut csv = String::new();
    csv.push_str(&CSV_HEADER.join(","));
    csv.push_str("\r\n");

    for result in results {
        csv.push_str(&format!(
            "{},{},{:.2},{},{},{}\r\n",
            escape_field(&result.domain),
            if result.alive { "True" } else { "False" },
            result.homepage_kb,
            result.internal_links,
            result.indexed_pages_est,
            result.visitors_est_monthly
        ));
    }

    csv
}

/// Quotes a field when it contains a delimiter, quote or line break
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
