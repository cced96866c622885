//! Markdown run summary
//!
//! Generates a human-readable report of a batch run: when it ran, which
//! settings it used, and how the estimates came out.

use crate::output::stats::RunStatistics;
use crate::output::{OutputError, OutputResult};
use chrono::{DateTime, Utc};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Everything needed to describe a finished run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub config_hash: String,

    /// Effective slice bounds, after clamping to the input length
    pub start: usize,
    pub end: usize,

    /// Number of domains in the input file
    pub input_total: usize,

    pub csv_path: String,
    pub lookup_enabled: bool,
    pub stats: RunStatistics,
}

/// Writes the markdown summary to `output_path`
pub fn generate_markdown_summary(summary: &RunSummary, output_path: &Path) -> OutputResult<()> {
    let markdown = format_markdown_summary(summary);

    let mut file = File::create(output_path).map_err(|source| OutputError::Write {
        path: output_path.display().to_string(),
        source,
    })?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

/// Formats a run summary as markdown
pub fn format_markdown_summary(summary: &RunSummary) -> String {
    let stats = &summary.stats;
    let mut md = String::new();

    md.push_str("# Traffic-Gauge Run Summary\n\n");

    md.push_str("## Run Information\n\n");
    md.push_str(&format!("- **Started**: {}\n", summary.started_at.to_rfc3339()));
    md.push_str(&format!("- **Finished**: {}\n", summary.finished_at.to_rfc3339()));
    let duration = (summary.finished_at - summary.started_at).num_seconds().max(0);
    md.push_str(&format!(
        "- **Duration**: {} seconds ({:.2} minutes)\n",
        duration,
        duration as f64 / 60.0
    ));
    md.push_str(&format!(
        "- **Range**: {} to {} (of {} domains)\n",
        summary.start, summary.end, summary.input_total
    ));
    md.push_str(&format!("- **Results File**: {}\n", summary.csv_path));
    md.push_str(&format!(
        "- **External Lookup**: {}\n",
        if summary.lookup_enabled { "enabled" } else { "disabled" }
    ));
    md.push_str(&format!("- **Config Hash**: {}\n\n", summary.config_hash));

    md.push_str("## Signals\n\n");
    md.push_str("| Measure | Count |\n");
    md.push_str("|---------|-------|\n");
    md.push_str(&format!("| Domains | {} |\n", stats.total));
    md.push_str(&format!(
        "| Alive | {} ({:.1}%) |\n",
        stats.alive,
        stats.alive_rate()
    ));
    md.push_str(&format!("| Dead | {} |\n", stats.dead()));
    md.push_str(&format!("| Degraded | {} |\n", stats.degraded));
    md.push_str(&format!(
        "| Indexed pages from lookup | {} |\n",
        stats.external_estimates
    ));
    md.push_str(&format!(
        "| Indexed pages from heuristic | {} |\n\n",
        stats.heuristic_estimates
    ));

    md.push_str("## Visitors\n\n");
    md.push_str(&format!("- **Total**: {}\n", stats.total_visitors));
    md.push_str(&format!("- **Mean**: {:.1}\n", stats.mean_visitors));
    md.push_str(&format!("- **Median**: {}\n\n", stats.median_visitors));

    if !stats.top_domains.is_empty() {
        md.push_str("## Top Domains\n\n");
        md.push_str("| Domain | Visitors/month |\n");
        md.push_str("|--------|----------------|\n");
        for (domain, visitors) in &stats.top_domains {
            md.push_str(&format!("| {} | {} |\n", domain, visitors));
        }
        md.push('\n');
    }

    md.push_str("---\n\n");
    md.push_str("*Figures are bounded, randomized estimates derived from public signals, not measured traffic.*\n");

    md
}
