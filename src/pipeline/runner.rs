use crate::config::Config;
use crate::output::{
    generate_markdown_summary, write_csv, DomainResult, RunStatistics, RunSummary,
};
use crate::pipeline::batch::run_batch;
use crate::pipeline::input::{load_domains, slice_bounds};
use crate::pipeline::pacer::Pacer;
use crate::pipeline::Pipeline;
use crate::GaugeError;
use chrono::Utc;
use rand::Rng;
use std::path::{Path, PathBuf};

/// What a finished run produced
#[derive(Debug, Clone)]
pub struct RunReport {
    pub csv_path: PathBuf,
    pub summary_path: Option<PathBuf>,
    pub results: Vec<DomainResult>,
    pub stats: RunStatistics,
}

/// Runs a complete batch
///
/// This is the main entry point. It will:
/// 1. Load the domain list (a failure here stops the run)
/// 2. Select the configured slice
/// 3. Estimate every domain in order
/// 4. Write the CSV results
/// 5. Write the markdown summary, if configured
pub async fn run_gauge<R: Rng + ?Sized>(
    config: &Config,
    config_hash: &str,
    pacer: &dyn Pacer,
    rng: &mut R,
) -> Result<RunReport, GaugeError> {
    let started_at = Utc::now();

    let all_domains = load_domains(Path::new(&config.input.domains_path))?;
    let total = all_domains.len();
    let (start, end) = slice_bounds(total, &config.range);
    let domains = &all_domains[start..end];

    tracing::info!(
        "Processing domains {} to {} (total: {} of {})",
        start,
        end,
        domains.len(),
        total
    );

    let pipeline = Pipeline::from_config(config)?;
    if pipeline.uses_external_lookup() {
        tracing::info!("Indexed pages: external lookup via {}", config.lookup.provider);
    } else {
        tracing::info!("Indexed pages: heuristic only");
    }

    let results = run_batch(&pipeline, domains, start, &config.politeness, pacer, rng).await;

    let csv_path = PathBuf::from(config.output.csv_path_for(start, end));
    write_csv(&results, &csv_path)?;
    tracing::info!("Results saved to {}", csv_path.display());

    let stats = RunStatistics::from_results(&results);

    let summary_path = config.output.summary_path.as_ref().map(PathBuf::from);
    if let Some(path) = &summary_path {
        let summary = RunSummary {
            started_at,
            finished_at: Utc::now(),
            config_hash: config_hash.to_string(),
            start,
            end,
            input_total: total,
            csv_path: csv_path.display().to_string(),
            lookup_enabled: pipeline.uses_external_lookup(),
            stats: stats.clone(),
        };
        generate_markdown_summary(&summary, path)?;
        tracing::info!("Summary saved to {}", path.display());
    }

    Ok(RunReport {
        csv_path,
        summary_path,
        results,
        stats,
    })
}
