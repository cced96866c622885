//! Traffic-Gauge main entry point
//!
//! This is the command-line interface for the Traffic-Gauge visitor estimator.

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use traffic_gauge::config::{load_config_with_hash, validate, Config};
use traffic_gauge::output::print_statistics;
use traffic_gauge::pipeline::{load_domains, run_gauge, slice_bounds, TokioPacer};
use tracing_subscriber::EnvFilter;

/// Traffic-Gauge: estimates monthly visitors from cheap public signals
///
/// For each domain in the input list, Traffic-Gauge probes liveness, measures
/// the homepage, counts internal links and estimates indexed pages, then
/// combines them into a bounded, randomized visitor figure written to CSV.
#[derive(Parser, Debug)]
#[command(name = "traffic-gauge")]
#[command(version = "1.0.0")]
#[command(about = "Estimates monthly visitors from cheap public signals", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// First domain index to process (overrides [range] start)
    #[arg(long)]
    start: Option<usize>,

    /// Index one past the last domain to process (overrides [range] end)
    #[arg(long)]
    end: Option<usize>,

    /// CSV output path (overrides [output] csv-path)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Enable the external search lookup (overrides [lookup] enabled)
    #[arg(long)]
    lookup: bool,

    /// Search API key (overrides [lookup] api-key)
    #[arg(long, env = "SERPER_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Seed for jitter and politeness delays, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Validate config and show what would be processed without any requests
    #[arg(long)]
    dry_run: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (mut config, config_hash) = match load_config_with_hash(&cli.config) {
        Ok((cfg, hash)) => {
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            (cfg, hash)
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e).context("could not load configuration");
        }
    };

    apply_overrides(&mut config, &cli);
    validate(&config).context("invalid configuration after command-line overrides")?;

    if cli.dry_run {
        return handle_dry_run(&config);
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    match run_gauge(&config, &config_hash, &TokioPacer, &mut rng).await {
        Ok(report) => {
            if !cli.quiet {
                println!();
                print_statistics(&report.stats);
                println!("\n✓ Done. Results saved to {}", report.csv_path.display());
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!("Run failed: {}", e);
            Err(e).context("run aborted")
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("traffic_gauge=info,warn"),
            1 => EnvFilter::new("traffic_gauge=debug,info"),
            2 => EnvFilter::new("traffic_gauge=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Applies command-line overrides on top of the file configuration
fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(start) = cli.start {
        config.range.start = start;
    }
    if let Some(end) = cli.end {
        config.range.end = end;
    }
    if let Some(output) = &cli.output {
        config.output.csv_path = Some(output.display().to_string());
    }
    if cli.lookup {
        config.lookup.enabled = true;
    }
    if let Some(key) = &cli.api_key {
        config.lookup.api_key = Some(key.clone());
    }
}

/// Handles the --dry-run mode: validates input and shows what would be processed
fn handle_dry_run(config: &Config) -> anyhow::Result<()> {
    println!("=== Traffic-Gauge Dry Run ===\n");

    let domains = load_domains(std::path::Path::new(&config.input.domains_path))
        .context("could not read domain list")?;
    let (start, end) = slice_bounds(domains.len(), &config.range);

    println!("Input:");
    println!("  Domains file: {}", config.input.domains_path);
    println!("  Domains listed: {}", domains.len());
    println!("  Slice: {} to {} ({} domains)", start, end, end - start);

    println!("\nHTTP:");
    println!("  User agent: {}", config.http.user_agent);
    println!("  Probe timeout: {}s", config.http.probe_timeout_secs);
    println!("  Fetch timeout: {}s", config.http.fetch_timeout_secs);

    println!("\nIndexed Pages:");
    if config.lookup.is_usable() {
        println!(
            "  External lookup: {} ({})",
            config.lookup.provider, config.lookup.endpoint
        );
    } else if config.lookup.enabled {
        println!("  External lookup: enabled but no API key, heuristic fallback");
    } else {
        println!("  External lookup: disabled, heuristic only");
    }

    let params = &config.estimation;
    println!("\nEstimation:");
    println!("  Size multiplier: {}", params.size_kb_multiplier);
    println!("  Links multiplier: {}", params.links_multiplier);
    println!("  Visitors scale: {}", params.visitors_scale);
    println!(
        "  Visitor bounds: [{}, {}]",
        params.min_visitors, params.max_visitors
    );

    println!("\nPoliteness:");
    println!(
        "  Delay: {}-{}ms",
        config.politeness.delay_min_ms, config.politeness.delay_max_ms
    );

    println!("\nOutput:");
    println!("  CSV: {}", config.output.csv_path_for(start, end));
    if let Some(summary) = &config.output.summary_path {
        println!("  Summary: {}", summary);
    }

    println!("\n✓ Configuration is valid");

    Ok(())
}
