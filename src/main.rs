//! Ripple-Crawl main entry point
//!
//! This is the command-line interface for the Ripple-Crawl web crawler.

use anyhow::Context;
use clap::Parser;
use ripple_crawl::config::{read_config_or_default, validate, Config, TlsMode};
use ripple_crawl::crawler::crawl;
use ripple_crawl::output::{format_text_report, write_json_report};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Ripple-Crawl: a breadth-first web crawler
///
/// Starting from one URL, Ripple-Crawl fetches pages, extracts their links
/// and visits unseen links until the page budget is spent or nothing new is
/// left to visit.
#[derive(Parser, Debug)]
#[command(name = "ripple-crawl")]
#[command(version)]
#[command(about = "A breadth-first web crawler", long_about = None)]
struct Cli {
    /// URL to start crawling from
    #[arg(value_name = "START_URL")]
    start_url: String,

    /// Maximum number of pages to fetch [default: 10]
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u64).range(1..))]
    max_pages: Option<u64>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Maximum number of fetches in flight [default: 1]
    #[arg(short = 'j', long)]
    concurrency: Option<usize>,

    /// Accept invalid TLS certificates (self-signed, expired, wrong host)
    #[arg(long, conflicts_with = "verify_tls")]
    insecure: bool,

    /// Validate TLS certificates
    #[arg(long, conflicts_with = "insecure")]
    verify_tls: bool,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Also write the report as JSON to this file
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress per-page output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = build_config(&cli)?;
    tracing::debug!("Effective configuration: {:?}", config);

    let report = crawl(&cli.start_url, &config)
        .await
        .with_context(|| format!("Crawl of {} failed", cli.start_url))?;

    println!();
    print!("{}", format_text_report(&report));

    if let Some(path) = &config.output.report_path {
        write_json_report(&report, Path::new(path))
            .with_context(|| format!("Failed to write report to {}", path))?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("ripple_crawl=info,warn"),
            1 => EnvFilter::new("ripple_crawl=debug,info"),
            2 => EnvFilter::new("ripple_crawl=trace,debug"),
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

/// Loads the config file (if any) and applies command-line overrides
///
/// Validation runs once, on the merged result, so a flag can repair a value
/// the file gets wrong.
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = read_config_or_default(cli.config.as_deref()).with_context(|| {
        format!(
            "Failed to load configuration from {}",
            cli.config
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()
        )
    })?;

    if let Some(max_pages) = cli.max_pages {
        config.crawler.max_pages = usize::try_from(max_pages)?;
    }
    if let Some(concurrency) = cli.concurrency {
        config.crawler.concurrency = concurrency;
    }
    if cli.insecure {
        config.http.tls = TlsMode::Insecure;
    }
    if cli.verify_tls {
        config.http.tls = TlsMode::Verify;
    }
    if let Some(timeout) = cli.timeout {
        config.http.timeout_secs = timeout;
    }
    if let Some(report) = &cli.report {
        config.output.report_path = Some(report.display().to_string());
    }

    validate(&config).context("Invalid configuration")?;
    Ok(config)
}
