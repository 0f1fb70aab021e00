//! Output module for crawl reports
//!
//! This module handles:
//! - The `CrawlReport` returned by a finished crawl
//! - Summary statistics
//! - The human-readable final report and JSON export

mod report;
pub mod stats;

pub use report::CrawlReport;
pub use stats::{format_statistics, CrawlStatistics};

use crate::CrawlerError;
use std::fmt::Write as _;
use std::path::Path;

/// Formats the final report printed at the end of a crawl
///
/// Lists every visited URL (fetched or failed) one per line, followed by
/// the statistics block.
///
/// # Example
///
/// ```no_run
/// use ripple_crawl::config::Config;
/// use ripple_crawl::crawler::crawl;
/// use ripple_crawl::output::format_text_report;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let report = crawl("https://example.com/", &Config::default()).await?;
/// print!("{}", format_text_report(&report));
/// # Ok(())
/// # }
/// ```
pub fn format_text_report(report: &CrawlReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "The following websites were visited:");
    for url in &report.visited {
        let _ = writeln!(out, "  {}", url);
    }
    let _ = writeln!(out);

    out.push_str(&format_statistics(&report.stats()));

    let _ = writeln!(
        out,
        "  Duration: {:.2}s",
        report.duration().num_milliseconds() as f64 / 1000.0
    );

    out
}

/// Writes the report as pretty-printed JSON
///
/// # Arguments
///
/// * `report` - The finished crawl report
/// * `path` - Destination file; created or truncated
pub fn write_json_report(report: &CrawlReport, path: &Path) -> Result<(), CrawlerError> {
    let json = report.to_json()?;
    std::fs::write(path, json)?;
    tracing::info!("Report written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FailureKind, PageOutcome, PageRecord};
    use chrono::Utc;
    use url::Url;

    fn report() -> CrawlReport {
        let start = Url::parse("https://example.com/").unwrap();
        let broken = Url::parse("https://example.com/broken").unwrap();

        CrawlReport {
            start_url: start.clone(),
            budget: 5,
            started_at: Utc::now(),
            finished_at: Utc::now(),
            visited: vec![start.clone(), broken.clone()],
            pages: vec![
                PageRecord {
                    url: start,
                    order: 0,
                    outcome: PageOutcome::Fetched {
                        links_found: 1,
                        title: None,
                    },
                },
                PageRecord {
                    url: broken,
                    order: 1,
                    outcome: PageOutcome::Failed {
                        kind: FailureKind::Protocol,
                        reason: "HTTP 500".to_string(),
                    },
                },
            ],
            frontier_remaining: 0,
            discarded: 0,
        }
    }

    #[test]
    fn test_text_report_lists_all_visited() {
        let text = format_text_report(&report());
        assert!(text.starts_with("The following websites were visited:\n"));
        assert!(text.contains("  https://example.com/\n"));
        assert!(text.contains("  https://example.com/broken\n"));
        assert!(text.contains("Pages failed: 1"));
    }

    #[test]
    fn test_write_json_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        write_json_report(&report(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(json["start_url"], "https://example.com/");
        assert_eq!(json["pages"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_write_json_report_bad_path() {
        let result = write_json_report(&report(), Path::new("/nonexistent/dir/report.json"));
        assert!(matches!(result, Err(CrawlerError::Io(_))));
    }
}
