//! Statistics derived from a crawl report
//!
//! This module provides functionality for summarizing and displaying
//! the outcome counts of a finished crawl.

use crate::output::CrawlReport;
use crate::state::{FailureKind, PageOutcome};
use std::collections::BTreeMap;
use std::fmt::Write;

/// Crawl statistics summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlStatistics {
    /// Number of fetch attempts (equals the number of visited URLs)
    pub attempted: usize,

    /// Attempts that returned a body
    pub fetched: usize,

    /// Attempts that failed
    pub failed: usize,

    /// Failed attempts by category
    pub failures_by_kind: BTreeMap<FailureKind, usize>,

    /// Sum of distinct links found on fetched pages
    pub links_discovered: usize,
}

impl CrawlStatistics {
    /// Counts outcomes in a report
    pub fn from_report(report: &CrawlReport) -> Self {
        let mut stats = Self {
            attempted: report.pages.len(),
            ..Self::default()
        };

        for page in &report.pages {
            match &page.outcome {
                PageOutcome::Fetched { links_found, .. } => {
                    stats.fetched += 1;
                    stats.links_discovered += links_found;
                }
                PageOutcome::Failed { kind, .. } => {
                    stats.failed += 1;
                    *stats.failures_by_kind.entry(*kind).or_insert(0) += 1;
                }
            }
        }

        stats
    }

    /// Percentage of attempts that succeeded
    pub fn success_rate(&self) -> f64 {
        if self.attempted == 0 {
            0.0
        } else {
            (self.fetched as f64 / self.attempted as f64) * 100.0
        }
    }
}

/// Formats statistics as indented text
///
/// # Arguments
///
/// * `stats` - The statistics to display
pub fn format_statistics(stats: &CrawlStatistics) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Crawl Statistics:");
    let _ = writeln!(out, "  Pages attempted: {}", stats.attempted);
    let _ = writeln!(out, "  Pages fetched: {}", stats.fetched);
    let _ = writeln!(out, "  Pages failed: {}", stats.failed);
    let _ = writeln!(out, "  Links discovered: {}", stats.links_discovered);

    if !stats.failures_by_kind.is_empty() {
        let _ = writeln!(out, "  Failures by kind:");
        for (kind, count) in &stats.failures_by_kind {
            let _ = writeln!(out, "    {}: {}", kind, count);
        }
    }

    let _ = writeln!(
        out,
        "  Success Rate: {:.1}% ({} / {} pages)",
        stats.success_rate(),
        stats.fetched,
        stats.attempted
    );

    out
}
