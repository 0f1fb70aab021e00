//! Crawl report produced by the coordinator

use crate::output::stats::CrawlStatistics;
use crate::state::PageRecord;
use chrono::{DateTime, Utc};
use serde::Serialize;
use url::Url;

/// Everything a finished crawl has to say
#[derive(Debug, Clone, Serialize)]
pub struct CrawlReport {
    /// The seed URL
    pub start_url: Url,

    /// Maximum fetch attempts that were allowed
    pub budget: usize,

    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,

    /// Every URL a fetch was attempted for, sorted, failures included
    pub visited: Vec<Url>,

    /// Per-attempt history in completion order
    pub pages: Vec<PageRecord>,

    /// URLs still queued when the crawl stopped
    pub frontier_remaining: usize,

    /// Frontier pops skipped because the URL was already visited
    pub discarded: usize,
}

impl CrawlReport {
    /// Attempts whose body was retrieved
    pub fn succeeded(&self) -> impl Iterator<Item = &PageRecord> {
        self.pages.iter().filter(|p| p.outcome.is_success())
    }

    /// Attempts that failed
    pub fn failed(&self) -> impl Iterator<Item = &PageRecord> {
        self.pages.iter().filter(|p| !p.outcome.is_success())
    }

    /// Returns true if the URL was attempted during this crawl
    pub fn was_visited(&self, url: &Url) -> bool {
        self.visited.binary_search(url).is_ok()
    }

    /// Wall-clock duration of the crawl
    pub fn duration(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }

    /// Summary counters for this crawl
    pub fn stats(&self) -> CrawlStatistics {
        CrawlStatistics::from_report(self)
    }

    /// Serializes the report as pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
