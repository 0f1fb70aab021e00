//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the crawl loop that ties together:
//! - The frontier of discovered URLs and the visited set
//! - A bounded pool of fetch workers
//! - Link extraction and frontier merging
//! - Absorbing per-page fetch failures
//!
//! The coordinator task is the only owner of the frontier and the visited
//! set. A URL is claimed in the visited set before its worker is spawned,
//! so no URL is ever fetched twice even with many workers in flight.

use crate::crawler::frontier::{Frontier, VisitedSet};
use crate::crawler::parser::{parse_html, ParsedPage};
use crate::crawler::{FetchError, Fetcher};
use crate::output::CrawlReport;
use crate::state::{PageOutcome, PageRecord};
use crate::CrawlerError;
use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinSet;
use url::Url;

/// How often a progress line is logged, in completed pages
const PROGRESS_INTERVAL: usize = 10;

type WorkerResult = (Url, Result<ParsedPage, FetchError>);

/// Main crawler coordinator structure
///
/// One coordinator drives one crawl. Independent crawls use independent
/// coordinators and share nothing.
pub struct Coordinator<F: Fetcher + 'static> {
    start_url: Url,
    budget: usize,
    concurrency: usize,
    fetcher: Arc<F>,
    frontier: Frontier,
    visited: VisitedSet,
    pages: Vec<PageRecord>,
    discarded: usize,
}

impl<F: Fetcher + 'static> Coordinator<F> {
    /// Creates a coordinator that fetches one page at a time
    ///
    /// # Arguments
    ///
    /// * `start_url` - The seed URL; the frontier starts with exactly this URL
    /// * `budget` - Maximum number of fetch attempts
    /// * `fetcher` - The transport used to retrieve pages
    pub fn new(start_url: Url, budget: usize, fetcher: F) -> Self {
        Self {
            frontier: Frontier::new(start_url.clone()),
            start_url,
            budget,
            concurrency: 1,
            fetcher: Arc::new(fetcher),
            visited: VisitedSet::new(),
            pages: Vec::new(),
            discarded: 0,
        }
    }

    /// Sets the maximum number of fetches in flight (at least 1)
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Runs the crawl loop to completion
    ///
    /// The loop keeps up to `concurrency` fetches in flight. It stops once
    /// nothing is in flight and either the budget is used up or the frontier
    /// is empty, so a momentarily empty frontier never ends the crawl while
    /// a worker may still contribute links.
    ///
    /// Fetch failures are recorded and absorbed. The only error returned is
    /// a worker that panicked, which indicates a bug rather than a bad page.
    pub async fn run(mut self) -> Result<CrawlReport, CrawlerError> {
        tracing::info!(
            "Starting crawl at {} (budget: {}, concurrency: {})",
            self.start_url,
            self.budget,
            self.concurrency
        );

        let started_at = Utc::now();
        let start_time = Instant::now();
        let mut in_flight: JoinSet<WorkerResult> = JoinSet::new();

        loop {
            self.dispatch(&mut in_flight);

            let Some(joined) = in_flight.join_next().await else {
                break;
            };
            let (url, result) = joined?;
            self.complete(url, result);

            if self.pages.len() % PROGRESS_INTERVAL == 0 {
                let rate = self.pages.len() as f64 / start_time.elapsed().as_secs_f64();
                tracing::info!(
                    "Progress: {} pages crawled, {} in frontier, {:.2} pages/sec",
                    self.pages.len(),
                    self.frontier.len(),
                    rate
                );
            }
        }

        if self.frontier.is_empty() {
            tracing::info!("Frontier is empty, crawl complete");
        } else {
            tracing::info!("Crawl budget of {} pages reached", self.budget);
        }
        tracing::info!(
            "Crawl completed: {} pages visited in {:?}",
            self.visited.len(),
            start_time.elapsed()
        );

        Ok(CrawlReport {
            start_url: self.start_url,
            budget: self.budget,
            started_at,
            finished_at: Utc::now(),
            visited: self.visited.into_sorted_vec(),
            pages: self.pages,
            frontier_remaining: self.frontier.len(),
            discarded: self.discarded,
        })
    }

    /// Claims frontier URLs and spawns workers until the pool or budget is full
    fn dispatch(&mut self, in_flight: &mut JoinSet<WorkerResult>) {
        while in_flight.len() < self.concurrency && self.visited.len() < self.budget {
            let Some(url) = self.frontier.pop() else {
                break;
            };

            if !self.visited.claim(&url) {
                tracing::debug!("Discarding already visited URL: {}", url);
                self.discarded += 1;
                continue;
            }

            tracing::debug!("Processing URL: {}", url);
            let fetcher = Arc::clone(&self.fetcher);
            in_flight.spawn(async move {
                let result = fetcher
                    .fetch(&url)
                    .await
                    .map(|body| parse_html(&body, &url));
                (url, result)
            });
        }
    }

    /// Records a finished fetch and merges its links into the frontier
    fn complete(&mut self, url: Url, result: Result<ParsedPage, FetchError>) {
        let outcome = match result {
            Ok(page) => {
                let links_found = page.links.len();
                let added = self.frontier.merge(page.links, &self.visited);
                tracing::info!("Fetched: {}", url);
                tracing::debug!("{} links on {}, {} new", links_found, url, added);
                PageOutcome::Fetched {
                    links_found,
                    title: page.title,
                }
            }
            Err(e) => {
                tracing::warn!("Failed: {} ({}: {})", url, e.kind(), e);
                PageOutcome::Failed {
                    kind: e.kind(),
                    reason: e.to_string(),
                }
            }
        };

        self.pages.push(PageRecord {
            url,
            order: self.pages.len(),
            outcome,
        });
    }
}
