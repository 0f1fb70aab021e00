//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching and failure classification
//! - HTML parsing and link extraction
//! - Frontier and visited-set bookkeeping
//! - Overall crawl coordination

mod coordinator;
mod fetcher;
mod frontier;
mod parser;

pub use coordinator::Coordinator;
pub use fetcher::{build_http_client, fetch_url, FetchError, Fetcher, HttpFetcher};
pub use frontier::{Frontier, VisitedSet};
pub use parser::{extract_links, parse_html, ParsedPage};

use crate::config::Config;
use crate::output::CrawlReport;
use crate::url::parse_crawl_url;
use crate::CrawlerError;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Validate the start URL
/// 2. Build the HTTP fetcher from `config.http`
/// 3. Crawl until `config.crawler.max_pages` attempts or an empty frontier
///
/// # Arguments
///
/// * `start_url` - The seed URL
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Crawl finished; individual page failures are in the report
/// * `Err(CrawlerError)` - The start URL or client setup was invalid
///
/// # Example
///
/// ```no_run
/// use ripple_crawl::config::Config;
/// use ripple_crawl::crawler::crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let report = crawl("https://example.com/", &Config::default()).await?;
/// for url in &report.visited {
///     println!("{}", url);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn crawl(start_url: &str, config: &Config) -> Result<CrawlReport, CrawlerError> {
    let start_url = parse_crawl_url(start_url)?;
    let fetcher = HttpFetcher::from_config(&config.http)?;

    Coordinator::new(start_url, config.crawler.max_pages, fetcher)
        .with_concurrency(config.crawler.concurrency)
        .run()
        .await
}
