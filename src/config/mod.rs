//! Configuration module for Ripple-Crawl
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Command-line flags are applied on top of it by the
//! binary, after which the merged result is validated again.
//!
//! # Example
//!
//! ```no_run
//! use ripple_crawl::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("crawl.toml")).unwrap();
//! println!("Crawler will fetch at most {} pages", config.crawler.max_pages);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, HttpConfig, OutputConfig, TlsMode, DEFAULT_MAX_PAGES};

// Re-export parser functions
pub use parser::{load_config, parse_config, read_config, read_config_or_default};
pub use validation::{validate, MAX_CONCURRENCY};
