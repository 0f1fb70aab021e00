use serde::Deserialize;

/// Default crawl budget when neither the CLI nor the config file sets one
pub const DEFAULT_MAX_PAGES: usize = 10;

/// Main configuration structure for Ripple-Crawl
///
/// Every section is optional in the TOML file; missing sections and keys
/// fall back to their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    pub http: HttpConfig,
    pub output: OutputConfig,
}

/// Crawl loop configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CrawlerConfig {
    /// Maximum number of fetch attempts in one crawl
    pub max_pages: usize,

    /// Maximum number of fetches in flight at once
    pub concurrency: usize,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_pages: DEFAULT_MAX_PAGES,
            concurrency: 1,
        }
    }
}

/// Certificate validation policy for HTTPS fetches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TlsMode {
    /// Accept self-signed, expired and mismatched certificates
    #[default]
    Insecure,

    /// Validate certificates against the system roots
    Verify,
}

/// HTTP fetcher configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct HttpConfig {
    /// User-Agent header sent with every request
    pub user_agent: String,

    /// Whole-request timeout in seconds
    pub timeout_secs: u64,

    /// Connection establishment timeout in seconds
    pub connect_timeout_secs: u64,

    /// Maximum redirect hops followed by the transport
    pub max_redirects: usize,

    /// Certificate validation policy
    pub tls: TlsMode,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("RippleCrawl/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: 30,
            connect_timeout_secs: 10,
            max_redirects: 10,
            tls: TlsMode::default(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct OutputConfig {
    /// Path for a JSON copy of the crawl report
    pub report_path: Option<String>,
}
