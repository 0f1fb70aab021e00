use crate::config::types::{Config, CrawlerConfig, HttpConfig};
use crate::ConfigError;

/// Upper bound on concurrent fetches
pub const MAX_CONCURRENCY: usize = 64;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_http_config(&config.http)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.max_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "max_pages must be >= 1, got {}",
            config.max_pages
        )));
    }

    if config.concurrency < 1 || config.concurrency > MAX_CONCURRENCY {
        return Err(ConfigError::Validation(format!(
            "concurrency must be between 1 and {}, got {}",
            MAX_CONCURRENCY, config.concurrency
        )));
    }

    Ok(())
}

/// Validates HTTP configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "timeout_secs must be > 0".to_string(),
        ));
    }

    if config.connect_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "connect_timeout_secs must be > 0".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &crate::config::types::OutputConfig) -> Result<(), ConfigError> {
    if matches!(config.report_path.as_deref(), Some(path) if path.trim().is_empty()) {
        return Err(ConfigError::Validation(
            "report_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_max_pages() {
        let mut config = Config::default();
        config.crawler.max_pages = 0;
        assert!(validate(&config).is_err());

        config.crawler.max_pages = 1;
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_validate_concurrency_bounds() {
        let mut config = Config::default();
        config.crawler.concurrency = 0;
        assert!(validate(&config).is_err());

        config.crawler.concurrency = MAX_CONCURRENCY + 1;
        assert!(validate(&config).is_err());

        config.crawler.concurrency = MAX_CONCURRENCY;
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_validate_http() {
        let mut config = Config::default();
        config.http.user_agent = "   ".to_string();
        assert!(validate(&config).is_err());

        let mut config = Config::default();
        config.http.timeout_secs = 0;
        assert!(validate(&config).is_err());

        let mut config = Config::default();
        config.http.connect_timeout_secs = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_validate_report_path() {
        let mut config = Config::default();
        config.output.report_path = Some(String::new());
        assert!(validate(&config).is_err());

        config.output.report_path = Some("report.json".to_string());
        assert!(validate(&config).is_ok());
    }
}
