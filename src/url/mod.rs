//! URL handling module for Ripple-Crawl
//!
//! This module validates crawl URLs and resolves raw hrefs against a page's
//! base URL. A URL's identity is its serialized string: two URLs are the same
//! page iff `as_str()` matches. No further normalization happens here, so
//! fragments and trailing slashes are significant.
//!
//! The serialized string is the WHATWG form produced by the `url` crate, not
//! the raw href text. The scheme and host are lowercased and an empty path
//! becomes `/`, so `https://ok.com`, `https://ok.com/` and `HTTPS://OK.COM`
//! are one URL.

use crate::UrlError;
use url::Url;

/// Schemes the crawler will fetch
const CRAWLABLE_SCHEMES: &[&str] = &["http", "https"];

/// Parses a user-supplied URL and checks that it can be crawled
///
/// # Arguments
///
/// * `input` - The URL string (surrounding whitespace is ignored)
///
/// # Returns
///
/// * `Ok(Url)` - An absolute HTTP(S) URL with a host
/// * `Err(UrlError)` - The input is malformed, relative, or uses another scheme
///
/// # Examples
///
/// ```
/// use ripple_crawl::url::parse_crawl_url;
///
/// let url = parse_crawl_url("https://example.com/start").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/start");
/// assert!(parse_crawl_url("mailto:someone@example.com").is_err());
/// ```
pub fn parse_crawl_url(input: &str) -> Result<Url, UrlError> {
    let url = Url::parse(input.trim()).map_err(|e| UrlError::Parse(format!("{input}: {e}")))?;

    if !is_crawlable_scheme(&url) {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(UrlError::MissingHost(url.to_string()));
    }

    Ok(url)
}

/// Returns true if the URL's scheme is exactly `http` or `https`
pub fn is_crawlable_scheme(url: &Url) -> bool {
    CRAWLABLE_SCHEMES.contains(&url.scheme())
}

/// Resolves a raw href against a base URL
///
/// Relative paths, protocol-relative references, fragment-only references
/// and absolute URLs all resolve using the WHATWG URL rules. The result is
/// kept only if it is an HTTP(S) URL; `mailto:`, `javascript:`, `ftp:` and
/// unresolvable references yield `None`.
///
/// # Examples
///
/// ```
/// use ripple_crawl::url::resolve_href;
/// use url::Url;
///
/// let base = Url::parse("https://site.com/a/b").unwrap();
/// assert_eq!(resolve_href("../c", &base).unwrap().as_str(), "https://site.com/c");
/// assert!(resolve_href("javascript:void(0)", &base).is_none());
/// ```
pub fn resolve_href(href: &str, base: &Url) -> Option<Url> {
    let resolved = base.join(href).ok()?;
    is_crawlable_scheme(&resolved).then_some(resolved)
}
