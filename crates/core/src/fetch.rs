//! Page loading from URLs, files, and stdin.
//!
//! This is the loading boundary in front of the extraction pipeline. URLs are
//! fetched with a single HTTP GET; no scripts run, so pages that assemble
//! their content client-side should be rendered elsewhere and handed over as
//! a file or on stdin.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use tracing::debug;

use crate::{ClearReadError, Result};

/// HTTP client configuration for fetching web pages.
///
/// This struct controls timeout and user agent settings for HTTP requests.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 30,
            user_agent: "Mozilla/5.0 (compatible; ClearRead/0.1; reading-view extractor)".to_string(),
        }
    }
}

/// Fetches HTML content from a URL.
///
/// This function performs an HTTP GET request and returns the response body as text.
/// It follows redirects, respects the configured timeout, and treats non-2xx
/// responses as errors.
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = Url::parse(url).map_err(|e| ClearReadError::InvalidUrl(e.to_string()))?;

    if !matches!(parsed_url.scheme(), "http" | "https") {
        return Err(ClearReadError::InvalidUrl(format!(
            "unsupported scheme '{}' (expected http:// or https://)",
            parsed_url.scheme()
        )));
    }

    debug!(url = %parsed_url, timeout = config.timeout, "fetching page");

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(ClearReadError::HttpError)?;

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                ClearReadError::Timeout { timeout: config.timeout }
            } else {
                ClearReadError::HttpError(e)
            }
        })?;

    let response = response.error_for_status()?;
    let content = response.text().await?;

    debug!(bytes = content.len(), "fetched page");
    Ok(content)
}

/// Reads HTML content from a local file.
///
/// Callers should validate and sanitize the path when accepting user input.
pub fn fetch_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(ClearReadError::FileNotFound(path_buf))
    } else {
        fs::read_to_string(&path_buf).map_err(ClearReadError::from)
    }
}

/// Reads HTML content from standard input.
///
/// This function reads all available input from stdin until EOF.
/// Useful for piping content from other commands.
pub fn fetch_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(ClearReadError::from)?;

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_config_default() {
        let config = FetchConfig::default();
        assert_eq!(config.timeout, 30);
        assert!(config.user_agent.contains("ClearRead"));
    }

    #[test]
    fn test_fetch_url_invalid() {
        let config = FetchConfig::default();
        let result = std::thread::spawn(move || {
            tokio::runtime::Runtime::new()
                .unwrap()
                .block_on(fetch_url("not-a-url", &config))
        })
        .join()
        .unwrap();

        assert!(matches!(result, Err(ClearReadError::InvalidUrl(_))));
    }

    #[test]
    fn test_fetch_url_rejects_non_http_scheme() {
        let config = FetchConfig::default();
        let result = std::thread::spawn(move || {
            tokio::runtime::Runtime::new()
                .unwrap()
                .block_on(fetch_url("ftp://example.com/page.html", &config))
        })
        .join()
        .unwrap();

        assert!(matches!(result, Err(ClearReadError::InvalidUrl(_))));
    }

    #[test]
    fn test_fetch_file_not_found() {
        let result = fetch_file("/nonexistent/path/file.html");
        assert!(matches!(result, Err(ClearReadError::FileNotFound(_))));
    }

    #[test]
    fn test_url_validation() {
        assert!(Url::parse("http://example.com").is_ok());
        assert!(Url::parse("https://example.com").is_ok());
        assert!(Url::parse("example.com").is_err()); // Missing scheme
    }

    #[test]
    fn test_error_timeout_message() {
        let err = ClearReadError::Timeout { timeout: 30 };
        assert!(err.to_string().contains("30"));
    }
}
