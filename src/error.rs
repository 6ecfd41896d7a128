//! Error types shared by the scraping pipeline.
//!
//! Only two failure families matter at runtime: transport problems while
//! fetching a page ([`ScrapeError::Http`], [`ScrapeError::Status`]) and
//! everything that can go wrong while turning markup into records. Both are
//! caught per page or per article and degrade into partial results; the rest
//! (configuration, output files) surfaces to `main`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML config error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = ScrapeError::Status {
            url: "https://example.com/a".to_string(),
            status: 404,
        };
        assert_eq!(err.to_string(), "HTTP status 404 for https://example.com/a");
    }

    #[test]
    fn test_url_error_converts() {
        let err: ScrapeError = url::Url::parse("not a url").unwrap_err().into();
        assert!(matches!(err, ScrapeError::InvalidUrl(_)));
    }
}
