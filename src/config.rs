//! Pipeline configuration.
//!
//! A [`ScrapeConfig`] is resolved in three layers: built-in defaults, an
//! optional YAML file, then command-line overrides. The resolved value is
//! validated once and passed into the pipeline entry point.
//!
//! # YAML Example
//!
//! ```yaml
//! listing_base_url: https://www.politifact.com/factchecks/list/
//! page_count: 2
//! request_timeout_seconds: 10
//! user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64)"
//! output_path: results.json
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, instrument};
use url::Url;

use crate::error::{Result, ScrapeError};

pub const DEFAULT_LISTING_URL: &str = "https://www.politifact.com/factchecks/list/";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";
pub const DEFAULT_ARTICLE_PREFIX: &str = "/factchecks/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Settings for one crawl.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrapeConfig {
    /// Listing page URL; `page=<n>` is appended for each page.
    #[serde(alias = "listingBaseUrl")]
    pub listing_base_url: String,
    /// Number of listing pages to walk, starting at 1.
    #[serde(alias = "pageCount")]
    pub page_count: u32,
    /// Per-request timeout.
    #[serde(alias = "requestTimeoutSeconds")]
    pub request_timeout_seconds: u64,
    /// `User-Agent` header sent with every request.
    #[serde(alias = "userAgent")]
    pub user_agent: String,
    /// Where the JSON dataset is written.
    #[serde(alias = "outputPath")]
    pub output_path: PathBuf,
    /// Only anchors whose `href` starts with this path are article links.
    #[serde(alias = "articlePathPrefix")]
    pub article_path_prefix: String,
    /// Remove `(Screenshot from ...)` credits from claims before writing.
    #[serde(alias = "stripScreenshotCredits")]
    pub strip_screenshot_credits: bool,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            listing_base_url: DEFAULT_LISTING_URL.to_string(),
            page_count: 1,
            request_timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            output_path: PathBuf::from("results.json"),
            article_path_prefix: DEFAULT_ARTICLE_PREFIX.to_string(),
            strip_screenshot_credits: false,
        }
    }
}

/// Values supplied on the command line; `None` leaves the lower layer in place.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub listing_base_url: Option<String>,
    pub page_count: Option<u32>,
    pub request_timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
    pub output_path: Option<PathBuf>,
    pub strip_screenshot_credits: bool,
}

impl ScrapeConfig {
    /// Load a config file, falling back to defaults for missing keys.
    #[instrument(level = "info", skip_all, fields(path = %path.display()))]
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: ScrapeConfig = serde_yaml::from_str(&raw)?;
        info!("Loaded configuration file");
        Ok(config)
    }

    /// Resolve defaults, optional file, and CLI overrides, then validate.
    pub fn resolve(file: Option<&Path>, overrides: ConfigOverrides) -> Result<Self> {
        let mut config = match file {
            Some(path) => Self::from_yaml_file(path)?,
            None => Self::default(),
        };
        config.apply(overrides);
        config.validate()?;
        Ok(config)
    }

    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(url) = overrides.listing_base_url {
            self.listing_base_url = url;
        }
        if let Some(pages) = overrides.page_count {
            self.page_count = pages;
        }
        if let Some(secs) = overrides.request_timeout_seconds {
            self.request_timeout_seconds = secs;
        }
        if let Some(ua) = overrides.user_agent {
            self.user_agent = ua;
        }
        if let Some(path) = overrides.output_path {
            self.output_path = path;
        }
        self.strip_screenshot_credits |= overrides.strip_screenshot_credits;
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_count == 0 {
            return Err(ScrapeError::Config("page_count must be at least 1".into()));
        }
        if self.request_timeout_seconds == 0 {
            return Err(ScrapeError::Config(
                "request_timeout_seconds must be at least 1".into(),
            ));
        }
        if self.user_agent.trim().is_empty() {
            return Err(ScrapeError::Config("user_agent must not be empty".into()));
        }
        Url::parse(&self.listing_base_url)?;
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}
