//! Fact-check scrapers.
//!
//! Scraping follows a two-phase pattern:
//!
//! 1. **Indexing** ([`listing`]): walk the paginated listing and collect article URLs
//! 2. **Fetching** ([`article`]): download each article and extract an [`ArticleRecord`]
//!
//! Both phases read markup through a [`PageSource`], so the network client can
//! be swapped for canned pages in tests.
//!
//! # Markup Contract
//!
//! | Element | Selector | Used for |
//! |---------|----------|----------|
//! | Quote block | `div.m-statement__quote` | listing links, article title |
//! | Page heading | `h1.c-title` | article summary |
//! | Article body | `article.m-textblock` | claims container |
//! | Body paragraph | `p:not(.m-statement__quote)` | claims |
//!
//! [`ArticleRecord`]: crate::models::ArticleRecord

use reqwest::Client;
use scraper::Selector;
use tracing::{debug, instrument};

use crate::config::ScrapeConfig;
use crate::error::{Result, ScrapeError};

pub mod article;
pub mod listing;

pub const QUOTE_BLOCK: &str = "div.m-statement__quote";
pub const PAGE_HEADING: &str = "h1.c-title";
pub const ARTICLE_BODY: &str = "article.m-textblock";
pub const BODY_PARAGRAPH: &str = "p:not(.m-statement__quote)";

/// Anything that can turn a URL into page markup.
pub trait PageSource {
    /// Fetch `url` and return the response body.
    ///
    /// Transport failures, timeouts, and non-success statuses are all errors.
    async fn get_html(&self, url: &str) -> Result<String>;
}

/// [`PageSource`] backed by a `reqwest` client.
///
/// Every request carries the configured `User-Agent` and timeout. Idle
/// connections are not pooled, so each request opens its own connection.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(config: &ScrapeConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout())
            .pool_max_idle_per_host(0)
            .build()?;
        Ok(Self { client })
    }
}

impl PageSource for HttpSource {
    #[instrument(level = "debug", skip(self))]
    async fn get_html(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        let body = response.text().await?;
        debug!(bytes = body.len(), %status, "Fetched page");
        Ok(body)
    }
}

/// Parse a CSS selector, keeping the parser's complaint as a typed error.
pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector {
        selector: css.to_string(),
        reason: e.to_string(),
    })
}
