//! Data models for scraped fact-check articles.
//!
//! - [`ArticleRecord`]: one entry per processed article URL, serialized verbatim
//!   into the output dataset.

use serde::{Deserialize, Serialize};

/// The persisted result of processing one article URL.
///
/// A record exists for every discovered URL, even when fetching or parsing
/// failed; in that case only `url` is populated.
///
/// # JSON Shape
///
/// ```json
/// {
///     "url": "https://www.politifact.com/factchecks/2025/feb/20/...",
///     "title": "Quoted statement",
///     "summary": "Page heading",
///     "claims": ["Paragraph one", "Paragraph two"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ArticleRecord {
    /// The source page address.
    pub url: String,
    /// The headline quoted statement, if one was found.
    pub title: Option<String>,
    /// The first-level page heading, if one was found.
    pub summary: Option<String>,
    /// Normalized body paragraphs, excluding the headline quote.
    #[serde(default)]
    pub claims: Vec<String>,
}

impl ArticleRecord {
    /// A record for a URL whose extraction failed.
    pub fn empty(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: None,
            summary: None,
            claims: Vec::new(),
        }
    }

    /// True when no field besides `url` carries non-empty text.
    ///
    /// `Some("")` counts as absent, so a heading that cleans to nothing does
    /// not make a record worth writing.
    pub fn is_empty(&self) -> bool {
        let blank = |field: &Option<String>| field.as_deref().is_none_or(str::is_empty);
        blank(&self.title) && blank(&self.summary) && self.claims.iter().all(String::is_empty)
    }
}
