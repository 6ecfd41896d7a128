//! Pipeline entry points, one per subcommand.
//!
//! Each entry point takes its configuration explicitly and runs strictly in
//! sequence: index, extract, optionally clean, persist.

use std::path::Path;
use tracing::{info, instrument, warn};

use crate::config::ScrapeConfig;
use crate::error::Result;
use crate::models::ArticleRecord;
use crate::outputs::{json, text};
use crate::scrapers::PageSource;
use crate::scrapers::article::{TitleRule, extract_article, fetch_articles};
use crate::scrapers::listing::index_articles;
use crate::utils::strip_screenshot_credits;

/// Outcome of a crawl, for the final summary line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlSummary {
    pub indexed: usize,
    pub with_title: usize,
    pub empty: usize,
    pub written: bool,
}

/// Index the listing, extract every article, and write the JSON dataset.
///
/// Nothing is written when discovery found no links. Write failures propagate.
#[instrument(level = "info", skip_all, fields(output = %config.output_path.display()))]
pub async fn crawl<S: PageSource>(source: &S, config: &ScrapeConfig) -> Result<CrawlSummary> {
    let urls = index_articles(source, config).await;
    let mut records = fetch_articles(source, &urls, &TitleRule::FirstNonEmpty).await;

    if config.strip_screenshot_credits {
        records = clean_records(records);
    }

    let summary = CrawlSummary {
        indexed: urls.len(),
        with_title: records.iter().filter(|r| r.title.is_some()).count(),
        empty: records.iter().filter(|r| r.is_empty()).count(),
        written: !records.is_empty(),
    };

    if records.is_empty() {
        warn!("No articles found; nothing written");
        return Ok(summary);
    }

    json::write_records(&records, &config.output_path).await?;
    info!(
        indexed = summary.indexed,
        with_title = summary.with_title,
        empty = summary.empty,
        "Crawl complete"
    );
    Ok(summary)
}

/// Extract one article and write it as a labeled text file.
///
/// Returns the record and whether anything was written; a record with no
/// content leaves `output` untouched.
#[instrument(level = "info", skip(source, rule))]
pub async fn scrape_single<S: PageSource>(
    source: &S,
    url: &str,
    rule: &TitleRule,
    output: &Path,
) -> Result<(ArticleRecord, bool)> {
    let record = extract_article(source, url, rule).await;
    if record.is_empty() {
        warn!(%url, "No valid content found");
        return Ok((record, false));
    }
    text::write_record(&record, output).await?;
    Ok((record, true))
}

/// Strip screenshot credits from the claims of an existing dataset file.
#[instrument(level = "info")]
pub async fn clean_dataset(input: &Path, output: &Path) -> Result<usize> {
    let records = json::read_records(input).await?;
    let cleaned = clean_records(records);
    json::write_records(&cleaned, output).await?;
    Ok(cleaned.len())
}

/// Remove `(Screenshot from ...)` fragments from every claim.
pub fn clean_records(records: Vec<ArticleRecord>) -> Vec<ArticleRecord> {
    records
        .into_iter()
        .map(|record| ArticleRecord {
            claims: record
                .claims
                .iter()
                .map(|claim| strip_screenshot_credits(claim))
                .collect(),
            ..record
        })
        .collect()
}
