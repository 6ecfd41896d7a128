//! Article extraction.
//!
//! Turns one fact-check article page into an [`ArticleRecord`]:
//!
//! - **title**: the first quote block whose cleaned text satisfies a [`TitleRule`]
//! - **summary**: the cleaned text of the first-level page heading
//! - **claims**: cleaned body paragraphs, minus quote blocks and minus the title
//!
//! Every lookup step yields an `Option`; a missing element is an absent field.
//! Fetch and parse failures are caught once per article and replaced by an
//! empty record carrying the URL.

use futures::stream::{self, StreamExt};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, error, info, instrument};

use super::{ARTICLE_BODY, BODY_PARAGRAPH, PAGE_HEADING, PageSource, QUOTE_BLOCK, selector};
use crate::error::Result;
use crate::models::ArticleRecord;
use crate::utils::{clean_text, truncate_for_log};

/// Which quote block counts as the article title.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TitleRule {
    /// The first quote block with non-empty text.
    #[default]
    FirstNonEmpty,
    /// The first quote block whose text contains the given substring.
    Containing(String),
}

impl TitleRule {
    fn accepts(&self, text: &str) -> bool {
        match self {
            TitleRule::FirstNonEmpty => !text.is_empty(),
            TitleRule::Containing(needle) => !text.is_empty() && text.contains(needle.as_str()),
        }
    }
}

struct ArticleSelectors {
    quote: Selector,
    heading: Selector,
    body: Selector,
    paragraph: Selector,
}

impl ArticleSelectors {
    fn new() -> Result<Self> {
        Ok(Self {
            quote: selector(QUOTE_BLOCK)?,
            heading: selector(PAGE_HEADING)?,
            body: selector(ARTICLE_BODY)?,
            paragraph: selector(BODY_PARAGRAPH)?,
        })
    }
}

/// Extract every article in order, one at a time.
///
/// The output has exactly one record per input URL, in input order.
#[instrument(level = "info", skip_all, fields(count = urls.len()))]
pub async fn fetch_articles<S: PageSource>(
    source: &S,
    urls: &[String],
    rule: &TitleRule,
) -> Vec<ArticleRecord> {
    let records: Vec<ArticleRecord> = stream::iter(urls)
        .then(|url| extract_article(source, url, rule))
        .collect()
        .await;

    let with_title = records.iter().filter(|r| r.title.is_some()).count();
    info!(count = records.len(), with_title, "Extracted article contents");
    records
}

/// Extract one article. Never fails: errors degrade to [`ArticleRecord::empty`].
///
/// Prints a `✅`/`❌` report line for the article.
#[instrument(level = "info", skip(source, rule))]
pub async fn extract_article<S: PageSource>(
    source: &S,
    url: &str,
    rule: &TitleRule,
) -> ArticleRecord {
    match fetch_article(source, url, rule).await {
        Ok(record) => {
            println!(
                "✅ {} - {}",
                url,
                record.title.as_deref().unwrap_or("No Title")
            );
            record
        }
        Err(e) => {
            error!(error = %e, %url, "Article extraction failed");
            println!("❌ Error extracting content from {url}: {e}");
            ArticleRecord::empty(url)
        }
    }
}

async fn fetch_article<S: PageSource>(
    source: &S,
    url: &str,
    rule: &TitleRule,
) -> Result<ArticleRecord> {
    let html = source.get_html(url).await?;
    parse_article(url, &html, rule)
}

/// Build a record from already-fetched markup.
pub fn parse_article(url: &str, html: &str, rule: &TitleRule) -> Result<ArticleRecord> {
    let selectors = ArticleSelectors::new()?;
    let document = Html::parse_document(html);

    let title = find_title(&document, &selectors.quote, rule);
    let summary = find_summary(&document, &selectors.heading);
    let claims = match find_body(&document, &selectors.body) {
        Some(body) => collect_claims(body, &selectors.paragraph, title.as_deref()),
        None => {
            debug!(%url, "No article body found");
            Vec::new()
        }
    };

    debug!(
        %url,
        title = %truncate_for_log(title.as_deref().unwrap_or(""), 80),
        claims = claims.len(),
        "Parsed article"
    );
    Ok(ArticleRecord {
        url: url.to_string(),
        title,
        summary,
        claims,
    })
}

fn element_text(element: ElementRef<'_>) -> String {
    clean_text(&element.text().collect::<String>())
}

fn find_title(document: &Html, quote: &Selector, rule: &TitleRule) -> Option<String> {
    document
        .select(quote)
        .map(element_text)
        .find(|text| rule.accepts(text))
}

fn find_summary(document: &Html, heading: &Selector) -> Option<String> {
    document.select(heading).next().map(element_text)
}

fn find_body<'a>(document: &'a Html, body: &Selector) -> Option<ElementRef<'a>> {
    document.select(body).next()
}

fn collect_claims(body: ElementRef<'_>, paragraph: &Selector, title: Option<&str>) -> Vec<String> {
    body.select(paragraph)
        .map(element_text)
        .filter(|text| !text.is_empty() && Some(text.as_str()) != title)
        .collect()
}
