//! Listing-page indexing.
//!
//! Walks `?page=1..=N` of the configured listing URL and collects the article
//! links found inside quote blocks, in page order and then document order.
//!
//! # URL Pattern
//!
//! Listing anchors are site-relative (`/factchecks/2025/feb/20/...`) and are
//! resolved against the listing URL, giving
//! `https://www.politifact.com/factchecks/2025/feb/20/...`.

use scraper::{Html, Selector};
use tracing::{debug, error, info, instrument};
use url::Url;

use super::{PageSource, QUOTE_BLOCK, selector};
use crate::config::ScrapeConfig;
use crate::error::Result;

/// Index the listing pages and return every matching article URL.
///
/// Duplicates are kept. A failure on any page stops indexing; the failure is
/// logged and the links gathered from earlier pages are returned. This
/// function never fails outright: a total failure yields an empty vector.
#[instrument(level = "info", skip_all, fields(listing = %config.listing_base_url, pages = config.page_count))]
pub async fn index_articles<S: PageSource>(source: &S, config: &ScrapeConfig) -> Vec<String> {
    let mut article_urls = Vec::new();

    if let Err(e) = collect_links(source, config, &mut article_urls).await {
        error!(
            error = %e,
            collected = article_urls.len(),
            "Error fetching article links; keeping partial results"
        );
    }

    info!(count = article_urls.len(), "Indexed article URLs");
    debug!(urls = ?article_urls, "Article URLs");
    article_urls
}

async fn collect_links<S: PageSource>(
    source: &S,
    config: &ScrapeConfig,
    article_urls: &mut Vec<String>,
) -> Result<()> {
    let base = Url::parse(&config.listing_base_url)?;
    let quote_links = selector(&format!("{QUOTE_BLOCK} a"))?;

    for page in 1..=config.page_count {
        let url = page_url(&base, page);
        let html = source.get_html(url.as_str()).await?;
        let found = extract_links(&html, &base, &config.article_path_prefix, &quote_links);
        info!(page, count = found.len(), "Indexed listing page");
        article_urls.extend(found);
    }
    Ok(())
}

/// Append `page=<n>` to the listing URL's query.
pub fn page_url(base: &Url, page: u32) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut().append_pair("page", &page.to_string());
    url
}

fn extract_links(html: &str, base: &Url, prefix: &str, quote_links: &Selector) -> Vec<String> {
    let document = Html::parse_document(html);

    document
        .select(quote_links)
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter(|href| href.starts_with(prefix))
        .filter_map(|href| base.join(href).ok())
        // joining resolves dot-segments, so the prefix must hold afterwards too
        .filter(|resolved| resolved.path().starts_with(prefix))
        .map(|resolved| resolved.to_string())
        .collect()
}
