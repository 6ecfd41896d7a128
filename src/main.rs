//! # Factcheck Scrape
//!
//! Builds a claim/explanation dataset from a fact-check website by walking its
//! paginated listing, extracting each linked article, and writing the results
//! as one JSON array.
//!
//! ## Usage
//!
//! ```sh
//! factcheck_scrape crawl --pages 2 --output results.json
//! ```
//!
//! ## Architecture
//!
//! The crawl is a sequential pipeline:
//! 1. **Indexing**: discover article URLs from `?page=1..=N` of the listing
//! 2. **Extraction**: fetch each article and pull out title, summary, and claims
//! 3. **Cleanup**: optionally strip screenshot credits from claims
//! 4. **Output**: write every record, failed ones included, to a JSON file

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod error;
mod models;
mod outputs;
mod pipeline;
mod scrapers;
mod utils;

use cli::{Cli, Command};
use config::ScrapeConfig;
use scrapers::HttpSource;
use scrapers::article::TitleRule;
use utils::ensure_writable_parent;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    match args.command {
        Command::Crawl(crawl_args) => {
            let config = ScrapeConfig::resolve(crawl_args.config.as_deref(), crawl_args.overrides())?;
            info!(
                listing = %config.listing_base_url,
                pages = config.page_count,
                output = %config.output_path.display(),
                "Starting crawl"
            );

            // Fail before the crawl rather than after it
            if let Err(e) = ensure_writable_parent(&config.output_path).await {
                error!(
                    path = %config.output_path.display(),
                    error = %e,
                    "Output location is not writable"
                );
                return Err(e.into());
            }

            let source = HttpSource::new(&config)?;
            let summary = pipeline::crawl(&source, &config).await?;
            if summary.written {
                println!(
                    "\n🎉 Data extraction completed and saved as {}",
                    config.output_path.display()
                );
            } else {
                println!("❌ No valid content found");
            }
        }
        Command::Article(article_args) => {
            let config = ScrapeConfig {
                request_timeout_seconds: article_args.timeout,
                user_agent: article_args.user_agent.clone(),
                output_path: article_args.output.clone(),
                ..Default::default()
            };
            config.validate()?;
            ensure_writable_parent(&config.output_path).await?;

            let rule = match article_args.require_title {
                Some(needle) => TitleRule::Containing(needle),
                None => TitleRule::FirstNonEmpty,
            };
            let source = HttpSource::new(&config)?;
            let (_, written) =
                pipeline::scrape_single(&source, &article_args.url, &rule, &config.output_path)
                    .await?;
            if written {
                println!("Data extraction succeeded: {}", config.output_path.display());
            } else {
                println!("No valid content found");
            }
        }
        Command::Clean(clean_args) => {
            ensure_writable_parent(&clean_args.output).await?;
            let count = pipeline::clean_dataset(&clean_args.input, &clean_args.output).await?;
            println!(
                "✅ Cleaned {} records; saved to {}",
                count,
                clean_args.output.display()
            );
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );
    Ok(())
}
