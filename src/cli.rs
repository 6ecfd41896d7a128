//! Command-line interface definitions for the fact-check scraper.
//!
//! Three subcommands map onto the pipeline entry points:
//!
//! - `crawl`: index the listing pages, extract every article, write a JSON dataset
//! - `article`: extract a single article into a labeled text file
//! - `clean`: strip screenshot credits from the claims of an existing dataset

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{ConfigOverrides, DEFAULT_USER_AGENT};

/// Command-line arguments.
///
/// # Examples
///
/// ```sh
/// # Two listing pages into results.json
/// factcheck_scrape crawl --pages 2 --output results.json
///
/// # Settings from a YAML file, with screenshot credits removed
/// factcheck_scrape crawl --config scrape.yaml --strip-screenshot-credits
///
/// # One article, title must mention the pilot
/// factcheck_scrape article https://www.politifact.com/factchecks/... --require-title "the pilot of"
///
/// # Post-process an existing dataset
/// factcheck_scrape clean results.json new_result.json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Index listing pages and extract every linked article into a JSON array
    Crawl(CrawlArgs),
    /// Extract one article into a labeled text file
    Article(ArticleArgs),
    /// Remove "(Screenshot from ...)" credits from the claims of a dataset
    Clean(CleanArgs),
}

#[derive(Args, Debug)]
pub struct CrawlArgs {
    /// Optional path to a YAML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Listing page URL (page=<n> is appended)
    #[arg(long, env = "FACTCHECK_LISTING_URL")]
    pub listing_url: Option<String>,

    /// Number of listing pages to walk
    #[arg(short, long)]
    pub pages: Option<u32>,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// User-Agent header for every request
    #[arg(long, env = "FACTCHECK_USER_AGENT")]
    pub user_agent: Option<String>,

    /// Output path for the JSON dataset
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Remove "(Screenshot from ...)" credits from claims before writing
    #[arg(long)]
    pub strip_screenshot_credits: bool,
}

impl CrawlArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            listing_base_url: self.listing_url.clone(),
            page_count: self.pages,
            request_timeout_seconds: self.timeout,
            user_agent: self.user_agent.clone(),
            output_path: self.output.clone(),
            strip_screenshot_credits: self.strip_screenshot_credits,
        }
    }
}

#[derive(Args, Debug)]
pub struct ArticleArgs {
    /// Article URL
    pub url: String,

    /// Only accept a quote block containing this text as the title
    #[arg(long)]
    pub require_title: Option<String>,

    /// Output path for the text record
    #[arg(short, long, default_value = "results.txt")]
    pub output: PathBuf,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// User-Agent header for the request
    #[arg(long, env = "FACTCHECK_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Dataset to read
    pub input: PathBuf,

    /// Where to write the cleaned dataset
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crawl_parsing() {
        let cli = Cli::parse_from([
            "factcheck_scrape",
            "crawl",
            "--pages",
            "2",
            "--output",
            "./data/results.json",
            "--strip-screenshot-credits",
        ]);

        let Command::Crawl(args) = cli.command else {
            panic!("expected crawl");
        };
        let overrides = args.overrides();
        assert_eq!(overrides.page_count, Some(2));
        assert_eq!(overrides.output_path, Some(PathBuf::from("./data/results.json")));
        assert!(overrides.strip_screenshot_credits);
        assert!(overrides.request_timeout_seconds.is_none());
    }

    #[test]
    fn test_env_fallbacks() {
        // Other tests never assert on these two variables.
        unsafe {
            std::env::set_var("FACTCHECK_LISTING_URL", "https://example.com/list/");
            std::env::set_var("FACTCHECK_USER_AGENT", "env-agent/1.0");
        }

        let crawl = Cli::parse_from(["factcheck_scrape", "crawl"]);
        let article = Cli::parse_from([
            "factcheck_scrape",
            "article",
            "https://www.politifact.com/factchecks/x/",
        ]);
        let explicit = Cli::parse_from([
            "factcheck_scrape",
            "crawl",
            "--listing-url",
            "https://example.org/other/",
        ]);

        unsafe {
            std::env::remove_var("FACTCHECK_LISTING_URL");
            std::env::remove_var("FACTCHECK_USER_AGENT");
        }

        let Command::Crawl(args) = crawl.command else {
            panic!("expected crawl");
        };
        let overrides = args.overrides();
        assert_eq!(overrides.listing_base_url.as_deref(), Some("https://example.com/list/"));
        assert_eq!(overrides.user_agent.as_deref(), Some("env-agent/1.0"));

        let Command::Article(args) = article.command else {
            panic!("expected article");
        };
        assert_eq!(args.user_agent, "env-agent/1.0");

        let Command::Crawl(args) = explicit.command else {
            panic!("expected crawl");
        };
        assert_eq!(args.listing_url.as_deref(), Some("https://example.org/other/"));
    }

    #[test]
    fn test_crawl_short_flags() {
        let cli = Cli::parse_from(["factcheck_scrape", "crawl", "-p", "3", "-c", "scrape.yaml"]);
        let Command::Crawl(args) = cli.command else {
            panic!("expected crawl");
        };
        assert_eq!(args.pages, Some(3));
        assert_eq!(args.config, Some(PathBuf::from("scrape.yaml")));
    }

    #[test]
    fn test_article_defaults() {
        let cli = Cli::parse_from([
            "factcheck_scrape",
            "article",
            "https://www.politifact.com/factchecks/x/",
            "--require-title",
            "the pilot of",
        ]);
        let Command::Article(args) = cli.command else {
            panic!("expected article");
        };
        assert_eq!(args.require_title.as_deref(), Some("the pilot of"));
        assert_eq!(args.output, PathBuf::from("results.txt"));
        assert_eq!(args.timeout, 10);
    }

    #[test]
    fn test_clean_positional() {
        let cli = Cli::parse_from(["factcheck_scrape", "clean", "results.json", "new_result.json"]);
        let Command::Clean(args) = cli.command else {
            panic!("expected clean");
        };
        assert_eq!(args.input, PathBuf::from("results.json"));
        assert_eq!(args.output, PathBuf::from("new_result.json"));
    }
}
