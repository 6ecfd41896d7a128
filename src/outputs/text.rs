//! Labeled plain-text output for a single record.
//!
//! ```text
//! Title:
//! Says the pilot of the Delta flight ...
//!
//! Summary:
//! No, this is not the pilot
//!
//! Claims:
//! First paragraph
//! Second paragraph
//! ```
//!
//! Absent sections are left out. Claims are deduplicated in first-seen order.

use std::fmt::Write;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

use crate::error::Result;
use crate::models::ArticleRecord;
use crate::utils::dedupe_claims;

pub fn render_record(record: &ArticleRecord) -> String {
    let mut out = String::new();

    if let Some(title) = record.title.as_deref().filter(|t| !t.is_empty()) {
        writeln!(out, "Title:\n{title}\n").unwrap();
    }
    if let Some(summary) = record.summary.as_deref().filter(|s| !s.is_empty()) {
        writeln!(out, "Summary:\n{summary}\n").unwrap();
    }
    if !record.claims.is_empty() {
        out.push_str("Claims:\n");
        for claim in dedupe_claims(&record.claims) {
            writeln!(out, "{claim}").unwrap();
        }
    }
    out
}

#[instrument(level = "info", skip_all, fields(path = %path.display(), url = %record.url))]
pub async fn write_record(record: &ArticleRecord, path: &Path) -> Result<()> {
    fs::write(path, render_record(record)).await?;
    info!("Wrote text record");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_full_record() {
        let record = ArticleRecord {
            url: "https://example.com".to_string(),
            title: Some("The quote".to_string()),
            summary: Some("The heading".to_string()),
            claims: vec![
                "one".to_string(),
                "two".to_string(),
                "one".to_string(),
            ],
        };
        assert_eq!(
            render_record(&record),
            "Title:\nThe quote\n\nSummary:\nThe heading\n\nClaims:\none\ntwo\n"
        );
    }

    #[test]
    fn test_render_omits_absent_sections() {
        let record = ArticleRecord {
            url: "https://example.com".to_string(),
            title: None,
            summary: Some("Only heading".to_string()),
            claims: vec![],
        };
        assert_eq!(render_record(&record), "Summary:\nOnly heading\n\n");
        assert_eq!(render_record(&ArticleRecord::empty("https://example.com")), "");
    }

    #[tokio::test]
    async fn test_write_record_to_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("results.txt");
        let record = ArticleRecord {
            url: "https://example.com".to_string(),
            title: Some("Título".to_string()),
            summary: None,
            claims: vec!["c".to_string()],
        };

        write_record(&record, &path).await.unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "Title:\nTítulo\n\nClaims:\nc\n");
    }
}
