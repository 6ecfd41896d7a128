//! Utility functions for text normalization, claim cleanup, and file system checks.
//!
//! This module provides helpers used throughout the pipeline:
//! - [`clean_text`], applied to every extracted text fragment
//! - Screenshot-credit stripping and order-preserving deduplication of claims
//! - String truncation for logging
//! - Output path validation before a long crawl starts

use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs as stdfs;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

use crate::error::Result;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static SCREENSHOT_CREDIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(Screenshot from .*?\)").unwrap());

/// Normalize a fragment of extracted page text.
///
/// Non-breaking spaces (U+00A0) and zero-width spaces (U+200B) are removed
/// outright, every remaining whitespace run collapses to a single space, and
/// the result is trimmed.
///
/// The transformation is pure and idempotent: `clean_text(&clean_text(s)) == clean_text(s)`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(clean_text("  Says\n\tthe  pilot "), "Says the pilot");
/// assert_eq!(clean_text("no\u{a0}break"), "nobreak");
/// ```
pub fn clean_text(text: &str) -> String {
    let stripped: String = text
        .chars()
        .filter(|c| !matches!(c, '\u{a0}' | '\u{200b}'))
        .collect();
    WHITESPACE_RUN
        .replace_all(&stripped, " ")
        .trim()
        .to_string()
}

/// Remove every `(Screenshot from ...)` credit from a claim and trim the rest.
pub fn strip_screenshot_credits(claim: &str) -> String {
    SCREENSHOT_CREDIT.replace_all(claim, "").trim().to_string()
}

/// Deduplicate claims, keeping the first occurrence of each in its original position.
pub fn dedupe_claims(claims: &[String]) -> Vec<String> {
    claims.iter().unique().cloned().collect()
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to at most `max` bytes (backing off to the nearest
/// char boundary) with an ellipsis and byte count indicator appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

/// Ensure the directory that will hold `path` exists and is writable.
///
/// Creates the parent directory if needed, then performs a write test by
/// creating and immediately deleting a probe file next to the target.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or is not writable.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn ensure_writable_parent(path: &Path) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => Path::new(".").to_path_buf(),
    };
    fs::create_dir_all(&dir).await?;

    let probe_path = dir.join("..__probe_write__");
    stdfs::File::create(&probe_path)?;
    let _ = stdfs::remove_file(&probe_path);
    info!(dir = %dir.display(), "Output directory is writable");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "",
        "   ",
        "plain",
        "  Says\n\tthe  pilot  ",
        "no\u{a0}break",
        "a \u{200b} b",
        "\u{200b}\u{a0} \u{a0}\u{200b}",
        "line one\r\n\r\nline two",
        "wide\u{2003}\u{2003}space",
        "“Quoted” statement\u{a0}\u{a0} with   gaps",
    ];

    #[test]
    fn test_clean_text_collapses_and_trims() {
        assert_eq!(clean_text("  Says\n\tthe  pilot  "), "Says the pilot");
        assert_eq!(clean_text("line one\r\n\r\nline two"), "line one line two");
        assert_eq!(clean_text("   "), "");
    }

    #[test]
    fn test_clean_text_removes_special_spaces_outright() {
        assert_eq!(clean_text("no\u{a0}break"), "nobreak");
        assert_eq!(clean_text("zero\u{200b}width"), "zerowidth");
        assert_eq!(clean_text("a \u{200b} b"), "a b");
    }

    #[test]
    fn test_clean_text_is_idempotent() {
        for s in SAMPLES {
            let once = clean_text(s);
            assert_eq!(clean_text(&once), once, "input: {s:?}");
        }
    }

    #[test]
    fn test_clean_text_output_invariants() {
        for s in SAMPLES {
            let out = clean_text(s);
            assert!(!out.contains('\u{a0}'), "input: {s:?}");
            assert!(!out.contains('\u{200b}'), "input: {s:?}");
            assert!(!out.contains("  "), "input: {s:?}");
            assert_eq!(out.trim(), out);
        }
    }

    #[test]
    fn test_strip_screenshot_credits() {
        assert_eq!(
            strip_screenshot_credits("A viral post (Screenshot from Facebook) claims this."),
            "A viral post  claims this."
        );
        assert_eq!(
            strip_screenshot_credits("(Screenshot from X) one (Screenshot from Threads)"),
            "one"
        );
        assert_eq!(strip_screenshot_credits("No credits here"), "No credits here");
    }

    #[test]
    fn test_dedupe_claims_preserves_first_seen_order() {
        let claims = vec![
            "b".to_string(),
            "a".to_string(),
            "b".to_string(),
            "c".to_string(),
            "a".to_string(),
        ];
        assert_eq!(dedupe_claims(&claims), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_truncate_for_log() {
        assert_eq!(truncate_for_log("Hello, world!", 100), "Hello, world!");
        let long = "a".repeat(500);
        let result = truncate_for_log(&long, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_respects_char_boundaries() {
        let s = "ééééé";
        let result = truncate_for_log(s, 3);
        assert!(result.starts_with("é…"));
    }

    #[tokio::test]
    async fn test_ensure_writable_parent_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("nested/out/results.json");
        ensure_writable_parent(&target).await.unwrap();
        assert!(tmp.path().join("nested/out").is_dir());
        assert!(!tmp.path().join("nested/out/..__probe_write__").exists());
    }
}
