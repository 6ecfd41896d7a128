//! JSON dataset output.
//!
//! The whole run is written as a single JSON array, pretty-printed with a
//! four-space indent. Non-ASCII text (curly quotes, accented names) is kept
//! literally rather than escaped.
//!
//! ```text
//! [
//!     {
//!         "url": "https://www.politifact.com/factchecks/...",
//!         "title": "Quoted statement",
//!         "summary": "Page heading",
//!         "claims": [
//!             "Paragraph one"
//!         ]
//!     }
//! ]
//! ```

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

use crate::error::Result;
use crate::models::ArticleRecord;

const INDENT: &[u8] = b"    ";

/// Render records as the dataset document.
pub fn to_pretty_json(records: &[ArticleRecord]) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    records.serialize(&mut ser)?;
    // serde_json only ever emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write records to `path`, replacing any existing file.
#[instrument(level = "info", skip_all, fields(path = %path.display(), count = records.len()))]
pub async fn write_records(records: &[ArticleRecord], path: &Path) -> Result<()> {
    let json = to_pretty_json(records)?;
    fs::write(path, json).await?;
    info!("Wrote JSON dataset");
    Ok(())
}

/// Read a dataset previously written by [`write_records`].
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn read_records(path: &Path) -> Result<Vec<ArticleRecord>> {
    let raw = fs::read_to_string(path).await?;
    let records: Vec<ArticleRecord> = serde_json::from_str(&raw)?;
    info!(count = records.len(), "Read JSON dataset");
    Ok(records)
}
