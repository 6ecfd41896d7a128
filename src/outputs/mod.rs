//! Output generation for scraped records.
//!
//! # Submodules
//!
//! - [`json`]: writes the whole run as one JSON array (and reads it back for cleanup)
//! - [`text`]: writes a single record as a labeled plain-text file

pub mod json;
pub mod text;
