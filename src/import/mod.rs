//! Import functionality
//!
//! Reads header-labeled tabular files fully into memory as [`Record`]s:
//!
//! - CSV (row 1 = field names, rows 2..n = data)
//!
//! [`Record`]: crate::record::Record

pub mod csv;

use std::path::PathBuf;

use thiserror::Error;

/// Error during import
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("cannot read {}: {}", .0.display(), .1)]
    Unavailable(PathBuf, String),
    #[error("malformed input: {0}")]
    Malformed(String),
}

// Re-export for convenience
pub use self::csv::CsvImporter;
