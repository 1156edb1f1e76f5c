//! Export functionality
//!
//! Renders projected records as SQL UPDATE statements.

pub mod sql;

use thiserror::Error;

/// Error during export
#[derive(Debug, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("no records to generate statements from")]
    EmptyInput,
    #[error("render error: {0}")]
    Render(String),
}

// Re-export for convenience
pub use sql::{SqlValue, UpdateExporter};
