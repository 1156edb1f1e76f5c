//! CLI-specific error types

use thiserror::Error;

use crate::export::ExportError;
use crate::import::ImportError;
use crate::mapping::MappingError;

/// CLI-specific error type
///
/// The first failing pipeline stage converts into this and aborts the run;
/// there is no recovery or partial output.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("mapping error: {0}")]
    Mapping(#[from] MappingError),

    #[error("import error: {0}")]
    Import(#[from] ImportError),

    #[error("export error: {0}")]
    Export(#[from] ExportError),
}
