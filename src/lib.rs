//! csv2sql - converts CSV rows into single-row SQL UPDATE statements
//!
//! Provides a one-way batch pipeline:
//!
//! 1. Parse `source->target` mapping specs into columns and value
//!    substitutions ([`mapping`])
//! 2. Load a header-labeled CSV fully into memory ([`import`])
//! 3. Project each record down to the mapped, renamed fields with
//!    substitutions applied ([`project`])
//! 4. Sort by primary-key value and render one UPDATE statement per
//!    record ([`export`])
//!
//! The whole run is single-threaded and fail-fast: the first error at any
//! stage aborts the run with nothing written to the primary output.
//!
//! ## Example
//!
//! ```rust
//! use csv2sql::export::UpdateExporter;
//! use csv2sql::mapping::Mapping;
//! use csv2sql::project::project;
//! use csv2sql::record::Record;
//!
//! let records = vec![Record::from([
//!     ("id".to_string(), "1".to_string()),
//!     ("status".to_string(), "pending".to_string()),
//! ])];
//! let columns = Mapping::parse_all(&["id".to_string(), "status->state".to_string()]).unwrap();
//!
//! let projected = project(&records, &columns, &[]);
//! let exporter = UpdateExporter::new("users", "id");
//! let statements = exporter.export(&projected).unwrap();
//! assert_eq!(statements[0], "UPDATE users SET state = 'pending' WHERE id = 1");
//! ```

pub mod cli;
pub mod export;
pub mod import;
pub mod mapping;
pub mod project;
pub mod record;

// Re-export commonly used types
pub use export::{ExportError, SqlValue, UpdateExporter};
pub use import::{CsvImporter, ImportError};
pub use mapping::{Column, Mapping, MappingError, ValueSubstitution};
pub use record::Record;
