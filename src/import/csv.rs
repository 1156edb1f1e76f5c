//! CSV import functionality
//!
//! Reads a header-labeled CSV file fully into memory. The first row names
//! the fields; every following row is zipped positionally against those
//! names. Values stay raw strings; no type coercion happens at this stage.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::info;

use super::ImportError;
use crate::record::Record;

/// CSV importer - loads header-labeled rows as records.
#[derive(Debug, Default)]
pub struct CsvImporter;

impl CsvImporter {
    /// Load every data row of the file at `path` into memory.
    ///
    /// The reader tolerates ragged rows: a data row shorter than the header
    /// yields a record with the trailing fields entirely absent, and cells
    /// beyond the header width are dropped. A file containing only a header
    /// yields an empty vector, not an error. The file handle is released
    /// before this returns.
    ///
    /// Fails with [`ImportError::Unavailable`] when the file cannot be
    /// opened, and [`ImportError::Malformed`] when the CSV structure is
    /// invalid (e.g. inconsistent quoting).
    pub fn load(&self, path: &Path) -> Result<Vec<Record>, ImportError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .map_err(|e| ImportError::Unavailable(path.to_path_buf(), e.to_string()))?;

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| ImportError::Malformed(e.to_string()))?
            .iter()
            .map(|field| field.to_string())
            .collect();

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row.map_err(|e| ImportError::Malformed(e.to_string()))?;
            let record: Record = headers
                .iter()
                .zip(row.iter())
                .map(|(header, cell)| (header.clone(), cell.to_string()))
                .collect();
            records.push(record);
        }

        info!("loaded {} records from {}", records.len(), path.display());
        Ok(records)
    }
}
