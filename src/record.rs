//! The record type shared by the import and export stages.

use std::collections::BTreeMap;

/// One row of tabular data: field name to raw string value.
///
/// Two shapes flow through the pipeline: raw records keyed by CSV header
/// names, and projected records keyed by output column names. Both use the
/// same map type; ordered keys keep iteration and diagnostics deterministic.
pub type Record = BTreeMap<String, String>;

/// Truncate a record slice for diagnostics dumps.
pub fn head(records: &[Record], n: usize) -> &[Record] {
    &records[..records.len().min(n)]
}
