//! Update command handler: the end-to-end CSV to UPDATE-batch pipeline.
//!
//! Stages run strictly in sequence, single-threaded, with each stage's
//! output passed by value to the next: parse mappings, load records,
//! project, sort by primary-key value, render. The first failing stage
//! aborts the run and nothing is produced.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use crate::cli::error::CliError;
use crate::export::UpdateExporter;
use crate::import::CsvImporter;
use crate::mapping::Mapping;
use crate::project::project;
use crate::record::head;

/// Arguments for the update pipeline
#[derive(Debug, Clone, Serialize)]
pub struct UpdateArgs {
    /// Path to the input CSV file
    pub csv_path: PathBuf,
    /// Primary-key field spec (`field` or `field->column`)
    pub primary_key: String,
    /// Target table name
    pub table: String,
    /// Column specs (`field` or `field->column`)
    pub columns: Vec<String>,
    /// Value-transform specs (`value->replacement`)
    pub transforms: Vec<String>,
    /// Emit per-stage diagnostics (consumed by the binary's logging setup)
    pub verbose: bool,
}

/// Run the whole pipeline and return the rendered statement batch.
///
/// Statements are joined with `;\n` and the batch carries a trailing `;`.
/// Records are sorted ascending by the projected primary-key value as a
/// plain string comparison before rendering.
pub fn handle_update(args: &UpdateArgs) -> Result<String, CliError> {
    dump("args", args);

    let pk = Mapping::parse(&args.primary_key)?;
    dump("pk column", &pk);

    let mut columns = Mapping::parse_all(&args.columns)?;
    dump("columns", &columns);

    let transforms = Mapping::parse_all(&args.transforms)?;
    dump("value transforms", &transforms);

    let records = CsvImporter.load(&args.csv_path)?;
    dump("csv", head(&records, 5));
    debug!("({} records)", records.len());

    // The key column is projected and renamed like any other column.
    columns.push(pk.clone());
    let mut projected = project(&records, &columns, &transforms);
    projected.sort_by(|a, b| a.get(&pk.target).cmp(&b.get(&pk.target)));
    dump("updates", head(&projected, 5));
    debug!("({} records)", projected.len());

    let exporter = UpdateExporter::new(args.table.as_str(), pk.target.as_str());
    let statements = exporter.export(&projected)?;
    Ok(format!("{};", statements.join(";\n")))
}

/// Pretty-print an intermediate pipeline value at debug level.
fn dump<T>(label: &str, value: &T)
where
    T: ?Sized + Serialize + fmt::Debug,
{
    match serde_json::to_string_pretty(value) {
        Ok(json) => debug!("{}: {}", label, json),
        Err(_) => debug!("{}: {:?}", label, value),
    }
}
