//! Record projection: select, rename, and substitute.

use std::collections::HashMap;

use crate::mapping::{Column, ValueSubstitution};
use crate::record::Record;

/// Derive the projected shape of every record.
///
/// Each input field whose name matches a column's `source` is copied into
/// the output record under the column's `target` name, after value
/// substitutions are applied. Fields with no matching column are dropped,
/// and a column matching no field contributes nothing for that record.
///
/// Column sources are looked up through a map rather than a pairwise scan;
/// when two columns share a source the first one wins, and when two
/// substitutions share a source value the first one wins.
///
/// Pure and infallible: mapping errors are resolved before this stage runs.
pub fn project(
    records: &[Record],
    columns: &[Column],
    substitutions: &[ValueSubstitution],
) -> Vec<Record> {
    let mut by_source: HashMap<&str, &Column> = HashMap::new();
    for column in columns {
        by_source.entry(column.source.as_str()).or_insert(column);
    }

    records
        .iter()
        .map(|record| {
            record
                .iter()
                .filter_map(|(field, value)| {
                    let column = by_source.get(field.as_str())?;
                    let value = substitutions
                        .iter()
                        .find(|sub| sub.source == *value)
                        .map(|sub| sub.target.clone())
                        .unwrap_or_else(|| value.clone());
                    Some((column.target.clone(), value))
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::Mapping;

    fn record(fields: &[(&str, &str)]) -> Record {
        fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn mappings(specs: &[&str]) -> Vec<Mapping> {
        specs.iter().map(|s| Mapping::parse(s).unwrap()).collect()
    }

    #[test]
    fn test_project_renames_mapped_fields() {
        let records = vec![record(&[("status", "active"), ("id", "1")])];
        let projected = project(&records, &mappings(&["status->state", "id"]), &[]);
        assert_eq!(projected[0]["state"], "active");
        assert_eq!(projected[0]["id"], "1");
        assert!(!projected[0].contains_key("status"));
    }

    #[test]
    fn test_project_drops_unmapped_fields() {
        let records = vec![record(&[("id", "1"), ("internal", "x")])];
        let projected = project(&records, &mappings(&["id"]), &[]);
        assert_eq!(projected[0].len(), 1);
        assert!(!projected[0].contains_key("internal"));
    }

    #[test]
    fn test_project_column_without_matching_field_contributes_nothing() {
        let records = vec![record(&[("id", "1")])];
        let projected = project(&records, &mappings(&["id", "missing->gone"]), &[]);
        assert_eq!(projected[0].len(), 1);
        assert!(!projected[0].contains_key("gone"));
    }

    #[test]
    fn test_project_applies_substitutions_in_every_column() {
        let records = vec![record(&[("a", "pending"), ("b", "pending"), ("id", "1")])];
        let projected = project(
            &records,
            &mappings(&["a", "b", "id"]),
            &mappings(&["pending->1"]),
        );
        assert_eq!(projected[0]["a"], "1");
        assert_eq!(projected[0]["b"], "1");
        assert_eq!(projected[0]["id"], "1");
    }

    #[test]
    fn test_project_first_matching_substitution_wins() {
        let records = vec![record(&[("status", "x")])];
        let projected = project(
            &records,
            &mappings(&["status"]),
            &mappings(&["x->1", "x->2"]),
        );
        assert_eq!(projected[0]["status"], "1");
    }

    #[test]
    fn test_project_first_column_wins_for_duplicate_sources() {
        let records = vec![record(&[("status", "active")])];
        let projected = project(&records, &mappings(&["status->state", "status->other"]), &[]);
        assert_eq!(projected[0]["state"], "active");
        assert!(!projected[0].contains_key("other"));
    }

    #[test]
    fn test_project_is_deterministic() {
        let records = vec![
            record(&[("id", "1"), ("name", "Alice")]),
            record(&[("id", "2"), ("name", "Bob")]),
        ];
        let columns = mappings(&["id", "name"]);
        let substitutions = mappings(&["Bob->Robert"]);
        let first = project(&records, &columns, &substitutions);
        let second = project(&records, &columns, &substitutions);
        assert_eq!(first, second);
    }
}
