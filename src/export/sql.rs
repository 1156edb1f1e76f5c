//! SQL UPDATE statement generation.
//!
//! One statement per projected record. The assignment order is fixed from
//! the first record's keys, sorted lexicographically, so a given input
//! always renders the same text.

use std::fmt;

use tracing::debug;

use super::ExportError;
use crate::record::Record;

/// Classification of a raw field value into a SQL literal.
///
/// The rules form an ordered chain and earlier rules shadow later ones:
/// the empty string, then the `now()` escape hatch, then base-10 integers,
/// then quoted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    /// Empty input value, rendered as `NULL`.
    Null,
    /// SQL expression emitted verbatim, unquoted and unescaped.
    Raw(String),
    /// Base-10 integer literal.
    Integer(i64),
    /// Single-quoted string literal with embedded quotes doubled.
    Text(String),
}

impl SqlValue {
    /// Apply the classification chain to a raw field value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use csv2sql::export::sql::SqlValue;
    ///
    /// assert_eq!(SqlValue::classify(""), SqlValue::Null);
    /// assert_eq!(SqlValue::classify("42"), SqlValue::Integer(42));
    /// assert_eq!(SqlValue::classify("now()").to_string(), "now()");
    /// assert_eq!(SqlValue::classify("O'Brien").to_string(), "'O''Brien'");
    /// ```
    pub fn classify(raw: &str) -> Self {
        if raw.is_empty() {
            return SqlValue::Null;
        }
        if raw == "now()" {
            return SqlValue::Raw(raw.to_string());
        }
        match raw.parse::<i64>() {
            Ok(n) => SqlValue::Integer(n),
            Err(_) => SqlValue::Text(raw.to_string()),
        }
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Null => write!(f, "NULL"),
            SqlValue::Raw(expr) => write!(f, "{}", expr),
            SqlValue::Integer(n) => write!(f, "{}", n),
            SqlValue::Text(text) => write!(f, "'{}'", text.replace('\'', "''")),
        }
    }
}

/// Exporter for single-row UPDATE statements.
pub struct UpdateExporter {
    /// Target table name.
    pub table: String,
    /// Output column holding the primary key; anchors the WHERE clause.
    pub primary_key: String,
}

impl UpdateExporter {
    /// Create an exporter for the given table and primary-key column.
    pub fn new(table: impl Into<String>, primary_key: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            primary_key: primary_key.into(),
        }
    }

    /// Render one `UPDATE <table> SET ... WHERE <pk> = <value>` statement
    /// per record.
    ///
    /// The column set is derived from the first record and applied to every
    /// record; a record missing one of those columns simply contributes no
    /// assignment for it. Fails with [`ExportError::EmptyInput`] when there
    /// are no records, since an empty batch has no well-defined column set.
    pub fn export(&self, records: &[Record]) -> Result<Vec<String>, ExportError> {
        let first = records.first().ok_or(ExportError::EmptyInput)?;
        // BTreeMap keys iterate in lexicographic order already.
        let columns: Vec<&str> = first.keys().map(String::as_str).collect();
        debug!("assignment order: {:?}", columns);

        records
            .iter()
            .map(|record| self.render(record, &columns))
            .collect()
    }

    fn render(&self, record: &Record, columns: &[&str]) -> Result<String, ExportError> {
        let mut assignments = Vec::new();
        let mut predicate = None;
        for &column in columns {
            if let Some(raw) = record.get(column) {
                let value = SqlValue::classify(raw);
                if column == self.primary_key {
                    predicate = Some(value);
                } else {
                    assignments.push(format!("{} = {}", column, value));
                }
            }
        }

        let predicate = predicate.ok_or_else(|| {
            ExportError::Render(format!(
                "record has no value for primary key column {:?}",
                self.primary_key
            ))
        })?;

        Ok(format!(
            "UPDATE {} SET {} WHERE {} = {}",
            self.table,
            assignments.join(", "),
            self.primary_key,
            predicate
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[(&str, &str)]) -> Record {
        fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_classify_empty_string_is_null() {
        assert_eq!(SqlValue::classify(""), SqlValue::Null);
    }

    #[test]
    fn test_classify_now_is_raw_expression() {
        assert_eq!(
            SqlValue::classify("now()"),
            SqlValue::Raw("now()".to_string())
        );
    }

    #[test]
    fn test_classify_integers() {
        assert_eq!(SqlValue::classify("42"), SqlValue::Integer(42));
        assert_eq!(SqlValue::classify("-7"), SqlValue::Integer(-7));
        // Leading zeros normalize to the parsed value.
        assert_eq!(SqlValue::classify("007").to_string(), "7");
    }

    #[test]
    fn test_classify_text_fallback() {
        assert_eq!(
            SqlValue::classify("Alice"),
            SqlValue::Text("Alice".to_string())
        );
        assert_eq!(SqlValue::classify("3.14").to_string(), "'3.14'");
    }

    #[test]
    fn test_display_escapes_embedded_quotes() {
        assert_eq!(SqlValue::classify("O'Brien").to_string(), "'O''Brien'");
    }

    #[test]
    fn test_export_empty_input_fails() {
        let exporter = UpdateExporter::new("users", "id");
        assert_eq!(exporter.export(&[]), Err(ExportError::EmptyInput));
    }

    #[test]
    fn test_export_excludes_primary_key_from_assignments() {
        let exporter = UpdateExporter::new("users", "id");
        let statements = exporter
            .export(&[record(&[("id", "1"), ("name", "Alice")])])
            .unwrap();
        assert_eq!(
            statements,
            vec!["UPDATE users SET name = 'Alice' WHERE id = 1"]
        );
    }

    #[test]
    fn test_export_orders_assignments_lexicographically() {
        let exporter = UpdateExporter::new("users", "id");
        let statements = exporter
            .export(&[record(&[("zip", "90210"), ("city", "LA"), ("id", "1")])])
            .unwrap();
        assert_eq!(
            statements,
            vec!["UPDATE users SET city = 'LA', zip = 90210 WHERE id = 1"]
        );
    }

    #[test]
    fn test_export_record_missing_a_column_skips_the_assignment() {
        let exporter = UpdateExporter::new("users", "id");
        let statements = exporter
            .export(&[
                record(&[("id", "1"), ("name", "Alice"), ("state", "new")]),
                record(&[("id", "2"), ("name", "Bob")]),
            ])
            .unwrap();
        assert_eq!(statements[1], "UPDATE users SET name = 'Bob' WHERE id = 2");
    }

    #[test]
    fn test_export_applies_value_rules_to_predicate() {
        let exporter = UpdateExporter::new("users", "id");
        let statements = exporter
            .export(&[record(&[("id", "abc"), ("name", "Alice")])])
            .unwrap();
        assert_eq!(
            statements,
            vec!["UPDATE users SET name = 'Alice' WHERE id = 'abc'"]
        );
    }

    #[test]
    fn test_export_record_without_primary_key_fails() {
        let exporter = UpdateExporter::new("users", "id");
        let result = exporter.export(&[record(&[("name", "Alice")])]);
        assert!(matches!(result, Err(ExportError::Render(_))));
    }
}
