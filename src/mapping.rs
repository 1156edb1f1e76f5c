//! `source->target` mapping specifications.
//!
//! Column selections and value substitutions share one parsed form: a
//! (source, target) name pair split on the literal `->` separator. A bare
//! name maps to itself.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Separator between the source and target halves of a mapping spec.
const SEPARATOR: &str = "->";

/// Error during mapping parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("at most one \"->\" allowed; got {0:?}")]
    Malformed(String),
}

/// A parsed (source, target) name pair.
///
/// Immutable once constructed; the pipeline only ever reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mapping {
    /// Input-side name (CSV field or raw value).
    pub source: String,
    /// Output-side name (SQL column or replacement value).
    pub target: String,
}

/// A [`Mapping`] that selects an input field and renames it to an output
/// column.
pub type Column = Mapping;

/// A [`Mapping`] applied to values rather than field names: any raw value
/// equal to `source` becomes `target`, in every column.
pub type ValueSubstitution = Mapping;

impl Mapping {
    /// Parse a `"source->target"` or bare `"name"` spec.
    ///
    /// # Example
    ///
    /// ```rust
    /// use csv2sql::mapping::Mapping;
    ///
    /// let mapping = Mapping::parse("status->state").unwrap();
    /// assert_eq!(mapping.source, "status");
    /// assert_eq!(mapping.target, "state");
    /// ```
    pub fn parse(spec: &str) -> Result<Self, MappingError> {
        let parts: Vec<&str> = spec.split(SEPARATOR).collect();
        match parts.as_slice() {
            [name] => Ok(Self {
                source: (*name).to_string(),
                target: (*name).to_string(),
            }),
            [source, target] => Ok(Self {
                source: (*source).to_string(),
                target: (*target).to_string(),
            }),
            _ => Err(MappingError::Malformed(spec.to_string())),
        }
    }

    /// Parse a batch of specs, stopping at the first malformed one.
    pub fn parse_all(specs: &[String]) -> Result<Vec<Self>, MappingError> {
        specs.iter().map(|spec| Self::parse(spec)).collect()
    }
}
