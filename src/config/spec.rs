//! Filter and column specifications.

use std::fmt;

use serde::Deserialize;

/// Reference to the critical column of a value-based filter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ColumnRef {
    /// 0-based field index
    Index(usize),
    /// Header text, matched exactly
    Name(String),
}

impl ColumnRef {
    /// Create a reference by header name.
    pub fn name(name: impl Into<String>) -> Self {
        ColumnRef::Name(name.into())
    }
}

impl From<usize> for ColumnRef {
    fn from(index: usize) -> Self {
        ColumnRef::Index(index)
    }
}

impl From<&str> for ColumnRef {
    fn from(name: &str) -> Self {
        ColumnRef::Name(name.to_string())
    }
}

impl From<String> for ColumnRef {
    fn from(name: String) -> Self {
        ColumnRef::Name(name)
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnRef::Index(i) => write!(f, "#{}", i),
            ColumnRef::Name(name) => write!(f, "{}", name),
        }
    }
}

/// Row selection mode and its arguments.
///
/// Condition strings are comma-joined token lists:
/// - `lines`: tokens `N` or `A-B`, e.g. `"2-3,5"`
/// - `ranges`: tokens `N`, `A.B` or `A-B`, e.g. `"5-7,11.1-12.8,15"`
/// - `equals`: literal values, e.g. `"bob,sue"`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterConfig {
    Lines(String),
    Ranges { column: ColumnRef, conditions: String },
    Equals { column: ColumnRef, values: String },
}

impl FilterConfig {
    pub fn lines(spec: impl Into<String>) -> Self {
        FilterConfig::Lines(spec.into())
    }

    pub fn ranges(column: impl Into<ColumnRef>, conditions: impl Into<String>) -> Self {
        FilterConfig::Ranges {
            column: column.into(),
            conditions: conditions.into(),
        }
    }

    pub fn equals(column: impl Into<ColumnRef>, values: impl Into<String>) -> Self {
        FilterConfig::Equals {
            column: column.into(),
            values: values.into(),
        }
    }

    /// The critical column, for the value-based modes.
    pub fn column(&self) -> Option<&ColumnRef> {
        match self {
            FilterConfig::Lines(_) => None,
            FilterConfig::Ranges { column, .. } | FilterConfig::Equals { column, .. } => {
                Some(column)
            }
        }
    }
}
