//! CLI integration helpers for csview.
//!
//! This module provides argument value types that turn command-line text
//! into stream configuration. With the `sarge` feature they implement
//! `sarge::ArgumentType` and can be registered directly:
//!
//! ```rust,ignore
//! use csview::cli::{ColumnCondition, Delimiter};
//! use sarge::prelude::*;
//!
//! let mut reader = ArgumentReader::new();
//! let delimiter = reader.add::<Delimiter>(tag::both('d', "delimiter"));
//! let ranges = reader.add::<ColumnCondition>(tag::both('r', "ranges"));
//! let args = reader.parse()?;
//! ```

use std::io::{self, Write};

use thiserror::Error;

use crate::config::{ColumnRef, FilterConfig, StreamConfig};
use crate::engine::CsvStream;
use crate::io::LineSource;

#[cfg(feature = "sarge")]
mod sarge;

/// Errors turning argument text into configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    #[error("option requires a value")]
    MissingValue,

    #[error("invalid delimiter '{0}': expected a single character or tab/comma/semicolon/pipe")]
    InvalidDelimiter(String),

    #[error("invalid column condition '{0}': expected COLUMN=CONDITIONS")]
    InvalidColumnCondition(String),

    #[error("unknown output format '{0}' (expected raw|json)")]
    UnknownFormat(String),

    #[error("only one of --lines, --ranges and --equals may be given")]
    ConflictingFilters,
}

/// Field delimiter given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiter(pub char);

impl Default for Delimiter {
    fn default() -> Self {
        Delimiter(',')
    }
}

/// Parse a delimiter: a single character or one of its names.
pub fn parse_delimiter(s: &str) -> Result<Delimiter, CliError> {
    let named = match s.to_ascii_lowercase().as_str() {
        "tab" | "\\t" => Some('\t'),
        "comma" => Some(','),
        "semicolon" => Some(';'),
        "pipe" => Some('|'),
        _ => None,
    };
    if let Some(c) = named {
        return Ok(Delimiter(c));
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c != '"' && c != '\n' => Ok(Delimiter(c)),
        _ => Err(CliError::InvalidDelimiter(s.to_string())),
    }
}

/// A `COLUMN=CONDITIONS` argument for the value-based filters.
///
/// `COLUMN` is header text; `#N` selects the 0-based field index `N`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnCondition {
    pub column: ColumnRef,
    pub conditions: String,
}

/// Parse `COLUMN=CONDITIONS`.
pub fn parse_column_condition(s: &str) -> Result<ColumnCondition, CliError> {
    let invalid = || CliError::InvalidColumnCondition(s.to_string());
    let (column, conditions) = s.split_once('=').ok_or_else(invalid)?;
    if column.is_empty() || conditions.is_empty() {
        return Err(invalid());
    }

    let column = match column.strip_prefix('#').map(str::parse::<usize>) {
        Some(Ok(index)) => ColumnRef::Index(index),
        Some(Err(_)) => return Err(invalid()),
        None => ColumnRef::name(column),
    };
    Ok(ColumnCondition {
        column,
        conditions: conditions.to_string(),
    })
}

/// How kept records are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Delimited text, re-escaped
    #[default]
    Raw,
    /// One JSON object per record, keyed by header
    Json,
}

impl OutputFormat {
    /// Parse a format name.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "raw" | "csv" => Some(OutputFormat::Raw),
            "json" | "jsonl" | "ndjson" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Filter options as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct FilterArgs {
    pub lines: Option<String>,
    pub ranges: Option<ColumnCondition>,
    pub equals: Option<ColumnCondition>,
}

impl FilterArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lines(mut self, spec: impl Into<String>) -> Self {
        self.lines = Some(spec.into());
        self
    }

    pub fn with_ranges(mut self, condition: ColumnCondition) -> Self {
        self.ranges = Some(condition);
        self
    }

    pub fn with_equals(mut self, condition: ColumnCondition) -> Self {
        self.equals = Some(condition);
        self
    }

    /// The single filter these options describe, if any.
    pub fn into_filter(self) -> Result<Option<FilterConfig>, CliError> {
        let given = [
            self.lines.is_some(),
            self.ranges.is_some(),
            self.equals.is_some(),
        ];
        if given.iter().filter(|&&g| g).count() > 1 {
            return Err(CliError::ConflictingFilters);
        }

        if let Some(spec) = self.lines {
            return Ok(Some(FilterConfig::Lines(spec)));
        }
        if let Some(c) = self.ranges {
            return Ok(Some(FilterConfig::ranges(c.column, c.conditions)));
        }
        if let Some(c) = self.equals {
            return Ok(Some(FilterConfig::equals(c.column, c.conditions)));
        }
        Ok(None)
    }

    /// Overlay these options on a loaded configuration.
    ///
    /// A filter given on the command line replaces the configured one.
    pub fn apply_to(self, mut config: StreamConfig) -> Result<StreamConfig, CliError> {
        if let Some(filter) = self.into_filter()? {
            config.filter = Some(filter);
        }
        Ok(config)
    }
}

/// Write the stream's header names, one per line.
///
/// An empty input has no header and writes nothing.
pub fn write_header_names<S: LineSource, W: Write>(
    stream: &CsvStream<S>,
    out: &mut W,
) -> io::Result<()> {
    if let Ok(headers) = stream.headers() {
        for name in headers.iter() {
            writeln!(out, "{name}")?;
        }
    }
    Ok(())
}
