//! Error types for record assembly and row filtering.
//!
//! This module provides:
//! - `QuoteImbalance`: Returned by the pure tokenizer functions
//! - `CsvError`: Every failure a stream can report to its caller
//! - `Stage`: Indicates where an error occurred in the read/filter loop

use std::collections::TryReserveError;
use std::fmt;

use thiserror::Error;

/// The scanned text ends inside an open quoted region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unbalanced quotes")]
pub struct QuoteImbalance;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Reading physical lines from the source
    Read,
    /// Splitting or assembling a record
    Tokenize,
    /// Header bookkeeping and column resolution
    Header,
    /// Filter configuration or evaluation
    Filter,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Read => write!(f, "Read"),
            Stage::Tokenize => write!(f, "Tokenize"),
            Stage::Header => write!(f, "Header"),
            Stage::Filter => write!(f, "Filter"),
        }
    }
}

/// Errors reported by the assembler, the row filter and the stream engine.
///
/// None of these are retried. Once a `CsvStream` has returned one, it yields
/// no further records.
#[derive(Debug, Error)]
pub enum CsvError {
    /// A quoted field was still open when the input ran out
    #[error("unterminated quoted field in record starting at line {line}")]
    QuoteImbalance { line: u64 },

    #[error("header has already been read")]
    HeaderAlreadySet,

    #[error("header has not been read yet")]
    HeaderNotYetAvailable,

    #[error("column '{0}' does not exist in the header")]
    ColumnNotFound(String),

    /// A condition token could not be parsed into the shape its mode expects
    #[error("invalid filter condition '{token}': {reason}")]
    InvalidFilterSpecification { token: String, reason: &'static str },

    #[error("a row filter is already configured for this stream")]
    FilterAlreadySet,

    #[error("out of memory while assembling a record: {0}")]
    Allocation(#[from] TryReserveError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CsvError {
    pub(crate) fn invalid_condition(token: impl Into<String>, reason: &'static str) -> Self {
        CsvError::InvalidFilterSpecification {
            token: token.into(),
            reason,
        }
    }

    /// The part of the read/filter loop this error belongs to.
    pub fn stage(&self) -> Stage {
        match self {
            CsvError::Io(_) | CsvError::Allocation(_) => Stage::Read,
            CsvError::QuoteImbalance { .. } => Stage::Tokenize,
            CsvError::HeaderAlreadySet
            | CsvError::HeaderNotYetAvailable
            | CsvError::ColumnNotFound(_) => Stage::Header,
            CsvError::InvalidFilterSpecification { .. } | CsvError::FilterAlreadySet => {
                Stage::Filter
            }
        }
    }

    /// Whether the caller used the stream API out of order.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            CsvError::HeaderAlreadySet | CsvError::HeaderNotYetAvailable | CsvError::FilterAlreadySet
        )
    }
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
