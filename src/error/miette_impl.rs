//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::{CsvError, Stage};

/// A diagnostic wrapper for stream errors compatible with miette.
///
/// Usage errors (`HeaderAlreadySet`, `HeaderNotYetAvailable`,
/// `FilterAlreadySet`) are reported as warnings, everything else as errors.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CsvDiagnostic {
    /// The error message
    pub message: String,

    /// Where in the read/filter loop the error happened
    pub stage: Stage,

    #[source]
    /// The underlying error
    pub source: Option<CsvError>,

    /// Help text for the user
    pub help: Option<String>,

    /// Severity level
    pub severity: Severity,
}

impl Diagnostic for CsvDiagnostic {
    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        self.help
            .as_ref()
            .map(|h| Box::new(h) as Box<dyn std::fmt::Display + 'a>)
    }

    fn severity(&self) -> Option<Severity> {
        Some(self.severity)
    }
}

fn help_for(error: &CsvError) -> &'static str {
    match error {
        CsvError::QuoteImbalance { .. } => {
            "A quoted field is never closed; check for a stray '\"' in the input"
        }
        CsvError::HeaderAlreadySet | CsvError::HeaderNotYetAvailable => {
            "Read the header exactly once, before any data record"
        }
        CsvError::ColumnNotFound(_) => "A specified header in passed parameters does not exist",
        CsvError::InvalidFilterSpecification { .. } => {
            "Use comma-separated tokens such as '2-3,5' or '5-7,11.1-12.8,15'"
        }
        CsvError::FilterAlreadySet => "Only one of lines, ranges or equals may be used per stream",
        CsvError::Allocation(_) => "Out of memory",
        CsvError::Io(_) => "Check that the input exists and is valid UTF-8",
    }
}

impl From<CsvError> for CsvDiagnostic {
    fn from(e: CsvError) -> Self {
        let severity = if e.is_usage_error() {
            Severity::Warning
        } else {
            Severity::Error
        };
        CsvDiagnostic {
            message: format!("[{}] {}", e.stage(), e),
            stage: e.stage(),
            help: Some(help_for(&e).to_string()),
            source: Some(e),
            severity,
        }
    }
}

impl From<CsvError> for miette::Report {
    fn from(e: CsvError) -> Self {
        miette::Report::new(CsvDiagnostic::from(e))
    }
}
