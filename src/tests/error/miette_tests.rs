use miette::{Diagnostic, Severity};

use crate::error::{CsvDiagnostic, CsvError, Stage};

#[test]
fn diagnostic_carries_stage_and_help() {
    let diag = CsvDiagnostic::from(CsvError::ColumnNotFound("Price".into()));
    assert_eq!(diag.stage, Stage::Header);
    assert!(diag.message.starts_with("[Header]"));
    assert!(diag.help().is_some_and(|h| h.to_string().contains("header")));
    assert_eq!(diag.severity(), Some(Severity::Error));
}

#[test]
fn usage_errors_are_warnings() {
    for err in [
        CsvError::HeaderAlreadySet,
        CsvError::HeaderNotYetAvailable,
        CsvError::FilterAlreadySet,
    ] {
        let diag = CsvDiagnostic::from(err);
        assert_eq!(diag.severity(), Some(Severity::Warning));
    }
}

#[test]
fn converts_into_report() {
    let report: miette::Report = CsvError::QuoteImbalance { line: 2 }.into();
    assert!(report.to_string().contains("line 2"));
}
