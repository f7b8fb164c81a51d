use std::io;

use crate::error::{CsvError, QuoteImbalance, Stage};

#[test]
fn stages() {
    assert_eq!(CsvError::QuoteImbalance { line: 1 }.stage(), Stage::Tokenize);
    assert_eq!(CsvError::HeaderAlreadySet.stage(), Stage::Header);
    assert_eq!(CsvError::ColumnNotFound("x".into()).stage(), Stage::Header);
    assert_eq!(CsvError::FilterAlreadySet.stage(), Stage::Filter);
    assert_eq!(
        CsvError::from(io::Error::other("boom")).stage(),
        Stage::Read
    );
}

#[test]
fn usage_errors() {
    assert!(CsvError::HeaderNotYetAvailable.is_usage_error());
    assert!(CsvError::FilterAlreadySet.is_usage_error());
    assert!(!CsvError::ColumnNotFound("x".into()).is_usage_error());
    assert!(!CsvError::QuoteImbalance { line: 3 }.is_usage_error());
}

#[test]
fn messages() {
    assert_eq!(
        CsvError::QuoteImbalance { line: 7 }.to_string(),
        "unterminated quoted field in record starting at line 7"
    );
    assert_eq!(
        CsvError::invalid_condition("a-b", "bound is not an integer").to_string(),
        "invalid filter condition 'a-b': bound is not an integer"
    );
    assert_eq!(QuoteImbalance.to_string(), "unbalanced quotes");
    assert_eq!(Stage::Filter.to_string(), "Filter");
}

#[test]
fn allocation_failure_converts() {
    let mut v: Vec<u8> = Vec::new();
    let err = v.try_reserve(usize::MAX).unwrap_err();
    let err = CsvError::from(err);
    assert!(matches!(err, CsvError::Allocation(_)));
    assert_eq!(err.stage(), Stage::Read);
}
