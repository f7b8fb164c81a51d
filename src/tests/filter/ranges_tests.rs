use crate::error::CsvError;
use crate::filter::{Decision, RowFilter};

/// Run a ranges filter on column 0 over `values`, after a header.
fn decide_values(spec: &str, values: &[&str]) -> Vec<Decision> {
    let mut filter = RowFilter::ranges(0, spec).unwrap();
    assert_eq!(filter.decide(&["Price"]).unwrap(), Decision::Keep);
    values
        .iter()
        .map(|v| filter.decide(&[*v]).unwrap())
        .collect()
}

#[test]
fn integer_decimal_and_single_value_tokens() {
    use Decision::*;

    let spec = "5-7,11.1-12.8,15";
    assert_eq!(
        decide_values(spec, &["4", "5", "6", "7", "8", "11.5", "12.9", "15", "16"]),
        vec![Skip, Keep, Keep, Keep, Skip, Keep, Skip, Keep, Skip]
    );
}

#[test]
fn decimal_value_against_integer_bounds() {
    use Decision::*;

    assert_eq!(
        decide_values("5-7", &["6.5", "7.01", "4.99"]),
        vec![Keep, Skip, Skip]
    );
}

#[test]
fn integer_value_against_decimal_bounds() {
    use Decision::*;

    assert_eq!(
        decide_values("11.1-12.8", &["12", "11", "13"]),
        vec![Keep, Skip, Skip]
    );
}

#[test]
fn negative_bounds() {
    use Decision::*;

    assert_eq!(
        decide_values("-5--1,-0.5-0.5", &["-3", "-6", "0", "0.4", "-1"]),
        vec![Keep, Skip, Keep, Keep, Keep]
    );
}

#[test]
fn values_are_trimmed() {
    use Decision::*;

    assert_eq!(decide_values("5-7", &[" 6 ", "\t7"]), vec![Keep, Keep]);
}

#[test]
fn non_numeric_values_are_skipped() {
    use Decision::*;

    assert_eq!(
        decide_values("5-7", &["abc", "", "6x"]),
        vec![Skip, Skip, Skip]
    );
}

#[test]
fn short_record_is_skipped() {
    let mut filter = RowFilter::ranges(2, "1-9").unwrap();
    filter.decide(&["a", "b", "c"]).unwrap();

    assert_eq!(filter.decide(&["x", "y"]).unwrap(), Decision::Skip);
    assert_eq!(filter.decide(&["x", "y", "3"]).unwrap(), Decision::Keep);
    assert_eq!(filter.line_number(), 2);
}

#[test]
fn malformed_bound_is_an_error() {
    let mut filter = RowFilter::ranges(0, "a-b").unwrap();
    filter.decide(&["h"]).unwrap();

    match filter.decide(&["3"]) {
        Err(CsvError::InvalidFilterSpecification { token, .. }) => assert_eq!(token, "a-b"),
        other => panic!("expected InvalidFilterSpecification, got {other:?}"),
    }
}

#[test]
fn empty_token_is_an_error() {
    let mut filter = RowFilter::ranges(0, "1,,3").unwrap();
    filter.decide(&["h"]).unwrap();
    assert!(filter.decide(&["2"]).is_err());
}

#[test]
fn ranges_never_report_done() {
    let mut filter = RowFilter::ranges(0, "1").unwrap();
    filter.decide(&["h"]).unwrap();
    for _ in 0..50 {
        assert_ne!(filter.decide(&["2"]).unwrap(), Decision::Done);
    }
}

#[test]
fn boundary_values() {
    use Decision::*;

    assert_eq!(
        decide_values("5-7,11.1-12.8,15", &["4.9", "5", "7.0001", "11.1", "15", "15.0"]),
        vec![Skip, Keep, Skip, Keep, Keep, Keep]
    );
}

#[test]
fn malformed_bound_ends_the_filter() {
    let mut filter = RowFilter::ranges(0, "1-2,a-b").unwrap();
    filter.decide(&["h"]).unwrap();

    assert_eq!(filter.decide(&["1"]).unwrap(), Decision::Keep);
    assert!(filter.decide(&["7"]).is_err());
    assert_eq!(filter.decide(&["1"]).unwrap(), Decision::Done);
}
