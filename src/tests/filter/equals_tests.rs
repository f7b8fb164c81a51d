use crate::filter::{Decision, FilterKind, RowFilter};

#[test]
fn keeps_exact_matches_only() {
    let mut filter = RowFilter::equals(1, "bob,sue").unwrap();
    assert_eq!(filter.kind(), FilterKind::Equals);
    assert_eq!(filter.critical_column(), Some(1));

    assert_eq!(filter.decide(&["id", "name"]).unwrap(), Decision::Keep);
    assert_eq!(filter.decide(&["1", "bob"]).unwrap(), Decision::Keep);
    assert_eq!(filter.decide(&["2", "ann"]).unwrap(), Decision::Skip);
    assert_eq!(filter.decide(&["3", "sue"]).unwrap(), Decision::Keep);
    assert_eq!(filter.decide(&["4", "Bob"]).unwrap(), Decision::Skip);
    assert_eq!(filter.decide(&["5", " bob"]).unwrap(), Decision::Skip);
}

#[test]
fn quoted_value_may_contain_comma() {
    let mut filter = RowFilter::equals(0, "\"Smith, J\",Doe").unwrap();
    filter.decide(&["name"]).unwrap();

    assert_eq!(filter.decide(&["Smith, J"]).unwrap(), Decision::Keep);
    assert_eq!(filter.decide(&["Smith"]).unwrap(), Decision::Skip);
    assert_eq!(filter.decide(&["Doe"]).unwrap(), Decision::Keep);
}

#[test]
fn empty_value_matches_empty_field() {
    let mut filter = RowFilter::equals(0, "x,").unwrap();
    filter.decide(&["h"]).unwrap();
    assert_eq!(filter.decide(&[""]).unwrap(), Decision::Keep);
}

#[test]
fn missing_column_is_skipped() {
    let mut filter = RowFilter::equals(3, "a").unwrap();
    filter.decide(&["h"]).unwrap();
    assert_eq!(filter.decide(&["a"]).unwrap(), Decision::Skip);
}
