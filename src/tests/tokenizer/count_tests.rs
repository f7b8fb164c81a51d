use crate::error::QuoteImbalance;
use crate::tokenizer::count_fields;

#[test]
fn count_fields_is_one_plus_unquoted_delimiters() {
    let cases = [
        ("", 1),
        ("a", 1),
        ("a,b", 2),
        (",,", 3),
        ("a,b,c,d,", 5),
        ("x y z", 1),
    ];
    for (line, expected) in cases {
        assert_eq!(count_fields(line, ','), Ok(expected), "line: {line:?}");
    }
}

#[test]
fn count_fields_ignores_delimiters_inside_quotes() {
    assert_eq!(count_fields(r#""a,b",c"#, ','), Ok(2));
    assert_eq!(count_fields("a,\"line1\nline2\",b", ','), Ok(3));
    assert_eq!(count_fields(r#""say ""hi"", ok",x"#, ','), Ok(2));
}

#[test]
fn count_fields_reports_open_quote() {
    assert_eq!(count_fields(r#"a,"b"#, ','), Err(QuoteImbalance));
    assert_eq!(count_fields("a,\"line1\n", ','), Err(QuoteImbalance));
    assert_eq!(count_fields(r#"""""#, ','), Err(QuoteImbalance));
}

#[test]
fn count_fields_uses_configured_delimiter() {
    assert_eq!(count_fields("a;b,c;d", ';'), Ok(3));
    assert_eq!(count_fields("a\tb\tc", '\t'), Ok(3));
    assert_eq!(count_fields("a|\"b|c\"", '|'), Ok(2));
}
