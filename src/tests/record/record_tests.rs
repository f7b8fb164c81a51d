use crate::record::Record;

fn record(fields: &[&str]) -> Record {
    fields.iter().map(|f| f.to_string()).collect::<Vec<_>>().into()
}

#[test]
fn accessors() {
    let rec = record(&["a", "b", "a"]);
    assert_eq!(rec.len(), 3);
    assert!(!rec.is_empty());
    assert_eq!(rec.get(1), Some("b"));
    assert_eq!(rec.get(3), None);
    assert_eq!(&rec[2], "a");
    assert_eq!(rec.position("a"), Some(0));
    assert_eq!(rec.position("z"), None);
    assert_eq!(rec.iter().collect::<Vec<_>>(), vec!["a", "b", "a"]);
    assert!(Record::default().is_empty());
}

#[test]
fn to_delimited_escapes() {
    let rec = record(&["plain", "with;semi", "say \"hi\""]);
    assert_eq!(rec.to_delimited(';'), "plain;\"with;semi\";\"say \"\"hi\"\"\"");
    assert_eq!(rec.to_delimited(','), "plain,with;semi,\"say \"\"hi\"\"\"");
}

#[cfg(feature = "json")]
#[test]
fn json_object_keys_by_header() {
    let headers = record(&["name", "age"]);
    let rec = record(&["ann", "31", "extra"]);

    assert_eq!(
        rec.to_json_object(&headers),
        serde_json::json!({ "name": "ann", "age": "31", "3": "extra" })
    );
}

#[cfg(feature = "json")]
#[test]
fn serializes_as_array() {
    let rec = record(&["x", "y"]);
    assert_eq!(serde_json::to_string(&rec).unwrap(), r#"["x","y"]"#);
}
