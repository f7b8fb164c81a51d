//! Tests for the line source implementations.

use std::io::Cursor;

use crate::io::{InMemorySource, LineSource, ReaderSource, file_source, open_input};

fn drain<S: LineSource>(mut source: S) -> Vec<String> {
    let mut line = String::new();
    let mut lines = Vec::new();
    while source.read_line(&mut line).unwrap() {
        lines.push(line.clone());
    }
    lines
}

#[test]
fn in_memory_source_keeps_line_breaks() {
    let src = InMemorySource::new("mem", "a\nb\nc");
    assert_eq!(src.id(), "mem");
    assert_eq!(drain(src), vec!["a\n", "b\n", "c"]);
}

#[test]
fn in_memory_source_clears_line_at_end() {
    let mut src = InMemorySource::from_string("x\n");
    let mut line = String::new();
    assert!(src.read_line(&mut line).unwrap());
    assert!(!src.read_line(&mut line).unwrap());
    assert!(line.is_empty());
    assert_eq!(src.remaining(), "");
}

#[test]
fn reader_source_matches_in_memory_source() {
    let text = "h1,h2\n\"a\nb\",c\nlast";
    let reader = ReaderSource::new("cursor", Cursor::new(text.as_bytes()));
    assert_eq!(drain(reader), drain(InMemorySource::from_string(text)));
}

#[test]
fn file_source_reads_lines_and_uses_path_as_id() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("in.csv");
    std::fs::write(&path, "a,b\n1,2\n").expect("write");

    let src = file_source(&path).expect("open");
    assert_eq!(src.id(), path.to_string_lossy());
    assert_eq!(drain(src), vec!["a,b\n", "1,2\n"]);
}

#[test]
fn open_input_reports_missing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("missing.csv");
    let err = open_input(&missing.to_string_lossy()).err().expect("missing file");
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}

#[test]
fn boxed_and_borrowed_sources_delegate() {
    let mut inner = InMemorySource::new("inner", "one\n");
    {
        let borrowed: &mut InMemorySource = &mut inner;
        assert_eq!(LineSource::id(&borrowed), "inner");
    }
    let boxed: Box<dyn LineSource> = Box::new(inner);
    assert_eq!(drain(boxed), vec!["one\n"]);
}
