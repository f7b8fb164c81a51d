//! Line sources over standard readers, files and stdin.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use super::LineSource;

/// Line source over any buffered reader.
#[derive(Debug)]
pub struct ReaderSource<R> {
    id: String,
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    /// Wrap a buffered reader.
    pub fn new(id: impl Into<String>, reader: R) -> Self {
        Self {
            id: id.into(),
            reader,
        }
    }

    /// Consume the source and return the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn id(&self) -> &str {
        &self.id
    }

    fn read_line(&mut self, line: &mut String) -> io::Result<bool> {
        line.clear();
        Ok(self.reader.read_line(line)? > 0)
    }
}

/// Boxed reader used by [`open_input`].
pub type DynReaderSource = ReaderSource<Box<dyn BufRead>>;

/// Line source reading standard input.
pub fn stdin_source() -> DynReaderSource {
    ReaderSource::new("-", Box::new(io::stdin().lock()))
}

/// Line source reading a file.
pub fn file_source(path: impl AsRef<Path>) -> io::Result<DynReaderSource> {
    let path = path.as_ref();
    let file = File::open(path)?;
    Ok(ReaderSource::new(
        path.to_string_lossy().into_owned(),
        Box::new(BufReader::new(file)),
    ))
}

/// Open `"-"` as stdin and anything else as a file path.
pub fn open_input(arg: &str) -> io::Result<DynReaderSource> {
    if arg == "-" {
        Ok(stdin_source())
    } else {
        file_source(arg)
    }
}
