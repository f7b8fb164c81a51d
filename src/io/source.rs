//! Line source trait definition.

use std::io;

/// Trait for sources of physical input lines.
///
/// This is the only capability the assembler needs from its input: read
/// the next physical line or report end of stream. Opening files or
/// resolving paths is left to the caller.
pub trait LineSource {
    /// Returns an identifier for this source.
    ///
    /// This is used for error messages and logging.
    /// Convention: "-" for stdin, file path for files.
    fn id(&self) -> &str;

    /// Replace the contents of `line` with the next physical line.
    ///
    /// The line keeps its trailing `'\n'` when the input had one. Returns
    /// `Ok(false)` once the source is exhausted, leaving `line` empty.
    fn read_line(&mut self, line: &mut String) -> io::Result<bool>;
}

impl<T: LineSource + ?Sized> LineSource for Box<T> {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn read_line(&mut self, line: &mut String) -> io::Result<bool> {
        (**self).read_line(line)
    }
}

impl<T: LineSource + ?Sized> LineSource for &mut T {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn read_line(&mut self, line: &mut String) -> io::Result<bool> {
        (**self).read_line(line)
    }
}
