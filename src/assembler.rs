//! Logical record assembly from physical lines.
//!
//! A quoted field may contain line breaks, so one logical record can span
//! several physical lines. The assembler appends physical lines to a buffer
//! and only checks quote balance when the buffer ends in a line break.

use log::{debug, trace};

use crate::error::CsvError;
use crate::io::LineSource;
use crate::record::Record;
use crate::tokenizer::{count_fields, parse_csv};

/// Reads logical records from a [`LineSource`].
#[derive(Debug)]
pub struct RecordAssembler<S> {
    source: S,
    delimiter: char,
    /// Raw text of the record being built
    buffer: String,
    /// Most recent physical line
    scratch: String,
    /// Record read ahead of time, returned by the next call
    pending: Option<String>,
    synthesize_header: bool,
    /// Physical lines consumed so far
    physical_line: u64,
}

impl<S: LineSource> RecordAssembler<S> {
    /// Create an assembler for a source whose first record is its header.
    pub fn new(source: S, delimiter: char) -> Self {
        Self {
            source,
            delimiter,
            buffer: String::new(),
            scratch: String::new(),
            pending: None,
            synthesize_header: false,
            physical_line: 0,
        }
    }

    /// Create an assembler for a source without a header row.
    ///
    /// The first record handed out is a synthetic header `1, 2, ..., N`,
    /// where `N` is the field count of the first real record.
    pub fn without_header(source: S, delimiter: char) -> Self {
        Self {
            synthesize_header: true,
            ..Self::new(source, delimiter)
        }
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Physical lines consumed from the source so far.
    pub fn physical_line(&self) -> u64 {
        self.physical_line
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    #[cfg(test)]
    pub(crate) fn buffer_capacity(&self) -> usize {
        self.buffer.capacity()
    }

    pub fn into_source(self) -> S {
        self.source
    }

    /// Read the next logical record as raw, still escaped text.
    ///
    /// The trailing line break is removed. Returns `Ok(None)` at a clean end
    /// of stream, which includes a final line without a line break, and
    /// `CsvError::QuoteImbalance` when the input ends inside a quoted field.
    pub fn next_line(&mut self) -> Result<Option<String>, CsvError> {
        if self.synthesize_header {
            self.synthesize_header = false;
            return self.read_synthetic_header();
        }
        if let Some(line) = self.pending.take() {
            return Ok(Some(line));
        }
        self.assemble()
    }

    /// Read and tokenize the next logical record.
    pub fn next_record(&mut self) -> Result<Option<Record>, CsvError> {
        let start = self.physical_line + 1;
        match self.next_line()? {
            Some(line) => self.tokenize(&line, start).map(Some),
            None => Ok(None),
        }
    }

    pub(crate) fn tokenize(&self, line: &str, start: u64) -> Result<Record, CsvError> {
        parse_csv(line, self.delimiter)
            .map(Record::new)
            .map_err(|_| CsvError::QuoteImbalance { line: start })
    }

    fn read_synthetic_header(&mut self) -> Result<Option<String>, CsvError> {
        let Some(first) = self.assemble()? else {
            return Ok(None);
        };
        let count = count_fields(&first, self.delimiter).map_err(|_| CsvError::QuoteImbalance {
            line: self.physical_line,
        })?;
        self.pending = Some(first);

        let header = (1..=count)
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(&self.delimiter.to_string());
        trace!("synthesized header with {} columns", count);
        Ok(Some(header))
    }

    fn assemble(&mut self) -> Result<Option<String>, CsvError> {
        let start = self.physical_line + 1;
        let mut parts = 0usize;

        loop {
            if !self.source.read_line(&mut self.scratch)? {
                return self.finish_at_end_of_stream(start);
            }
            self.physical_line += 1;
            parts += 1;

            self.buffer.try_reserve(self.scratch.len())?;
            self.buffer.push_str(&self.scratch);

            if !self.buffer.ends_with('\n') {
                continue;
            }
            let body = &self.buffer[..self.buffer.len() - 1];
            if count_fields(body, self.delimiter).is_err() {
                continue;
            }

            let len = self.buffer.len() - 1;
            let mut record = String::new();
            record.try_reserve_exact(len)?;
            record.push_str(&self.buffer[..len]);
            // The buffer keeps its capacity for the next record.
            self.buffer.clear();
            if parts > 1 {
                trace!(
                    "{}: record starting at line {} spans {} physical lines",
                    self.source.id(),
                    start,
                    parts
                );
            }
            return Ok(Some(record));
        }
    }

    /// Text left without a closing line break never forms a record. It is
    /// dropped when balanced and reported when a quoted field is still open.
    fn finish_at_end_of_stream(&mut self, start: u64) -> Result<Option<String>, CsvError> {
        if self.buffer.is_empty() {
            return Ok(None);
        }
        let balanced = count_fields(&self.buffer, self.delimiter).is_ok();
        self.buffer.clear();
        if !balanced {
            return Err(CsvError::QuoteImbalance { line: start });
        }
        debug!(
            "{}: ignoring unterminated final line {}",
            self.source.id(),
            self.physical_line
        );
        Ok(None)
    }
}
