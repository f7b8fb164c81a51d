//! Per-stream engine tying the assembler, the header cache and the row filter together.

use log::debug;

use crate::assembler::RecordAssembler;
use crate::config::{ColumnRef, FilterConfig};
use crate::error::CsvError;
use crate::filter::{Decision, RowFilter};
use crate::io::LineSource;
use crate::record::Record;

/// One CSV stream: its assembler, header and row filter.
///
/// Every piece of state lives in the instance, so independent streams never
/// interfere. The header must be read before any data record; value-based
/// filters resolve their critical column against it.
///
/// Once `next_record` has returned an error or reached the end (including a
/// filter reporting `Done`), the stream is finished and yields nothing more.
#[derive(Debug)]
pub struct CsvStream<S> {
    assembler: RecordAssembler<S>,
    filter: RowFilter,
    headers: Option<Record>,
    header_read: bool,
    finished: bool,
}

impl<S: LineSource> CsvStream<S> {
    /// Create a stream over an assembler, with no filter and no header read yet.
    pub fn new(assembler: RecordAssembler<S>) -> Self {
        Self {
            assembler,
            filter: RowFilter::new(),
            headers: None,
            header_read: false,
            finished: false,
        }
    }

    /// Create a stream directly over a line source.
    pub fn from_source(source: S, delimiter: char, has_headers: bool) -> Self {
        let assembler = if has_headers {
            RecordAssembler::new(source, delimiter)
        } else {
            RecordAssembler::without_header(source, delimiter)
        };
        Self::new(assembler)
    }

    pub fn delimiter(&self) -> char {
        self.assembler.delimiter()
    }

    /// The stream's row filter.
    pub fn row_filter(&self) -> &RowFilter {
        &self.filter
    }

    /// Data-line ordinal of the most recent record decided on.
    pub fn line_number(&self) -> u64 {
        self.filter.line_number()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Identifier of the underlying source.
    pub fn source_id(&self) -> &str {
        self.assembler.source().id()
    }

    /// Read the header record.
    ///
    /// Returns `Ok(None)` when the input is empty. The header is passed to
    /// the row filter as its first record, so it is never counted as a data
    /// line.
    pub fn read_headers(&mut self) -> Result<Option<&Record>, CsvError> {
        if self.header_read {
            return Err(CsvError::HeaderAlreadySet);
        }
        self.header_read = true;

        let header = match self.assembler.next_record() {
            Ok(header) => header,
            Err(e) => {
                self.finished = true;
                return Err(e);
            }
        };
        match header {
            Some(header) => {
                self.filter.decide(header.as_slice())?;
                debug!(
                    "{}: header has {} columns",
                    self.assembler.source().id(),
                    header.len()
                );
                let header: &Record = self.headers.insert(header);
                Ok(Some(header))
            }
            None => {
                self.filter.skip_header();
                self.finished = true;
                Ok(None)
            }
        }
    }

    /// The header record.
    pub fn headers(&self) -> Result<&Record, CsvError> {
        self.headers.as_ref().ok_or(CsvError::HeaderNotYetAvailable)
    }

    /// Resolve a column reference to a field index.
    ///
    /// Names need the header to have been read. Indices are checked against
    /// the header when there is one.
    pub fn column_index(&self, column: &ColumnRef) -> Result<usize, CsvError> {
        match column {
            ColumnRef::Index(i) => match &self.headers {
                Some(headers) if *i >= headers.len() => {
                    Err(CsvError::ColumnNotFound(column.to_string()))
                }
                _ => Ok(*i),
            },
            ColumnRef::Name(name) => {
                if !self.header_read {
                    return Err(CsvError::HeaderNotYetAvailable);
                }
                self.headers
                    .as_ref()
                    .and_then(|h| h.position(name))
                    .ok_or_else(|| CsvError::ColumnNotFound(name.clone()))
            }
        }
    }

    /// Keep only the line intervals in `spec`, e.g. `"2-3,5"`.
    pub fn restrict_by_lines(&mut self, spec: &str) -> Result<(), CsvError> {
        self.filter.restrict_by_lines(spec)
    }

    /// Keep records whose `column` lies in one of the ranges in `spec`.
    pub fn restrict_by_ranges(
        &mut self,
        column: impl Into<ColumnRef>,
        spec: &str,
    ) -> Result<(), CsvError> {
        let index = self.column_index(&column.into())?;
        self.filter.restrict_by_ranges(index, spec)
    }

    /// Keep records whose `column` equals one of the values in `spec`.
    pub fn restrict_by_equals(
        &mut self,
        column: impl Into<ColumnRef>,
        spec: &str,
    ) -> Result<(), CsvError> {
        let index = self.column_index(&column.into())?;
        self.filter.restrict_by_equals(index, spec)
    }

    /// Install the row filter described by `config`.
    pub fn apply_filter(&mut self, config: &FilterConfig) -> Result<(), CsvError> {
        match config {
            FilterConfig::Lines(spec) => self.restrict_by_lines(spec),
            FilterConfig::Ranges { column, conditions } => {
                self.restrict_by_ranges(column.clone(), conditions)
            }
            FilterConfig::Equals { column, values } => {
                self.restrict_by_equals(column.clone(), values)
            }
        }
    }

    /// Read the next record the filter keeps.
    ///
    /// Skipped records are discarded here. Returns `Ok(None)` at the end of
    /// input or once the filter reports `Done`.
    pub fn next_record(&mut self) -> Result<Option<Record>, CsvError> {
        if self.finished {
            return Ok(None);
        }
        if !self.header_read {
            return Err(CsvError::HeaderNotYetAvailable);
        }

        loop {
            let record = match self.assembler.next_record() {
                Ok(Some(record)) => record,
                Ok(None) => {
                    self.finished = true;
                    return Ok(None);
                }
                Err(e) => {
                    self.finished = true;
                    return Err(e);
                }
            };

            match self.filter.decide(record.as_slice()) {
                Ok(Decision::Keep) => return Ok(Some(record)),
                Ok(Decision::Skip) => continue,
                Ok(Decision::Done) => {
                    debug!(
                        "{}: row filter done after line {}",
                        self.assembler.source().id(),
                        self.filter.line_number()
                    );
                    self.finished = true;
                    return Ok(None);
                }
                Err(e) => {
                    self.finished = true;
                    return Err(e);
                }
            }
        }
    }

    /// Consume the stream and return its line source.
    pub fn into_source(self) -> S {
        self.assembler.into_source()
    }
}

impl<S: LineSource> Iterator for CsvStream<S> {
    type Item = Result<Record, CsvError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}
