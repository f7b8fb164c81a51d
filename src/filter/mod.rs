//! Row selection state machine.
//!
//! A [`RowFilter`] is asked about every record of a stream, header included,
//! and answers with a [`Decision`]. The first call is always the header: it
//! is kept unconditionally and does not advance the data-line counter, so
//! the first data record is line 1.
//!
//! Modes:
//! - `None`: keep everything
//! - `Lines`: keep line-number intervals such as `2-3,5`
//! - `Ranges`: keep records whose critical column lies in a numeric range
//! - `Equals`: keep records whose critical column equals one of a set of strings
//! - `Done`: terminal, entered when a `Lines` cursor runs out of intervals
//!   or a condition token fails to parse

mod lines;
mod ranges;

use std::collections::HashSet;
use std::fmt;

use log::{debug, warn};

use crate::error::CsvError;
use crate::tokenizer::parse_csv;

use lines::LineIntervals;

/// Outcome of asking the filter about one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Hand the record to the caller
    Keep,
    /// Discard the record and read the next one
    Skip,
    /// No further record will ever be kept; stop reading
    Done,
}

/// The active selection mode, without its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    None,
    Lines,
    Ranges,
    Equals,
    Done,
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterKind::None => write!(f, "none"),
            FilterKind::Lines => write!(f, "lines"),
            FilterKind::Ranges => write!(f, "ranges"),
            FilterKind::Equals => write!(f, "equals"),
            FilterKind::Done => write!(f, "done"),
        }
    }
}

#[derive(Debug, Clone)]
enum Mode {
    None,
    Lines(LineIntervals),
    Ranges { column: usize, tokens: Vec<String> },
    Equals { column: usize, values: HashSet<String> },
    Done,
}

/// Stateful keep/skip/done engine for one stream.
///
/// Holds the data-line cursor and, in `Lines` mode, the interval cursor.
/// Each stream needs its own instance.
#[derive(Debug, Clone)]
pub struct RowFilter {
    mode: Mode,
    /// Ordinal of the most recent data record; 0 until the first one
    line: u64,
    header_seen: bool,
}

impl Default for RowFilter {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a comma-joined condition string into tokens, honoring quotes.
fn split_conditions(spec: &str) -> Result<Vec<String>, CsvError> {
    parse_csv(spec, ',')
        .map_err(|_| CsvError::invalid_condition(spec, "unbalanced quotes in condition list"))
}

impl RowFilter {
    /// A filter that keeps every record.
    pub fn new() -> Self {
        Self {
            mode: Mode::None,
            line: 0,
            header_seen: false,
        }
    }

    /// A filter keeping the line intervals in `spec`, e.g. `"2-3,5"`.
    pub fn lines(spec: &str) -> Result<Self, CsvError> {
        let mut filter = Self::new();
        filter.restrict_by_lines(spec)?;
        Ok(filter)
    }

    /// A filter keeping records whose `column` lies in one of the ranges in
    /// `spec`, e.g. `"5-7,11.1-12.8,15"`.
    pub fn ranges(column: usize, spec: &str) -> Result<Self, CsvError> {
        let mut filter = Self::new();
        filter.restrict_by_ranges(column, spec)?;
        Ok(filter)
    }

    /// A filter keeping records whose `column` equals one of the values in
    /// `spec`, e.g. `"bob,sue"`.
    pub fn equals(column: usize, spec: &str) -> Result<Self, CsvError> {
        let mut filter = Self::new();
        filter.restrict_by_equals(column, spec)?;
        Ok(filter)
    }

    pub fn restrict_by_lines(&mut self, spec: &str) -> Result<(), CsvError> {
        let tokens = split_conditions(spec)?;
        self.activate(Mode::Lines(LineIntervals::new(tokens)))
    }

    pub fn restrict_by_ranges(&mut self, column: usize, spec: &str) -> Result<(), CsvError> {
        let tokens = split_conditions(spec)?;
        self.activate(Mode::Ranges { column, tokens })
    }

    pub fn restrict_by_equals(&mut self, column: usize, spec: &str) -> Result<(), CsvError> {
        let values = split_conditions(spec)?.into_iter().collect();
        self.activate(Mode::Equals { column, values })
    }

    /// Install a mode. Allowed once, and only before any data record.
    fn activate(&mut self, mode: Mode) -> Result<(), CsvError> {
        if !matches!(self.mode, Mode::None) || self.line > 0 {
            return Err(CsvError::FilterAlreadySet);
        }
        self.mode = mode;
        debug!("row filter set to {} mode", self.kind());
        Ok(())
    }

    pub fn kind(&self) -> FilterKind {
        match self.mode {
            Mode::None => FilterKind::None,
            Mode::Lines(_) => FilterKind::Lines,
            Mode::Ranges { .. } => FilterKind::Ranges,
            Mode::Equals { .. } => FilterKind::Equals,
            Mode::Done => FilterKind::Done,
        }
    }

    /// Ordinal of the most recent data record (0 before the first).
    pub fn line_number(&self) -> u64 {
        self.line
    }

    pub fn header_seen(&self) -> bool {
        self.header_seen
    }

    pub fn is_done(&self) -> bool {
        matches!(self.mode, Mode::Done)
    }

    /// Critical column of the value-based modes.
    pub fn critical_column(&self) -> Option<usize> {
        match self.mode {
            Mode::Ranges { column, .. } | Mode::Equals { column, .. } => Some(column),
            _ => None,
        }
    }

    /// Currently open line interval, in `Lines` mode.
    pub fn open_interval(&self) -> Option<(u64, u64)> {
        match &self.mode {
            Mode::Lines(intervals) => intervals.open_interval(),
            _ => None,
        }
    }

    /// Mark the header as seen without deciding on it.
    pub(crate) fn skip_header(&mut self) {
        self.header_seen = true;
    }

    /// Decide on the next record of the stream.
    ///
    /// `fields` only matters for the value-based modes; `Lines` and `None`
    /// look at the line ordinal alone.
    pub fn decide<S: AsRef<str>>(&mut self, fields: &[S]) -> Result<Decision, CsvError> {
        if !self.header_seen {
            self.header_seen = true;
            return Ok(Decision::Keep);
        }
        self.line += 1;

        let evaluated = match &mut self.mode {
            Mode::None => Ok(Decision::Keep),
            Mode::Done => Ok(Decision::Done),
            Mode::Lines(intervals) => intervals.decide(self.line),
            Mode::Ranges { column, tokens } => match fields.get(*column) {
                Some(value) => ranges::any_matches(tokens, value.as_ref()).map(|matched| {
                    if matched {
                        Decision::Keep
                    } else {
                        Decision::Skip
                    }
                }),
                None => Ok(missing_column(self.line, *column)),
            },
            Mode::Equals { column, values } => Ok(match fields.get(*column) {
                Some(value) if values.contains(value.as_ref()) => Decision::Keep,
                Some(_) => Decision::Skip,
                None => missing_column(self.line, *column),
            }),
        };

        // A bad condition token ends the stream like an exhausted one.
        let decision = match evaluated {
            Ok(decision) => decision,
            Err(e) => {
                debug!("row filter failed at line {}: {}", self.line, e);
                self.mode = Mode::Done;
                return Err(e);
            }
        };

        if decision == Decision::Done && !self.is_done() {
            debug!("row filter exhausted at line {}", self.line);
            self.mode = Mode::Done;
        }
        Ok(decision)
    }
}

fn missing_column(line: u64, column: usize) -> Decision {
    warn!("line {} has no field at index {}; skipping", line, column);
    Decision::Skip
}
