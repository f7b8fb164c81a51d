//! Builder for creating CsvStream instances.

use crate::config::{ColumnRef, FilterConfig, StreamConfig};
use crate::engine::CsvStream;
use crate::error::CsvError;
use crate::io::LineSource;

/// Fluent configuration for a [`CsvStream`].
///
/// `build` reads the header and installs the filter, so an unknown critical
/// column is reported before any data record is read.
#[derive(Debug, Clone)]
pub struct CsvStreamBuilder {
    delimiter: char,
    has_headers: bool,
    filter: Option<FilterConfig>,
}

impl Default for CsvStreamBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvStreamBuilder {
    pub fn new() -> Self {
        Self {
            delimiter: ',',
            has_headers: true,
            filter: None,
        }
    }

    pub fn from_config(config: StreamConfig) -> Self {
        Self {
            delimiter: config.delimiter,
            has_headers: config.has_headers,
            filter: config.filter,
        }
    }

    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn has_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    /// Set the row filter, replacing any previous one.
    pub fn filter(mut self, filter: FilterConfig) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn lines(self, spec: impl Into<String>) -> Self {
        self.filter(FilterConfig::lines(spec))
    }

    pub fn ranges(self, column: impl Into<ColumnRef>, conditions: impl Into<String>) -> Self {
        self.filter(FilterConfig::ranges(column, conditions))
    }

    pub fn equals(self, column: impl Into<ColumnRef>, values: impl Into<String>) -> Self {
        self.filter(FilterConfig::equals(column, values))
    }

    /// The configuration this builder currently holds.
    pub fn config(&self) -> StreamConfig {
        StreamConfig {
            delimiter: self.delimiter,
            has_headers: self.has_headers,
            filter: self.filter.clone(),
        }
    }

    /// Build a stream without touching the source.
    ///
    /// The caller reads the header and configures the filter itself.
    pub fn build_unread<S: LineSource>(&self, source: S) -> CsvStream<S> {
        CsvStream::from_source(source, self.delimiter, self.has_headers)
    }

    /// Build a stream, read its header and install the filter.
    ///
    /// An empty source yields a finished stream and the filter is not resolved.
    pub fn build<S: LineSource>(self, source: S) -> Result<CsvStream<S>, CsvError> {
        let mut stream = self.build_unread(source);
        let has_input = stream.read_headers()?.is_some();
        if let (true, Some(filter)) = (has_input, &self.filter) {
            stream.apply_filter(filter)?;
        }
        Ok(stream)
    }
}
