//! Configuration types for CSV streams.
//!
//! This module provides:
//! - `StreamConfig`: Delimiter, header handling and row filter for one stream
//! - `FilterConfig`: The row selection mode and its condition string
//! - `ColumnRef`: Critical column by index or header name

mod spec;
mod stream;

pub use spec::{ColumnRef, FilterConfig};
pub use stream::{ConfigError, StreamConfig};
