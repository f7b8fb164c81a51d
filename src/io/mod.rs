//! I/O abstractions for physical line input.
//!
//! This module provides:
//! - `LineSource`: Trait for "read next physical line or end of stream"
//! - `ReaderSource`: Implementation over any `BufRead`, plus stdin/file helpers
//! - `InMemorySource`: In-memory implementation for testing

mod memory;
mod source;
mod std_io;

pub use memory::InMemorySource;
pub use source::LineSource;
pub use std_io::{DynReaderSource, ReaderSource, file_source, open_input, stdin_source};
