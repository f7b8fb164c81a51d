//! # csview
//!
//! Streaming CSV record assembly with quote-aware tokenizing and row selection.
//!
//! ## Overview
//!
//! csview provides:
//! - **Tokenizer**: Count and split delimiter-separated fields with `"`-quoting,
//!   where `""` inside quotes is a literal quote
//! - **Record assembly**: Merge physical lines into one logical record when a
//!   quoted field contains a line break
//! - **Row filter**: Keep, skip or stop per record by line intervals, numeric
//!   ranges on a column, or exact values on a column
//! - **Synthetic headers**: Number the columns `1..N` for sources without a header row
//! - **Configuration**: Describe a stream in YAML or JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use csview::{CsvStreamBuilder, InMemorySource};
//!
//! let data = "name,score\nann,4\nbob,\"5\"\ncid,12\n";
//! let stream = CsvStreamBuilder::new()
//!     .ranges("score", "5-10")
//!     .build(InMemorySource::from_string(data))?;
//!
//! let names: Vec<String> = stream
//!     .map(|r| r.map(|rec| rec[0].to_string()))
//!     .collect::<Result<_, _>>()?;
//! assert_eq!(names, vec!["bob"]);
//! # Ok::<(), csview::CsvError>(())
//! ```
//!
//! ## Streaming semantics
//!
//! - Input is read strictly forward, one physical line at a time, through the
//!   `LineSource` trait. Quote balance is only checked when the buffered text
//!   ends in a line break.
//! - The first record of every stream is its header (real or synthetic). It is
//!   always kept and is not counted: the first data record is line 1.
//! - A `CsvStream` owns all of its state. Independent streams can run side by
//!   side, including on different threads.
//! - Errors are terminal for a stream: after one is returned, the stream
//!   yields nothing more.
//!
//! ## Features
//!
//! - `json` - JSON configuration and `Record::to_json_object` (enabled by default)
//! - `yaml` - YAML configuration
//! - `miette` - Pretty error reporting with miette
//! - `sarge` - `sarge::ArgumentType` impls for the CLI value types
//! - `cli` - The `csview` binary

pub mod assembler;
pub mod builder;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod filter;
pub mod io;
pub mod record;
pub mod tokenizer;

// Re-exports for convenience
pub use assembler::RecordAssembler;
pub use builder::CsvStreamBuilder;
pub use config::{ColumnRef, FilterConfig, StreamConfig};
pub use engine::CsvStream;
pub use error::{CsvError, QuoteImbalance, Stage};
pub use filter::{Decision, FilterKind, RowFilter};
pub use io::{InMemorySource, LineSource, ReaderSource};
pub use record::Record;
pub use tokenizer::{count_fields, escape_field, join_record, parse_csv};

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::CsvDiagnostic;

// Internal test modules (see src/tests)
#[cfg(test)]
mod tests;
