//! Internal unit tests, grouped by module.

mod error;
mod filter;
mod tokenizer;
