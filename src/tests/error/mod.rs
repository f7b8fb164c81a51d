//! Error type tests.

mod error_tests;
#[cfg(feature = "miette")]
mod miette_tests;
