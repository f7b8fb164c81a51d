//! Row filter tests.

mod equals_tests;
mod ranges_tests;
