//! Tokenizer tests.

mod count_tests;
