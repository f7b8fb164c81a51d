//! Line-interval selection with a forward-only interval cursor.

use super::Decision;
use crate::error::CsvError;

/// Cursor over `N` / `A-B` line tokens.
///
/// Tokens are parsed one at a time, when the cursor reaches them. Bounds
/// must be supplied in non-decreasing, non-overlapping order; the cursor
/// never rewinds.
#[derive(Debug, Clone)]
pub(crate) struct LineIntervals {
    tokens: Vec<String>,
    next: usize,
    open: Option<(u64, u64)>,
}

impl LineIntervals {
    pub(crate) fn new(tokens: Vec<String>) -> Self {
        Self {
            tokens,
            next: 0,
            open: None,
        }
    }

    /// Currently open `(lower, upper)` pair, if any.
    pub(crate) fn open_interval(&self) -> Option<(u64, u64)> {
        self.open
    }

    pub(crate) fn decide(&mut self, line: u64) -> Result<Decision, CsvError> {
        let (lower, upper) = match self.open {
            Some(bounds) => bounds,
            None => {
                let Some(token) = self.tokens.get(self.next) else {
                    return Ok(Decision::Done);
                };
                self.next += 1;
                let bounds = parse_line_bounds(token)?;
                self.open = Some(bounds);
                bounds
            }
        };

        if line == upper {
            self.open = None;
            return Ok(Decision::Keep);
        }
        if line < lower {
            Ok(Decision::Skip)
        } else {
            Ok(Decision::Keep)
        }
    }
}

fn parse_line_number(text: &str, token: &str) -> Result<u64, CsvError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CsvError::invalid_condition(
            token,
            "line bounds must be non-negative integers",
        ));
    }
    match text.parse::<u64>() {
        Ok(0) => Err(CsvError::invalid_condition(token, "line numbers start at 1")),
        Ok(n) => Ok(n),
        Err(_) => Err(CsvError::invalid_condition(token, "line number is too large")),
    }
}

/// Parse `N` into `(N, N)` and `A-B` into `(A, B)`.
pub(crate) fn parse_line_bounds(token: &str) -> Result<(u64, u64), CsvError> {
    let text = token.trim();
    let (lower, upper) = match text.split_once('-') {
        Some((lower, upper)) => (lower.trim(), upper.trim()),
        None => (text, text),
    };

    let lower = parse_line_number(lower, token)?;
    let upper = parse_line_number(upper, token)?;
    if upper < lower {
        return Err(CsvError::invalid_condition(
            token,
            "upper bound is below lower bound",
        ));
    }
    Ok((lower, upper))
}
