//! Numeric value-range matching.
//!
//! A token is either a bare value or `lower-upper`. Comparison is decimal
//! when the record value or either bound contains a `.`, integer otherwise.

use crate::error::CsvError;

/// Split a token into `(lower, upper)`, or `None` for a bare value.
///
/// The separator is the first `-` after the first character, so a leading
/// minus sign belongs to the lower bound.
fn split_range(token: &str) -> Option<(&str, &str)> {
    let sep = token.get(1..)?.find('-')? + 1;
    Some((token[..sep].trim(), token[sep + 1..].trim()))
}

fn parse_integer(text: &str, token: &str) -> Result<i64, CsvError> {
    text.parse::<i64>()
        .map_err(|_| CsvError::invalid_condition(token, "bound is not an integer"))
}

fn parse_decimal(text: &str, token: &str) -> Result<f64, CsvError> {
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(CsvError::invalid_condition(token, "bound is not a number")),
    }
}

/// Whether `value` satisfies a single range token.
///
/// A malformed token is an error; a value that is not a number simply
/// does not match.
pub(crate) fn token_matches(token: &str, value: &str) -> Result<bool, CsvError> {
    let text = token.trim();
    if text.is_empty() {
        return Err(CsvError::invalid_condition(token, "empty condition"));
    }
    let value = value.trim();
    let (lower, upper) = split_range(text).unwrap_or((text, text));

    let decimal = value.contains('.') || lower.contains('.') || upper.contains('.');
    if decimal {
        let (lo, hi) = (parse_decimal(lower, token)?, parse_decimal(upper, token)?);
        Ok(value
            .parse::<f64>()
            .is_ok_and(|v| lo <= v && v <= hi))
    } else {
        let (lo, hi) = (parse_integer(lower, token)?, parse_integer(upper, token)?);
        Ok(value
            .parse::<i64>()
            .is_ok_and(|v| lo <= v && v <= hi))
    }
}

/// Whether `value` satisfies any of `tokens`, checked in order.
pub(crate) fn any_matches(tokens: &[String], value: &str) -> Result<bool, CsvError> {
    for token in tokens {
        if token_matches(token, value)? {
            return Ok(true);
        }
    }
    Ok(false)
}
