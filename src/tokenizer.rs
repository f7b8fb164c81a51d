//! Quote-aware field tokenizer.
//!
//! Fields are separated by a single delimiter character. A `"` outside a
//! quoted region opens one; inside, `""` stands for a literal quote and a
//! lone `"` closes the region. Delimiters and line breaks inside a quoted
//! region are literal.

use std::borrow::Cow;

use crate::error::QuoteImbalance;

const QUOTE: char = '"';

/// Count the delimiter-separated fields of `line`.
///
/// Returns `QuoteImbalance` when the scan ends inside a quoted region, which
/// means `line` is not a complete record on its own.
pub fn count_fields(line: &str, delimiter: char) -> Result<usize, QuoteImbalance> {
    let mut count = 1;
    let mut quoted = false;

    for ch in line.chars() {
        if quoted {
            if ch == QUOTE {
                quoted = false;
            }
        } else if ch == QUOTE {
            quoted = true;
        } else if ch == delimiter {
            count += 1;
        }
    }

    if quoted {
        return Err(QuoteImbalance);
    }
    Ok(count)
}

/// Split a balanced line into its unescaped fields.
///
/// The number of fields returned always equals `count_fields(line, delimiter)`.
pub fn parse_csv(line: &str, delimiter: char) -> Result<Vec<String>, QuoteImbalance> {
    let count = count_fields(line, delimiter)?;
    let mut fields = Vec::with_capacity(count);
    let mut current = String::new();
    let mut quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if quoted {
            if ch == QUOTE {
                if chars.peek() == Some(&QUOTE) {
                    chars.next();
                    current.push(QUOTE);
                } else {
                    quoted = false;
                }
            } else {
                current.push(ch);
            }
            continue;
        }

        if ch == QUOTE {
            quoted = true;
        } else if ch == delimiter {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }
    fields.push(current);

    debug_assert_eq!(fields.len(), count);
    Ok(fields)
}

/// Whether a field needs quoting to survive a round trip through `parse_csv`.
fn needs_quotes(field: &str, delimiter: char) -> bool {
    field
        .chars()
        .any(|c| c == delimiter || c == QUOTE || c == '\n' || c == '\r')
}

/// Escape a single field for output.
///
/// Fields containing the delimiter, a quote or a line break are wrapped in
/// quotes with embedded quotes doubled; anything else is borrowed as is.
pub fn escape_field(field: &str, delimiter: char) -> Cow<'_, str> {
    if !needs_quotes(field, delimiter) {
        return Cow::Borrowed(field);
    }

    let mut escaped = String::with_capacity(field.len() + 2);
    escaped.push(QUOTE);
    for ch in field.chars() {
        if ch == QUOTE {
            escaped.push(QUOTE);
        }
        escaped.push(ch);
    }
    escaped.push(QUOTE);
    Cow::Owned(escaped)
}

/// Join fields into one delimited line, escaping where needed.
pub fn join_record<S: AsRef<str>>(fields: &[S], delimiter: char) -> String {
    let mut line = String::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            line.push(delimiter);
        }
        line.push_str(&escape_field(field.as_ref(), delimiter));
    }
    line
}
