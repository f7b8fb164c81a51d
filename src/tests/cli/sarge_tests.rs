use sarge::ArgumentType;

use crate::cli::{CliError, ColumnCondition, Delimiter, OutputFormat};
use crate::config::ColumnRef;

#[test]
fn delimiter_argument() {
    assert_eq!(Delimiter::from_value(Some("tab")), Some(Ok(Delimiter('\t'))));
    assert_eq!(
        Delimiter::from_value(None),
        Some(Err(CliError::MissingValue))
    );
    // Absent flags must not override a delimiter loaded from a config file.
    assert_eq!(Delimiter::default_value(), None);
}

#[test]
fn column_condition_argument_is_trimmed() {
    let parsed = ColumnCondition::from_value(Some("  Price=5-7 ")).unwrap().unwrap();
    assert_eq!(parsed.column, ColumnRef::name("Price"));
    assert_eq!(parsed.conditions, "5-7");
}

#[test]
fn output_format_argument() {
    assert_eq!(OutputFormat::from_value(Some("json")), Some(Ok(OutputFormat::Json)));
    assert_eq!(
        OutputFormat::from_value(Some("yaml")),
        Some(Err(CliError::UnknownFormat("yaml".into())))
    );
}
