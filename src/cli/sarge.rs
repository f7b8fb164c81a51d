use sarge::ArgumentType;

use crate::cli::{
    CliError, ColumnCondition, Delimiter, OutputFormat, parse_column_condition, parse_delimiter,
};

impl ArgumentType for Delimiter {
    type Error = CliError;

    fn from_value(val: Option<&str>) -> sarge::ArgResult<Self> {
        Some(match val {
            Some(v) => parse_delimiter(v),
            None => Err(CliError::MissingValue),
        })
    }
}

impl ArgumentType for ColumnCondition {
    type Error = CliError;

    fn from_value(val: Option<&str>) -> sarge::ArgResult<Self> {
        Some(match val {
            Some(v) => parse_column_condition(v.trim()),
            None => Err(CliError::MissingValue),
        })
    }
}

impl ArgumentType for OutputFormat {
    type Error = CliError;

    fn from_value(val: Option<&str>) -> sarge::ArgResult<Self> {
        Some(match val {
            Some(v) => OutputFormat::from_str(v).ok_or_else(|| CliError::UnknownFormat(v.into())),
            None => Err(CliError::MissingValue),
        })
    }

    fn default_value() -> Option<Self> {
        Some(OutputFormat::default())
    }
}
