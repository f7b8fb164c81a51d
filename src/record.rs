//! Owned record type produced by the assembler.

use std::ops::Index;

use serde::Serialize;

use crate::tokenizer::join_record;

/// One logical record: its unescaped fields in input order.
///
/// The length is fixed once the record is produced. Records from the same
/// source may differ in length; no schema is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: Vec<String>,
}

impl Record {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.fields
    }

    pub fn into_fields(self) -> Vec<String> {
        self.fields
    }

    /// Index of the first field whose text equals `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f == name)
    }

    /// Render the record back into one delimited line.
    pub fn to_delimited(&self, delimiter: char) -> String {
        join_record(&self.fields, delimiter)
    }

    /// Pair each field with the header at the same index.
    ///
    /// Fields beyond the header's length are keyed by their 1-based
    /// position so nothing is dropped.
    #[cfg(feature = "json")]
    pub fn to_json_object(&self, headers: &Record) -> serde_json::Value {
        let mut obj = serde_json::Map::new();
        for (i, field) in self.fields.iter().enumerate() {
            let key = match headers.get(i) {
                Some(h) => h.to_string(),
                None => (i + 1).to_string(),
            };
            obj.insert(key, serde_json::Value::String(field.clone()));
        }
        serde_json::Value::Object(obj)
    }
}

impl From<Vec<String>> for Record {
    fn from(fields: Vec<String>) -> Self {
        Self::new(fields)
    }
}

impl Index<usize> for Record {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.fields[index]
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
