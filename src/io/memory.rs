//! In-memory line source for testing.

use std::io;

use super::LineSource;

/// In-memory input source for testing.
#[derive(Debug, Clone)]
pub struct InMemorySource {
    id: String,
    data: String,
    pos: usize,
}

impl InMemorySource {
    /// Create a new in-memory source over the given text.
    pub fn new(id: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            data: data.into(),
            pos: 0,
        }
    }

    /// Create a new in-memory source from a string, using `"memory"` as id.
    pub fn from_string(data: impl Into<String>) -> Self {
        Self::new("memory", data)
    }

    /// Text not yet handed out.
    pub fn remaining(&self) -> &str {
        &self.data[self.pos..]
    }
}

impl LineSource for InMemorySource {
    fn id(&self) -> &str {
        &self.id
    }

    fn read_line(&mut self, line: &mut String) -> io::Result<bool> {
        line.clear();
        let rest = self.remaining();
        if rest.is_empty() {
            return Ok(false);
        }

        let end = rest.find('\n').map_or(rest.len(), |i| i + 1);
        line.push_str(&rest[..end]);
        self.pos += end;
        Ok(true)
    }
}
