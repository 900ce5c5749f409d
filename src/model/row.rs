//! A single parsed CSV row.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One data row: an ordered mapping from column name to raw string value.
///
/// The map order is the column order of the header the row was parsed with,
/// so every row of a snapshot shares the same column set and order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Column name → raw field value, in header order
    pub values: IndexMap<String, String>,
}

impl Row {
    /// Build a row by zipping a header with the fields of one line.
    ///
    /// Callers are responsible for checking that `fields` has the same length
    /// as `header`; extra fields would be silently dropped here.
    #[must_use]
    pub fn from_fields(header: &[String], fields: Vec<String>) -> Self {
        let values = header.iter().cloned().zip(fields).collect();
        Self { values }
    }

    /// Get a field value by column name
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }

    /// Render the row back into a delimited line, in column order.
    #[must_use]
    pub fn render(&self, delimiter: char) -> String {
        let mut line = String::new();
        for (i, value) in self.values.values().enumerate() {
            if i > 0 {
                line.push(delimiter);
            }
            line.push_str(value);
        }
        line
    }
}
