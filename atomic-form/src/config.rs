//! Form configuration types.

use serde::{Deserialize, Serialize};

use crate::path::DEFAULT_DELIMITER;

/// Per-form configuration.
///
/// Can be built in code or embedded in a form schema under `"config"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Display name used in log lines.
    pub name: String,

    /// Separator between the segments of a field identifier.
    pub delimiter: char,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            name: "form".to_string(),
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl FormConfig {
    /// Create a new config with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the identifier delimiter.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }
}
