use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::ConfigError;

/// Verdict for a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValidation {
    pub is_valid: bool,
    /// Messages of the failing steps, in chain order. `None` while valid.
    #[serde(rename = "message", skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<String>>,
}

impl FieldValidation {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            messages: None,
        }
    }

    pub fn invalid(messages: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            is_valid: false,
            messages: Some(messages.into_iter().map(Into::into).collect()),
        }
    }

    /// Record a failing step.
    pub(crate) fn fail(&mut self, message: impl Into<String>) {
        self.is_valid = false;
        self.messages
            .get_or_insert_with(Vec::new)
            .push(message.into());
    }

    pub fn messages(&self) -> &[String] {
        self.messages.as_deref().unwrap_or_default()
    }
}

/// Result of validating every field in a registry.
///
/// Configuration diagnostics raised during the pass are kept alongside the
/// entries; they never count against validity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    #[serde(flatten)]
    fields: BTreeMap<String, FieldValidation>,
    #[serde(skip)]
    diagnostics: Vec<ConfigError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, identifier: impl Into<String>, validation: FieldValidation) {
        self.fields.insert(identifier.into(), validation);
    }

    pub(crate) fn push_diagnostic(&mut self, error: ConfigError) {
        self.diagnostics.push(error);
    }

    /// True iff every entry is valid. Vacuously true when empty.
    pub fn all_valid(&self) -> bool {
        self.fields.values().all(|field| field.is_valid)
    }

    pub fn get(&self, identifier: &str) -> Option<&FieldValidation> {
        self.fields.get(identifier)
    }

    pub fn is_valid(&self, identifier: &str) -> Option<bool> {
        self.get(identifier).map(|field| field.is_valid)
    }

    /// Messages for a field, empty if it is valid or unknown.
    pub fn messages(&self, identifier: &str) -> &[String] {
        self.get(identifier)
            .map(FieldValidation::messages)
            .unwrap_or_default()
    }

    /// Identifiers of the invalid fields, in identifier order.
    pub fn invalid_fields(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|(_, field)| !field.is_valid)
            .map(|(identifier, _)| identifier.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValidation)> {
        self.fields
            .iter()
            .map(|(identifier, field)| (identifier.as_str(), field))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Configuration problems found while validating.
    pub fn diagnostics(&self) -> &[ConfigError] {
        &self.diagnostics
    }
}

impl FromIterator<(String, FieldValidation)> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = (String, FieldValidation)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
            diagnostics: Vec::new(),
        }
    }
}
