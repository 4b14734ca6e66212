//! Validator execution errors

use thiserror::Error;

/// Error raised by a validator catalog lookup or call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("no validator named '{0}' in the catalog")]
    UnknownValidator(String),

    #[error("validator '{name}' received bad arguments: {reason}")]
    BadArguments { name: String, reason: String },

    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl CatalogError {
    pub fn bad_arguments(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::BadArguments {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// A validator that could not produce a verdict. Aborts the validation pass.
///
/// This is distinct from a failed validation, which is ordinary data in the
/// [`ValidationResult`](crate::validation::ValidationResult).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidatorFault {
    #[error("validator for field '{field}' failed: {source}")]
    Catalog {
        field: String,
        #[source]
        source: CatalogError,
    },

    #[error("predicate for field '{field}' failed: {message}")]
    Predicate { field: String, message: String },
}

impl ValidatorFault {
    /// The field whose chain was being evaluated.
    pub fn field(&self) -> &str {
        match self {
            Self::Catalog { field, .. } | Self::Predicate { field, .. } => field,
        }
    }
}
