//! Configuration diagnostics

use thiserror::Error;

use super::PathError;

/// A non-fatal configuration problem found while discovering or validating
/// fields. The affected field is skipped for the pass; the form keeps working.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The field's validators were not declared as an ordered sequence.
    #[error("validators must be an ordered sequence for field '{field}' (found {found})")]
    MalformedChain { field: String, found: String },

    /// A node declares a name that does not parse as a field identifier.
    #[error("node '{node}' has an unusable field name: {source}")]
    InvalidIdentifier {
        node: String,
        #[source]
        source: PathError,
    },
}
