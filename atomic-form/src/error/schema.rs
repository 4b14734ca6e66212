//! Form schema errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("failed to parse form schema: {0}")]
    Json(#[from] serde_json::Error),

    #[error("initial_data must be a JSON object")]
    InitialDataNotObject,

    #[error("field '{field}' has unknown input type '{kind}'")]
    UnknownInputKind { field: String, kind: String },

    #[error("validator entry {index} for field '{field}' is invalid: {reason}")]
    InvalidValidator {
        field: String,
        index: usize,
        reason: String,
    },
}
