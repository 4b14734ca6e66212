use std::path::PathBuf;

use atomic_form::{FormError, SchemaError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create log file {}: {source}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("invalid values file {}: {source}", .path.display())]
    Values {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("values file {} must contain a JSON object", .path.display())]
    ValuesNotObject { path: PathBuf },

    #[error(transparent)]
    Form(#[from] FormError),
}
