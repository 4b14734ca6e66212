//! Error types

mod config;
mod form;
mod path;
mod schema;
mod validation;

pub use config::*;
pub use form::*;
pub use path::*;
pub use schema::*;
pub use validation::*;
