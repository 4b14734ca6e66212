use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::path::FormData;

/// Name under which the presence check is declared in schemas.
pub const PRESENCE: &str = "isPresent";

/// Custom predicate: `(field value, whole form data) -> verdict`.
///
/// An `Err` is a fault, not a failed validation, and aborts the pass.
pub type PredicateFn = Arc<dyn Fn(Option<&Value>, &FormData) -> Result<bool, String> + Send + Sync>;

/// One step of a field's validator chain.
#[derive(Clone)]
pub enum ValidatorSpec {
    /// A user-supplied check.
    Predicate {
        check: PredicateFn,
        message: Option<String>,
    },
    /// The value must be present and non-empty.
    Presence { message: Option<String> },
    /// A named check looked up in the validator catalog.
    Catalog {
        name: String,
        args: Vec<Value>,
        message: Option<String>,
    },
}

impl ValidatorSpec {
    pub fn predicate<F>(check: F) -> Self
    where
        F: Fn(Option<&Value>, &FormData) -> bool + Send + Sync + 'static,
    {
        Self::Predicate {
            check: Arc::new(move |value: Option<&Value>, data: &FormData| {
                Ok(check(value, data))
            }),
            message: None,
        }
    }

    /// A predicate that may fault.
    pub fn try_predicate<F>(check: F) -> Self
    where
        F: Fn(Option<&Value>, &FormData) -> Result<bool, String> + Send + Sync + 'static,
    {
        Self::Predicate {
            check: Arc::new(check),
            message: None,
        }
    }

    pub fn presence() -> Self {
        Self::Presence { message: None }
    }

    /// A catalog check that takes no arguments.
    pub fn named(name: impl Into<String>) -> Self {
        Self::catalog(name, Vec::new())
    }

    pub fn catalog(name: impl Into<String>, args: impl IntoIterator<Item = Value>) -> Self {
        Self::Catalog {
            name: name.into(),
            args: args.into_iter().collect(),
            message: None,
        }
    }

    /// Set the message reported when this step fails.
    pub fn with_message(mut self, msg: impl Into<String>) -> Self {
        let msg = Some(msg.into());
        match &mut self {
            Self::Predicate { message, .. }
            | Self::Presence { message }
            | Self::Catalog { message, .. } => *message = msg,
        }
        self
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Predicate { message, .. }
            | Self::Presence { message }
            | Self::Catalog { message, .. } => message.as_deref(),
        }
    }
}

impl fmt::Debug for ValidatorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Predicate { message, .. } => f
                .debug_struct("Predicate")
                .field("message", message)
                .finish_non_exhaustive(),
            Self::Presence { message } => {
                f.debug_struct("Presence").field("message", message).finish()
            }
            Self::Catalog {
                name,
                args,
                message,
            } => f
                .debug_struct("Catalog")
                .field("name", name)
                .field("args", args)
                .field("message", message)
                .finish(),
        }
    }
}

/// A field's declared validator chain, as written by the form author.
#[derive(Debug, Clone)]
pub enum ValidatorDecl {
    /// An ordered chain. Possibly empty.
    Chain(Vec<ValidatorSpec>),
    /// Something that is not an ordered chain. Carries a short description
    /// of what was found instead.
    Malformed(String),
}

impl ValidatorDecl {
    pub fn chain(specs: impl IntoIterator<Item = ValidatorSpec>) -> Self {
        Self::Chain(specs.into_iter().collect())
    }

    pub fn malformed(found: impl Into<String>) -> Self {
        Self::Malformed(found.into())
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }
}

impl Default for ValidatorDecl {
    fn default() -> Self {
        Self::Chain(Vec::new())
    }
}

impl From<Vec<ValidatorSpec>> for ValidatorDecl {
    fn from(specs: Vec<ValidatorSpec>) -> Self {
        Self::Chain(specs)
    }
}

impl From<ValidatorSpec> for ValidatorDecl {
    /// A lone spec is not a chain.
    fn from(spec: ValidatorSpec) -> Self {
        Self::Malformed(format!("a single validator ({spec:?})"))
    }
}
