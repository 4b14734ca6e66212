//! Named validators referenced from validator chains.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};
use serde_json::Value;

use crate::error::CatalogError;

/// Lookup of named validators.
///
/// Implement this to plug an existing validator library into forms. The
/// engine passes the field value (absent fields as `None`) and the
/// positional arguments declared on the chain step.
pub trait ValidatorCatalog: Send + Sync {
    fn check(
        &self,
        name: &str,
        value: Option<&Value>,
        args: &[Value],
    ) -> Result<bool, CatalogError>;
}

/// A catalog entry.
pub type CatalogFn =
    Box<dyn Fn(Option<&Value>, &[Value]) -> Result<bool, CatalogError> + Send + Sync>;

/// A catalog backed by a map of named functions.
#[derive(Default)]
pub struct CatalogRegistry {
    entries: HashMap<String, CatalogFn>,
}

impl CatalogRegistry {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog with the common string checks registered.
    ///
    /// | Name          | Arguments              |
    /// |---------------|------------------------|
    /// | `isEmail`     |                        |
    /// | `isUUID`      |                        |
    /// | `isNumeric`   |                        |
    /// | `matches`     | pattern, flags?        |
    /// | `isLength`    | min, max?              |
    /// | `equals`      | other                  |
    /// | `contains`    | needle                 |
    /// | `isIn`        | array of options       |
    pub fn basic() -> Self {
        Self::new()
            .with("isEmail", |value, _| {
                Ok(email_address::EmailAddress::is_valid(&coerce_to_string(value)))
            })
            .with("isUUID", |value, _| {
                Ok(uuid::Uuid::parse_str(&coerce_to_string(value)).is_ok())
            })
            .with("isNumeric", |value, _| {
                Ok(numeric_pattern().is_match(&coerce_to_string(value)))
            })
            .with("matches", matches)
            .with("isLength", is_length)
            .with("equals", |value, args| {
                let other = string_arg("equals", args, 0)?;
                Ok(coerce_to_string(value) == other)
            })
            .with("contains", |value, args| {
                let needle = string_arg("contains", args, 0)?;
                Ok(coerce_to_string(value).contains(&needle))
            })
            .with("isIn", |value, args| {
                let Some(Value::Array(options)) = args.first() else {
                    return Err(CatalogError::bad_arguments(
                        "isIn",
                        "expected an array of options",
                    ));
                };
                let value = coerce_to_string(value);
                Ok(options
                    .iter()
                    .any(|option| coerce_to_string(Some(option)) == value))
            })
    }

    /// Register (or replace) a named validator.
    pub fn register<F>(&mut self, name: impl Into<String>, f: F) -> &mut Self
    where
        F: Fn(Option<&Value>, &[Value]) -> Result<bool, CatalogError> + Send + Sync + 'static,
    {
        self.entries.insert(name.into(), Box::new(f));
        self
    }

    /// Builder form of [`CatalogRegistry::register`].
    pub fn with<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(Option<&Value>, &[Value]) -> Result<bool, CatalogError> + Send + Sync + 'static,
    {
        self.register(name, f);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl ValidatorCatalog for CatalogRegistry {
    fn check(
        &self,
        name: &str,
        value: Option<&Value>,
        args: &[Value],
    ) -> Result<bool, CatalogError> {
        let entry = self
            .entries
            .get(name)
            .ok_or_else(|| CatalogError::UnknownValidator(name.to_string()))?;
        entry(value, args)
    }
}

impl fmt::Debug for CatalogRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("CatalogRegistry")
            .field("entries", &names)
            .finish()
    }
}

/// String view of a field value, the way string validators see it.
///
/// Absent and `null` become `""`; strings are taken as-is; everything else is
/// rendered as JSON.
pub fn coerce_to_string(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn numeric_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[+-]?([0-9]*[.])?[0-9]+$").expect("Invalid regex pattern"))
}

fn matches(value: Option<&Value>, args: &[Value]) -> Result<bool, CatalogError> {
    let pattern = string_arg("matches", args, 0)?;
    let flags = match args.get(1) {
        Some(Value::String(flags)) => flags.as_str(),
        _ => "",
    };
    let regex = RegexBuilder::new(&pattern)
        .case_insensitive(flags.contains('i'))
        .multi_line(flags.contains('m'))
        .dot_matches_new_line(flags.contains('s'))
        .build()
        .map_err(|e| CatalogError::InvalidPattern {
            pattern: pattern.clone(),
            reason: e.to_string(),
        })?;
    Ok(regex.is_match(&coerce_to_string(value)))
}

/// `isLength(min, max?)` or `isLength({"min": .., "max": ..})`, counted in chars.
fn is_length(value: Option<&Value>, args: &[Value]) -> Result<bool, CatalogError> {
    let (min, max) = match args {
        [Value::Object(bounds), ..] => (
            bounds.get("min").and_then(Value::as_u64).unwrap_or(0),
            bounds.get("max").and_then(Value::as_u64),
        ),
        [min, rest @ ..] => {
            let min = min.as_u64().ok_or_else(|| {
                CatalogError::bad_arguments("isLength", "min must be a non-negative integer")
            })?;
            (min, rest.first().and_then(Value::as_u64))
        }
        [] => (0, None),
    };
    let len = coerce_to_string(value).chars().count() as u64;
    Ok(len >= min && max.is_none_or(|max| len <= max))
}

fn string_arg(name: &str, args: &[Value], index: usize) -> Result<String, CatalogError> {
    match args.get(index) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Ok(other.to_string()),
        None => Err(CatalogError::bad_arguments(
            name,
            format!("missing argument {index}"),
        )),
    }
}
