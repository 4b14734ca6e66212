//! Field identifiers and the nested form data they address.
//!
//! A field identifier such as `"address.city"` names a location inside a
//! nested JSON object. [`write`] places a value at that location without
//! disturbing siblings, [`read`] fetches it back, and [`assemble`] builds a
//! whole data object from a collection pass.

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::error::PathError;

/// Default separator between identifier segments.
pub const DEFAULT_DELIMITER: char = '.';

/// Nested form data. Always a JSON object at the root.
pub type FormData = Value;

/// A parsed field identifier: one or more non-empty segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldPath {
    identifier: String,
    segments: Vec<String>,
}

impl FieldPath {
    /// Parse an identifier using the default `.` delimiter.
    pub fn parse(identifier: &str) -> Result<Self, PathError> {
        Self::parse_with(identifier, DEFAULT_DELIMITER)
    }

    pub fn parse_with(identifier: &str, delimiter: char) -> Result<Self, PathError> {
        if identifier.is_empty() {
            return Err(PathError::Empty);
        }

        let segments: Vec<String> = identifier.split(delimiter).map(str::to_string).collect();
        if let Some(position) = segments.iter().position(String::is_empty) {
            return Err(PathError::EmptySegment {
                identifier: identifier.to_string(),
                position,
            });
        }

        Ok(Self {
            identifier: identifier.to_string(),
            segments,
        })
    }

    /// The identifier as declared.
    pub fn as_str(&self) -> &str {
        &self.identifier
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The first segment. Always present.
    pub fn head(&self) -> &str {
        &self.segments[0]
    }

    /// Number of segments.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// True when the identifier addresses a key of the root object.
    pub fn is_root_level(&self) -> bool {
        self.segments.len() == 1
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identifier)
    }
}

impl FromStr for FieldPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A fresh, empty data object.
pub fn empty() -> FormData {
    Value::Object(Map::new())
}

/// True for `null` and for an object with no keys.
pub fn is_empty(data: &FormData) -> bool {
    match data {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// Read the value at `path`, or `None` if any segment is absent.
pub fn read<'a>(root: &'a FormData, path: &FieldPath) -> Option<&'a Value> {
    path.segments()
        .iter()
        .try_fold(root, |node, segment| node.as_object()?.get(segment))
}

/// Write `value` at `path`, mutating `root` in place.
///
/// Every enclosing object on the way to the leaf is kept, so siblings at
/// every level survive. The leaf itself is overwritten, never merged.
/// Scalars standing where an object is needed are replaced by one.
pub fn write(root: &mut FormData, path: &FieldPath, value: Value) {
    let Some((leaf, parents)) = path.segments().split_last() else {
        return;
    };

    let mut node = root;
    for segment in parents {
        node = object_mut(node)
            .entry(segment.clone())
            .or_insert_with(empty);
    }
    object_mut(node).insert(leaf.clone(), value);
}

/// The object at `value`, replacing any non-object first.
fn object_mut(value: &mut Value) -> &mut Map<String, Value> {
    if !value.is_object() {
        *value = empty();
    }
    let Value::Object(map) = value else {
        unreachable!("value was just made an object");
    };
    map
}

/// Deep-merge `source` into `target`. Objects merge key by key; anything
/// else in `source` replaces what is in `target`.
pub fn merge(target: &mut Value, source: Value) {
    match (target, source) {
        (Value::Object(target), Value::Object(source)) => {
            for (key, value) in source {
                match target.get_mut(&key) {
                    Some(slot) => merge(slot, value),
                    None => {
                        target.insert(key, value);
                    }
                }
            }
        }
        (target, source) => *target = source,
    }
}

/// Build a data object from `(path, value)` pairs, written in order.
pub fn assemble<I>(pairs: I) -> FormData
where
    I: IntoIterator<Item = (FieldPath, Value)>,
{
    let mut data = empty();
    for (path, value) in pairs {
        write(&mut data, &path, value);
    }
    data
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn path(s: &str) -> FieldPath {
        FieldPath::parse(s).unwrap()
    }

    #[test]
    fn test_parse_segments() {
        let p = path("address.city");
        assert_eq!(p.segments(), ["address", "city"]);
        assert_eq!(p.head(), "address");
        assert!(!p.is_root_level());
        assert!(path("name").is_root_level());
    }

    #[test]
    fn test_parse_rejects_empty_segments() {
        assert_eq!(FieldPath::parse(""), Err(PathError::Empty));
        for bad in ["a..b", ".a", "a."] {
            assert!(matches!(
                FieldPath::parse(bad),
                Err(PathError::EmptySegment { .. })
            ));
        }
    }

    #[test]
    fn test_parse_with_custom_delimiter() {
        let p = FieldPath::parse_with("user/name", '/').unwrap();
        assert_eq!(p.segments(), ["user", "name"]);
        assert_eq!(p.as_str(), "user/name");
    }

    #[test]
    fn test_write_replaces_scalar_on_the_way() {
        let mut root = json!({"a": {"b": 5, "keep": 1}});
        write(&mut root, &path("a.b.c"), json!(2));
        assert_eq!(root, json!({"a": {"b": {"c": 2}, "keep": 1}}));
    }

    #[test]
    fn test_write_replaces_non_object_root() {
        let mut root = json!("scalar");
        write(&mut root, &path("a"), json!(1));
        assert_eq!(root, json!({"a": 1}));
    }
}
