//! Discovery of bound fields in a component tree.

use formdom::{InputKind, Node};
use serde_json::Value;

use crate::config::FormConfig;
use crate::error::{ConfigError, PathError};
use crate::path::{self, FieldPath, FormData};
use crate::validation::ValidatorDecl;

/// Attach a validator chain to a node.
///
/// The chain is stored in the node's extensions, so it survives tree
/// rewriting untouched.
pub trait ValidateExt {
    fn validators(self, decl: impl Into<ValidatorDecl>) -> Self;
    fn validator_decl(&self) -> Option<&ValidatorDecl>;
}

impl ValidateExt for Node {
    fn validators(self, decl: impl Into<ValidatorDecl>) -> Self {
        self.extension(decl.into())
    }

    fn validator_decl(&self) -> Option<&ValidatorDecl> {
        self.extensions.get::<ValidatorDecl>()
    }
}

/// Read access to a field's raw value as it was when discovered.
#[derive(Debug, Clone, PartialEq)]
pub struct RawAccessor {
    node_id: String,
    kind: Option<InputKind>,
    value: Value,
}

impl RawAccessor {
    pub fn new(node_id: impl Into<String>, kind: Option<InputKind>, value: Value) -> Self {
        Self {
            node_id: node_id.into(),
            kind,
            value,
        }
    }

    fn from_node(node: &Node) -> Self {
        Self::new(node.id.clone(), node.input_kind(), node.raw_value())
    }

    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    pub fn kind(&self) -> Option<InputKind> {
        self.kind
    }

    /// The raw value: checked state for toggles, value otherwise.
    pub fn read(&self) -> &Value {
        &self.value
    }
}

/// A bound field found during discovery.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub identifier: FieldPath,
    pub validators: ValidatorDecl,
    pub accessor: RawAccessor,
}

impl FieldDescriptor {
    /// Build a detached descriptor, mostly useful for validating data that
    /// did not come from a tree.
    pub fn new(
        identifier: &str,
        validators: impl Into<ValidatorDecl>,
    ) -> Result<Self, PathError> {
        let identifier = FieldPath::parse(identifier)?;
        Ok(Self {
            accessor: RawAccessor::new(identifier.as_str(), None, Value::Null),
            identifier,
            validators: validators.into(),
        })
    }

    pub fn with_value(mut self, value: Value) -> Self {
        self.accessor.value = value;
        self
    }
}

/// The bound fields of one tree, in discovery order.
///
/// Rebuilt from scratch on every traversal; descriptors carry no identity
/// between passes.
#[derive(Debug, Clone, Default)]
pub struct FieldRegistry {
    fields: Vec<FieldDescriptor>,
    diagnostics: Vec<ConfigError>,
}

impl FieldRegistry {
    /// Walk `root` depth-first, pre-order, and record every bound node.
    ///
    /// Unbound wrappers contribute nothing but their children are still
    /// visited. The tree is not modified.
    pub fn discover(root: &Node, config: &FormConfig) -> Self {
        let mut registry = Self::default();
        registry.visit(root, config);
        log::trace!(
            "[registry] {}: discovered {} field(s)",
            config.name,
            registry.len()
        );
        registry
    }

    fn visit(&mut self, node: &Node, config: &FormConfig) {
        if let Some(name) = node.field_name() {
            match FieldPath::parse_with(name, config.delimiter) {
                Ok(identifier) => self.insert(FieldDescriptor {
                    identifier,
                    validators: node.validator_decl().cloned().unwrap_or_default(),
                    accessor: RawAccessor::from_node(node),
                }),
                Err(source) => {
                    let error = ConfigError::InvalidIdentifier {
                        node: node.id.clone(),
                        source,
                    };
                    log::warn!("[registry] {error}");
                    self.diagnostics.push(error);
                }
            }
        }

        for child in node.child_nodes() {
            self.visit(child, config);
        }
    }

    pub fn from_fields(fields: impl IntoIterator<Item = FieldDescriptor>) -> Self {
        let mut registry = Self::default();
        for field in fields {
            registry.insert(field);
        }
        registry
    }

    /// Add a descriptor. A repeated identifier replaces the earlier
    /// descriptor but keeps its position.
    pub fn insert(&mut self, descriptor: FieldDescriptor) {
        match self
            .fields
            .iter_mut()
            .find(|field| field.identifier == descriptor.identifier)
        {
            Some(existing) => *existing = descriptor,
            None => self.fields.push(descriptor),
        }
    }

    pub fn get(&self, identifier: &str) -> Option<&FieldDescriptor> {
        self.fields
            .iter()
            .find(|field| field.identifier.as_str() == identifier)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter()
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.identifier.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Names that could not be used as identifiers.
    pub fn diagnostics(&self) -> &[ConfigError] {
        &self.diagnostics
    }

    /// Collection pass: merge every field's raw value into one data object.
    pub fn assemble(&self) -> FormData {
        path::assemble(
            self.fields
                .iter()
                .map(|field| (field.identifier.clone(), field.accessor.read().clone())),
        )
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_duplicate_identifier_replaces_in_place() {
        let registry = FieldRegistry::from_fields([
            FieldDescriptor::new("a", ValidatorDecl::default()).unwrap().with_value(json!(1)),
            FieldDescriptor::new("b", ValidatorDecl::default()).unwrap(),
            FieldDescriptor::new("a", ValidatorDecl::default()).unwrap().with_value(json!(2)),
        ]);

        assert_eq!(registry.identifiers().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(registry.get("a").unwrap().accessor.read(), &json!(2));
    }
}
