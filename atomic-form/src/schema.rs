//! Declarative form documents.
//!
//! A schema describes the fields of a form in JSON:
//!
//! ```json
//! {
//!   "config": { "name": "signup" },
//!   "initial_data": { "user": { "name": "Ada" } },
//!   "fields": [
//!     { "group": "Account", "fields": [
//!       { "name": "user.name", "type": "text", "validate": [
//!         { "validate": "isPresent", "message": "Required" }
//!       ]},
//!       { "name": "user.email", "type": "email", "validate": [
//!         "isPresent",
//!         { "validate": "isEmail", "message": "Invalid email" }
//!       ]}
//!     ]},
//!     { "name": "terms", "type": "checkbox", "label": "I agree" }
//!   ]
//! }
//! ```
//!
//! Groups become unbound containers; fields become bound inputs carrying
//! their validator chains.

use formdom::{InputKind, Node};
use serde::Deserialize;
use serde_json::Value;

use crate::config::FormConfig;
use crate::error::SchemaError;
use crate::path::FormData;
use crate::registry::ValidateExt;
use crate::validation::{PRESENCE, ValidatorDecl, ValidatorSpec};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormSchema {
    #[serde(default)]
    pub config: FormConfig,
    #[serde(default)]
    pub initial_data: Option<FormData>,
    #[serde(default)]
    pub fields: Vec<SchemaNode>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SchemaNode {
    Group {
        group: String,
        #[serde(default)]
        fields: Vec<SchemaNode>,
    },
    Field(FieldSchema),
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldSchema {
    pub name: String,
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(default)]
    pub checked: Option<bool>,
    #[serde(default)]
    pub validate: Option<Value>,
}

fn default_kind() -> String {
    InputKind::Text.as_str().to_string()
}

impl FormSchema {
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let schema: Self = serde_json::from_str(json)?;
        match &schema.initial_data {
            Some(data) if !data.is_object() => Err(SchemaError::InitialDataNotObject),
            _ => Ok(schema),
        }
    }

    /// Build the component tree described by the schema, without the
    /// enclosing form node.
    pub fn build(&self) -> Result<Vec<Node>, SchemaError> {
        self.fields.iter().map(SchemaNode::build).collect()
    }
}

impl SchemaNode {
    fn build(&self) -> Result<Node, SchemaError> {
        match self {
            Self::Group { group, fields } => {
                let children = fields
                    .iter()
                    .map(SchemaNode::build)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Node::container().label(group.clone()).children(children))
            }
            Self::Field(field) => field.build(),
        }
    }
}

impl FieldSchema {
    fn build(&self) -> Result<Node, SchemaError> {
        let kind: InputKind = self
            .kind
            .parse()
            .map_err(|_| SchemaError::UnknownInputKind {
                field: self.name.clone(),
                kind: self.kind.clone(),
            })?;

        let mut node = Node::input(kind)
            .id(format!("field:{}", self.name))
            .name(self.name.clone());
        if let Some(label) = &self.label {
            node = node.label(label.clone());
        }
        if let Some(value) = &self.value {
            node = node.value(value.clone());
        }
        if let Some(checked) = self.checked {
            node = node.checked(checked);
        }
        if let Some(validate) = &self.validate {
            node = node.validators(self.validator_decl(validate)?);
        }
        Ok(node)
    }

    /// An array becomes a chain; anything else is kept as a malformed
    /// declaration and reported when the form validates.
    fn validator_decl(&self, validate: &Value) -> Result<ValidatorDecl, SchemaError> {
        let Value::Array(entries) = validate else {
            return Ok(ValidatorDecl::malformed(describe(validate)));
        };
        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| self.validator_spec(index, entry))
            .collect::<Result<Vec<_>, _>>()
            .map(ValidatorDecl::Chain)
    }

    fn validator_spec(&self, index: usize, entry: &Value) -> Result<ValidatorSpec, SchemaError> {
        let invalid = |reason: &str| SchemaError::InvalidValidator {
            field: self.name.clone(),
            index,
            reason: reason.to_string(),
        };

        let (name, args, message) = match entry {
            Value::String(name) => (name.as_str(), Vec::new(), None),
            Value::Object(entry) => {
                let name = entry
                    .get("validate")
                    .and_then(Value::as_str)
                    .ok_or_else(|| invalid("missing validator name"))?;
                let args = match entry.get("args") {
                    None | Some(Value::Null) => Vec::new(),
                    Some(Value::Array(args)) => args.clone(),
                    Some(_) => return Err(invalid("args must be an array")),
                };
                let message = match entry.get("message") {
                    None | Some(Value::Null) => None,
                    Some(Value::String(message)) => Some(message.clone()),
                    Some(_) => return Err(invalid("message must be a string")),
                };
                (name, args, message)
            }
            _ => return Err(invalid("expected a validator name or object")),
        };

        let spec = if name == PRESENCE {
            ValidatorSpec::presence()
        } else {
            ValidatorSpec::catalog(name, args)
        };
        Ok(match message {
            Some(message) => spec.with_message(message),
            None => spec,
        })
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
    .to_string()
}
