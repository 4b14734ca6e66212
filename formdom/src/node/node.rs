use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde_json::Value;

use super::{Content, Extensions};
use crate::event::{ChangeEvent, ChangeHandler};
use crate::types::{InputKind, NodeKind};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Clone)]
pub struct Node {
    // Identity
    pub id: String,
    pub kind: NodeKind,

    // Content
    pub content: Content,

    // Field
    /// Binding key. A node with a non-empty name takes part in forms.
    pub name: Option<String>,
    /// Current raw value for non-toggle inputs.
    pub value: Value,
    /// Current checked state for toggle inputs.
    pub checked: bool,
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub disabled: bool,

    // Interaction
    pub on_change: Option<ChangeHandler>,

    /// Typed data attached by higher layers.
    pub extensions: Extensions,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            id: generate_id("node"),
            kind: NodeKind::Container,
            content: Content::None,
            name: None,
            value: Value::Null,
            checked: false,
            label: None,
            placeholder: None,
            disabled: false,
            on_change: None,
            extensions: Extensions::new(),
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("name", &self.name)
            .field("value", &self.value)
            .field("checked", &self.checked)
            .field("on_change", &self.on_change.is_some())
            .field("content", &self.content)
            .finish_non_exhaustive()
    }
}

impl Node {
    pub fn container() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    /// Create the submit-capable root container.
    pub fn form() -> Self {
        Self {
            id: generate_id("form"),
            kind: NodeKind::Form,
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            kind: NodeKind::Label,
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self {
            id: generate_id("button"),
            kind: NodeKind::Button,
            content: Content::Text(label.into()),
            ..Default::default()
        }
    }

    pub fn input(kind: InputKind) -> Self {
        let value = if kind.is_toggle() {
            Value::Null
        } else {
            Value::String(String::new())
        };
        Self {
            id: generate_id(kind.as_str()),
            kind: NodeKind::Input(kind),
            value,
            ..Default::default()
        }
    }

    pub fn text_input() -> Self {
        Self::input(InputKind::Text)
    }

    pub fn checkbox() -> Self {
        Self::input(InputKind::Checkbox)
    }

    pub fn radio() -> Self {
        Self::input(InputKind::Radio)
    }

    pub fn select() -> Self {
        Self::input(InputKind::Select)
    }

    pub fn textarea() -> Self {
        Self::input(InputKind::TextArea)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Field
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = value.into();
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    // Interaction
    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(&ChangeEvent) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(handler));
        self
    }

    // Extensions
    pub fn extension<T>(mut self, value: T) -> Self
    where
        T: std::any::Any + Send + Sync,
    {
        self.extensions.insert(value);
        self
    }

    // Children
    pub fn child(mut self, child: Node) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Node>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    pub fn child_nodes(&self) -> &[Node] {
        self.content.children()
    }

    pub fn child_nodes_mut(&mut self) -> &mut [Node] {
        self.content.children_mut()
    }

    // Field access

    /// The binding key, if the node declares a non-empty one.
    pub fn field_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    pub fn input_kind(&self) -> Option<InputKind> {
        match self.kind {
            NodeKind::Input(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn is_toggle(&self) -> bool {
        self.input_kind().is_some_and(InputKind::is_toggle)
    }

    /// The value a form reads from this node: the checked state for
    /// toggles, the raw value otherwise.
    pub fn raw_value(&self) -> Value {
        if self.is_toggle() {
            Value::Bool(self.checked)
        } else {
            self.value.clone()
        }
    }

    /// Inverse of [`Node::raw_value`]. Toggles accept booleans, anything
    /// else sets `checked` from the value's truthiness.
    pub fn set_raw_value(&mut self, value: Value) {
        if self.is_toggle() {
            self.checked = match value {
                Value::Bool(checked) => checked,
                Value::Null => false,
                Value::String(s) => !s.is_empty(),
                Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
                Value::Array(_) | Value::Object(_) => true,
            };
        } else {
            self.value = value;
        }
    }
}
