use std::sync::Arc;

use serde_json::Value;

use crate::node::{find_last_named_mut, find_node_mut, Node};
use crate::types::InputKind;

/// Handler invoked after a node's raw value changed.
pub type ChangeHandler = Arc<dyn Fn(&ChangeEvent) + Send + Sync>;

/// A value edit on an input node.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeEvent {
    /// ID of the node that changed.
    pub target: String,
    /// Field name of the node, if it declares one.
    pub name: Option<String>,
    pub kind: Option<InputKind>,
    pub value: Value,
    pub checked: bool,
}

impl ChangeEvent {
    /// Snapshot the current state of a node.
    pub fn from_node(node: &Node) -> Self {
        Self {
            target: node.id.clone(),
            name: node.field_name().map(str::to_string),
            kind: node.input_kind(),
            value: node.value.clone(),
            checked: node.checked,
        }
    }

    /// Checked state for toggle inputs, the raw value otherwise.
    pub fn raw_value(&self) -> Value {
        if self.kind.is_some_and(InputKind::is_toggle) {
            Value::Bool(self.checked)
        } else {
            self.value.clone()
        }
    }
}

/// Chain two change handlers. `first` (if any) always runs before `then`.
pub fn compose(first: Option<ChangeHandler>, then: ChangeHandler) -> ChangeHandler {
    match first {
        Some(first) => Arc::new(move |event: &ChangeEvent| {
            first(event);
            then(event);
        }),
        None => then,
    }
}

/// Set the raw value of the node with the given ID and run its change
/// handler to completion.
///
/// Returns false if no such node exists.
pub fn dispatch_change(root: &mut Node, target: &str, value: Value) -> bool {
    let Some(node) = find_node_mut(root, target) else {
        log::debug!("[change] no node with id {target}");
        return false;
    };
    apply_change(node, value);
    true
}

/// Like [`dispatch_change`], addressing the node by field name.
///
/// With duplicate names the last node in tree order is targeted, the same
/// node a collection pass reads.
pub fn dispatch_change_by_name(root: &mut Node, name: &str, value: Value) -> bool {
    let Some(node) = find_last_named_mut(root, name) else {
        log::debug!("[change] no node named {name}");
        return false;
    };
    apply_change(node, value);
    true
}

fn apply_change(node: &mut Node, value: Value) {
    node.set_raw_value(value);
    let event = ChangeEvent::from_node(node);
    log::trace!("[change] {} -> {:?}", event.target, event.raw_value());
    if let Some(handler) = node.on_change.clone() {
        handler(&event);
    }
}

/// A submit action on a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitEvent {
    target: Option<String>,
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn targeted(target: impl Into<String>) -> Self {
        Self {
            target: Some(target.into()),
            default_prevented: false,
        }
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Cancel the default side effect of the submit.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}
