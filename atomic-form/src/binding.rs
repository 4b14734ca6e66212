//! Two-way binding between a component tree and the form state.

use std::sync::Arc;

use formdom::{ChangeEvent, ChangeHandler, Content, Node, compose};
use serde_json::Value;

use crate::config::FormConfig;
use crate::hooks::{FieldsMut, FormHooks};
use crate::path::{self, FieldPath, FormData};
use crate::registry::FieldRegistry;
use crate::state::State;
use crate::submit::SubmitPhase;
use crate::validation::{CatalogRegistry, ValidationResult, ValidatorCatalog};

/// A form bound to a component tree.
///
/// Owns the form state. [`Form::render`] wires every bound node's change
/// handler to that state, [`Form::update`] pushes the state back into the
/// displayed values, and [`Form::submit`] runs the collect/validate/branch
/// workflow.
///
/// # Example
///
/// ```
/// use atomic_form::{Form, FormHooks};
/// use formdom::{Node, dispatch_change_by_name};
/// use serde_json::json;
///
/// let form = Form::new(FormHooks::new());
/// let mut root = form.render(vec![
///     Node::text_input().name("user.name"),
///     Node::text_input().name("user.email"),
/// ]);
///
/// dispatch_change_by_name(&mut root, "user.name", json!("Ada"));
/// dispatch_change_by_name(&mut root, "user.email", json!("ada@x.io"));
/// form.update(&mut root);
///
/// assert_eq!(form.state(), json!({"user": {"name": "Ada", "email": "ada@x.io"}}));
/// ```
pub struct Form {
    pub(crate) config: FormConfig,
    pub(crate) hooks: FormHooks,
    pub(crate) catalog: Arc<dyn ValidatorCatalog>,
    pub(crate) state: State<FormData>,
    pub(crate) phase: SubmitPhase,
    pub(crate) submit_count: u32,
    pub(crate) last_result: Option<ValidationResult>,
}

impl Form {
    pub fn new(hooks: FormHooks) -> Self {
        Self::with_config(FormConfig::default(), hooks)
    }

    /// Create a form, seeding its state from the hooks.
    pub fn with_config(config: FormConfig, hooks: FormHooks) -> Self {
        let seed = match hooks.seed() {
            Some(data) if data.is_object() => data,
            Some(other) => {
                log::warn!(
                    "[form] {}: initial state must be an object, ignoring {other}",
                    config.name
                );
                path::empty()
            }
            None => path::empty(),
        };
        log::debug!(
            "[form] {}: created with {} state",
            config.name,
            if path::is_empty(&seed) { "empty" } else { "seeded" }
        );
        Self {
            config,
            hooks,
            catalog: Arc::new(CatalogRegistry::basic()),
            state: State::new(seed),
            phase: SubmitPhase::Idle,
            submit_count: 0,
            last_result: None,
        }
    }

    /// Replace the validator catalog used for named validators.
    pub fn with_catalog(mut self, catalog: impl ValidatorCatalog + 'static) -> Self {
        self.catalog = Arc::new(catalog);
        self
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn catalog(&self) -> &dyn ValidatorCatalog {
        self.catalog.as_ref()
    }

    // State

    /// Snapshot of the current form state.
    pub fn state(&self) -> FormData {
        self.state.get()
    }

    /// Current state value at `identifier`, if present.
    pub fn value(&self, identifier: &str) -> Option<Value> {
        let path = FieldPath::parse_with(identifier, self.config.delimiter).ok()?;
        self.state.with(|data| path::read(data, &path).cloned())
    }

    /// Another handle to this form's state. Writes through it are commits.
    pub fn state_handle(&self) -> State<FormData> {
        self.state.clone()
    }

    /// Override the state wholesale.
    pub fn replace_state(&self, data: FormData) {
        log::debug!("[form] {}: state replaced", self.config.name);
        self.state.set(data);
    }

    /// Offer new external initial data.
    ///
    /// Adopted only while the state is empty and the offered data is a
    /// non-empty object; once the state holds anything, further offers are
    /// ignored. Returns whether the data was adopted.
    pub fn receive_initial_data(&self, initial: Option<&FormData>) -> bool {
        let Some(initial) = initial.filter(|data| data.is_object() && !path::is_empty(data)) else {
            return false;
        };
        if !self.state.with(path::is_empty) {
            log::debug!(
                "[form] {}: ignoring initial data, state already populated",
                self.config.name
            );
            return false;
        }
        log::debug!("[form] {}: adopting initial data", self.config.name);
        self.state.set(initial.clone());
        true
    }

    /// True when the state was committed since the last update cycle.
    pub fn needs_update(&self) -> bool {
        self.state.is_dirty()
    }

    // Tree

    /// Discover the bound fields of a tree.
    pub fn registry(&self, root: &Node) -> FieldRegistry {
        FieldRegistry::discover(root, &self.config)
    }

    /// Wrap `children` in a submit-capable form node, binding every field.
    pub fn render(&self, children: Vec<Node>) -> Node {
        let children = children.into_iter().map(|child| self.bind(child));
        Node::form().children(children)
    }

    /// Rewrite a subtree so every bound node writes its changes into the
    /// form state.
    ///
    /// A bound node keeps all its props; only its change handler is replaced
    /// by one that runs the original handler first and then records the new
    /// raw value. Children are rewritten the same way, bound or not.
    pub fn bind(&self, mut node: Node) -> Node {
        if let Some(path) = self.bound_path(&node) {
            let original = node.on_change.take();
            node.on_change = Some(compose(original, self.change_handler(path)));
        }

        node.content = match node.content {
            Content::Children(children) => {
                Content::Children(children.into_iter().map(|child| self.bind(child)).collect())
            }
            other => other,
        };
        node
    }

    fn bound_path(&self, node: &Node) -> Option<FieldPath> {
        let name = node.field_name()?;
        match FieldPath::parse_with(name, self.config.delimiter) {
            Ok(path) => Some(path),
            Err(error) => {
                log::warn!(
                    "[form] {}: node '{}' left unbound: {error}",
                    self.config.name,
                    node.id
                );
                None
            }
        }
    }

    fn change_handler(&self, path: FieldPath) -> ChangeHandler {
        let state = self.state.clone();
        Arc::new(move |event: &ChangeEvent| {
            let value = event.raw_value();
            log::debug!("[form] {path} <- {value}");
            state.update(|data| path::write(data, &path, value));
        })
    }

    /// Run an update cycle: refresh every bound field's displayed value from
    /// the state.
    ///
    /// If an `update_form_data` hook is set it owns the refresh entirely and
    /// nothing is synchronized implicitly.
    pub fn update(&self, root: &mut Node) {
        match &self.hooks.update_form_data {
            Some(update_form_data) => update_form_data(&mut FieldsMut::new(root)),
            None => self.state.with(|data| self.refresh(root, data)),
        }
        self.state.clear_dirty();
    }

    fn refresh(&self, node: &mut Node, data: &FormData) {
        if let Some(path) = node
            .field_name()
            .and_then(|name| FieldPath::parse_with(name, self.config.delimiter).ok())
        {
            if let Some(value) = path::read(data, &path).filter(|value| is_displayable(value)) {
                node.set_raw_value(value.clone());
            }
        }

        for child in node.child_nodes_mut() {
            self.refresh(child, data);
        }
    }
}

impl std::fmt::Debug for Form {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Form")
            .field("config", &self.config)
            .field("hooks", &self.hooks)
            .field("state", &self.state.get())
            .field("phase", &self.phase)
            .field("submit_count", &self.submit_count)
            .finish_non_exhaustive()
    }
}

/// Whether a state value should overwrite what a field displays. Absent,
/// `null`, `""` and empty containers leave the field alone.
fn is_displayable(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(_) | Value::Number(_) => true,
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
