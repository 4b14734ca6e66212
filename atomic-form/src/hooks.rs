//! Optional collaborators a [`Form`](crate::Form) defers to.

use std::fmt;

use formdom::{Node, collect_named, find_last_named, find_last_named_mut};
use serde_json::Value;

use crate::path::FormData;
use crate::validation::ValidationResult;

type InitialStateFn = Box<dyn Fn() -> FormData + Send + Sync>;
type UpdateFormDataFn = Box<dyn Fn(&mut FieldsMut<'_>) + Send + Sync>;
type CollectFormDataFn = Box<dyn Fn(&Fields<'_>) -> FormData + Send + Sync>;
type DoSubmitFn = Box<dyn Fn(&FormData, &ValidationResult) + Send + Sync>;
type AfterValidationFn = Box<dyn Fn(&ValidationResult) + Send + Sync>;

/// Hooks that override or complete the default form behavior.
///
/// Every hook is optional.
///
/// # Example
///
/// ```
/// use atomic_form::FormHooks;
/// use serde_json::json;
///
/// let hooks = FormHooks::new()
///     .initial_data(json!({"user": {"name": "Ada"}}))
///     .do_submit(|data, _| println!("submitting {data}"))
///     .after_validation(|result| println!("{} invalid field(s)", result.invalid_fields().count()));
/// ```
#[derive(Default)]
pub struct FormHooks {
    pub(crate) get_initial_state: Option<InitialStateFn>,
    pub(crate) initial_data: Option<FormData>,
    pub(crate) update_form_data: Option<UpdateFormDataFn>,
    pub(crate) collect_form_data: Option<CollectFormDataFn>,
    pub(crate) do_submit: Option<DoSubmitFn>,
    pub(crate) after_validation: Option<AfterValidationFn>,
}

impl FormHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce the initial state, taking precedence over `initial_data`.
    pub fn get_initial_state<F>(mut self, f: F) -> Self
    where
        F: Fn() -> FormData + Send + Sync + 'static,
    {
        self.get_initial_state = Some(Box::new(f));
        self
    }

    /// Seed data for the form state.
    pub fn initial_data(mut self, data: FormData) -> Self {
        self.initial_data = Some(data);
        self
    }

    /// Take over the refresh of displayed values on every update cycle.
    pub fn update_form_data<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut FieldsMut<'_>) + Send + Sync + 'static,
    {
        self.update_form_data = Some(Box::new(f));
        self
    }

    /// Take over the collection pass on submit.
    pub fn collect_form_data<F>(mut self, f: F) -> Self
    where
        F: Fn(&Fields<'_>) -> FormData + Send + Sync + 'static,
    {
        self.collect_form_data = Some(Box::new(f));
        self
    }

    /// Called with the collected data when every field is valid.
    pub fn do_submit<F>(mut self, f: F) -> Self
    where
        F: Fn(&FormData, &ValidationResult) + Send + Sync + 'static,
    {
        self.do_submit = Some(Box::new(f));
        self
    }

    /// Called with the validation result when some field is invalid.
    pub fn after_validation<F>(mut self, f: F) -> Self
    where
        F: Fn(&ValidationResult) + Send + Sync + 'static,
    {
        self.after_validation = Some(Box::new(f));
        self
    }

    /// Initial state per the hooks: `get_initial_state`, else
    /// `initial_data`, else `None`.
    pub(crate) fn seed(&self) -> Option<FormData> {
        match &self.get_initial_state {
            Some(get_initial_state) => Some(get_initial_state()),
            None => self.initial_data.clone(),
        }
    }
}

impl fmt::Debug for FormHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormHooks")
            .field("get_initial_state", &self.get_initial_state.is_some())
            .field("initial_data", &self.initial_data)
            .field("update_form_data", &self.update_form_data.is_some())
            .field("collect_form_data", &self.collect_form_data.is_some())
            .field("do_submit", &self.do_submit.is_some())
            .field("after_validation", &self.after_validation.is_some())
            .finish()
    }
}

/// Read-only view of the bound fields of a tree.
///
/// Lookups by name resolve to the last node in tree order declaring it, the
/// same node the default collection pass reads.
pub struct Fields<'a> {
    root: &'a Node,
}

impl<'a> Fields<'a> {
    pub fn new(root: &'a Node) -> Self {
        Self { root }
    }

    /// Declared field names, in tree order, without duplicates.
    pub fn identifiers(&self) -> Vec<&'a str> {
        let mut identifiers: Vec<&str> = Vec::new();
        for name in collect_named(self.root)
            .into_iter()
            .filter_map(Node::field_name)
        {
            if !identifiers.contains(&name) {
                identifiers.push(name);
            }
        }
        identifiers
    }

    /// Current raw value of the field, if it exists.
    pub fn raw(&self, identifier: &str) -> Option<Value> {
        find_last_named(self.root, identifier).map(Node::raw_value)
    }

    pub fn node(&self, identifier: &str) -> Option<&'a Node> {
        find_last_named(self.root, identifier)
    }
}

/// Mutable view of the bound fields of a tree.
pub struct FieldsMut<'a> {
    root: &'a mut Node,
}

impl<'a> FieldsMut<'a> {
    pub fn new(root: &'a mut Node) -> Self {
        Self { root }
    }

    pub fn identifiers(&self) -> Vec<String> {
        Fields::new(&*self.root)
            .identifiers()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn raw(&self, identifier: &str) -> Option<Value> {
        find_last_named(&*self.root, identifier).map(Node::raw_value)
    }

    /// Set the displayed raw value of a field. Returns false if no such field.
    pub fn set_raw(&mut self, identifier: &str, value: Value) -> bool {
        match find_last_named_mut(self.root, identifier) {
            Some(node) => {
                node.set_raw_value(value);
                true
            }
            None => false,
        }
    }

    pub fn node_mut(&mut self, identifier: &str) -> Option<&mut Node> {
        find_last_named_mut(self.root, identifier)
    }
}
