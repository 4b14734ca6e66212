//! Tests for binding a component tree to form state.

use std::sync::{Arc, Mutex};

use atomic_form::prelude::*;
use atomic_form::FieldsMut;
use formdom::{ChangeEvent, Node, dispatch_change, dispatch_change_by_name, find_named};
use serde_json::json;

// =============================================================================
// Initial state and adoption
// =============================================================================

#[test]
fn test_initial_state_prefers_get_initial_state() {
    let form = Form::new(
        FormHooks::new()
            .initial_data(json!({"a": 1}))
            .get_initial_state(|| json!({"a": 2})),
    );
    assert_eq!(form.state(), json!({"a": 2}));
}

#[test]
fn test_initial_state_from_initial_data() {
    let form = Form::new(FormHooks::new().initial_data(json!({"a": 1})));
    assert_eq!(form.state(), json!({"a": 1}));
    assert_eq!(form.value("a"), Some(json!(1)));
}

#[test]
fn test_initial_state_defaults_to_empty_object() {
    let form = Form::new(FormHooks::new());
    assert_eq!(form.state(), json!({}));
}

#[test]
fn test_adopts_initial_data_only_while_empty() {
    let form = Form::new(FormHooks::new());

    assert!(form.receive_initial_data(Some(&json!({"a": 1}))));
    assert_eq!(form.state(), json!({"a": 1}));

    assert!(!form.receive_initial_data(Some(&json!({"a": 2}))));
    assert_eq!(form.state(), json!({"a": 1}));

    form.replace_state(json!({}));
    assert!(form.receive_initial_data(Some(&json!({"a": 2}))));
    assert_eq!(form.state(), json!({"a": 2}));
}

#[test]
fn test_ignores_empty_initial_data() {
    let form = Form::new(FormHooks::new());
    assert!(!form.receive_initial_data(None));
    assert!(!form.receive_initial_data(Some(&json!({}))));
    assert_eq!(form.state(), json!({}));
}

#[test]
fn test_ignores_non_object_initial_data() {
    let form = Form::new(FormHooks::new());
    assert!(!form.receive_initial_data(Some(&json!(5))));
    assert!(!form.receive_initial_data(Some(&json!([1]))));
    assert!(!form.receive_initial_data(Some(&json!("a"))));
    assert_eq!(form.state(), json!({}));

    assert!(form.receive_initial_data(Some(&json!({"a": 1}))));
    assert_eq!(form.state(), json!({"a": 1}));
}

#[test]
fn test_non_object_seed_falls_back_to_empty_object() {
    let form = Form::new(FormHooks::new().initial_data(json!(5)));
    assert_eq!(form.state(), json!({}));

    let form = Form::new(FormHooks::new().get_initial_state(|| json!([1, 2])));
    assert_eq!(form.state(), json!({}));

    let mut root = form.render(vec![Node::text_input().name("a.b")]);
    assert!(dispatch_change_by_name(&mut root, "a.b", json!("x")));
    assert_eq!(form.state(), json!({"a": {"b": "x"}}));
}

// =============================================================================
// Change flow
// =============================================================================

#[test]
fn test_changes_write_nested_state() {
    let form = Form::new(FormHooks::new());
    let mut root = form.render(vec![
        Node::text_input().name("user.name"),
        Node::text_input().name("user.email"),
    ]);

    dispatch_change_by_name(&mut root, "user.name", json!("Ada"));
    dispatch_change_by_name(&mut root, "user.email", json!("ada@x.io"));

    assert_eq!(
        form.state(),
        json!({"user": {"name": "Ada", "email": "ada@x.io"}})
    );
    assert!(form.needs_update());
}

#[test]
fn test_original_handler_runs_before_binding() {
    let form = Form::new(FormHooks::new());
    let seen = Arc::new(Mutex::new(Vec::new()));

    let shared_state = form.state_handle();
    let log = seen.clone();
    let mut root = form.render(vec![
        Node::text_input()
            .id("name")
            .name("name")
            .on_change(move |event: &ChangeEvent| {
                log.lock().unwrap().push((
                    event.raw_value(),
                    shared_state.with(|data| data.get("name").cloned()),
                ));
            }),
    ]);

    assert!(dispatch_change(&mut root, "name", json!("Ada")));
    assert_eq!(form.value("name"), Some(json!("Ada")));
    // The original handler saw the new value before it reached the state.
    assert_eq!(*seen.lock().unwrap(), vec![(json!("Ada"), None)]);
}

#[test]
fn test_nested_children_are_bound() {
    let form = Form::new(FormHooks::new());
    let mut root = form.render(vec![
        Node::container()
            .label("Address")
            .child(Node::container().child(Node::text_input().name("address.city"))),
    ]);

    dispatch_change_by_name(&mut root, "address.city", json!("Oslo"));
    assert_eq!(form.state(), json!({"address": {"city": "Oslo"}}));
}

#[test]
fn test_unnamed_nodes_are_left_alone() {
    let form = Form::new(FormHooks::new());
    let root = form.render(vec![
        Node::text_input().id("plain"),
        Node::text_input().id("blank").name(""),
    ]);
    for child in root.child_nodes() {
        assert!(child.on_change.is_none());
    }
}

#[test]
fn test_toggle_changes_record_checked_state() {
    let form = Form::new(FormHooks::new());
    let mut root = form.render(vec![Node::checkbox().name("terms")]);

    dispatch_change_by_name(&mut root, "terms", json!(true));
    assert_eq!(form.value("terms"), Some(json!(true)));

    dispatch_change_by_name(&mut root, "terms", json!(false));
    assert_eq!(form.value("terms"), Some(json!(false)));
}

#[test]
fn test_custom_delimiter() {
    let form = Form::with_config(FormConfig::new("slashed").delimiter('/'), FormHooks::new());
    let mut root = form.render(vec![Node::text_input().name("user/name")]);

    dispatch_change_by_name(&mut root, "user/name", json!("Ada"));
    assert_eq!(form.state(), json!({"user": {"name": "Ada"}}));
    assert_eq!(form.value("user/name"), Some(json!("Ada")));
}

// =============================================================================
// Update cycle
// =============================================================================

#[test]
fn test_update_refreshes_displayed_values() {
    let form = Form::new(FormHooks::new().initial_data(json!({
        "user": {"name": "Ada", "email": ""},
        "age": 0,
        "terms": true,
    })));
    let mut root = form.render(vec![
        Node::text_input().name("user.name"),
        Node::text_input().name("user.email").value("typed"),
        Node::text_input().name("age"),
        Node::checkbox().name("terms"),
        Node::text_input().name("missing").value("kept"),
    ]);

    form.update(&mut root);

    let raw = |name: &str| find_named(&root, name).unwrap().raw_value();
    assert_eq!(raw("user.name"), json!("Ada"));
    assert_eq!(raw("user.email"), json!("typed"));
    assert_eq!(raw("age"), json!(0));
    assert_eq!(raw("terms"), json!(true));
    assert_eq!(raw("missing"), json!("kept"));
}

#[test]
fn test_update_clears_commit_flag() {
    let form = Form::new(FormHooks::new());
    let mut root = form.render(vec![Node::text_input().name("a")]);

    dispatch_change_by_name(&mut root, "a", json!("x"));
    assert!(form.needs_update());
    form.update(&mut root);
    assert!(!form.needs_update());
}

#[test]
fn test_update_form_data_hook_replaces_refresh() {
    let form = Form::new(
        FormHooks::new()
            .initial_data(json!({"a": "from state"}))
            .update_form_data(|fields: &mut FieldsMut<'_>| {
                for identifier in fields.identifiers() {
                    fields.set_raw(&identifier, json!("from hook"));
                }
            }),
    );
    let mut root = form.render(vec![Node::text_input().name("a"), Node::text_input().name("b")]);

    form.update(&mut root);

    assert_eq!(find_named(&root, "a").unwrap().raw_value(), json!("from hook"));
    assert_eq!(find_named(&root, "b").unwrap().raw_value(), json!("from hook"));
}

#[test]
fn test_registry_discovers_bound_fields_in_order() {
    let form = Form::new(FormHooks::new());
    let root = form.render(vec![
        Node::text_input().name("b"),
        Node::container().child(Node::text_input().name("a.x")),
        Node::text_input(),
    ]);
    let registry = form.registry(&root);
    assert_eq!(registry.identifiers().collect::<Vec<_>>(), ["b", "a.x"]);
}

#[test]
fn test_invalid_names_become_diagnostics() {
    let form = Form::new(FormHooks::new());
    let root = form.render(vec![Node::text_input().id("bad").name("a..b")]);
    let registry = form.registry(&root);
    assert!(registry.is_empty());
    assert_eq!(registry.diagnostics().len(), 1);
}
