//! Tests for the validation engine and the basic catalog.

use atomic_form::validation::{
    CatalogRegistry, ValidatorCatalog, ValidatorDecl, ValidatorSpec, validate,
};
use atomic_form::{CatalogError, ConfigError, FieldDescriptor, FieldRegistry, ValidatorFault};
use serde_json::{Value, json};

fn field(identifier: &str, decl: impl Into<ValidatorDecl>) -> FieldDescriptor {
    FieldDescriptor::new(identifier, decl).unwrap()
}

fn always(verdict: bool) -> ValidatorSpec {
    ValidatorSpec::predicate(move |_: Option<&Value>, _: &Value| verdict)
}

// =============================================================================
// Chains
// =============================================================================

#[test]
fn test_empty_registry_is_vacuously_valid() {
    let registry = FieldRegistry::default();
    let result = validate(&json!({"x": 1}), &registry, &CatalogRegistry::basic()).unwrap();
    assert!(result.is_empty());
    assert!(result.all_valid());
}

#[test]
fn test_field_without_validators_is_valid() {
    let registry = FieldRegistry::from_fields([field("name", ValidatorDecl::default())]);
    let result = validate(&json!({}), &registry, &CatalogRegistry::basic()).unwrap();
    assert_eq!(result.is_valid("name"), Some(true));
    assert!(result.messages("name").is_empty());
}

#[test]
fn test_chain_reports_only_failing_steps() {
    let registry = FieldRegistry::from_fields([field(
        "name",
        vec![
            always(true).with_message("never shown"),
            always(false).with_message("Failed"),
        ],
    )]);
    let result = validate(&json!({}), &registry, &CatalogRegistry::basic()).unwrap();
    assert_eq!(result.is_valid("name"), Some(false));
    assert_eq!(result.messages("name"), ["Failed"]);
}

#[test]
fn test_every_step_runs() {
    let registry = FieldRegistry::from_fields([field(
        "name",
        vec![
            always(false).with_message("first"),
            always(true),
            always(false).with_message("second"),
        ],
    )]);
    let result = validate(&json!({}), &registry, &CatalogRegistry::basic()).unwrap();
    assert_eq!(result.messages("name"), ["first", "second"]);
}

#[test]
fn test_failing_step_without_message_records_empty_message() {
    let registry = FieldRegistry::from_fields([field("name", vec![always(false)])]);
    let result = validate(&json!({}), &registry, &CatalogRegistry::basic()).unwrap();
    assert_eq!(result.messages("name"), [""]);
}

#[test]
fn test_predicate_sees_whole_form() {
    let confirm = ValidatorSpec::predicate(|value: Option<&Value>, data: &Value| {
        value == data.get("password")
    })
    .with_message("Passwords differ");
    let registry = FieldRegistry::from_fields([field("confirm", vec![confirm])]);

    let ok = json!({"password": "s3cret", "confirm": "s3cret"});
    let bad = json!({"password": "s3cret", "confirm": "secret"});
    let catalog = CatalogRegistry::basic();
    assert!(validate(&ok, &registry, &catalog).unwrap().all_valid());
    assert_eq!(
        validate(&bad, &registry, &catalog).unwrap().messages("confirm"),
        ["Passwords differ"]
    );
}

#[test]
fn test_reads_nested_values() {
    let registry = FieldRegistry::from_fields([field(
        "user.email",
        vec![ValidatorSpec::named("isEmail").with_message("Invalid email")],
    )]);
    let catalog = CatalogRegistry::basic();

    let good = json!({"user": {"email": "ada@x.io"}});
    assert!(validate(&good, &registry, &catalog).unwrap().all_valid());

    let bad = json!({"user": {"email": "nope"}});
    assert_eq!(
        validate(&bad, &registry, &catalog).unwrap().messages("user.email"),
        ["Invalid email"]
    );
}

// =============================================================================
// Presence
// =============================================================================

#[test]
fn test_presence_rejects_empty_string() {
    let registry = FieldRegistry::from_fields([field(
        "email",
        vec![ValidatorSpec::presence().with_message("Required")],
    )]);
    let catalog = CatalogRegistry::basic();

    let result = validate(&json!({"email": ""}), &registry, &catalog).unwrap();
    assert_eq!(result.is_valid("email"), Some(false));
    assert_eq!(result.messages("email"), ["Required"]);

    let result = validate(&json!({"email": "a"}), &registry, &catalog).unwrap();
    assert_eq!(result.is_valid("email"), Some(true));
}

#[test]
fn test_presence_rejects_absent_field() {
    let registry = FieldRegistry::from_fields([field("email", vec![ValidatorSpec::presence()])]);
    let result = validate(&json!({}), &registry, &CatalogRegistry::basic()).unwrap();
    assert_eq!(result.is_valid("email"), Some(false));
}

// =============================================================================
// Malformed chains and faults
// =============================================================================

#[test]
fn test_malformed_chain_is_excluded() {
    let registry = FieldRegistry::from_fields([
        field("broken", ValidatorSpec::presence()),
        field("name", vec![ValidatorSpec::presence()]),
    ]);
    let result = validate(&json!({"name": "Ada"}), &registry, &CatalogRegistry::basic()).unwrap();

    assert!(result.get("broken").is_none());
    assert!(result.all_valid());
    assert_eq!(result.len(), 1);
    assert!(matches!(
        result.diagnostics(),
        [ConfigError::MalformedChain { field, .. }] if field == "broken"
    ));
}

#[test]
fn test_unknown_catalog_name_faults() {
    let registry =
        FieldRegistry::from_fields([field("name", vec![ValidatorSpec::named("isShiny")])]);
    let fault = validate(&json!({}), &registry, &CatalogRegistry::basic()).unwrap_err();
    assert_eq!(fault.field(), "name");
    assert!(matches!(
        fault,
        ValidatorFault::Catalog {
            source: CatalogError::UnknownValidator(_),
            ..
        }
    ));
}

#[test]
fn test_predicate_error_faults() {
    let failing = ValidatorSpec::try_predicate(|_: Option<&Value>, _: &Value| {
        Err("backend unavailable".to_string())
    });
    let registry = FieldRegistry::from_fields([field("name", vec![failing])]);
    let fault = validate(&json!({}), &registry, &CatalogRegistry::basic()).unwrap_err();
    assert_eq!(
        fault,
        ValidatorFault::Predicate {
            field: "name".to_string(),
            message: "backend unavailable".to_string(),
        }
    );
}

// =============================================================================
// Catalog
// =============================================================================

#[test]
fn test_basic_catalog_checks() {
    let catalog = CatalogRegistry::basic();
    let check = |name: &str, value: Value, args: &[Value]| {
        catalog.check(name, Some(&value), args).unwrap()
    };

    assert!(check("isEmail", json!("ada@x.io"), &[]));
    assert!(!check("isEmail", json!("ada"), &[]));
    assert!(check("isUUID", json!("67e55044-10b1-426f-9247-bb680e5fe0c8"), &[]));
    assert!(!check("isUUID", json!("67e55044"), &[]));
    assert!(check("isNumeric", json!("-12.5"), &[]));
    assert!(check("isNumeric", json!(42), &[]));
    assert!(!check("isNumeric", json!("12a"), &[]));
    assert!(check("matches", json!("ABC"), &[json!("^abc$"), json!("i")]));
    assert!(!check("matches", json!("ABC"), &[json!("^abc$")]));
    assert!(check("equals", json!("x"), &[json!("x")]));
    assert!(check("contains", json!("hello"), &[json!("ell")]));
    assert!(check("isIn", json!("b"), &[json!(["a", "b"])]));
    assert!(!check("isIn", json!("c"), &[json!(["a", "b"])]));
}

#[test]
fn test_catalog_argument_errors() {
    let catalog = CatalogRegistry::basic();
    assert!(matches!(
        catalog.check("equals", Some(&json!("x")), &[]),
        Err(CatalogError::BadArguments { .. })
    ));
    assert!(matches!(
        catalog.check("matches", Some(&json!("x")), &[json!("(")]),
        Err(CatalogError::InvalidPattern { .. })
    ));
}

#[test]
fn test_custom_catalog_entry() {
    let catalog = CatalogRegistry::new().with("isEven", |value, _| {
        Ok(value.and_then(Value::as_i64).is_some_and(|n| n % 2 == 0))
    });
    assert!(catalog.contains("isEven"));
    assert_eq!(catalog.check("isEven", Some(&json!(4)), &[]), Ok(true));
    assert_eq!(catalog.check("isEven", None, &[]), Ok(false));
}
