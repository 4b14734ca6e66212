use serde_json::Value;

use super::catalog::ValidatorCatalog;
use super::result::{FieldValidation, ValidationResult};
use super::spec::{ValidatorDecl, ValidatorSpec};
use crate::error::{ConfigError, ValidatorFault};
use crate::path::{self, FormData};
use crate::registry::{FieldDescriptor, FieldRegistry};

/// Validate every field in `registry` against `data`.
///
/// Each chain runs in declared order and every step runs, so a field collects
/// one message per failing step. Fields with a malformed chain are reported as
/// diagnostics and left out of the result. A validator fault aborts the pass.
pub fn validate(
    data: &FormData,
    registry: &FieldRegistry,
    catalog: &dyn ValidatorCatalog,
) -> Result<ValidationResult, ValidatorFault> {
    let mut result = ValidationResult::new();

    for field in registry.iter() {
        let chain = match &field.validators {
            ValidatorDecl::Chain(chain) => chain,
            ValidatorDecl::Malformed(found) => {
                let error = ConfigError::MalformedChain {
                    field: field.identifier.to_string(),
                    found: found.clone(),
                };
                log::warn!("[validation] {error}");
                result.push_diagnostic(error);
                continue;
            }
        };

        let validation = validate_field(field, chain, data, catalog)?;
        log::trace!(
            "[validation] {} -> valid: {}",
            field.identifier,
            validation.is_valid
        );
        result.insert(field.identifier.as_str(), validation);
    }

    Ok(result)
}

fn validate_field(
    field: &FieldDescriptor,
    chain: &[ValidatorSpec],
    data: &FormData,
    catalog: &dyn ValidatorCatalog,
) -> Result<FieldValidation, ValidatorFault> {
    let value = path::read(data, &field.identifier);
    let mut validation = FieldValidation::valid();

    for spec in chain {
        if !run_step(field, spec, value, data, catalog)? {
            validation.fail(spec.message().unwrap_or_default());
        }
    }

    Ok(validation)
}

fn run_step(
    field: &FieldDescriptor,
    spec: &ValidatorSpec,
    value: Option<&Value>,
    data: &FormData,
    catalog: &dyn ValidatorCatalog,
) -> Result<bool, ValidatorFault> {
    match spec {
        ValidatorSpec::Predicate { check, .. } => {
            check(value, data).map_err(|message| ValidatorFault::Predicate {
                field: field.identifier.to_string(),
                message,
            })
        }
        ValidatorSpec::Presence { .. } => Ok(is_present(value)),
        ValidatorSpec::Catalog { name, args, .. } => catalog
            .check(name, value, args)
            .map_err(|source| ValidatorFault::Catalog {
                field: field.identifier.to_string(),
                source,
            }),
    }
}

/// Truthiness check behind the presence sentinel.
///
/// Absent, `null`, `false`, zero and `""` are not present. Non-empty strings,
/// non-zero numbers, `true`, arrays and objects are.
pub fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}
