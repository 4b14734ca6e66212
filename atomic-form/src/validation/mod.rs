//! Field validation.
//!
//! Each bound field declares an ordered chain of [`ValidatorSpec`]s. The
//! engine runs every step of every chain against the assembled form data and
//! reports a per-field [`FieldValidation`].
//!
//! # Example
//!
//! ```
//! use atomic_form::validation::{CatalogRegistry, ValidatorSpec, validate};
//! use atomic_form::registry::{FieldDescriptor, FieldRegistry};
//! use serde_json::json;
//!
//! let registry = FieldRegistry::from_fields([FieldDescriptor::new(
//!     "user.email",
//!     vec![
//!         ValidatorSpec::presence().with_message("Required"),
//!         ValidatorSpec::named("isEmail").with_message("Invalid email"),
//!     ],
//! )
//! .unwrap()]);
//!
//! let data = json!({"user": {"email": "ada@x.io"}});
//! let result = validate(&data, &registry, &CatalogRegistry::basic()).unwrap();
//! assert!(result.all_valid());
//! ```

mod catalog;
mod engine;
mod result;
mod spec;

pub use catalog::{CatalogFn, CatalogRegistry, ValidatorCatalog, coerce_to_string};
pub use engine::{is_present, validate};
pub use result::{FieldValidation, ValidationResult};
pub use spec::{PRESENCE, PredicateFn, ValidatorDecl, ValidatorSpec};
