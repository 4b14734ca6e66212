//! Form state over a [`formdom`] component tree.
//!
//! A [`Form`] binds every named node of a tree to one nested data object.
//! Field names are dotted paths (`"user.email"`) into that object. Changes
//! flow from the nodes into the state, update cycles flow the state back
//! into the nodes, and a submit collects, validates and hands the data to
//! the form's hooks.
//!
//! ```
//! use atomic_form::prelude::*;
//! use formdom::{Node, SubmitEvent, dispatch_change_by_name};
//! use serde_json::json;
//!
//! let mut form = Form::new(FormHooks::new());
//! let mut root = form.render(vec![
//!     Node::text_input()
//!         .name("user.email")
//!         .validators(vec![ValidatorSpec::presence().with_message("Required")]),
//! ]);
//!
//! let outcome = form.submit(&root, &mut SubmitEvent::new()).unwrap();
//! assert_eq!(outcome, SubmitOutcome::Rejected);
//!
//! dispatch_change_by_name(&mut root, "user.email", json!("ada@x.io"));
//! let outcome = form.submit(&root, &mut SubmitEvent::new()).unwrap();
//! assert_eq!(outcome, SubmitOutcome::Submitted);
//! ```

pub mod binding;
pub mod config;
pub mod error;
pub mod hooks;
pub mod path;
pub mod registry;
pub mod schema;
pub mod state;
pub mod submit;
pub mod validation;

pub use binding::Form;
pub use config::FormConfig;
pub use error::{
    CatalogError, ConfigError, FormError, FormResult, PathError, SchemaError, ValidatorFault,
};
pub use hooks::{Fields, FieldsMut, FormHooks};
pub use path::{FieldPath, FormData};
pub use registry::{FieldDescriptor, FieldRegistry, RawAccessor, ValidateExt};
pub use schema::FormSchema;
pub use state::State;
pub use submit::{SubmitOutcome, SubmitPhase};
pub use validation::{
    CatalogRegistry, FieldValidation, ValidationResult, ValidatorCatalog, ValidatorDecl,
    ValidatorSpec,
};

/// The types most forms need.
pub mod prelude {
    pub use crate::{
        Form, FormConfig, FormData, FormHooks, SubmitOutcome, ValidateExt, ValidationResult,
        ValidatorSpec,
    };
}
