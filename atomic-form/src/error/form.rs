//! Form workflow errors

use thiserror::Error;

use super::ValidatorFault;
use crate::submit::SubmitPhase;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error(transparent)]
    Validator(#[from] ValidatorFault),

    #[error("invalid submit phase transition: {from:?} -> {to:?}")]
    InvalidTransition { from: SubmitPhase, to: SubmitPhase },
}

pub type FormResult<T> = Result<T, FormError>;
