//! The submit workflow: collect, validate, then submit or reject.

use formdom::{Node, SubmitEvent};
use serde::Serialize;

use crate::binding::Form;
use crate::error::{FormError, FormResult};
use crate::hooks::Fields;
use crate::path::FormData;
use crate::registry::FieldRegistry;
use crate::validation::{self, ValidationResult};

/// Where a form is in its submit workflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitPhase {
    #[default]
    Idle,
    Collecting,
    Validating,
    Submitted,
    Rejected,
}

impl SubmitPhase {
    /// Whether the workflow may move from `self` to `next`.
    pub fn can_transition(self, next: SubmitPhase) -> bool {
        use SubmitPhase::*;
        matches!(
            (self, next),
            (Idle, Collecting)
                | (Collecting, Validating)
                | (Validating, Submitted)
                | (Validating, Rejected)
                | (Submitted, Idle)
                | (Rejected, Idle)
                | (Collecting, Idle)
                | (Validating, Idle)
        )
    }
}

/// How a submit attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitOutcome {
    /// Every field was valid and the data went to `do_submit`.
    Submitted,
    /// Some field was invalid; the result went to `after_validation`.
    Rejected,
}

impl Form {
    /// Handle a submit event for the tree rooted at `root`.
    ///
    /// The event's default action is always suppressed. The collected data is
    /// validated; a fully valid form is handed to `do_submit`, otherwise the
    /// result goes to `after_validation` and the collected data replaces the
    /// state. The form is back in [`SubmitPhase::Idle`] when this returns,
    /// whatever the outcome.
    pub fn submit(&mut self, root: &Node, event: &mut SubmitEvent) -> FormResult<SubmitOutcome> {
        event.prevent_default();
        self.submit_count += 1;
        log::debug!(
            "[submit] {}: attempt #{}",
            self.config.name,
            self.submit_count
        );

        let outcome = self.run_submit(root);
        self.transition(SubmitPhase::Idle)?;

        if let Err(error) = &outcome {
            log::warn!("[submit] {}: aborted: {error}", self.config.name);
        }
        outcome
    }

    fn run_submit(&mut self, root: &Node) -> FormResult<SubmitOutcome> {
        self.transition(SubmitPhase::Collecting)?;
        let registry = self.registry(root);
        let data = self.collect(root, &registry);

        self.transition(SubmitPhase::Validating)?;
        let result = self.validate(&data, &registry)?;

        let outcome = if result.all_valid() {
            self.transition(SubmitPhase::Submitted)?;
            match &self.hooks.do_submit {
                Some(do_submit) => do_submit(&data, &result),
                None => log::debug!("[submit] {}: no do_submit hook", self.config.name),
            }
            SubmitOutcome::Submitted
        } else {
            self.transition(SubmitPhase::Rejected)?;
            log::debug!(
                "[submit] {}: rejected, invalid: {:?}",
                self.config.name,
                result.invalid_fields().collect::<Vec<_>>()
            );
            match &self.hooks.after_validation {
                Some(after_validation) => after_validation(&result),
                None => log::debug!("[submit] {}: no after_validation hook", self.config.name),
            }
            self.state.set(data);
            SubmitOutcome::Rejected
        };

        self.last_result = Some(result);
        Ok(outcome)
    }

    /// Collection pass over `root`.
    ///
    /// A `collect_form_data` hook replaces the default, which merges the raw
    /// value of every discovered field.
    pub fn collect(&self, root: &Node, registry: &FieldRegistry) -> FormData {
        match &self.hooks.collect_form_data {
            Some(collect_form_data) => collect_form_data(&Fields::new(root)),
            None => registry.assemble(),
        }
    }

    /// Validate `data` against the chains of `registry` using this form's
    /// catalog.
    pub fn validate(
        &self,
        data: &FormData,
        registry: &FieldRegistry,
    ) -> FormResult<ValidationResult> {
        Ok(validation::validate(data, registry, self.catalog.as_ref())?)
    }

    fn transition(&mut self, next: SubmitPhase) -> FormResult<()> {
        if self.phase == next {
            return Ok(());
        }
        if !self.phase.can_transition(next) {
            return Err(FormError::InvalidTransition {
                from: self.phase,
                to: next,
            });
        }
        log::debug!("[submit] {}: {:?} -> {:?}", self.config.name, self.phase, next);
        self.phase = next;
        Ok(())
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Number of submit attempts so far, including faulted ones.
    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    /// Result of the last validation pass that completed during a submit.
    pub fn last_result(&self) -> Option<&ValidationResult> {
        self.last_result.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_table() {
        use SubmitPhase::*;
        assert!(Idle.can_transition(Collecting));
        assert!(Validating.can_transition(Rejected));
        assert!(Rejected.can_transition(Idle));
        assert!(!Idle.can_transition(Submitted));
        assert!(!Submitted.can_transition(Rejected));
        assert!(!Collecting.can_transition(Submitted));
    }
}
