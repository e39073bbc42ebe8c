//! Lifecycle hook contract.

use crate::command::{Command, MutationResponse};
use serde_json::Value;

/// Failure inside a lifecycle hook.
///
/// Hook failures never invalidate the mutation that triggered them; the
/// server-side write already happened. The pipeline logs and swallows these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HookError {
    /// The hook declined to run against this response.
    #[error("hook rejected input: {0}")]
    Rejected(String),

    /// The hook started but could not finish.
    #[error("hook failed: {0}")]
    Failed(String),
}

/// Decision data gating a delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteGate {
    /// Delete without asking.
    Proceed,

    /// Refuse the delete outright.
    Abort,

    /// Ask the user first with the given prompt.
    Confirm {
        /// Prompt shown by the confirmation provider.
        prompt: String,
    },
}

impl DeleteGate {
    /// Gate that asks the user with `prompt`.
    #[must_use]
    pub fn confirm(prompt: impl Into<String>) -> Self {
        Self::Confirm {
            prompt: prompt.into(),
        }
    }
}

/// Per-component lifecycle behavior, invoked around the external renderer's
/// mutation flow.
///
/// Every method has a no-op default, so a component overrides only the
/// moments it cares about. Hooks return [`Command`] values rather than
/// performing side effects themselves; the core dispatches them, which keeps
/// execution order and failure handling uniform.
///
/// The renderer calls each post-mutation hook at most once per successful
/// mutation, after the collaborator's response is available.
pub trait FormHooks: Send + Sync {
    /// Called after a record was created.
    ///
    /// `valid` carries the renderer's validation verdict for the submitted
    /// form, which some components use to branch navigation.
    fn after_create(
        &self,
        response: &MutationResponse,
        valid: bool,
    ) -> Result<Vec<Command>, HookError> {
        let _ = (response, valid);
        Ok(Vec::new())
    }

    /// Called with the created record's identifier when the response carried
    /// one. Runs after [`FormHooks::after_create`].
    fn created_id(&self, id: &str) -> Result<Vec<Command>, HookError> {
        let _ = id;
        Ok(Vec::new())
    }

    /// Called after a record was updated.
    fn after_update(
        &self,
        response: &MutationResponse,
        valid: bool,
    ) -> Result<Vec<Command>, HookError> {
        let _ = (response, valid);
        Ok(Vec::new())
    }

    /// Called after a confirmed, successful delete.
    fn after_delete(&self, response: &MutationResponse) -> Result<Vec<Command>, HookError> {
        let _ = response;
        Ok(Vec::new())
    }

    /// Gate consulted before a delete begins.
    ///
    /// Returning [`DeleteGate::Confirm`] suspends the delete flow on the
    /// user's decision; the pipeline bounds that wait with a timeout.
    fn delete_gate(&self, source: Option<&Value>) -> DeleteGate {
        let _ = source;
        DeleteGate::Proceed
    }
}
