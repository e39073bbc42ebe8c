//! Mutation lifecycle pipeline.
//!
//! The external renderer owns persistence; this pipeline owns everything
//! around it — running hooks after each successful mutation, gating deletes,
//! and dispatching the resulting commands through the bus.

use crate::bus::CommandBus;
use crate::confirm::ConfirmationProvider;
use serde_json::Value;
use slotform_registry::{Command, DeleteGate, HookError, MutationResponse};
use slotform_resolve::FormConfig;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Runs lifecycle hooks at the renderer's mutation checkpoints.
///
/// Two policies hold throughout:
///
/// - A hook runs at most once per successful mutation, only after the
///   collaborator's response is available.
/// - A failing hook is logged and swallowed. The server-side write already
///   happened; surfacing the hook failure as a mutation failure would tell
///   the user their edit was lost when it was not.
#[derive(Clone)]
pub struct FormLifecycle {
    bus: CommandBus,
    confirm: Arc<dyn ConfirmationProvider>,
    confirm_timeout: Duration,
}

impl FormLifecycle {
    /// Create a pipeline over a bus and a confirmation provider.
    #[must_use]
    pub fn new(
        bus: CommandBus,
        confirm: Arc<dyn ConfirmationProvider>,
        confirm_timeout: Duration,
    ) -> Self {
        Self {
            bus,
            confirm,
            confirm_timeout,
        }
    }

    /// The bus this pipeline dispatches through.
    #[must_use]
    pub fn bus(&self) -> &CommandBus {
        &self.bus
    }

    /// A record was created.
    ///
    /// Runs `after_create`, then `created_id` when the response carried an
    /// identifier.
    pub fn notify_created(&self, config: &FormConfig, response: &MutationResponse, valid: bool) {
        let Some(hooks) = config.hooks() else { return };
        self.run_hook(config, "after_create", || hooks.after_create(response, valid));
        if let Some(id) = &response.id {
            self.run_hook(config, "created_id", || hooks.created_id(id));
        }
    }

    /// A record was updated.
    pub fn notify_updated(&self, config: &FormConfig, response: &MutationResponse, valid: bool) {
        let Some(hooks) = config.hooks() else { return };
        self.run_hook(config, "after_update", || hooks.after_update(response, valid));
    }

    /// A record was deleted (after a passing gate).
    pub fn notify_deleted(&self, config: &FormConfig, response: &MutationResponse) {
        let Some(hooks) = config.hooks() else { return };
        self.run_hook(config, "after_delete", || hooks.after_delete(response));
    }

    /// Consult the component's delete gate before deleting.
    ///
    /// `false` means the renderer must abort the delete and leave the record
    /// unchanged — an expected outcome, not an error. A `Confirm` gate
    /// awaits the provider under the configured timeout; expiry denies.
    pub async fn confirm_delete(&self, config: &FormConfig, source: Option<&Value>) -> bool {
        let Some(hooks) = config.hooks() else {
            return true;
        };
        match hooks.delete_gate(source) {
            DeleteGate::Proceed => true,
            DeleteGate::Abort => {
                tracing::debug!(component = %config.component(), "delete gate aborted");
                false
            }
            DeleteGate::Confirm { prompt } => {
                match tokio::time::timeout(self.confirm_timeout, self.confirm.confirm(&prompt))
                    .await
                {
                    Ok(decision) => decision,
                    Err(_) => {
                        tracing::warn!(
                            component = %config.component(),
                            timeout = ?self.confirm_timeout,
                            "delete confirmation timed out; aborting delete"
                        );
                        false
                    }
                }
            }
        }
    }

    fn run_hook<H>(&self, config: &FormConfig, stage: &str, hook: H)
    where
        H: FnOnce() -> Result<Vec<Command>, HookError>,
    {
        match hook() {
            Ok(commands) => self.bus.dispatch_all(commands),
            Err(err) => {
                tracing::warn!(
                    component = %config.component(),
                    stage,
                    error = %err,
                    "lifecycle hook failed; mutation already committed"
                );
            }
        }
    }
}

impl fmt::Debug for FormLifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormLifecycle")
            .field("confirm_timeout", &self.confirm_timeout)
            .finish_non_exhaustive()
    }
}
