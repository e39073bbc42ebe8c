//! Delete confirmation collaborator and surface options.

use async_trait::async_trait;
use std::time::Duration;

/// Asks the user to confirm a destructive action.
///
/// Typically backed by a dialog; resolves `true` to proceed. The pipeline
/// bounds the wait with [`SurfaceOptions::confirm_timeout`], so an abandoned
/// dialog cannot suspend the delete flow forever.
#[async_trait]
pub trait ConfirmationProvider: Send + Sync {
    /// Present `prompt` and await the user's decision.
    async fn confirm(&self, prompt: &str) -> bool;
}

/// Tunables for a [`crate::Surface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceOptions {
    /// Upper bound on the delete-confirmation wait; expiry denies the
    /// delete.
    pub confirm_timeout: Duration,
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self {
            confirm_timeout: Duration::from_secs(30),
        }
    }
}
