//! External collaborators of the loader.

use crate::error::FetchError;
use crate::screen::ScreenRef;
use async_trait::async_trait;

/// Fetches screen modules on demand.
///
/// The loader guarantees at most one in-flight `fetch` per screen; the
/// source needs no deduplication of its own.
#[async_trait]
pub trait ScreenSource<S>: Send + Sync {
    /// Fetch the module for `screen`.
    async fn fetch(&self, screen: &ScreenRef) -> Result<S, FetchError>;
}

/// Receives the session-invalidation signal.
///
/// Fired when a screen fetch fails: a chunk the client expects but cannot
/// get means the deployed client version is no longer valid against the
/// server, so the user is forced through re-authentication rather than
/// shown a retry.
pub trait SessionGuard: Send + Sync {
    /// Invalidate the current authenticated session.
    fn invalidate(&self, reason: &str);
}
