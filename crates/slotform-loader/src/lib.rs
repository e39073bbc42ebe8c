//! Slotform Lazy Screen Loader
//!
//! Defers a screen module's fetch to its first navigation and caches the
//! result for the process lifetime. Per screen reference the state machine is
//!
//! ```text
//! Unloaded -> Loading -> { Loaded | Failed }
//! ```
//!
//! with two deliberate policies:
//!
//! - **Single-flight**: every request issued while a screen is `Loading`
//!   joins the one in-flight fetch and observes the same outcome.
//! - **Failure invalidates the session**: a code-chunk fetch that fails is
//!   treated as evidence of a stale deployed client, not a transient blip —
//!   the loader fires [`SessionGuard::invalidate`] and never retries on its
//!   own. Only a later, explicit navigation starts a fresh attempt.

mod error;
mod loader;
mod screen;
mod source;

pub use error::{FetchError, LoadError};
pub use loader::ScreenLoader;
pub use screen::{LoadState, ScreenRef};
pub use source::{ScreenSource, SessionGuard};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
