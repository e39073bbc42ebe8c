//! Screen references and load states.

use std::borrow::Borrow;
use std::fmt;

/// Name of a lazily-loaded screen module (e.g. `"dailyHabits"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScreenRef(String);

impl ScreenRef {
    /// Create a screen reference.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Name as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScreenRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ScreenRef {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl Borrow<str> for ScreenRef {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Lifecycle state of one screen reference.
///
/// `Loading -> Loaded` and `Loading -> Failed` are terminal for a given
/// attempt; a `Failed` screen moves again only through a new explicit load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// No fetch has been attempted.
    Unloaded,
    /// A fetch is in flight; render the fallback placeholder.
    Loading,
    /// The module is cached for the process lifetime.
    Loaded,
    /// The last attempt failed and the session was invalidated.
    Failed,
}
