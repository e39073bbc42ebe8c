//! Loader error types.

use crate::screen::ScreenRef;

/// Failure reported by a [`crate::ScreenSource`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The transport failed before a chunk arrived.
    #[error("network: {0}")]
    Network(String),

    /// The server no longer serves this chunk.
    #[error("chunk missing: {0}")]
    ChunkMissing(String),
}

/// Outcome of a failed screen load.
///
/// Clonable so one outcome fans out to every waiter of a single-flight load.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// The underlying fetch rejected; the session has been invalidated.
    #[error("screen '{screen}' fetch failed: {message}")]
    Fetch {
        /// Screen that failed to load.
        screen: String,
        /// Source failure, flattened for cloneability.
        message: String,
    },

    /// The load task died without reporting an outcome.
    #[error("screen '{screen}' load abandoned before an outcome")]
    Abandoned {
        /// Screen whose load task died.
        screen: String,
    },
}

impl LoadError {
    pub(crate) fn fetch(screen: &ScreenRef, source: &FetchError) -> Self {
        Self::Fetch {
            screen: screen.to_string(),
            message: source.to_string(),
        }
    }

    pub(crate) fn abandoned(screen: &ScreenRef) -> Self {
        Self::Abandoned {
            screen: screen.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_flattens_into_load_error() {
        let screen = ScreenRef::new("dailyHabits");
        let err = LoadError::fetch(&screen, &FetchError::Network("timeout".to_string()));
        assert_eq!(
            err.to_string(),
            "screen 'dailyHabits' fetch failed: network: timeout"
        );
    }
}
