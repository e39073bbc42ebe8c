//! Uniform dispatch of hook commands.

use serde_json::Value;
use slotform_registry::{Command, Navigator};
use std::fmt;
use std::sync::Arc;

/// State-layer collaborator.
///
/// Receives `Publish` commands; typically an adapter over the host
/// application's store dispatch.
pub trait StatePublisher: Send + Sync {
    /// Publish a payload under a topic.
    fn publish(&self, topic: &str, payload: Value);
}

/// The single place hook commands are executed.
///
/// Hooks return commands as data; the bus executes them in order against
/// the navigation and state collaborators. Each command is fire-and-forget.
#[derive(Clone)]
pub struct CommandBus {
    navigator: Arc<dyn Navigator>,
    publisher: Arc<dyn StatePublisher>,
}

impl CommandBus {
    /// Create a bus over the two collaborators.
    #[must_use]
    pub fn new(navigator: Arc<dyn Navigator>, publisher: Arc<dyn StatePublisher>) -> Self {
        Self {
            navigator,
            publisher,
        }
    }

    /// Execute one command.
    pub fn dispatch(&self, command: Command) {
        match command {
            Command::Navigate { route, params } => self.navigator.navigate(&route, params),
            Command::GoBack => self.navigator.go_back(),
            Command::Publish { topic, payload } => self.publisher.publish(&topic, payload),
        }
    }

    /// Execute commands in order.
    pub fn dispatch_all(&self, commands: Vec<Command>) {
        for command in commands {
            self.dispatch(command);
        }
    }

    /// Navigation collaborator, for building render contexts.
    #[must_use]
    pub(crate) fn navigator(&self) -> &Arc<dyn Navigator> {
        &self.navigator
    }
}

impl fmt::Debug for CommandBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandBus").finish_non_exhaustive()
    }
}
