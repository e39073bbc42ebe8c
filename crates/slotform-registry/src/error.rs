//! Configuration errors surfaced at startup.

use crate::name::{ComponentName, SlotPosition};

/// Errors raised while building the registry.
///
/// All of these are developer-facing configuration mistakes; none occur at
/// render time. A process should fail fast on any of them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Two descriptors share a component name.
    #[error("duplicate component registration: '{0}'")]
    DuplicateComponent(ComponentName),

    /// One component declares two injections at the same position.
    #[error("component '{component}' declares two injections at slot {position}")]
    DuplicateSlotPosition {
        /// Offending component.
        component: ComponentName,
        /// Doubly-claimed position.
        position: SlotPosition,
    },

    /// A builder operation referenced a component that was never registered.
    #[error("unknown component: '{0}'")]
    UnknownComponent(ComponentName),

    /// A read-only override names a field the component does not declare.
    #[error("component '{component}' marks unknown field '{field}' read-only")]
    UnknownReadOnlyField {
        /// Offending component.
        component: ComponentName,
        /// Field absent from the declared set.
        field: String,
    },
}
