//! Slotform Core
//!
//! Orchestration layer over the registry, resolvers, and loader:
//!
//! - [`Surface`]: the facade a host application talks to — opens screens,
//!   resolves slots and form configurations
//! - [`CommandBus`]: single dispatch point for hook [`Command`]s
//! - [`FormLifecycle`]: runs lifecycle hooks around the external renderer's
//!   mutation flow, swallowing hook failures and bounding the delete
//!   confirmation wait
//! - [`Progress`]: XP/level arithmetic shared by progress-publishing hooks
//!
//! # Data flow
//!
//! Navigation event → [`Surface::open`] resolves the screen module (lazy,
//! single-flight) → the screen resolves its form configuration → the
//! generic renderer renders fields, asking [`Surface::slot`] at each
//! candidate position whether to inject extra UI → after each mutation the
//! renderer notifies [`FormLifecycle`], which dispatches hook commands.

mod bus;
mod confirm;
mod pipeline;
mod progress;
mod surface;

pub use bus::{CommandBus, StatePublisher};
pub use confirm::{ConfirmationProvider, SurfaceOptions};
pub use pipeline::FormLifecycle;
pub use progress::Progress;
pub use surface::Surface;

pub use slotform_registry::Command;

/// Convenience re-exports for hosts wiring a surface.
pub mod prelude {
    pub use crate::{
        CommandBus, ConfirmationProvider, FormLifecycle, Progress, StatePublisher, Surface,
        SurfaceOptions,
    };
    pub use slotform_loader::{
        FetchError, LoadError, LoadState, ScreenLoader, ScreenRef, ScreenSource, SessionGuard,
    };
    pub use slotform_registry::{
        Command, ComponentDescriptor, ComponentName, DeleteGate, FieldText, FormHooks,
        FormOverrides, HookError, Manifest, MutationResponse, Navigator, Registry,
        RegistryBuilder, RegistryError, RenderContext, Route, SlotPosition, TextKind,
    };
    pub use slotform_resolve::{resolve_form_config, resolve_slot, FormConfig};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
