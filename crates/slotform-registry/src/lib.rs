//! Slotform Configuration Registry
//!
//! Process-wide, read-only-after-build mapping from a logical component name
//! ("Habit", "Workout") to its extension descriptor:
//!
//! - [`ComponentDescriptor`]: slot injections plus form-behavior overrides
//! - [`RegistryBuilder`]: construction-phase API, fails fast on configuration errors
//! - [`Registry`]: immutable lookup table consulted at render time
//! - [`Manifest`]: JSON-declared subset of a descriptor (labels, read-only sets)
//! - [`FormHooks`]: lifecycle contract returning [`Command`] objects
//!
//! # Two-phase lifecycle
//!
//! ```rust
//! use slotform_registry::{ComponentDescriptor, RegistryBuilder, SlotPosition};
//!
//! let mut builder = RegistryBuilder::<String>::new();
//! builder
//!     .register(
//!         ComponentDescriptor::new("Habit")
//!             .inject(SlotPosition::new(2), |ctx| format!("streak for {}", ctx.route.name)),
//!     )
//!     .unwrap();
//!
//! let registry = builder.build().unwrap();
//! assert!(registry.lookup("Habit").is_some());
//! ```
//!
//! The registry is populated once, before any screen renders, and never
//! mutated afterward. Duplicate registration is a configuration error, not a
//! silent overwrite.

mod builder;
mod command;
mod context;
mod descriptor;
mod error;
mod hooks;
mod manifest;
mod name;
mod overrides;
mod registry;

pub use builder::RegistryBuilder;
pub use command::{Command, MutationResponse};
pub use context::{Navigator, RenderContext, Route};
pub use descriptor::{ComponentDescriptor, SlotFactory, SlotInjection};
pub use error::RegistryError;
pub use hooks::{DeleteGate, FormHooks, HookError};
pub use manifest::{Manifest, ManifestComponent, ManifestError};
pub use name::{ComponentName, SlotPosition};
pub use overrides::{FieldText, FormOverrides, TextKind};
pub use registry::Registry;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
