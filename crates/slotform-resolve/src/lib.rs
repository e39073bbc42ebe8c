//! Slotform Resolvers
//!
//! The render-time half of the extension mechanism:
//!
//! - [`resolve_slot`]: "does this component inject anything at this
//!   position?" — answered per candidate position, per render pass
//! - [`resolve_form_config`]: merges a component's declared overrides into
//!   the concrete [`FormConfig`] a generic form renderer consumes
//!
//! Both are synchronous, lock-free reads over the immutable registry and are
//! cheap enough to call unconditionally on every render.

mod form;
mod slot;

pub use form::{
    resolve_form_config, FormConfig, DEFAULT_DELETE_LABEL, DEFAULT_SAVE_LABEL,
    DEFAULT_UPDATE_LABEL,
};
pub use slot::resolve_slot;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
