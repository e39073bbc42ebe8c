//! Slot resolution.

use slotform_registry::{Registry, RenderContext, SlotPosition};

/// Resolve the injected fragment for one candidate position.
///
/// Returns `None` — a normal outcome, not an error — when the component is
/// unregistered, registered without injections, or injects at a different
/// position. Only an exact position match runs the factory.
#[must_use]
pub fn resolve_slot<F>(
    registry: &Registry<F>,
    position: SlotPosition,
    component: &str,
    ctx: &RenderContext<'_>,
) -> Option<F> {
    registry
        .lookup(component)?
        .injection_at(position)
        .map(|injection| injection.render(ctx))
}
