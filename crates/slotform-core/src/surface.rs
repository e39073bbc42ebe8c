//! The host-facing facade.

use crate::bus::{CommandBus, StatePublisher};
use crate::confirm::{ConfirmationProvider, SurfaceOptions};
use crate::pipeline::FormLifecycle;
use serde_json::Value;
use slotform_loader::{LoadError, LoadState, ScreenLoader, ScreenRef};
use slotform_registry::{Navigator, Registry, RenderContext, Route, SlotPosition};
use slotform_resolve::{resolve_form_config, resolve_slot, FormConfig};
use std::fmt;
use std::sync::Arc;

/// Everything a host screen needs, behind one handle.
///
/// Owns the immutable registry, the lazy loader, and the lifecycle
/// pipeline; constructs the ephemeral [`RenderContext`] per slot query so
/// callers never touch the navigator directly during layout.
pub struct Surface<F, S> {
    registry: Arc<Registry<F>>,
    loader: ScreenLoader<S>,
    lifecycle: FormLifecycle,
}

impl<F, S: Send + Sync + 'static> Surface<F, S> {
    /// Wire a surface from its collaborators.
    #[must_use]
    pub fn new(
        registry: Arc<Registry<F>>,
        loader: ScreenLoader<S>,
        navigator: Arc<dyn Navigator>,
        publisher: Arc<dyn StatePublisher>,
        confirm: Arc<dyn ConfirmationProvider>,
        options: SurfaceOptions,
    ) -> Self {
        let bus = CommandBus::new(navigator, publisher);
        let lifecycle = FormLifecycle::new(bus, confirm, options.confirm_timeout);
        Self {
            registry,
            loader,
            lifecycle,
        }
    }

    /// Shared registry handle.
    #[must_use]
    pub fn registry(&self) -> &Arc<Registry<F>> {
        &self.registry
    }

    /// Lifecycle pipeline for the renderer's mutation checkpoints.
    #[must_use]
    pub fn lifecycle(&self) -> &FormLifecycle {
        &self.lifecycle
    }

    /// Resolve a screen module, loading it on first navigation.
    ///
    /// # Errors
    /// See [`ScreenLoader::load`].
    pub async fn open(&self, screen: &ScreenRef) -> Result<Arc<S>, LoadError> {
        self.loader.load(screen).await
    }

    /// Load state of a screen, for fallback rendering.
    #[must_use]
    pub fn screen_state(&self, screen: &ScreenRef) -> LoadState {
        self.loader.state(screen)
    }

    /// Ask whether `component` injects a fragment at `position`.
    ///
    /// Builds the per-pass render context from the surface's navigator and
    /// the caller's route/record; returns `None` for the (usual) case of no
    /// injection.
    #[must_use]
    pub fn slot(
        &self,
        position: SlotPosition,
        component: &str,
        route: &Route,
        source: Option<&Value>,
        near_bottom: bool,
    ) -> Option<F> {
        let ctx = RenderContext::new(
            self.lifecycle.bus().navigator().as_ref(),
            route,
            source,
            near_bottom,
        );
        resolve_slot(&self.registry, position, component, &ctx)
    }

    /// Resolve the form configuration for `component` over `source`.
    #[must_use]
    pub fn form_config(&self, component: &str, source: Option<&Value>) -> FormConfig {
        resolve_form_config(&self.registry, component, source)
    }
}

impl<F, S> fmt::Debug for Surface<F, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Surface")
            .field("components", &self.registry.len())
            .finish_non_exhaustive()
    }
}
