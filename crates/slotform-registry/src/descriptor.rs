//! Component descriptors: slot injections plus form overrides.

use crate::context::RenderContext;
use crate::hooks::FormHooks;
use crate::name::{ComponentName, SlotPosition};
use crate::overrides::FormOverrides;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// Factory producing an injected UI fragment from the ambient render context.
///
/// Must be pure with respect to the registry: it may read the context but
/// mutates nothing shared.
pub type SlotFactory<F> = Arc<dyn Fn(&RenderContext<'_>) -> F + Send + Sync>;

/// One injection point: an exact position and the factory to run there.
#[derive(Clone)]
pub struct SlotInjection<F> {
    /// Position this fragment is injected at.
    pub position: SlotPosition,
    factory: SlotFactory<F>,
}

impl<F> SlotInjection<F> {
    /// Create an injection.
    #[must_use]
    pub fn new(position: SlotPosition, factory: SlotFactory<F>) -> Self {
        Self { position, factory }
    }

    /// Run the factory against a render context.
    #[must_use]
    pub fn render(&self, ctx: &RenderContext<'_>) -> F {
        (self.factory)(ctx)
    }
}

impl<F> fmt::Debug for SlotInjection<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotInjection")
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}

/// Registry entry for one logical component.
///
/// Defined once at startup, immutable for the process lifetime. Absence of
/// injections or overrides means "no extra UI / no custom behavior" for that
/// component, which is the normal case.
#[derive(Clone)]
pub struct ComponentDescriptor<F> {
    name: ComponentName,
    fields: Option<BTreeSet<String>>,
    injections: Vec<SlotInjection<F>>,
    form: Option<FormOverrides>,
}

impl<F> ComponentDescriptor<F> {
    /// Descriptor with no customization.
    #[must_use]
    pub fn new(name: impl Into<ComponentName>) -> Self {
        Self {
            name: name.into(),
            fields: None,
            injections: Vec::new(),
            form: None,
        }
    }

    /// Declare the record fields this component exposes.
    ///
    /// Only used for startup validation of the read-only set; components
    /// that skip the declaration get no read-only checking until render.
    #[must_use]
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Inject a fragment at `position`.
    ///
    /// A component may inject at several positions; `RegistryBuilder::build`
    /// rejects two injections sharing one position.
    #[must_use]
    pub fn inject<G>(mut self, position: SlotPosition, factory: G) -> Self
    where
        G: Fn(&RenderContext<'_>) -> F + Send + Sync + 'static,
    {
        self.injections
            .push(SlotInjection::new(position, Arc::new(factory)));
        self
    }

    /// Inject a pre-built [`SlotInjection`].
    #[must_use]
    pub fn with_injection(mut self, injection: SlotInjection<F>) -> Self {
        self.injections.push(injection);
        self
    }

    /// Attach form-behavior overrides.
    #[must_use]
    pub fn with_form(mut self, form: FormOverrides) -> Self {
        self.form = Some(form);
        self
    }

    /// Attach lifecycle hooks, creating empty overrides when none exist yet.
    #[must_use]
    pub fn with_hooks(mut self, hooks: Arc<dyn FormHooks>) -> Self {
        self.form
            .get_or_insert_with(FormOverrides::default)
            .hooks = Some(hooks);
        self
    }

    /// Component name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &ComponentName {
        &self.name
    }

    /// Declared record fields, if any.
    #[inline]
    #[must_use]
    pub fn fields(&self) -> Option<&BTreeSet<String>> {
        self.fields.as_ref()
    }

    /// All injections, in declaration order.
    #[inline]
    #[must_use]
    pub fn injections(&self) -> &[SlotInjection<F>] {
        &self.injections
    }

    /// Injection at an exact position, if declared.
    #[must_use]
    pub fn injection_at(&self, position: SlotPosition) -> Option<&SlotInjection<F>> {
        self.injections.iter().find(|i| i.position == position)
    }

    /// Form overrides, if any.
    #[inline]
    #[must_use]
    pub fn form(&self) -> Option<&FormOverrides> {
        self.form.as_ref()
    }

    pub(crate) fn set_fields(&mut self, fields: Option<BTreeSet<String>>) {
        self.fields = fields;
    }

    pub(crate) fn set_form(&mut self, form: Option<FormOverrides>) {
        self.form = form;
    }

    pub(crate) fn push_injection(&mut self, injection: SlotInjection<F>) {
        self.injections.push(injection);
    }

    pub(crate) fn form_mut(&mut self) -> &mut FormOverrides {
        self.form.get_or_insert_with(FormOverrides::default)
    }
}

impl<F> fmt::Debug for ComponentDescriptor<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentDescriptor")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .field("injections", &self.injections)
            .field("form", &self.form)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{Navigator, Route};
    use serde_json::Value;

    struct NullNavigator;
    impl Navigator for NullNavigator {
        fn navigate(&self, _route: &str, _params: Value) {}
        fn go_back(&self) {}
    }

    #[test]
    fn injection_at_matches_exact_position() {
        let descriptor = ComponentDescriptor::<&'static str>::new("Habit")
            .inject(SlotPosition::new(2), |_| "streak badge");

        assert!(descriptor.injection_at(SlotPosition::new(2)).is_some());
        assert!(descriptor.injection_at(SlotPosition::new(0)).is_none());
    }

    #[test]
    fn factory_sees_context() {
        let descriptor = ComponentDescriptor::<String>::new("Habit")
            .inject(SlotPosition::new(1), |ctx| {
                format!("route={} near_bottom={}", ctx.route.name, ctx.near_bottom)
            });

        let nav = NullNavigator;
        let route = Route::named("habitDetail");
        let ctx = RenderContext::new(&nav, &route, None, true);

        let injection = descriptor.injection_at(SlotPosition::new(1)).unwrap();
        assert_eq!(injection.render(&ctx), "route=habitDetail near_bottom=true");
    }

    #[test]
    fn with_hooks_creates_overrides_when_absent() {
        struct Hooks;
        impl crate::hooks::FormHooks for Hooks {}

        let descriptor =
            ComponentDescriptor::<()>::new("Workout").with_hooks(Arc::new(Hooks));
        assert!(descriptor.form().unwrap().hooks.is_some());
    }
}
