//! Construction-phase API for the registry.
//!
//! The builder is the only mutable view of the configuration. Structural
//! mistakes fail at the call that introduces them where possible; the rest
//! fail in [`RegistryBuilder::build`]. Nothing is deferred to render time.

use crate::descriptor::{ComponentDescriptor, SlotInjection};
use crate::error::RegistryError;
use crate::hooks::FormHooks;
use crate::manifest::Manifest;
use crate::name::{ComponentName, SlotPosition};
use crate::registry::Registry;
use crate::RenderContext;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Builder for the component registry.
///
/// Usage:
/// ```rust,ignore
/// let mut builder = RegistryBuilder::new();
/// builder.apply_manifest(&manifest)?;
/// builder.inject("Habit", SlotPosition::new(2), streak_badge)?;
/// builder.attach_hooks("Habit", Arc::new(HabitHooks))?;
/// let registry = builder.build()?;
/// ```
pub struct RegistryBuilder<F> {
    components: HashMap<ComponentName, ComponentDescriptor<F>>,
}

impl<F> std::fmt::Debug for RegistryBuilder<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryBuilder")
            .field("components", &self.components)
            .finish()
    }
}

impl<F> RegistryBuilder<F> {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            components: HashMap::new(),
        }
    }

    /// Number of registered components.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether nothing has been registered yet.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Register a fully-built descriptor.
    ///
    /// # Errors
    /// [`RegistryError::DuplicateComponent`] when the name is taken. The
    /// previous registration stays in place untouched.
    pub fn register(
        &mut self,
        descriptor: ComponentDescriptor<F>,
    ) -> Result<&mut Self, RegistryError> {
        let name = descriptor.name().clone();
        if self.components.contains_key(&name) {
            return Err(RegistryError::DuplicateComponent(name));
        }
        self.components.insert(name, descriptor);
        Ok(self)
    }

    /// Merge a declarative manifest.
    ///
    /// Each manifest entry registers a new component carrying the declared
    /// fields and form overrides; factories and hooks attach afterwards via
    /// [`RegistryBuilder::inject`] and [`RegistryBuilder::attach_hooks`].
    ///
    /// # Errors
    /// [`RegistryError::DuplicateComponent`] when an entry names an
    /// already-registered component or the manifest repeats a name.
    pub fn apply_manifest(&mut self, manifest: &Manifest) -> Result<&mut Self, RegistryError> {
        for entry in &manifest.components {
            let mut descriptor = ComponentDescriptor::new(entry.name.as_str());
            descriptor.set_fields(entry.fields.clone());
            descriptor.set_form(entry.form.clone());
            self.register(descriptor)?;
        }
        Ok(self)
    }

    /// Attach a slot factory to a registered component.
    ///
    /// # Errors
    /// [`RegistryError::UnknownComponent`] when the name was never
    /// registered.
    pub fn inject<G>(
        &mut self,
        name: &str,
        position: SlotPosition,
        factory: G,
    ) -> Result<&mut Self, RegistryError>
    where
        G: Fn(&RenderContext<'_>) -> F + Send + Sync + 'static,
    {
        let descriptor = self
            .components
            .get_mut(name)
            .ok_or_else(|| RegistryError::UnknownComponent(ComponentName::from(name)))?;
        descriptor.push_injection(SlotInjection::new(position, Arc::new(factory)));
        Ok(self)
    }

    /// Attach lifecycle hooks to a registered component.
    ///
    /// # Errors
    /// [`RegistryError::UnknownComponent`] when the name was never
    /// registered.
    pub fn attach_hooks(
        &mut self,
        name: &str,
        hooks: Arc<dyn FormHooks>,
    ) -> Result<&mut Self, RegistryError> {
        let descriptor = self
            .components
            .get_mut(name)
            .ok_or_else(|| RegistryError::UnknownComponent(ComponentName::from(name)))?;
        descriptor.form_mut().hooks = Some(hooks);
        Ok(self)
    }

    /// Validate and freeze the registry.
    ///
    /// Checks that no component claims one slot position twice and that
    /// every read-only override names a declared field (when the component
    /// declared its fields at all).
    ///
    /// # Errors
    /// [`RegistryError::DuplicateSlotPosition`] or
    /// [`RegistryError::UnknownReadOnlyField`].
    pub fn build(self) -> Result<Registry<F>, RegistryError> {
        for descriptor in self.components.values() {
            let mut seen = HashSet::new();
            for injection in descriptor.injections() {
                if !seen.insert(injection.position) {
                    return Err(RegistryError::DuplicateSlotPosition {
                        component: descriptor.name().clone(),
                        position: injection.position,
                    });
                }
            }

            if let (Some(fields), Some(form)) = (descriptor.fields(), descriptor.form()) {
                for field in &form.read_only {
                    if !fields.contains(field) {
                        return Err(RegistryError::UnknownReadOnlyField {
                            component: descriptor.name().clone(),
                            field: field.clone(),
                        });
                    }
                }
            }
        }

        tracing::debug!(components = self.components.len(), "registry built");
        Ok(Registry::from_components(self.components))
    }
}

impl<F> Default for RegistryBuilder<F> {
    fn default() -> Self {
        Self::new()
    }
}
