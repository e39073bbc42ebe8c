//! The immutable registry.

use crate::builder::RegistryBuilder;
use crate::descriptor::ComponentDescriptor;
use crate::name::ComponentName;
use std::collections::HashMap;
use std::fmt;

/// Read-only mapping from component name to descriptor.
///
/// Built once at startup via [`RegistryBuilder`], then shared freely:
/// lookups are synchronous, O(1), and need no lock because nothing mutates
/// after build.
pub struct Registry<F> {
    components: HashMap<ComponentName, ComponentDescriptor<F>>,
}

impl<F> Registry<F> {
    /// Start building a registry.
    #[must_use]
    pub fn builder() -> RegistryBuilder<F> {
        RegistryBuilder::new()
    }

    pub(crate) fn from_components(
        components: HashMap<ComponentName, ComponentDescriptor<F>>,
    ) -> Self {
        Self { components }
    }

    /// Look up a component's descriptor.
    ///
    /// A miss is a normal outcome, not an error: most components carry no
    /// extension and callers fall back to defaults.
    #[inline]
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&ComponentDescriptor<F>> {
        self.components.get(name)
    }

    /// Whether a component is registered.
    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// Number of registered components.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether the registry is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Iterate over registered names.
    pub fn names(&self) -> impl Iterator<Item = &ComponentName> {
        self.components.keys()
    }
}

impl<F> fmt::Debug for Registry<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // HashMap iteration order is arbitrary; sort for stable output.
        let mut names: Vec<&ComponentName> = self.components.keys().collect();
        names.sort();
        f.debug_struct("Registry")
            .field("components", &names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ComponentDescriptor;

    fn registry() -> Registry<&'static str> {
        let mut builder = Registry::builder();
        builder
            .register(ComponentDescriptor::new("Habit"))
            .unwrap()
            .register(ComponentDescriptor::new("Workout"))
            .unwrap();
        builder.build().unwrap()
    }

    #[test]
    fn lookup_by_str() {
        let registry = registry();
        assert!(registry.lookup("Habit").is_some());
        assert!(registry.lookup("Order").is_none());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn empty_registry_is_valid() {
        let registry: Registry<()> = Registry::builder().build().unwrap();
        assert!(registry.is_empty());
        assert!(registry.lookup("anything").is_none());
    }
}
