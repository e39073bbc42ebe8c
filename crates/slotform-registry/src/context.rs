//! Ambient render context handed to slot factories.

use serde_json::Value;
use std::fmt;

/// Navigation collaborator.
///
/// An opaque handle into the host application's navigation stack. Injected
/// fragments and dispatched commands use it; the registry itself never
/// navigates.
pub trait Navigator: Send + Sync {
    /// Navigate to a named route with parameters.
    fn navigate(&self, route: &str, params: Value);

    /// Pop back to the previous screen.
    fn go_back(&self);
}

/// Current navigation location.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Route {
    /// Route name.
    pub name: String,
    /// Route parameters.
    #[serde(default)]
    pub params: Value,
}

impl Route {
    /// Create a route with parameters.
    #[must_use]
    pub fn new(name: impl Into<String>, params: Value) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    /// Create a parameterless route.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, Value::Null)
    }
}

/// Ephemeral per-render-pass context.
///
/// Created fresh for every render pass and never persisted. Slot factories
/// may read it but have nothing to mutate; the registry stays untouched.
pub struct RenderContext<'a> {
    /// Navigation handle.
    pub navigator: &'a dyn Navigator,
    /// Current route.
    pub route: &'a Route,
    /// Currently loaded record, if any.
    pub source: Option<&'a Value>,
    /// Whether the parent scroll view sits near its bottom edge.
    pub near_bottom: bool,
}

impl<'a> RenderContext<'a> {
    /// Assemble a render context.
    #[must_use]
    pub fn new(
        navigator: &'a dyn Navigator,
        route: &'a Route,
        source: Option<&'a Value>,
        near_bottom: bool,
    ) -> Self {
        Self {
            navigator,
            route,
            source,
            near_bottom,
        }
    }
}

impl fmt::Debug for RenderContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderContext")
            .field("route", &self.route)
            .field("source", &self.source.is_some())
            .field("near_bottom", &self.near_bottom)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullNavigator;

    impl Navigator for NullNavigator {
        fn navigate(&self, _route: &str, _params: Value) {}
        fn go_back(&self) {}
    }

    #[test]
    fn route_named_has_null_params() {
        let route = Route::named("habitDetail");
        assert_eq!(route.name, "habitDetail");
        assert!(route.params.is_null());
    }

    #[test]
    fn context_debug_omits_navigator() {
        let nav = NullNavigator;
        let route = Route::named("home");
        let ctx = RenderContext::new(&nav, &route, None, false);
        let rendered = format!("{ctx:?}");
        assert!(rendered.contains("home"));
        assert!(!rendered.contains("Navigator"));
    }
}
