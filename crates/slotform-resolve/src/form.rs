//! Form-behavior resolution.

use indexmap::IndexMap;
use serde_json::Value;
use slotform_registry::{ComponentName, FieldText, FormHooks, Registry, TextKind};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// Built-in save button label.
pub const DEFAULT_SAVE_LABEL: &str = "Save";
/// Built-in update button label.
pub const DEFAULT_UPDATE_LABEL: &str = "Update";
/// Built-in delete button label.
pub const DEFAULT_DELETE_LABEL: &str = "Delete";

/// Concrete form configuration consumed by the generic form renderer.
///
/// Every field is fully resolved: defaults are already applied, the
/// read-only set is already filtered against the loaded record, and the
/// hook handle (if any) is the component's shared one. The renderer needs
/// no further registry access.
#[derive(Clone)]
pub struct FormConfig {
    component: ComponentName,
    /// Save button label.
    pub save_button_text: String,
    /// Update button label.
    pub update_button_text: String,
    /// Delete button label.
    pub delete_button_text: String,
    /// Suppress all default action controls.
    pub hide_buttons: bool,
    /// Suppress only the delete control.
    pub hide_delete_button: bool,
    /// Effective non-editable fields.
    pub read_only: BTreeSet<String>,
    /// Per-field validation-message kind, in declaration order.
    pub text_values: IndexMap<String, TextKind>,
    /// Ordered label/value overrides.
    pub custom_text_values: Vec<FieldText>,
    hooks: Option<Arc<dyn FormHooks>>,
}

impl FormConfig {
    /// The zero-customization configuration for `component`.
    ///
    /// Default labels, nothing hidden, every field editable, no hooks —
    /// the renderer must work with exactly this for any unregistered name.
    #[must_use]
    pub fn default_for(component: impl Into<ComponentName>) -> Self {
        Self {
            component: component.into(),
            save_button_text: DEFAULT_SAVE_LABEL.to_string(),
            update_button_text: DEFAULT_UPDATE_LABEL.to_string(),
            delete_button_text: DEFAULT_DELETE_LABEL.to_string(),
            hide_buttons: false,
            hide_delete_button: false,
            read_only: BTreeSet::new(),
            text_values: IndexMap::new(),
            custom_text_values: Vec::new(),
            hooks: None,
        }
    }

    /// Component this configuration was resolved for.
    #[inline]
    #[must_use]
    pub fn component(&self) -> &ComponentName {
        &self.component
    }

    /// Whether `field` renders non-editable.
    #[inline]
    #[must_use]
    pub fn is_read_only(&self, field: &str) -> bool {
        self.read_only.contains(field)
    }

    /// Validation-message kind for `field`, if declared.
    #[inline]
    #[must_use]
    pub fn text_kind(&self, field: &str) -> Option<TextKind> {
        self.text_values.get(field).copied()
    }

    /// Lifecycle hooks, if the component declared any.
    #[inline]
    #[must_use]
    pub fn hooks(&self) -> Option<&Arc<dyn FormHooks>> {
        self.hooks.as_ref()
    }
}

impl fmt::Debug for FormConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormConfig")
            .field("component", &self.component)
            .field("save_button_text", &self.save_button_text)
            .field("update_button_text", &self.update_button_text)
            .field("delete_button_text", &self.delete_button_text)
            .field("hide_buttons", &self.hide_buttons)
            .field("hide_delete_button", &self.hide_delete_button)
            .field("read_only", &self.read_only)
            .field("text_values", &self.text_values)
            .field("custom_text_values", &self.custom_text_values)
            .field("hooks", &self.hooks.is_some())
            .finish()
    }
}

/// Merge a component's declared overrides into a concrete [`FormConfig`].
///
/// Merge policy is field-by-field replacement over defaults: an omitted
/// label falls back to the built-in one, and the read-only set
/// wholesale-replaces the (empty) default rather than unioning with it.
///
/// Read-only names the loaded record does not expose are dropped rather
/// than failing — declared sets can outlive record-shape drift, and that
/// mismatch is a configuration concern, not a render-time crash. With no
/// record loaded (create mode) the declared set passes through untouched.
///
/// Safe to call on every render: no shared state is touched and repeated
/// calls with identical arguments produce identical observable fields.
#[must_use]
pub fn resolve_form_config<F>(
    registry: &Registry<F>,
    component: &str,
    source: Option<&Value>,
) -> FormConfig {
    let mut config = FormConfig::default_for(component);

    let Some(form) = registry.lookup(component).and_then(|d| d.form()) else {
        return config;
    };

    if let Some(label) = &form.save_button_text {
        config.save_button_text = label.clone();
    }
    if let Some(label) = &form.update_button_text {
        config.update_button_text = label.clone();
    }
    if let Some(label) = &form.delete_button_text {
        config.delete_button_text = label.clone();
    }
    config.hide_buttons = form.hide_buttons;
    config.hide_delete_button = form.hide_delete_button;
    config.text_values = form.text_values.clone();
    config.custom_text_values = form.custom_text_values.clone();
    config.hooks = form.hooks.clone();

    config.read_only = match source.and_then(Value::as_object) {
        Some(record) => form
            .read_only
            .iter()
            .filter(|field| record.contains_key(*field))
            .cloned()
            .collect(),
        None => form.read_only.clone(),
    };

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use serde_json::json;
    use slotform_registry::{ComponentDescriptor, FormOverrides};

    fn registry() -> Registry<()> {
        let mut builder = Registry::builder();
        builder
            .register(
                ComponentDescriptor::new("Order")
                    .with_fields(["status", "total", "carrier"])
                    .with_form(
                        FormOverrides {
                            save_button_text: Some("Place order".to_string()),
                            hide_delete_button: true,
                            ..FormOverrides::new()
                        }
                        .read_only(["status", "carrier"])
                        .text_value("total", TextKind::Required),
                    ),
            )
            .unwrap()
            .register(ComponentDescriptor::new("Habit"))
            .unwrap();
        builder.build().unwrap()
    }

    #[test]
    fn unregistered_component_gets_defaults() {
        let registry = registry();
        let config = resolve_form_config(&registry, "Journal", None);

        assert_eq!(config.save_button_text, DEFAULT_SAVE_LABEL);
        assert_eq!(config.update_button_text, DEFAULT_UPDATE_LABEL);
        assert_eq!(config.delete_button_text, DEFAULT_DELETE_LABEL);
        assert!(!config.hide_buttons);
        assert!(!config.hide_delete_button);
        assert!(config.read_only.is_empty());
        assert!(config.hooks().is_none());
    }

    #[test]
    fn registered_component_without_form_gets_defaults() {
        let registry = registry();
        let config = resolve_form_config(&registry, "Habit", None);
        assert_eq!(config.save_button_text, DEFAULT_SAVE_LABEL);
        assert!(config.read_only.is_empty());
    }

    #[test]
    fn overrides_replace_field_by_field() {
        let registry = registry();
        let config = resolve_form_config(&registry, "Order", None);

        // Declared label wins; omitted labels keep the defaults.
        assert_eq!(config.save_button_text, "Place order");
        assert_eq!(config.update_button_text, DEFAULT_UPDATE_LABEL);
        assert!(config.hide_delete_button);
        assert!(!config.hide_buttons);
        assert_eq!(config.text_kind("total"), Some(TextKind::Required));
    }

    #[test]
    fn read_only_applies_regardless_of_record_permissions() {
        let registry = registry();
        let record = json!({"status": "shipped", "total": 12.5, "carrier": "dhl", "editable": true});
        let config = resolve_form_config(&registry, "Order", Some(&record));

        assert!(config.is_read_only("status"));
        assert!(config.is_read_only("carrier"));
        assert!(!config.is_read_only("total"));
    }

    #[test]
    fn read_only_ignores_fields_missing_from_record() {
        let registry = registry();
        let record = json!({"status": "shipped", "total": 3.0});
        let config = resolve_form_config(&registry, "Order", Some(&record));

        assert!(config.is_read_only("status"));
        // "carrier" is declared read-only but absent from this record.
        assert!(!config.is_read_only("carrier"));
    }

    #[test]
    fn create_mode_keeps_declared_set() {
        let registry = registry();
        let config = resolve_form_config(&registry, "Order", None);
        assert_eq!(
            config.read_only,
            ["carrier", "status"]
                .into_iter()
                .map(String::from)
                .collect::<BTreeSet<_>>()
        );
    }

    #[test]
    fn resolution_is_idempotent() {
        let registry = registry();
        let record = json!({"status": "open", "total": 1.0});

        let first = resolve_form_config(&registry, "Order", Some(&record));
        let second = resolve_form_config(&registry, "Order", Some(&record));

        assert_eq!(first.save_button_text, second.save_button_text);
        assert_eq!(first.update_button_text, second.update_button_text);
        assert_eq!(first.delete_button_text, second.delete_button_text);
        assert_eq!(first.hide_buttons, second.hide_buttons);
        assert_eq!(first.hide_delete_button, second.hide_delete_button);
        assert_eq!(first.read_only, second.read_only);
        assert_eq!(first.text_values, second.text_values);
        assert_eq!(first.custom_text_values, second.custom_text_values);
        assert_eq!(first.hooks().is_some(), second.hooks().is_some());
    }

    proptest! {
        #[test]
        fn defaults_for_arbitrary_unregistered_names(name in "[A-Za-z][A-Za-z0-9_]{0,24}") {
            let registry = registry();
            prop_assume!(registry.lookup(&name).is_none());

            let config = resolve_form_config(&registry, &name, None);
            prop_assert_eq!(config.save_button_text.as_str(), DEFAULT_SAVE_LABEL);
            prop_assert!(config.read_only.is_empty());
            prop_assert!(config.hooks().is_none());
        }
    }
}
