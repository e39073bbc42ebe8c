//! Declarative form-behavior overrides.

use crate::hooks::FormHooks;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// Semantic kind of a field's validation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextKind {
    /// "This field is required" styling.
    #[serde(rename = "requiredText")]
    Required,

    /// "Pick an option" styling.
    #[serde(rename = "selectText")]
    Select,
}

/// Label/value override for one field.
///
/// Overrides are an ordered sequence; the renderer applies them in
/// declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldText {
    /// Target field name.
    pub field: String,
    /// Replacement label.
    pub label: String,
    /// Replacement value, `null` to leave the value alone.
    #[serde(default)]
    pub value: Value,
}

impl FieldText {
    /// Label override leaving the field value untouched.
    #[must_use]
    pub fn label(field: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            label: label.into(),
            value: Value::Null,
        }
    }
}

/// Per-component form behavior contract.
///
/// Everything here is optional; an absent override falls back to the
/// generic renderer's defaults. The declarative fields round-trip through
/// the JSON manifest, hooks attach programmatically.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormOverrides {
    /// Ordered label/value overrides for specific fields.
    pub custom_text_values: Vec<FieldText>,

    /// Replacement for the save button label.
    pub save_button_text: Option<String>,

    /// Replacement for the update button label.
    pub update_button_text: Option<String>,

    /// Replacement for the delete button label.
    pub delete_button_text: Option<String>,

    /// Suppress all default action controls.
    pub hide_buttons: bool,

    /// Suppress only the delete control.
    pub hide_delete_button: bool,

    /// Fields rendered non-editable regardless of the record's own
    /// permission state. Wholesale-replaces the default (empty) set.
    pub read_only: BTreeSet<String>,

    /// Per-field validation-message kind, in declaration order.
    pub text_values: IndexMap<String, TextKind>,

    /// Lifecycle hooks. Never serialized; attached at startup.
    #[serde(skip)]
    pub hooks: Option<Arc<dyn FormHooks>>,
}

impl FormOverrides {
    /// Overrides with nothing customized.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style: mark fields read-only.
    #[must_use]
    pub fn read_only<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.read_only = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Builder-style: attach lifecycle hooks.
    #[must_use]
    pub fn hooks(mut self, hooks: Arc<dyn FormHooks>) -> Self {
        self.hooks = Some(hooks);
        self
    }

    /// Builder-style: set a field's validation-message kind.
    #[must_use]
    pub fn text_value(mut self, field: impl Into<String>, kind: TextKind) -> Self {
        self.text_values.insert(field.into(), kind);
        self
    }
}

impl fmt::Debug for FormOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormOverrides")
            .field("custom_text_values", &self.custom_text_values)
            .field("save_button_text", &self.save_button_text)
            .field("update_button_text", &self.update_button_text)
            .field("delete_button_text", &self.delete_button_text)
            .field("hide_buttons", &self.hide_buttons)
            .field("hide_delete_button", &self.hide_delete_button)
            .field("read_only", &self.read_only)
            .field("text_values", &self.text_values)
            .field("hooks", &self.hooks.is_some())
            .finish()
    }
}
