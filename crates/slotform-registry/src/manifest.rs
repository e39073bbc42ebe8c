//! JSON manifest for the declarative half of the registry.
//!
//! Button labels, read-only sets, text kinds, and declared field sets can
//! ship as data; factories and hooks are code and attach programmatically
//! via [`crate::RegistryBuilder`].

use crate::overrides::FormOverrides;
use serde::Deserialize;
use std::collections::BTreeSet;

/// Errors while reading a manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// The manifest is not valid JSON for the expected shape.
    #[error("manifest parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One declaratively-configured component.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ManifestComponent {
    /// Component name; must be unique across the whole registry.
    pub name: String,

    /// Record fields the component exposes, used for read-only validation.
    #[serde(default)]
    pub fields: Option<BTreeSet<String>>,

    /// Declarative form overrides.
    #[serde(default)]
    pub form: Option<FormOverrides>,
}

/// Declarative registry manifest.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Declared components.
    pub components: Vec<ManifestComponent>,
}

impl Manifest {
    /// Parse a manifest from JSON text.
    ///
    /// # Errors
    /// Returns [`ManifestError::Parse`] when the text is not valid JSON or
    /// carries unknown keys.
    pub fn from_json(text: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overrides::TextKind;

    const MANIFEST: &str = r#"{
        "components": [
            {
                "name": "Habit",
                "fields": ["name", "cadence", "status"],
                "form": {
                    "saveButtonText": "Start habit",
                    "readOnly": ["status"],
                    "textValues": {"name": "requiredText", "cadence": "selectText"}
                }
            },
            {"name": "Workout"}
        ]
    }"#;

    #[test]
    fn parses_full_manifest() {
        let manifest = Manifest::from_json(MANIFEST).unwrap();
        assert_eq!(manifest.components.len(), 2);

        let habit = &manifest.components[0];
        assert_eq!(habit.name, "Habit");
        assert_eq!(habit.fields.as_ref().unwrap().len(), 3);

        let form = habit.form.as_ref().unwrap();
        assert_eq!(form.save_button_text.as_deref(), Some("Start habit"));
        assert_eq!(form.text_values.get("cadence"), Some(&TextKind::Select));

        let workout = &manifest.components[1];
        assert!(workout.fields.is_none());
        assert!(workout.form.is_none());
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = Manifest::from_json(r#"{"components": [], "screens": []}"#);
        assert!(matches!(err, Err(ManifestError::Parse(_))));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(Manifest::from_json("{not json").is_err());
    }
}
