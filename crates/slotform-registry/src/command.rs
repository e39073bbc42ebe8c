//! Command objects produced by lifecycle hooks.
//!
//! Hooks describe their side effects as data; the core dispatches every
//! command through one bus so ordering and failure policy live in a single
//! place instead of inside ad hoc closures.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A side effect requested by a lifecycle hook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Command {
    /// Navigate to a named route with parameters.
    #[serde(rename_all = "camelCase")]
    Navigate {
        /// Target route name.
        route: String,
        /// Route parameters.
        #[serde(default)]
        params: Value,
    },

    /// Pop back to the previous screen.
    GoBack,

    /// Publish a payload to the host application's state layer.
    #[serde(rename_all = "camelCase")]
    Publish {
        /// State topic, e.g. `"progress/xp"`.
        topic: String,
        /// Arbitrary payload.
        payload: Value,
    },
}

impl Command {
    /// Convenience constructor for a parameterless navigation.
    #[must_use]
    pub fn navigate_to(route: impl Into<String>) -> Self {
        Self::Navigate {
            route: route.into(),
            params: Value::Null,
        }
    }
}

/// Response shape the external data-access collaborator hands to hooks.
///
/// The body is whatever the collaborator returned; `id` is the record
/// identifier when one could be extracted, which is the minimum contract
/// the created-id callback relies on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationResponse {
    /// Identifier of the affected record, when present.
    pub id: Option<String>,
    /// Raw response body.
    pub body: Value,
}

impl MutationResponse {
    /// Wrap a response body, extracting a string `"id"` field when present.
    #[must_use]
    pub fn new(body: Value) -> Self {
        let id = body
            .as_object()
            .and_then(|obj| obj.get("id"))
            .and_then(Value::as_str)
            .map(ToString::to_string);
        Self { id, body }
    }

    /// Wrap a response body with an explicit identifier.
    #[must_use]
    pub fn with_id(id: impl Into<String>, body: Value) -> Self {
        Self {
            id: Some(id.into()),
            body,
        }
    }
}
