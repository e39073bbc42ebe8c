//! Testing utilities for the Slotform workspace
//!
//! Shared test doubles, fixtures, and helpers.

#![allow(missing_docs)]

use async_trait::async_trait;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use serde_json::{json, Value};
use slotform_core::{ConfirmationProvider, StatePublisher};
use slotform_loader::{FetchError, ScreenRef, ScreenSource, SessionGuard};
use slotform_registry::{Manifest, Navigator};
use std::sync::atomic::{AtomicUsize, Ordering};
use uuid::Uuid;

/// Initialize tracing once for the whole test binary; honors `RUST_LOG`.
pub fn init_tracing() {
    static TRACING: Lazy<()> = Lazy::new(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
    Lazy::force(&TRACING);
}

/// Declarative manifest used across integration tests.
pub static SAMPLE_MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    Manifest::from_json(
        r#"{
            "components": [
                {
                    "name": "Habit",
                    "fields": ["id", "name", "cadence", "status"],
                    "form": {
                        "saveButtonText": "Start habit",
                        "deleteButtonText": "Drop habit",
                        "readOnly": ["status"],
                        "textValues": {"name": "requiredText", "cadence": "selectText"}
                    }
                },
                {
                    "name": "Workout",
                    "fields": ["id", "title", "duration"]
                }
            ]
        }"#,
    )
    .expect("sample manifest parses")
});

pub fn sample_habit_record() -> Value {
    json!({
        "id": Uuid::new_v4().to_string(),
        "name": "Hydrate",
        "cadence": "daily",
        "status": "active"
    })
}

/// Records every navigation; doubles as a state publisher and session guard
/// so one recorder can observe a whole surface.
#[derive(Default)]
pub struct Recorder {
    log: Mutex<Vec<String>>,
    invalidations: AtomicUsize,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> Vec<String> {
        self.log.lock().clone()
    }

    pub fn invalidations(&self) -> usize {
        self.invalidations.load(Ordering::SeqCst)
    }
}

impl Navigator for Recorder {
    fn navigate(&self, route: &str, params: Value) {
        self.log.lock().push(format!("navigate:{route}:{params}"));
    }

    fn go_back(&self) {
        self.log.lock().push("back".to_string());
    }
}

impl StatePublisher for Recorder {
    fn publish(&self, topic: &str, payload: Value) {
        self.log.lock().push(format!("publish:{topic}:{payload}"));
    }
}

impl SessionGuard for Recorder {
    fn invalidate(&self, reason: &str) {
        self.invalidations.fetch_add(1, Ordering::SeqCst);
        self.log.lock().push(format!("invalidate:{reason}"));
    }
}

/// Screen source that counts fetches and fails the first `fail_first`
/// attempts with a network error.
pub struct CountingScreenSource {
    fetches: AtomicUsize,
    fail_first: usize,
}

impl CountingScreenSource {
    pub fn reliable() -> Self {
        Self {
            fetches: AtomicUsize::new(0),
            fail_first: 0,
        }
    }

    pub fn failing_first(n: usize) -> Self {
        Self {
            fetches: AtomicUsize::new(0),
            fail_first: n,
        }
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ScreenSource<String> for CountingScreenSource {
    async fn fetch(&self, screen: &ScreenRef) -> Result<String, FetchError> {
        let attempt = self.fetches.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        if attempt < self.fail_first {
            Err(FetchError::Network("connection reset".to_string()))
        } else {
            Ok(format!("module:{screen}"))
        }
    }
}

/// Confirmation provider resolving a fixed answer immediately.
pub struct ScriptedConfirm {
    pub answer: bool,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedConfirm {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }
}

#[async_trait]
impl ConfirmationProvider for ScriptedConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        self.prompts.lock().push(prompt.to_string());
        self.answer
    }
}

/// Confirmation provider that never resolves (abandoned dialog).
pub struct StalledConfirm;

#[async_trait]
impl ConfirmationProvider for StalledConfirm {
    async fn confirm(&self, _prompt: &str) -> bool {
        std::future::pending().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_manifest_declares_habit_and_workout() {
        assert_eq!(SAMPLE_MANIFEST.components.len(), 2);
        assert_eq!(SAMPLE_MANIFEST.components[0].name, "Habit");
    }

    #[test]
    fn sample_record_carries_unique_id() {
        let a = sample_habit_record();
        let b = sample_habit_record();
        assert_ne!(a["id"], b["id"]);
        assert_eq!(a["name"], "Hydrate");
    }
}
