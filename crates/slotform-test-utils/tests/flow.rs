//! End-to-end flow over a fully wired surface: navigate, render, mutate.

use serde_json::{json, Value};
use slotform_core::prelude::*;
use slotform_core::Progress;
use slotform_test_utils::{
    init_tracing, sample_habit_record, CountingScreenSource, Recorder, ScriptedConfirm,
    SAMPLE_MANIFEST,
};
use std::sync::Arc;

/// Hooks the habit screen registers: publish XP on create, jump to the new
/// record's detail screen, confirm before deleting.
struct HabitHooks;

impl FormHooks for HabitHooks {
    fn after_create(
        &self,
        _response: &MutationResponse,
        valid: bool,
    ) -> Result<Vec<Command>, HookError> {
        if !valid {
            return Err(HookError::Rejected("invalid habit form".to_string()));
        }
        let mut progress = Progress::new();
        progress.award(25);
        Ok(vec![Command::Publish {
            topic: "progress/xp".to_string(),
            payload: progress.as_payload(),
        }])
    }

    fn created_id(&self, id: &str) -> Result<Vec<Command>, HookError> {
        Ok(vec![Command::Navigate {
            route: "habitDetail".to_string(),
            params: json!({ "id": id }),
        }])
    }

    fn after_delete(&self, _response: &MutationResponse) -> Result<Vec<Command>, HookError> {
        Ok(vec![Command::GoBack])
    }

    fn delete_gate(&self, _source: Option<&Value>) -> DeleteGate {
        DeleteGate::confirm("Drop this habit?")
    }
}

fn build_registry() -> Registry<String> {
    let mut builder = Registry::builder();
    builder.apply_manifest(&SAMPLE_MANIFEST).unwrap();
    builder
        .inject("Habit", SlotPosition::new(2), |ctx| {
            format!("streak badge on {}", ctx.route.name)
        })
        .unwrap();
    builder.attach_hooks("Habit", Arc::new(HabitHooks)).unwrap();
    builder.build().unwrap()
}

fn build_surface(
    source: Arc<CountingScreenSource>,
    confirm: Arc<ScriptedConfirm>,
) -> (Surface<String, String>, Arc<Recorder>) {
    let recorder = Arc::new(Recorder::new());
    let loader = ScreenLoader::new(source, recorder.clone());
    let surface = Surface::new(
        Arc::new(build_registry()),
        loader,
        recorder.clone(),
        recorder.clone(),
        confirm,
        SurfaceOptions::default(),
    );
    (surface, recorder)
}

#[tokio::test]
async fn create_flow_renders_and_dispatches() {
    init_tracing();
    let source = Arc::new(CountingScreenSource::reliable());
    let confirm = Arc::new(ScriptedConfirm::answering(true));
    let (surface, recorder) = build_surface(source.clone(), confirm);

    // Navigation event: the habit screen loads lazily.
    let screen = ScreenRef::new("dailyHabits");
    let module = surface.open(&screen).await.unwrap();
    assert_eq!(&*module, "module:dailyHabits");
    assert_eq!(source.fetches(), 1);

    // The screen resolves its form configuration from the manifest.
    let record = sample_habit_record();
    let config = surface.form_config("Habit", Some(&record));
    assert_eq!(config.save_button_text, "Start habit");
    assert_eq!(config.delete_button_text, "Drop habit");
    assert!(config.is_read_only("status"));
    assert_eq!(config.text_kind("name"), Some(TextKind::Required));

    // Layout asks each candidate position for injected UI.
    let route = Route::new("habitForm", json!({}));
    assert_eq!(
        surface
            .slot(SlotPosition::new(2), "Habit", &route, Some(&record), false)
            .as_deref(),
        Some("streak badge on habitForm")
    );
    assert_eq!(
        surface.slot(SlotPosition::new(0), "Habit", &route, Some(&record), false),
        None
    );

    // The renderer persisted the record; hooks run against the response.
    let response = MutationResponse::new(json!({"id": "h-77", "name": "Hydrate"}));
    surface.lifecycle().notify_created(&config, &response, true);

    assert_eq!(
        recorder.log(),
        vec![
            "publish:progress/xp:{\"level\":1,\"xp\":25}".to_string(),
            "navigate:habitDetail:{\"id\":\"h-77\"}".to_string(),
        ]
    );
}

#[tokio::test]
async fn delete_flow_respects_gate_decision() {
    init_tracing();
    let source = Arc::new(CountingScreenSource::reliable());

    // Denied: delete aborts, after_delete never runs.
    let confirm = Arc::new(ScriptedConfirm::answering(false));
    let (surface, recorder) = build_surface(source.clone(), confirm.clone());
    let record = sample_habit_record();
    let config = surface.form_config("Habit", Some(&record));

    assert!(!surface.lifecycle().confirm_delete(&config, Some(&record)).await);
    assert_eq!(confirm.prompts(), vec!["Drop this habit?".to_string()]);
    assert!(recorder.log().is_empty());

    // Accepted: the renderer deletes, then notifies.
    let confirm = Arc::new(ScriptedConfirm::answering(true));
    let (surface, recorder) = build_surface(source, confirm);
    let config = surface.form_config("Habit", Some(&record));

    assert!(surface.lifecycle().confirm_delete(&config, Some(&record)).await);
    surface
        .lifecycle()
        .notify_deleted(&config, &MutationResponse::new(Value::Null));
    assert_eq!(recorder.log(), vec!["back".to_string()]);
}

#[tokio::test]
async fn failed_screen_load_forces_reauth_then_recovers() {
    init_tracing();
    let source = Arc::new(CountingScreenSource::failing_first(1));
    let confirm = Arc::new(ScriptedConfirm::answering(true));
    let (surface, recorder) = build_surface(source.clone(), confirm);

    let screen = ScreenRef::new("dailyHabits");
    let err = surface.open(&screen).await.unwrap_err();
    assert!(matches!(err, LoadError::Fetch { .. }));
    assert_eq!(surface.screen_state(&screen), LoadState::Failed);
    assert_eq!(recorder.invalidations(), 1);

    // A user-initiated retry starts a fresh attempt.
    let module = surface.open(&screen).await.unwrap();
    assert_eq!(&*module, "module:dailyHabits");
    assert_eq!(source.fetches(), 2);
    assert_eq!(recorder.invalidations(), 1);
}

#[tokio::test]
async fn unregistered_component_needs_no_configuration() {
    init_tracing();
    let source = Arc::new(CountingScreenSource::reliable());
    let confirm = Arc::new(ScriptedConfirm::answering(true));
    let (surface, recorder) = build_surface(source, confirm);

    let config = surface.form_config("Journal", None);
    assert_eq!(config.save_button_text, "Save");
    assert!(config.hooks().is_none());

    // Lifecycle notifications are no-ops without hooks.
    surface
        .lifecycle()
        .notify_created(&config, &MutationResponse::new(json!({"id": "j-1"})), true);
    assert!(surface.lifecycle().confirm_delete(&config, None).await);
    assert!(recorder.log().is_empty());
}
