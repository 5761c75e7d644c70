// ABOUTME: Integration tests for the wizard submit flow and store semantics

use pretty_assertions::assert_eq;
use saasforge::app::state::{AsyncAction, WizardStep};
use saasforge::app::{App, AppEvent, AppState, EventHandler};
use saasforge::models::ProjectConfig;

/// Fill the form the way a user would: focus fields in order and type.
fn fill_form(state: &mut AppState) {
    for c in "Foo".chars() {
        EventHandler::process_event(AppEvent::FormInputChar(c), state);
    }
    EventHandler::process_event(AppEvent::FormNextField, state);
    for c in "Bar".chars() {
        EventHandler::process_event(AppEvent::FormInputChar(c), state);
    }

    // Tech stack: toggle "next" (row 0) then "postgres" (row 4)
    EventHandler::process_event(AppEvent::FormNextField, state);
    EventHandler::process_event(AppEvent::FormToggleTech, state);
    for _ in 0..4 {
        EventHandler::process_event(AppEvent::FormTechDown, state);
    }
    EventHandler::process_event(AppEvent::FormToggleTech, state);

    // Model: cycle from Claude to GPT-4.1
    EventHandler::process_event(AppEvent::FormNextField, state);
    EventHandler::process_event(AppEvent::FormNextModel, state);

    // API key
    EventHandler::process_event(AppEvent::FormNextField, state);
    for c in "sk-x".chars() {
        EventHandler::process_event(AppEvent::FormInputChar(c), state);
    }
}

#[test]
fn test_end_to_end_submission_stores_input_verbatim() {
    let mut state = AppState::new();
    fill_form(&mut state);

    EventHandler::process_event(AppEvent::FormSubmit, &mut state);

    assert_eq!(state.wizard_step, WizardStep::Building);
    assert_eq!(
        state.project(),
        Some(&ProjectConfig {
            name: "Foo".to_string(),
            description: "Bar".to_string(),
            tech_stack: vec!["next".to_string(), "postgres".to_string()],
            model: "gpt-4.1".to_string(),
            api_key: "sk-x".to_string(),
        })
    );
}

#[test]
fn test_submit_queues_build_and_notifies() {
    let mut state = AppState::new();
    fill_form(&mut state);

    EventHandler::process_event(AppEvent::FormSubmit, &mut state);

    assert_eq!(state.pending_async_action, Some(AsyncAction::StartBuild));
    assert!(state
        .notifications
        .iter()
        .any(|n| n.message.contains("Project creation started")));
}

#[test]
fn test_failed_submission_returns_to_form_with_store_unchanged() {
    let mut state = AppState::new();
    fill_form(&mut state);
    EventHandler::process_event(AppEvent::FormSubmit, &mut state);
    let stored = state.project().cloned();

    // Back on the form, blank out the name and resubmit
    state.wizard_step = WizardStep::Form;
    state.form_state.name.clear();
    EventHandler::process_event(AppEvent::FormSubmit, &mut state);

    // Pinned behavior: validation precedes the store write, so the prior
    // value survives a failed submission
    assert_eq!(state.wizard_step, WizardStep::Form);
    assert_eq!(state.project(), stored.as_ref());
    assert!(state.form_state.error_message.is_some());
}

#[tokio::test]
async fn test_build_tick_shows_preview_with_first_file_selected() {
    let mut app = App::new();
    fill_form(&mut app.state);
    EventHandler::process_event(AppEvent::FormSubmit, &mut app.state);

    app.tick().await.unwrap();

    assert_eq!(app.state.wizard_step, WizardStep::Building);
    assert_eq!(app.state.preview_state.selected_path(), Some("package.json"));
    assert_eq!(app.state.pending_async_action, None);
}

#[test]
fn test_resubmission_replaces_store_wholesale() {
    let mut state = AppState::new();
    fill_form(&mut state);
    EventHandler::process_event(AppEvent::FormSubmit, &mut state);

    // Edit only the name and submit again; the store is replaced, not merged
    state.wizard_step = WizardStep::Form;
    state.form_state.name = "Baz".to_string();
    EventHandler::process_event(AppEvent::FormSubmit, &mut state);

    let project = state.project().unwrap();
    assert_eq!(project.name, "Baz");
    assert_eq!(project.description, "Bar");
}
