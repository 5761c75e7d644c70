// ABOUTME: Event handling system for keyboard input and app actions

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::app::state::{AppState, WizardStep};
use crate::components::FormField;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    // Form events
    FormInputChar(char),
    FormBackspace,
    FormNextField,
    FormPreviousField,
    FormCursorLeft,
    FormCursorRight,
    FormCursorHome,
    FormCursorEnd,
    FormTechUp,
    FormTechDown,
    FormToggleTech,
    FormNextModel,
    FormPreviousModel,
    FormSubmit,
    // Preview events
    PreviewNextFile,
    PreviewPreviousFile,
    PreviewScrollUp,
    PreviewScrollDown,
}

pub struct EventHandler;

impl EventHandler {
    /// Map a key event to an app event for the current wizard step
    pub fn handle_key_event(key: KeyEvent, state: &AppState) -> Option<AppEvent> {
        // Ctrl+C always quits
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(AppEvent::Quit);
        }

        match state.wizard_step {
            WizardStep::Form => Self::handle_form_key(key, state),
            WizardStep::Building => Self::handle_preview_key(key),
        }
    }

    fn handle_form_key(key: KeyEvent, state: &AppState) -> Option<AppEvent> {
        let focused = state.form_state.focused_field;

        match key.code {
            KeyCode::Esc => Some(AppEvent::Quit),
            KeyCode::Enter => Some(AppEvent::FormSubmit),
            KeyCode::Tab => Some(AppEvent::FormNextField),
            KeyCode::BackTab => Some(AppEvent::FormPreviousField),
            KeyCode::Up => {
                if focused == FormField::TechStack {
                    Some(AppEvent::FormTechUp)
                } else {
                    Some(AppEvent::FormPreviousField)
                }
            }
            KeyCode::Down => {
                if focused == FormField::TechStack {
                    Some(AppEvent::FormTechDown)
                } else {
                    Some(AppEvent::FormNextField)
                }
            }
            KeyCode::Left => match focused {
                FormField::Model => Some(AppEvent::FormPreviousModel),
                f if f.is_text() => Some(AppEvent::FormCursorLeft),
                _ => None,
            },
            KeyCode::Right => match focused {
                FormField::Model => Some(AppEvent::FormNextModel),
                f if f.is_text() => Some(AppEvent::FormCursorRight),
                _ => None,
            },
            KeyCode::Home => Some(AppEvent::FormCursorHome),
            KeyCode::End => Some(AppEvent::FormCursorEnd),
            KeyCode::Backspace => Some(AppEvent::FormBackspace),
            KeyCode::Char(' ') if focused == FormField::TechStack => {
                Some(AppEvent::FormToggleTech)
            }
            KeyCode::Char(c) if focused.is_text() => Some(AppEvent::FormInputChar(c)),
            _ => None,
        }
    }

    fn handle_preview_key(key: KeyEvent) -> Option<AppEvent> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(AppEvent::Quit),
            KeyCode::Up | KeyCode::Char('k') => Some(AppEvent::PreviewPreviousFile),
            KeyCode::Down | KeyCode::Char('j') => Some(AppEvent::PreviewNextFile),
            KeyCode::PageUp => Some(AppEvent::PreviewScrollUp),
            KeyCode::PageDown => Some(AppEvent::PreviewScrollDown),
            _ => None,
        }
    }

    /// Apply an app event to the state
    pub fn process_event(event: AppEvent, state: &mut AppState) {
        debug!(?event, "Processing app event");
        match event {
            AppEvent::Quit => state.should_quit = true,
            AppEvent::FormInputChar(c) => state.form_state.input_char(c),
            AppEvent::FormBackspace => state.form_state.backspace(),
            AppEvent::FormNextField => state.form_state.next_field(),
            AppEvent::FormPreviousField => state.form_state.previous_field(),
            AppEvent::FormCursorLeft => state.form_state.cursor_left(),
            AppEvent::FormCursorRight => state.form_state.cursor_right(),
            AppEvent::FormCursorHome => state.form_state.cursor_home(),
            AppEvent::FormCursorEnd => state.form_state.cursor_end(),
            AppEvent::FormTechUp => state.form_state.tech_cursor_up(),
            AppEvent::FormTechDown => state.form_state.tech_cursor_down(),
            AppEvent::FormToggleTech => state.form_state.toggle_tech(),
            AppEvent::FormNextModel => state.form_state.next_model(),
            AppEvent::FormPreviousModel => state.form_state.previous_model(),
            AppEvent::FormSubmit => {
                // Failure is surfaced through notifications and the form's
                // inline error; nothing more to do here
                let _ = state.submit_project();
            }
            AppEvent::PreviewNextFile => state.preview_state.select_next(),
            AppEvent::PreviewPreviousFile => state.preview_state.select_previous(),
            AppEvent::PreviewScrollUp => state.preview_state.scroll_content_up(),
            AppEvent::PreviewScrollDown => state.preview_state.scroll_content_down(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    #[test]
    fn test_ctrl_c_quits_in_any_step() {
        let mut state = AppState::new();
        let ctrl_c = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        };
        assert_eq!(
            EventHandler::handle_key_event(ctrl_c, &state),
            Some(AppEvent::Quit)
        );

        state.wizard_step = WizardStep::Building;
        assert_eq!(
            EventHandler::handle_key_event(ctrl_c, &state),
            Some(AppEvent::Quit)
        );
    }

    #[test]
    fn test_typing_goes_to_text_fields() {
        let state = AppState::new();
        assert_eq!(
            EventHandler::handle_key_event(key(KeyCode::Char('x')), &state),
            Some(AppEvent::FormInputChar('x'))
        );
    }

    #[test]
    fn test_space_toggles_tech_only_when_focused() {
        let mut state = AppState::new();
        // Name field: space is text input
        assert_eq!(
            EventHandler::handle_key_event(key(KeyCode::Char(' ')), &state),
            Some(AppEvent::FormInputChar(' '))
        );

        state.form_state.focused_field = FormField::TechStack;
        assert_eq!(
            EventHandler::handle_key_event(key(KeyCode::Char(' ')), &state),
            Some(AppEvent::FormToggleTech)
        );
    }

    #[test]
    fn test_model_field_arrows_cycle_models() {
        let mut state = AppState::new();
        state.form_state.focused_field = FormField::Model;
        assert_eq!(
            EventHandler::handle_key_event(key(KeyCode::Right), &state),
            Some(AppEvent::FormNextModel)
        );
        assert_eq!(
            EventHandler::handle_key_event(key(KeyCode::Left), &state),
            Some(AppEvent::FormPreviousModel)
        );
    }

    #[test]
    fn test_building_step_navigates_preview() {
        let mut state = AppState::new();
        state.wizard_step = WizardStep::Building;
        assert_eq!(
            EventHandler::handle_key_event(key(KeyCode::Down), &state),
            Some(AppEvent::PreviewNextFile)
        );
        assert_eq!(
            EventHandler::handle_key_event(key(KeyCode::Char('q')), &state),
            Some(AppEvent::Quit)
        );
    }

    #[test]
    fn test_enter_submits_form() {
        let mut state = AppState::new();
        state.form_state.name = "app".to_string();
        state.form_state.api_key = "sk-1".to_string();

        let event = EventHandler::handle_key_event(key(KeyCode::Enter), &state).unwrap();
        EventHandler::process_event(event, &mut state);
        assert_eq!(state.wizard_step, WizardStep::Building);
    }
}
