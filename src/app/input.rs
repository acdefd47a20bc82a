use crate::app::{
    action::Action,
    keymap::KeyContext,
    state::{AppMode, AppState},
};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};

const WHEEL_ROWS: u16 = 3;

pub fn map_event_to_action(event: Event, app_state: &AppState) -> Option<Action> {
    match event {
        Event::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return None;
            }
            map_key(key, app_state)
        }
        Event::Mouse(mouse) => {
            if app_state.mode != AppMode::Normal || overlay_active(app_state) {
                return None;
            }
            match mouse.kind {
                MouseEventKind::ScrollDown => Some(Action::ScrollDown(WHEEL_ROWS)),
                MouseEventKind::ScrollUp => Some(Action::ScrollUp(WHEEL_ROWS)),
                _ => None,
            }
        }
        Event::Resize(w, h) => Some(Action::Resize(w, h)),
        _ => None,
    }
}

fn map_key(key: KeyEvent, app_state: &AppState) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match app_state.mode {
        AppMode::Login => match key.code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                Some(Action::LoginNextField)
            }
            KeyCode::Enter => Some(Action::SubmitLogin),
            KeyCode::Esc => Some(Action::Quit),
            _ => Some(Action::TextAreaInput(key)),
        },
        AppMode::Help => match key.code {
            KeyCode::Esc | KeyCode::Char('?' | 'q') => Some(Action::ToggleHelp),
            _ => None,
        },
        AppMode::History => match key.code {
            KeyCode::Esc | KeyCode::Char('n' | 'q') => Some(Action::ToggleHistory),
            _ => None,
        },
        AppMode::Search | AppMode::VoicePrompt => match key.code {
            KeyCode::Enter => Some(Action::SubmitPrompt),
            KeyCode::Esc => Some(Action::CancelMode),
            _ => Some(Action::TextAreaInput(key)),
        },
        AppMode::Normal => {
            let controls = app_state.controls();
            if controls.modal_visible() {
                app_state.keymap.get_action(key, KeyContext::Confirm)
            } else if controls.editing.is_some() {
                app_state
                    .keymap
                    .get_action(key, KeyContext::Form)
                    .or(Some(Action::TextAreaInput(key)))
            } else if let Some(thread) = app_state.review_thread() {
                if thread.draft.is_some() {
                    app_state
                        .keymap
                        .get_action(key, KeyContext::Draft)
                        .or(Some(Action::TextAreaInput(key)))
                } else {
                    app_state.keymap.get_action(key, KeyContext::Reviews)
                }
            } else {
                app_state.keymap.get_action(key, KeyContext::Page)
            }
        }
    }
}

fn overlay_active(app_state: &AppState) -> bool {
    let controls = app_state.controls();
    controls.modal_visible()
        || controls.editing.is_some()
        || app_state.review_thread().is_some()
}
