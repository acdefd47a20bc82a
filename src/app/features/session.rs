use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    features::navigation,
    state::{AppMode, AppState, LoginState, PageKind},
};
use tracing::info;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::LoginNextField => {
            state.login.toggle_focus();
            UpdateResult::Handled(None)
        }
        Action::TextAreaInput(key) if state.mode == AppMode::Login => {
            state.login.error = None;
            state.login.focused_mut().input(*key);
            UpdateResult::Handled(None)
        }
        Action::SubmitLogin => UpdateResult::Handled(submit_login(state)),
        Action::LoginFailed(message) => {
            state.login.submitting = false;
            state.login.error = Some(message.clone());
            UpdateResult::Handled(None)
        }
        Action::LoggedIn(session) => {
            info!(user = %session.user.id, "signed in");
            state.session = Some(session.clone());
            state.login = LoginState::default();
            let greeting = format!("Welcome, {}!", session.user.display_name());
            state.notifications.success("Signed in", &greeting);
            UpdateResult::Handled(Command::batch([
                Some(Command::StoreSession(Some(session.clone()))),
                navigation::mount_page(state, PageKind::MyJobs),
            ]))
        }
        Action::Logout => UpdateResult::Handled(logout(state)),
        _ => UpdateResult::NotHandled,
    }
}

fn submit_login(state: &mut AppState) -> Option<Command> {
    if state.mode != AppMode::Login || state.login.submitting {
        return None;
    }
    let (email, password) = state.login.credentials();
    if email.is_empty() || password.is_empty() {
        state.login.error = Some("Email and password are required.".to_string());
        return None;
    }
    state.login.submitting = true;
    state.login.error = None;
    Some(Command::Login { email, password })
}

/// Ends the session. The mount id moves on so in-flight results are dropped.
pub fn logout(state: &mut AppState) -> Option<Command> {
    if state.session.take().is_some() {
        info!("signed out");
    }
    state.mode = AppMode::Login;
    state.mount = state.mount.next();
    state.reset_pages();
    Some(Command::StoreSession(None))
}

/// The backend rejected the token.
pub fn expire(state: &mut AppState) -> Option<Command> {
    let command = logout(state);
    state
        .notifications
        .error("Signed out", "Your session has expired. Please log in again.");
    command
}
