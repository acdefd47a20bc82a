use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    reducer,
    state::AppState,
};
use crate::voice::{normalize, registry_for, VoiceCommand, VoiceState};
use tracing::{debug, info};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::Utterance(text) => UpdateResult::Handled(handle_utterance(state, text)),
        Action::VoiceUnavailable(reason) => {
            state.voice.state = VoiceState::Unavailable;
            state.voice.unavailable_reason = Some(reason.clone());
            state.notifications.info(
                "Voice commands unavailable",
                "Keyboard shortcuts still work.",
            );
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Matches one finalized utterance against the commands the mounted page
/// registers right now. Unmatched speech is ignored.
fn handle_utterance(state: &mut AppState, text: &str) -> Option<Command> {
    let heard = normalize(text);
    if heard.is_empty() {
        return None;
    }
    state.voice.last_heard = Some(heard.clone());

    let mut matched: Option<VoiceCommand> = None;
    registry_for(state).dispatch(&heard, |command| matched = Some(command.clone()));
    state.voice.matched = matched.is_some();

    let Some(command) = matched else {
        debug!(utterance = %heard, "no voice command matched");
        return None;
    };
    info!(utterance = %heard, action = ?command.action, "voice command");

    Command::batch([
        command.reply.map(Command::Speak),
        reducer::update(state, command.action),
    ])
}
