use crate::app::{
    action::{Action, UpdateResult},
    features::discover,
    reducer,
    state::{AppMode, AppState, InputState, PageKind},
};
use chrono::Local;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
            state.scroll.animate();
            state.notifications.expire(Local::now());
            UpdateResult::Handled(None)
        }
        Action::Resize(_, _) => UpdateResult::Handled(None),
        Action::Quit => {
            state.should_quit = true;
            UpdateResult::Handled(None)
        }
        Action::EnterVoicePrompt => {
            if state.is_mounted() {
                state.mode = AppMode::VoicePrompt;
                state.input = Some(InputState::default());
            }
            UpdateResult::Handled(None)
        }
        Action::EnterSearch => {
            if let Some(query) = state.search_query().map(str::to_string) {
                if state.is_mounted() {
                    state.mode = AppMode::Search;
                    state.input = Some(InputState::with_text(&query));
                }
            }
            UpdateResult::Handled(None)
        }
        Action::TextAreaInput(key) => {
            if let Some(input) = &mut state.input {
                input.text_area.input(*key);
                if state.mode == AppMode::Search {
                    let query = input.text();
                    state.set_search_query(&query);
                }
            }
            UpdateResult::Handled(None)
        }
        Action::SubmitPrompt => {
            let text = state.input.take().map(|input| input.text());
            let mode = state.mode;
            state.mode = AppMode::Normal;
            match (mode, text) {
                (AppMode::VoicePrompt, Some(text)) => {
                    UpdateResult::Handled(reducer::update(state, Action::Utterance(text)))
                }
                // Discover searches the server; the other lists filter as you type.
                (AppMode::Search, Some(_)) if state.page == PageKind::Discover => {
                    UpdateResult::Handled(discover::refetch(state))
                }
                _ => UpdateResult::Handled(None),
            }
        }
        Action::CancelMode => {
            let mut command = None;
            if matches!(state.mode, AppMode::Search | AppMode::Normal) {
                let had_query = state.search_query().is_some_and(|q| !q.is_empty());
                state.set_search_query("");
                if had_query {
                    command = discover::refetch(state);
                }
            }
            if state.mode != AppMode::Login {
                state.mode = AppMode::Normal;
            }
            state.input = None;
            state.notifications.dismiss_all();
            UpdateResult::Handled(command)
        }
        Action::ToggleHelp => {
            state.mode = match state.mode {
                AppMode::Help => AppMode::Normal,
                AppMode::Normal => AppMode::Help,
                other => other,
            };
            UpdateResult::Handled(None)
        }
        Action::ToggleHistory => {
            state.mode = match state.mode {
                AppMode::History => AppMode::Normal,
                AppMode::Normal if state.is_mounted() => AppMode::History,
                other => other,
            };
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}
