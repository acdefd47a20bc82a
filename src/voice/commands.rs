use super::registry::CommandRegistry;
use crate::app::{
    action::Action,
    state::{AppState, PageKind},
};

/// What a recognised phrase does: the action to re-dispatch, plus an optional
/// spoken acknowledgement.
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceCommand {
    pub action: Action,
    pub reply: Option<String>,
}

impl VoiceCommand {
    fn new(action: Action, reply: Option<&str>) -> Self {
        Self {
            action,
            reply: reply.map(str::to_string),
        }
    }
}

/// Builds the phrase table for whatever page is mounted right now.
///
/// The table is a pure function of state: "edit"/"delete" only exist when the
/// page has something of the user's own to act on, and "yes"/"no" only while a
/// deletion waits for confirmation.
#[must_use]
pub fn registry_for(state: &AppState) -> CommandRegistry<VoiceCommand> {
    let mut registry = CommandRegistry::new();
    if !state.is_mounted() {
        return registry;
    }

    let noun = state.page.noun();
    if let Some(thread) = state.review_thread() {
        registry.register(
            "close comments",
            VoiceCommand::new(Action::CloseReviews, Some("Closing comments")),
        );
        if thread.draft.is_none() {
            registry.register(
                "add comment",
                VoiceCommand::new(Action::ComposeReview, Some("Write your comment")),
            );
        }
        return registry;
    }

    if state.page == PageKind::Discover {
        if state.selected_id().is_some() {
            registry.register(
                "show comments",
                VoiceCommand::new(Action::OpenReviews, Some("Opening comments")),
            );
        }
        registry.register(
            "toggle completed",
            VoiceCommand::new(Action::ToggleCompleted, None),
        );
        registry.register(
            "change status",
            VoiceCommand::new(Action::CycleStatus, None),
        );
    }

    if let Some(id) = state.selected_id().filter(|_| state.page.owns_entities()) {
        registry.register(
            &format!("edit {noun}"),
            VoiceCommand::new(
                Action::BeginEdit(Some(id.clone())),
                Some(&format!("Entering edit {noun} mode")),
            ),
        );
        registry.register(
            &format!("delete {noun}"),
            VoiceCommand::new(Action::ConfirmDelete(Some(id)), Some("Are you sure?")),
        );
    }

    if state.page == PageKind::Profile {
        registry.register(
            "log out",
            VoiceCommand::new(Action::Logout, Some("Logging out")),
        );
    }

    if state.controls().pending_deletion.is_some() {
        registry.register("yes", VoiceCommand::new(Action::ProceedDelete, None));
        registry.register("no", VoiceCommand::new(Action::CancelDelete, None));
    }

    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::fixtures;
    use crate::domain::models::EntityId;

    fn phrases(state: &AppState) -> Vec<String> {
        registry_for(state)
            .phrases()
            .iter()
            .map(|p| p.to_string())
            .collect()
    }

    #[test]
    fn test_jobs_page_commands_target_selection() {
        let mut state = fixtures::jobs_state(&["1", "2", "3"]);
        state.jobs.selected = 1;

        let registry = registry_for(&state);
        assert_eq!(phrases(&state), vec!["delete job", "edit job"]);
        assert_eq!(
            registry.lookup("Edit Job").map(|c| &c.action),
            Some(&Action::BeginEdit(Some(EntityId::from("2"))))
        );
        assert_eq!(
            registry.lookup("delete job").and_then(|c| c.reply.as_deref()),
            Some("Are you sure?")
        );
    }

    #[test]
    fn test_confirmation_words_exist_only_while_pending() {
        let mut state = fixtures::jobs_state(&["1"]);
        assert!(registry_for(&state).lookup("yes").is_none());
        assert!(registry_for(&state).lookup("no").is_none());

        state.jobs.controls.pending_deletion = Some(EntityId::from("1"));
        let registry = registry_for(&state);
        assert_eq!(
            registry.lookup("YES").map(|c| &c.action),
            Some(&Action::ProceedDelete)
        );
        assert_eq!(
            registry.lookup("no").map(|c| &c.action),
            Some(&Action::CancelDelete)
        );
    }

    #[test]
    fn test_empty_page_has_no_entity_commands() {
        let state = fixtures::jobs_state(&[]);
        assert!(registry_for(&state).is_empty());
    }

    #[test]
    fn test_profile_page_adds_log_out() {
        let state = fixtures::profile_state();
        assert_eq!(
            phrases(&state),
            vec!["delete profile", "edit profile", "log out"]
        );
    }

    #[test]
    fn test_discover_offers_comments_not_edits() {
        let mut state = fixtures::discover_state(&["p1"]);
        assert_eq!(
            phrases(&state),
            vec!["change status", "show comments", "toggle completed"]
        );

        crate::app::reducer::update(&mut state, Action::OpenReviews);
        assert_eq!(phrases(&state), vec!["add comment", "close comments"]);
        assert_eq!(
            registry_for(&state)
                .lookup("Add Comment")
                .map(|c| &c.action),
            Some(&Action::ComposeReview)
        );
    }

    #[test]
    fn test_login_screen_has_no_commands() {
        let state = AppState::default();
        assert!(registry_for(&state).is_empty());
    }
}
