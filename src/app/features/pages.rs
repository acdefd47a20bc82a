use crate::app::{
    action::{Action, UpdateResult},
    command::{ApiOutcome, ApiRequest, Command, RequestFailure, RequestKind},
    features::{discover, session},
    state::{AppMode, AppState, EditForm, Editing, MountId, PageKind},
};
use crate::domain::models::{EntityId, Record};
use serde_json::Value;
use tracing::{debug, warn};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::BeginEdit(id) => UpdateResult::Handled(begin_edit(state, id.clone())),
        Action::CancelEdit => {
            state.controls_mut().editing = None;
            UpdateResult::Handled(None)
        }
        Action::NextField | Action::PrevField | Action::TextAreaInput(_) => {
            if state.mode != AppMode::Normal {
                return UpdateResult::NotHandled;
            }
            let Some(editing) = state.controls_mut().editing.as_mut() else {
                return UpdateResult::NotHandled;
            };
            match action {
                Action::NextField => editing.form.next_field(),
                Action::PrevField => editing.form.prev_field(),
                Action::TextAreaInput(key) => editing.form.input(*key),
                _ => {}
            }
            UpdateResult::Handled(None)
        }
        Action::SaveEdit => {
            let Some(editing) = state.controls().editing.as_ref() else {
                return UpdateResult::Handled(None);
            };
            let id = editing.id.clone();
            let data = editing.form.payload();
            UpdateResult::Handled(save_edit(state, id, data))
        }
        Action::ConfirmDelete(id) => UpdateResult::Handled(confirm_delete(state, id.clone())),
        Action::CancelDelete => {
            cancel_delete(state);
            UpdateResult::Handled(None)
        }
        Action::ProceedDelete => UpdateResult::Handled(proceed_delete(state)),
        Action::ApiCompleted(mount, result) => {
            UpdateResult::Handled(on_api_completed(state, *mount, result.clone()))
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Enters edit mode for `id` (or the selection) with a form prefilled from it.
pub fn begin_edit(state: &mut AppState, id: Option<EntityId>) -> Option<Command> {
    let id = id.or_else(|| state.selected_id())?;
    let Some(fields) = state.edit_fields(&id) else {
        debug!(%id, "nothing to edit");
        return None;
    };
    state.controls_mut().editing = Some(Editing {
        id,
        form: EditForm::new(fields),
    });
    None
}

/// Marks `id` (or the selection) for deletion, which shows the confirmation.
/// A second call overwrites the first.
pub fn confirm_delete(state: &mut AppState, id: Option<EntityId>) -> Option<Command> {
    if !state.page.owns_entities() {
        return None;
    }
    let id = id.or_else(|| state.selected_id())?;
    state.controls_mut().pending_deletion = Some(id);
    None
}

pub fn cancel_delete(state: &mut AppState) {
    state.controls_mut().pending_deletion = None;
}

/// Deletes the pending entity. Nothing happens without one, or while a delete
/// for this page is already in flight.
pub fn proceed_delete(state: &mut AppState) -> Option<Command> {
    let controls = state.controls();
    if controls.deleting {
        debug!("delete already in flight");
        return None;
    }
    let id = controls.pending_deletion.clone()?;
    let session = state.session.clone()?;

    state.controls_mut().deleting = true;
    state.pending_requests += 1;
    Some(Command::Api {
        mount: state.mount,
        session,
        request: ApiRequest::Delete(state.page, id),
    })
}

pub fn save_edit(state: &mut AppState, id: EntityId, data: Value) -> Option<Command> {
    if state.controls().saving {
        return None;
    }
    let session = state.session.clone()?;
    state.controls_mut().saving = true;
    state.pending_requests += 1;
    Some(Command::Api {
        mount: state.mount,
        session,
        request: ApiRequest::Update(state.page, id, data),
    })
}

fn on_api_completed(
    state: &mut AppState,
    mount: MountId,
    result: Result<ApiOutcome, RequestFailure>,
) -> Option<Command> {
    if mount != state.mount {
        debug!(
            stale = mount.0,
            current = state.mount.0,
            "dropping result from a previous mount"
        );
        return None;
    }
    state.pending_requests = state.pending_requests.saturating_sub(1);

    match result {
        Ok(ApiOutcome::Jobs(jobs)) => state.jobs.set_items(jobs),
        Ok(ApiOutcome::Projects(projects)) => state.projects.set_items(projects),
        Ok(ApiOutcome::Profile(user)) => {
            if let Some(session) = &mut state.session {
                session.user = user.clone();
            }
            state.profile.set_user(user);
        }
        Ok(ApiOutcome::Discovered(query, projects)) => {
            discover::on_discovered(state, &query, projects);
        }
        Ok(ApiOutcome::Saved(record)) => return on_saved(state, record),
        Ok(ApiOutcome::Deleted(page, id)) => return on_deleted(state, page, &id),
        Ok(ApiOutcome::Reviews(project, reviews)) => {
            discover::on_reviews(state, &project, reviews);
        }
        Ok(ApiOutcome::ReviewAdded(review)) => discover::on_review_added(state, review),
        Ok(ApiOutcome::ReviewUpdated(id, comment)) => {
            discover::on_review_updated(state, &id, comment);
        }
        Ok(ApiOutcome::ReviewDeleted(id)) => discover::on_review_deleted(state, &id),
        Err(failure) => return on_failure(state, failure),
    }
    None
}

fn on_saved(state: &mut AppState, record: Record) -> Option<Command> {
    let (page, id) = match &record {
        Record::Job(job) => (PageKind::MyJobs, job.id.clone()),
        Record::Project(project) => (PageKind::MyProjects, project.id.clone()),
        Record::User(user) => (PageKind::Profile, user.id.clone()),
    };

    let mut command = None;
    match record {
        Record::Job(job) => {
            state.jobs.replace(job);
        }
        Record::Project(project) => {
            state.projects.replace(project);
        }
        Record::User(user) => {
            if let Some(session) = &mut state.session {
                session.user = user.clone();
                command = Some(Command::StoreSession(Some(session.clone())));
            }
            state.profile.set_user(user);
        }
    }

    let controls = state.controls_for_mut(page);
    controls.saving = false;
    if controls.editing.as_ref().is_some_and(|e| e.id == id) {
        controls.editing = None;
    }

    let (title, body) = success_text(page, RequestKind::Update);
    state.notifications.success(title, body);
    command
}

fn on_deleted(state: &mut AppState, page: PageKind, id: &EntityId) -> Option<Command> {
    let (title, body) = success_text(page, RequestKind::Delete);
    match page {
        PageKind::MyJobs => {
            state.jobs.remove(id);
        }
        PageKind::MyProjects => {
            state.projects.remove(id);
        }
        PageKind::Discover => {
            state.discover.list.remove(id);
        }
        PageKind::Profile => {
            let command = session::logout(state);
            state.notifications.success(title, body);
            return command;
        }
    }

    let controls = state.controls_for_mut(page);
    controls.deleting = false;
    if controls.pending_deletion.as_ref() == Some(id) {
        controls.pending_deletion = None;
    }
    if controls.editing.as_ref().is_some_and(|e| &e.id == id) {
        controls.editing = None;
    }

    state.notifications.success(title, body);
    None
}

fn on_failure(state: &mut AppState, failure: RequestFailure) -> Option<Command> {
    warn!(
        kind = ?failure.kind,
        page = ?failure.page,
        "request failed: {}",
        failure.message
    );
    if failure.unauthorized {
        return session::expire(state);
    }

    match failure.kind {
        RequestKind::Fetch => match failure.page {
            PageKind::MyJobs => state.jobs.set_items(Vec::new()),
            PageKind::MyProjects => state.projects.set_items(Vec::new()),
            PageKind::Profile => state.profile.loaded = true,
            PageKind::Discover => state.discover.list.set_items(Vec::new()),
        },
        RequestKind::Update => state.controls_for_mut(failure.page).saving = false,
        RequestKind::Delete => state.controls_for_mut(failure.page).deleting = false,
        RequestKind::LoadReviews
        | RequestKind::AddReview
        | RequestKind::UpdateReview
        | RequestKind::DeleteReview => discover::on_review_failure(state, failure.kind),
    }

    let (title, body) = failure_text(failure.page, failure.kind);
    state.notifications.error(title, body);
    None
}

fn success_text(page: PageKind, kind: RequestKind) -> (&'static str, &'static str) {
    match (page, kind) {
        (PageKind::MyJobs, RequestKind::Update) => {
            ("Job updated", "Your job has been updated successfully!")
        }
        (PageKind::MyJobs, _) => ("Job deleted", "Your job has been deleted successfully!"),
        (PageKind::MyProjects | PageKind::Discover, RequestKind::Update) => (
            "Project updated",
            "Your project has been updated successfully!",
        ),
        (PageKind::MyProjects | PageKind::Discover, _) => (
            "Project deleted",
            "Your project has been deleted successfully!",
        ),
        (PageKind::Profile, RequestKind::Update) => (
            "Profile updated",
            "Your profile has been updated successfully!",
        ),
        (PageKind::Profile, _) => (
            "Account deleted",
            "Your account has been successfully deleted!",
        ),
    }
}

fn failure_text(page: PageKind, kind: RequestKind) -> (&'static str, &'static str) {
    match (page, kind) {
        (_, RequestKind::LoadReviews) => (
            "Error",
            "There was an error fetching comments. Please try again.",
        ),
        (_, RequestKind::AddReview) => ("Error", "Failed to add comment. Please try again."),
        (_, RequestKind::UpdateReview) => ("Error", "Failed to update comment. Please try again."),
        (_, RequestKind::DeleteReview) => ("Error", "Failed to delete comment. Please try again."),
        (PageKind::Discover, RequestKind::Fetch) => (
            "Error",
            "An error occurred while fetching projects. Please try again.",
        ),
        (PageKind::MyJobs, RequestKind::Fetch) => (
            "Error",
            "There was an error fetching your jobs. Please try again.",
        ),
        (PageKind::MyJobs, RequestKind::Update) => (
            "Error",
            "There was an error updating your job. Please try again.",
        ),
        (PageKind::MyJobs, RequestKind::Delete) => (
            "Error",
            "There was an error deleting your job. Please try again.",
        ),
        (PageKind::MyProjects, RequestKind::Fetch) => (
            "Error",
            "An error occurred while fetching your projects. Please try again.",
        ),
        (PageKind::MyProjects | PageKind::Discover, RequestKind::Update) => (
            "Error",
            "An error occurred while updating your project. Please try again.",
        ),
        (PageKind::MyProjects | PageKind::Discover, RequestKind::Delete) => (
            "Error",
            "An error occurred while deleting your project. Please try again.",
        ),
        (PageKind::Profile, RequestKind::Fetch) => (
            "Error",
            "An error occurred while fetching your profile. Please try again.",
        ),
        (PageKind::Profile, RequestKind::Update) => (
            "Error",
            "An error occurred while updating your profile. Please try again.",
        ),
        (PageKind::Profile, RequestKind::Delete) => (
            "Error",
            "An error occurred while deleting your account. Please try again.",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::fixtures;
    use crate::app::state::NotificationLevel;
    use serde_json::json;

    fn failure(kind: RequestKind, page: PageKind) -> RequestFailure {
        RequestFailure {
            kind,
            page,
            unauthorized: false,
            message: "HTTP error! Status: 500".to_string(),
        }
    }

    #[test]
    fn test_confirm_then_cancel_hides_modal() {
        let mut state = fixtures::jobs_state(&["1", "2"]);
        confirm_delete(&mut state, Some(EntityId::from("2")));
        assert!(state.controls().modal_visible());

        cancel_delete(&mut state);
        assert!(!state.controls().modal_visible());
        assert_eq!(state.jobs.items.len(), 2);
    }

    #[test]
    fn test_confirm_delete_is_last_writer_wins() {
        let mut state = fixtures::jobs_state(&["1", "2"]);
        confirm_delete(&mut state, Some(EntityId::from("1")));
        confirm_delete(&mut state, Some(EntityId::from("2")));
        assert_eq!(
            state.jobs.controls.pending_deletion,
            Some(EntityId::from("2"))
        );
    }

    #[test]
    fn test_proceed_without_pending_is_noop() {
        let mut state = fixtures::jobs_state(&["1"]);
        assert_eq!(proceed_delete(&mut state), None);
        assert_eq!(state.pending_requests, 0);
    }

    #[test]
    fn test_proceed_twice_issues_one_request() {
        let mut state = fixtures::jobs_state(&["1"]);
        confirm_delete(&mut state, None);
        assert!(proceed_delete(&mut state).is_some());
        assert_eq!(proceed_delete(&mut state), None);
    }

    #[test]
    fn test_failed_delete_leaves_state_unchanged() {
        let mut state = fixtures::projects_state(&["1", "2"]);
        confirm_delete(&mut state, Some(EntityId::from("1")));
        proceed_delete(&mut state);

        let mount = state.mount;
        update(
            &mut state,
            &Action::ApiCompleted(
                mount,
                Err(failure(RequestKind::Delete, PageKind::MyProjects)),
            ),
        );

        assert_eq!(state.projects.items.len(), 2);
        assert_eq!(
            state.projects.controls.pending_deletion,
            Some(EntityId::from("1"))
        );
        assert!(!state.projects.controls.deleting);
        assert_eq!(state.notifications.count(NotificationLevel::Error), 1);
        assert_eq!(
            state.notifications.active()[0].body,
            "An error occurred while deleting your project. Please try again."
        );
    }

    #[test]
    fn test_successful_save_replaces_item_and_exits_edit() {
        let mut state = fixtures::jobs_state(&["1", "2"]);
        begin_edit(&mut state, Some(EntityId::from("2")));
        save_edit(&mut state, EntityId::from("2"), json!({"position": "Lead"}));

        let mut saved = fixtures::job("2");
        saved.position = "Lead".to_string();
        let mount = state.mount;
        update(
            &mut state,
            &Action::ApiCompleted(mount, Ok(ApiOutcome::Saved(Record::Job(saved)))),
        );

        assert_eq!(state.jobs.items[1].position, "Lead");
        assert!(state.jobs.controls.editing.is_none());
        assert_eq!(state.notifications.count(NotificationLevel::Success), 1);
        assert_eq!(state.pending_requests, 0);
    }

    #[test]
    fn test_fetch_failure_shows_empty_list() {
        let mut state = fixtures::jobs_state(&[]);
        state.jobs.loaded = false;
        let mount = state.mount;
        update(
            &mut state,
            &Action::ApiCompleted(mount, Err(failure(RequestKind::Fetch, PageKind::MyJobs))),
        );
        assert!(state.jobs.loaded);
        assert!(state.jobs.items.is_empty());
        assert_eq!(state.notifications.count(NotificationLevel::Error), 1);
    }

    #[test]
    fn test_profile_delete_signs_out() {
        let mut state = fixtures::profile_state();
        confirm_delete(&mut state, None);
        proceed_delete(&mut state);

        let mount = state.mount;
        let command = update(
            &mut state,
            &Action::ApiCompleted(
                mount,
                Ok(ApiOutcome::Deleted(PageKind::Profile, EntityId::from("u1"))),
            ),
        );

        assert!(matches!(
            command,
            UpdateResult::Handled(Some(Command::StoreSession(None)))
        ));
        assert_eq!(state.mode, AppMode::Login);
        assert!(state.session.is_none());
        assert_eq!(
            state.notifications.active().last().map(|n| n.body.as_str()),
            Some("Your account has been successfully deleted!")
        );
    }

    #[test]
    fn test_profile_save_updates_session_user() {
        let mut state = fixtures::profile_state();
        begin_edit(&mut state, None);
        assert!(state.profile.controls.editing.is_some());

        let mut user = fixtures::user();
        user.first_name = "Annie".to_string();
        let mount = state.mount;
        let command = update(
            &mut state,
            &Action::ApiCompleted(mount, Ok(ApiOutcome::Saved(Record::User(user)))),
        );

        assert_eq!(
            state.session.as_ref().map(|s| s.user.first_name.as_str()),
            Some("Annie")
        );
        assert!(matches!(
            command,
            UpdateResult::Handled(Some(Command::StoreSession(Some(_))))
        ));
        assert!(state.profile.controls.editing.is_none());
    }

    #[test]
    fn test_edit_form_receives_typed_keys() {
        use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

        let mut state = fixtures::projects_state(&["1"]);
        begin_edit(&mut state, None);
        update(
            &mut state,
            &Action::TextAreaInput(KeyEvent::new(KeyCode::Char('!'), KeyModifiers::NONE)),
        );
        let editing = state.projects.controls.editing.as_ref().unwrap();
        assert_eq!(
            editing.form.value("projectTitle").as_deref(),
            Some("Project 1!")
        );
    }

    #[test]
    fn test_discover_projects_cannot_be_edited_or_deleted() {
        let mut state = fixtures::discover_state(&["p1"]);
        begin_edit(&mut state, None);
        confirm_delete(&mut state, None);
        assert!(state.discover.list.controls.editing.is_none());
        assert!(!state.controls().modal_visible());
        assert_eq!(proceed_delete(&mut state), None);
    }

    #[test]
    fn test_begin_edit_unknown_id_is_noop() {
        let mut state = fixtures::jobs_state(&["1"]);
        begin_edit(&mut state, Some(EntityId::from("404")));
        assert!(state.jobs.controls.editing.is_none());
    }
}
