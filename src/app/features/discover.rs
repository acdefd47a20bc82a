use crate::app::{
    action::{Action, UpdateResult},
    command::{ApiRequest, Command, ProjectQuery, RequestKind},
    features::navigation,
    state::{AppMode, AppState, PageKind, ReviewDraft, ReviewThread},
};
use crate::domain::models::{EntityId, Project, Review};
use tracing::debug;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    let on_discover = state.page == PageKind::Discover && state.is_mounted();
    match action {
        Action::TextAreaInput(key) => {
            if state.mode != AppMode::Normal {
                return UpdateResult::NotHandled;
            }
            let Some(draft) = draft_mut(state) else {
                return UpdateResult::NotHandled;
            };
            draft.text_area.input(*key);
            UpdateResult::Handled(None)
        }
        Action::CycleStatus
        | Action::ToggleCompleted
        | Action::OpenReviews
        | Action::CloseReviews
        | Action::ComposeReview
        | Action::EditReview
        | Action::SubmitReview
        | Action::CancelReviewDraft
        | Action::DeleteReview
            if !on_discover =>
        {
            UpdateResult::Handled(None)
        }
        Action::CycleStatus => {
            state.discover.status = state.discover.status.next();
            UpdateResult::Handled(refetch(state))
        }
        Action::ToggleCompleted => {
            let list = &mut state.discover.list;
            list.set_completed_only(!list.completed_only);
            state.scroll.reset();
            UpdateResult::Handled(None)
        }
        Action::OpenReviews => UpdateResult::Handled(open_reviews(state)),
        Action::CloseReviews => {
            state.discover.thread = None;
            UpdateResult::Handled(None)
        }
        Action::ComposeReview => {
            if let Some(thread) = &mut state.discover.thread {
                thread.draft = Some(ReviewDraft::new());
            }
            UpdateResult::Handled(None)
        }
        Action::EditReview => {
            if let Some(thread) = &mut state.discover.thread {
                thread.draft = thread.selected_review().map(ReviewDraft::editing);
            }
            UpdateResult::Handled(None)
        }
        Action::CancelReviewDraft => {
            if let Some(thread) = &mut state.discover.thread {
                thread.draft = None;
            }
            UpdateResult::Handled(None)
        }
        Action::SubmitReview => UpdateResult::Handled(submit_review(state)),
        Action::DeleteReview => UpdateResult::Handled(delete_review(state)),
        _ => UpdateResult::NotHandled,
    }
}

/// Asks the server again for the current status filter or search term.
pub fn refetch(state: &mut AppState) -> Option<Command> {
    if state.page != PageKind::Discover {
        return None;
    }
    state.discover.list.loaded = false;
    navigation::fetch(state)
}

fn draft_mut(state: &mut AppState) -> Option<&mut ReviewDraft> {
    if state.page != PageKind::Discover {
        return None;
    }
    state.discover.thread.as_mut()?.draft.as_mut()
}

fn request(state: &mut AppState, request: ApiRequest) -> Option<Command> {
    let session = state.session.clone()?;
    state.pending_requests += 1;
    Some(Command::Api {
        mount: state.mount,
        session,
        request,
    })
}

/// Opens the comment section of the selected project and loads it.
pub fn open_reviews(state: &mut AppState) -> Option<Command> {
    let project = state.discover.selected_project()?.clone();
    let id = project.id.clone();
    state.discover.thread = Some(ReviewThread::new(&project));
    request(state, ApiRequest::Reviews(id))
}

/// Posts the draft as a new comment, or as the new text of the one it edits.
pub fn submit_review(state: &mut AppState) -> Option<Command> {
    let thread = state.discover.thread.as_mut()?;
    if thread.busy {
        debug!("comment request already in flight");
        return None;
    }
    let draft = thread.draft.as_ref()?;
    let comment = draft.text_area.text().trim().to_string();
    if comment.is_empty() {
        return None;
    }
    let api_request = match &draft.editing {
        Some(id) => ApiRequest::UpdateReview(id.clone(), comment),
        None => ApiRequest::AddReview {
            project: thread.project.clone(),
            comment,
        },
    };
    thread.busy = true;
    request(state, api_request)
}

pub fn delete_review(state: &mut AppState) -> Option<Command> {
    let thread = state.discover.thread.as_mut()?;
    if thread.busy || thread.draft.is_some() {
        return None;
    }
    let id = thread.selected_review()?.id.clone();
    thread.busy = true;
    request(state, ApiRequest::DeleteReview(id))
}

pub fn on_discovered(state: &mut AppState, query: &ProjectQuery, projects: Vec<Project>) {
    if *query != state.discover.query() {
        debug!(?query, "dropping projects for a superseded query");
        return;
    }
    state.discover.list.set_items(projects);
}

pub fn on_reviews(state: &mut AppState, project: &EntityId, reviews: Vec<Review>) {
    match &mut state.discover.thread {
        Some(thread) if &thread.project == project => thread.set_items(reviews),
        _ => debug!(%project, "dropping comments for a closed thread"),
    }
}

pub fn on_review_added(state: &mut AppState, review: Review) {
    let Some(thread) = &mut state.discover.thread else {
        return;
    };
    thread.busy = false;
    thread.draft = None;
    if review.project_id.is_empty() || review.project_id == thread.project.0 {
        thread.items.push(review);
        thread.selected = thread.items.len() - 1;
    }
}

pub fn on_review_updated(state: &mut AppState, id: &EntityId, comment: String) {
    let Some(thread) = &mut state.discover.thread else {
        return;
    };
    thread.busy = false;
    thread.draft = None;
    if let Some(review) = thread.items.iter_mut().find(|r| &r.id == id) {
        review.comment = comment;
    }
}

pub fn on_review_deleted(state: &mut AppState, id: &EntityId) {
    if let Some(thread) = &mut state.discover.thread {
        thread.busy = false;
        thread.remove(id);
    }
}

/// A failed comment request keeps the draft so nothing typed is lost.
pub fn on_review_failure(state: &mut AppState, kind: RequestKind) {
    let Some(thread) = &mut state.discover.thread else {
        return;
    };
    thread.busy = false;
    if kind == RequestKind::LoadReviews {
        thread.set_items(Vec::new());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::command::{ApiOutcome, RequestFailure};
    use crate::app::fixtures;
    use crate::app::state::{NotificationLevel, StatusFilter};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn act(state: &mut AppState, action: Action) -> Option<Command> {
        crate::app::reducer::update(state, action)
    }

    fn sent(command: Option<Command>) -> ApiRequest {
        match command {
            Some(Command::Api { request, .. }) => request,
            other => panic!("Expected Command::Api, got {other:?}"),
        }
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            act(
                state,
                Action::TextAreaInput(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)),
            );
        }
    }

    fn complete(state: &mut AppState, outcome: ApiOutcome) {
        let mount = state.mount;
        act(state, Action::ApiCompleted(mount, Ok(outcome)));
    }

    fn fail(state: &mut AppState, kind: RequestKind) {
        let mount = state.mount;
        act(
            state,
            Action::ApiCompleted(
                mount,
                Err(RequestFailure {
                    kind,
                    page: PageKind::Discover,
                    unauthorized: false,
                    message: "HTTP error! Status: 500".to_string(),
                }),
            ),
        );
    }

    #[test]
    fn test_mounting_discover_browses_everything() {
        let mut state = fixtures::jobs_state(&[]);
        let request = sent(act(&mut state, Action::MountPage(PageKind::Discover)));
        assert_eq!(request, ApiRequest::Discover(ProjectQuery::All));
        assert_eq!(state.discover.status, StatusFilter::All);
    }

    #[test]
    fn test_cycle_status_refetches_by_status() {
        let mut state = fixtures::discover_state(&["1"]);
        let request = sent(act(&mut state, Action::CycleStatus));
        assert_eq!(
            request,
            ApiRequest::Discover(ProjectQuery::Status(vec!["Pending".to_string()]))
        );
        assert!(!state.discover.list.loaded);
    }

    #[test]
    fn test_superseded_query_results_are_dropped() {
        let mut state = fixtures::discover_state(&["1"]);
        act(&mut state, Action::CycleStatus);
        act(&mut state, Action::CycleStatus);

        complete(
            &mut state,
            ApiOutcome::Discovered(
                ProjectQuery::Status(vec!["Pending".to_string()]),
                vec![fixtures::project("stale")],
            ),
        );
        assert!(!state.discover.list.loaded);

        complete(
            &mut state,
            ApiOutcome::Discovered(
                ProjectQuery::Status(vec!["In Progress".to_string()]),
                vec![fixtures::project("7")],
            ),
        );
        assert!(state.discover.list.loaded);
        assert_eq!(state.discover.list.items[0].id, EntityId::from("7"));
    }

    #[test]
    fn test_search_submit_asks_title_endpoint() {
        let mut state = fixtures::discover_state(&["1"]);
        act(&mut state, Action::EnterSearch);
        type_text(&mut state, "portfolio");
        let request = sent(act(&mut state, Action::SubmitPrompt));
        assert_eq!(
            request,
            ApiRequest::Discover(ProjectQuery::Title("portfolio".to_string()))
        );

        let request = sent(act(&mut state, Action::CancelMode));
        assert_eq!(request, ApiRequest::Discover(ProjectQuery::All));
    }

    #[test]
    fn test_toggle_completed_is_local() {
        let mut state = fixtures::discover_state(&["1", "2"]);
        state.discover.list.items[0].project_status = "Pending".to_string();
        state.discover.list.items[1].project_status = "Completed".to_string();

        assert_eq!(act(&mut state, Action::ToggleCompleted), None);
        assert_eq!(state.discover.list.visible().len(), 1);
        act(&mut state, Action::ToggleCompleted);
        assert_eq!(state.discover.list.visible().len(), 2);
    }

    #[test]
    fn test_discover_actions_ignored_elsewhere() {
        let mut state = fixtures::jobs_state(&["1"]);
        assert_eq!(act(&mut state, Action::CycleStatus), None);
        assert_eq!(act(&mut state, Action::OpenReviews), None);
        assert_eq!(state.pending_requests, 0);
    }

    #[test]
    fn test_comment_lifecycle() {
        let mut state = fixtures::discover_state(&["p1", "p2"]);
        act(&mut state, Action::SelectNext);
        let request = sent(act(&mut state, Action::OpenReviews));
        assert_eq!(request, ApiRequest::Reviews(EntityId::from("p2")));

        complete(
            &mut state,
            ApiOutcome::Reviews(EntityId::from("p2"), vec![fixtures::review("r1")]),
        );
        let thread = state.review_thread().unwrap();
        assert!(thread.loaded);
        assert_eq!(thread.items.len(), 1);

        // Add
        act(&mut state, Action::ComposeReview);
        type_text(&mut state, "Great work");
        let request = sent(act(&mut state, Action::SubmitReview));
        assert_eq!(
            request,
            ApiRequest::AddReview {
                project: EntityId::from("p2"),
                comment: "Great work".to_string(),
            }
        );
        assert_eq!(act(&mut state, Action::SubmitReview), None);

        let mut added = fixtures::review("r2");
        added.project_id = "p2".to_string();
        added.comment = "Great work".to_string();
        complete(&mut state, ApiOutcome::ReviewAdded(added));
        let thread = state.review_thread().unwrap();
        assert_eq!(thread.items.len(), 2);
        assert_eq!(thread.selected, 1);
        assert!(thread.draft.is_none());

        // Edit the new one
        act(&mut state, Action::EditReview);
        type_text(&mut state, "!");
        let request = sent(act(&mut state, Action::SubmitReview));
        assert_eq!(
            request,
            ApiRequest::UpdateReview(EntityId::from("r2"), "Great work!".to_string())
        );
        complete(
            &mut state,
            ApiOutcome::ReviewUpdated(EntityId::from("r2"), "Great work!".to_string()),
        );
        assert_eq!(state.review_thread().unwrap().items[1].comment, "Great work!");

        // Delete it
        let request = sent(act(&mut state, Action::DeleteReview));
        assert_eq!(request, ApiRequest::DeleteReview(EntityId::from("r2")));
        complete(&mut state, ApiOutcome::ReviewDeleted(EntityId::from("r2")));
        let ids: Vec<&str> = state
            .review_thread()
            .unwrap()
            .items
            .iter()
            .map(|r| r.id.0.as_str())
            .collect();
        assert_eq!(ids, vec!["r1"]);
        assert_eq!(state.pending_requests, 0);
    }

    #[test]
    fn test_failed_comment_keeps_draft_and_notifies() {
        let mut state = fixtures::discover_state(&["p1"]);
        act(&mut state, Action::OpenReviews);
        complete(&mut state, ApiOutcome::Reviews(EntityId::from("p1"), Vec::new()));
        act(&mut state, Action::ComposeReview);
        type_text(&mut state, "Hello");
        act(&mut state, Action::SubmitReview);

        fail(&mut state, RequestKind::AddReview);

        let thread = state.review_thread().unwrap();
        assert!(!thread.busy);
        assert_eq!(
            thread.draft.as_ref().map(|d| d.text_area.text()),
            Some("Hello".to_string())
        );
        assert_eq!(
            state.notifications.active().last().map(|n| n.body.as_str()),
            Some("Failed to add comment. Please try again.")
        );
    }

    #[test]
    fn test_failed_load_shows_empty_thread() {
        let mut state = fixtures::discover_state(&["p1"]);
        act(&mut state, Action::OpenReviews);
        fail(&mut state, RequestKind::LoadReviews);
        let thread = state.review_thread().unwrap();
        assert!(thread.loaded);
        assert!(thread.items.is_empty());
        assert_eq!(state.notifications.count(NotificationLevel::Error), 1);
    }

    #[test]
    fn test_comments_for_another_project_are_dropped() {
        let mut state = fixtures::discover_state(&["p1"]);
        act(&mut state, Action::OpenReviews);
        complete(
            &mut state,
            ApiOutcome::Reviews(EntityId::from("p9"), vec![fixtures::review("r1")]),
        );
        assert!(!state.review_thread().unwrap().loaded);
    }

    #[test]
    fn test_empty_comment_is_not_posted() {
        let mut state = fixtures::discover_state(&["p1"]);
        act(&mut state, Action::OpenReviews);
        act(&mut state, Action::ComposeReview);
        type_text(&mut state, "   ");
        assert_eq!(act(&mut state, Action::SubmitReview), None);
    }
}
