use crate::app::{
    action::Action,
    command::{ApiOutcome, ApiRequest, Command, ProjectQuery, RequestFailure},
    persistence::SessionStore,
    state::PageKind,
};
use crate::domain::{
    api::{ApiError, MarketplaceApi},
    models::{Record, Session},
};
use crate::voice::RecognitionAdapter;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tracing::{debug, warn};

/// Everything commands need to reach the outside world.
#[derive(Clone)]
pub struct Services {
    pub api: Arc<dyn MarketplaceApi>,
    pub voice: Arc<RecognitionAdapter>,
    pub sessions: SessionStore,
}

/// Runs `command`, returning handles to any tasks it spawned so the caller can
/// tie them to the current page mount.
pub fn handle_command(
    command: Command,
    services: &Services,
    tx: mpsc::Sender<Action>,
) -> Vec<AbortHandle> {
    match command {
        Command::Api {
            mount,
            session,
            request,
        } => {
            let api = services.api.clone();
            let task = tokio::spawn(async move {
                let result = run_request(api.as_ref(), &session, request).await;
                let _ = tx.send(Action::ApiCompleted(mount, result)).await;
            });
            vec![task.abort_handle()]
        }
        Command::Login { email, password } => {
            let api = services.api.clone();
            tokio::spawn(async move {
                let action = match api.login(&email, &password).await {
                    Ok(session) => Action::LoggedIn(session),
                    Err(ApiError::Unauthorized) => {
                        Action::LoginFailed("Invalid email or password.".to_string())
                    }
                    Err(e) => {
                        warn!("login failed: {e}");
                        Action::LoginFailed(format!("Login failed: {e}"))
                    }
                };
                let _ = tx.send(action).await;
            });
            Vec::new()
        }
        Command::Speak(text) => {
            services.voice.speak(&text);
            Vec::new()
        }
        Command::StoreSession(session) => {
            if let Err(e) = services.sessions.store(session.as_ref()) {
                warn!("failed to persist session: {e:#}");
            }
            Vec::new()
        }
        Command::Batch(commands) => commands
            .into_iter()
            .flat_map(|command| handle_command(command, services, tx.clone()))
            .collect(),
    }
}

pub async fn run_request(
    api: &dyn MarketplaceApi,
    session: &Session,
    request: ApiRequest,
) -> Result<ApiOutcome, RequestFailure> {
    let kind = request.kind();
    let page = request.page();
    debug!(?kind, ?page, "api request");

    let result = match request {
        ApiRequest::Fetch(PageKind::MyJobs) => api.my_jobs(session).await.map(ApiOutcome::Jobs),
        ApiRequest::Fetch(PageKind::MyProjects) => {
            api.my_projects(session).await.map(ApiOutcome::Projects)
        }
        ApiRequest::Fetch(PageKind::Profile) => api.my_user(session).await.map(ApiOutcome::Profile),
        ApiRequest::Fetch(PageKind::Discover) => discover(api, session, ProjectQuery::All).await,
        ApiRequest::Discover(query) => discover(api, session, query).await,
        ApiRequest::Update(PageKind::MyJobs, id, data) => api
            .update_job(session, &id, &data)
            .await
            .map(|job| ApiOutcome::Saved(Record::Job(job))),
        ApiRequest::Update(PageKind::MyProjects | PageKind::Discover, id, data) => api
            .update_project(session, &id, &data)
            .await
            .map(|project| ApiOutcome::Saved(Record::Project(project))),
        ApiRequest::Update(PageKind::Profile, _, data) => api
            .update_user(session, &data)
            .await
            .map(|user| ApiOutcome::Saved(Record::User(user))),
        ApiRequest::Delete(page, id) => {
            let deleted = match page {
                PageKind::MyJobs => api.delete_job(session, &id).await,
                PageKind::MyProjects | PageKind::Discover => api.delete_project(session, &id).await,
                PageKind::Profile => api.delete_user(session).await,
            };
            deleted.map(|()| ApiOutcome::Deleted(page, id))
        }
        ApiRequest::Reviews(project) => api
            .project_reviews(session, &project)
            .await
            .map(|reviews| ApiOutcome::Reviews(project, reviews)),
        ApiRequest::AddReview { project, comment } => api
            .add_review(session, &project, &comment)
            .await
            .map(ApiOutcome::ReviewAdded),
        ApiRequest::UpdateReview(id, comment) => api
            .update_review(session, &id, &comment)
            .await
            .map(|()| ApiOutcome::ReviewUpdated(id, comment)),
        ApiRequest::DeleteReview(id) => api
            .delete_review(session, &id)
            .await
            .map(|()| ApiOutcome::ReviewDeleted(id)),
    };

    result.map_err(|e| RequestFailure {
        kind,
        page,
        unauthorized: e.is_unauthorized(),
        message: e.to_string(),
    })
}

/// A title search with no hits answers 404; that is an empty result, not a failure.
async fn discover(
    api: &dyn MarketplaceApi,
    session: &Session,
    query: ProjectQuery,
) -> Result<ApiOutcome, ApiError> {
    let projects = match &query {
        ProjectQuery::All => api.all_projects(session).await,
        ProjectQuery::Status(statuses) => api.projects_by_status(session, statuses).await,
        ProjectQuery::Title(term) => match api.projects_by_title(session, term).await {
            Err(e) if e.is_not_found() => Ok(Vec::new()),
            other => other,
        },
    }?;
    Ok(ApiOutcome::Discovered(query, projects))
}
