use crate::app::state::{MountId, PageKind};
use crate::domain::models::{EntityId, Job, Project, Record, Review, Session, User};
use serde_json::Value;

/// Side effects requested by the reducer and carried out by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// A REST call made on behalf of the page mounted as `mount`.
    Api {
        mount: MountId,
        session: Session,
        request: ApiRequest,
    },
    Login {
        email: String,
        password: String,
    },
    Speak(String),
    StoreSession(Option<Session>),
    Batch(Vec<Command>),
}

impl Command {
    /// Folds optional commands into one, skipping the empty ones.
    #[must_use]
    pub fn batch(commands: impl IntoIterator<Item = Option<Command>>) -> Option<Command> {
        let mut commands: Vec<Command> = commands.into_iter().flatten().collect();
        match commands.len() {
            0 => None,
            1 => commands.pop(),
            _ => Some(Command::Batch(commands)),
        }
    }
}

/// Which slice of everyone's projects the Discover page asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectQuery {
    All,
    Status(Vec<String>),
    Title(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiRequest {
    Fetch(PageKind),
    Discover(ProjectQuery),
    Update(PageKind, EntityId, Value),
    Delete(PageKind, EntityId),
    Reviews(EntityId),
    AddReview { project: EntityId, comment: String },
    UpdateReview(EntityId, String),
    DeleteReview(EntityId),
}

impl ApiRequest {
    #[must_use]
    pub fn kind(&self) -> RequestKind {
        match self {
            ApiRequest::Fetch(_) | ApiRequest::Discover(_) => RequestKind::Fetch,
            ApiRequest::Update(..) => RequestKind::Update,
            ApiRequest::Delete(..) => RequestKind::Delete,
            ApiRequest::Reviews(_) => RequestKind::LoadReviews,
            ApiRequest::AddReview { .. } => RequestKind::AddReview,
            ApiRequest::UpdateReview(..) => RequestKind::UpdateReview,
            ApiRequest::DeleteReview(_) => RequestKind::DeleteReview,
        }
    }

    #[must_use]
    pub fn page(&self) -> PageKind {
        match self {
            ApiRequest::Fetch(page) | ApiRequest::Update(page, ..) | ApiRequest::Delete(page, _) => {
                *page
            }
            ApiRequest::Discover(_)
            | ApiRequest::Reviews(_)
            | ApiRequest::AddReview { .. }
            | ApiRequest::UpdateReview(..)
            | ApiRequest::DeleteReview(_) => PageKind::Discover,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Fetch,
    Update,
    Delete,
    LoadReviews,
    AddReview,
    UpdateReview,
    DeleteReview,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome {
    Jobs(Vec<Job>),
    Projects(Vec<Project>),
    Profile(User),
    /// Tagged with the query it answers; answers to superseded queries are dropped.
    Discovered(ProjectQuery, Vec<Project>),
    Saved(Record),
    Deleted(PageKind, EntityId),
    Reviews(EntityId, Vec<Review>),
    ReviewAdded(Review),
    ReviewUpdated(EntityId, String),
    ReviewDeleted(EntityId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequestFailure {
    pub kind: RequestKind,
    pub page: PageKind,
    pub unauthorized: bool,
    pub message: String,
}
