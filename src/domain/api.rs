use crate::domain::models::{EntityId, Job, Project, Review, Session, User};
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("not authorized")]
    Unauthorized,

    #[error("HTTP error! Status: {status}")]
    Status { status: u16, body: String },

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

/// The marketplace REST backend. Every call except `login` carries the caller's session.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketplaceApi: Send + Sync {
    // POST /api/user/login
    async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError>;

    async fn my_jobs(&self, session: &Session) -> Result<Vec<Job>, ApiError>;
    async fn update_job(&self, session: &Session, id: &EntityId, data: &Value)
        -> Result<Job, ApiError>;
    async fn delete_job(&self, session: &Session, id: &EntityId) -> Result<(), ApiError>;

    async fn my_projects(&self, session: &Session) -> Result<Vec<Project>, ApiError>;
    async fn update_project(
        &self,
        session: &Session,
        id: &EntityId,
        data: &Value,
    ) -> Result<Project, ApiError>;
    async fn delete_project(&self, session: &Session, id: &EntityId) -> Result<(), ApiError>;

    // The profile endpoints act on the token's owner.
    async fn my_user(&self, session: &Session) -> Result<User, ApiError>;
    async fn update_user(&self, session: &Session, data: &Value) -> Result<User, ApiError>;
    async fn delete_user(&self, session: &Session) -> Result<(), ApiError>;

    // Everyone's projects, for browsing.
    async fn all_projects(&self, session: &Session) -> Result<Vec<Project>, ApiError>;
    async fn projects_by_status(
        &self,
        session: &Session,
        statuses: &[String],
    ) -> Result<Vec<Project>, ApiError>;
    /// A title with no matches answers 404.
    async fn projects_by_title(&self, session: &Session, term: &str)
        -> Result<Vec<Project>, ApiError>;

    async fn project_reviews(
        &self,
        session: &Session,
        project: &EntityId,
    ) -> Result<Vec<Review>, ApiError>;
    async fn add_review(
        &self,
        session: &Session,
        project: &EntityId,
        comment: &str,
    ) -> Result<Review, ApiError>;
    async fn update_review(
        &self,
        session: &Session,
        id: &EntityId,
        comment: &str,
    ) -> Result<(), ApiError>;
    async fn delete_review(&self, session: &Session, id: &EntityId) -> Result<(), ApiError>;
}
