use crate::domain::{
    api::{ApiError, MarketplaceApi},
    models::{EntityId, Job, Project, Review, Session, User},
};
use async_trait::async_trait;
use anyhow::bail;
use reqwest::{Client, IntoUrl, RequestBuilder, StatusCode, Url};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::debug;

pub struct HttpAdapter {
    client: Client,
    base_url: String,
    base: Url,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NewReview<'a> {
    comment: &'a str,
    user_id: &'a EntityId,
    project_id: &'a EntityId,
}

#[derive(Serialize)]
struct ReviewUpdate<'a> {
    comment: &'a str,
}

impl HttpAdapter {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("melt/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let base = Url::parse(base_url)?;
        if base.cannot_be_a_base() {
            bail!("api_url must be an http(s) base URL, got {base_url}");
        }
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            base,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `path` followed by `segment`, with `segment` percent-encoded as a
    /// single path component (so a search term may contain `/` or spaces).
    fn url_with_segment(&self, path: &str, segment: &str) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(path.split('/').filter(|part| !part.is_empty()))
                .push(segment);
        }
        url
    }

    fn get(&self, session: &Session, url: impl IntoUrl) -> RequestBuilder {
        self.client.get(url).bearer_auth(&session.token)
    }

    fn put(&self, session: &Session, path: &str, data: &Value) -> RequestBuilder {
        self.client
            .put(self.url(path))
            .bearer_auth(&session.token)
            .json(data)
    }

    fn delete(&self, session: &Session, path: &str) -> RequestBuilder {
        self.client.delete(self.url(path)).bearer_auth(&session.token)
    }

    async fn send(request: RequestBuilder) -> Result<Vec<u8>, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        debug!(url = %response.url(), %status, "api response");

        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            // Error bodies carry no guaranteed structure; keep them for the log only.
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.bytes().await?.to_vec())
    }

    async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
        let body = Self::send(request).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl MarketplaceApi for HttpAdapter {
    async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let request = self
            .client
            .post(self.url("/api/user/login"))
            .json(&LoginRequest { email, password });
        Self::send_json(request).await
    }

    async fn my_jobs(&self, session: &Session) -> Result<Vec<Job>, ApiError> {
        Self::send_json(self.get(session, self.url("/api/job/user/my-jobs"))).await
    }

    async fn update_job(
        &self,
        session: &Session,
        id: &EntityId,
        data: &Value,
    ) -> Result<Job, ApiError> {
        Self::send_json(self.put(session, &format!("/api/job/{id}"), data)).await
    }

    async fn delete_job(&self, session: &Session, id: &EntityId) -> Result<(), ApiError> {
        Self::send(self.delete(session, &format!("/api/job/{id}"))).await?;
        Ok(())
    }

    async fn my_projects(&self, session: &Session) -> Result<Vec<Project>, ApiError> {
        Self::send_json(self.get(session, self.url("/api/project/user/project"))).await
    }

    async fn update_project(
        &self,
        session: &Session,
        id: &EntityId,
        data: &Value,
    ) -> Result<Project, ApiError> {
        Self::send_json(self.put(session, &format!("/api/project/{id}"), data)).await
    }

    async fn delete_project(&self, session: &Session, id: &EntityId) -> Result<(), ApiError> {
        Self::send(self.delete(session, &format!("/api/project/{id}"))).await?;
        Ok(())
    }

    async fn my_user(&self, session: &Session) -> Result<User, ApiError> {
        Self::send_json(self.get(session, self.url("/api/user/my-user"))).await
    }

    async fn update_user(&self, session: &Session, data: &Value) -> Result<User, ApiError> {
        Self::send_json(self.put(session, "/api/user", data)).await
    }

    async fn delete_user(&self, session: &Session) -> Result<(), ApiError> {
        Self::send(self.delete(session, "/api/user")).await?;
        Ok(())
    }

    async fn all_projects(&self, session: &Session) -> Result<Vec<Project>, ApiError> {
        Self::send_json(self.get(session, self.url("/api/project"))).await
    }

    async fn projects_by_status(
        &self,
        session: &Session,
        statuses: &[String],
    ) -> Result<Vec<Project>, ApiError> {
        let url = self.url_with_segment("/api/project/status", &statuses.join(","));
        Self::send_json(self.get(session, url)).await
    }

    async fn projects_by_title(
        &self,
        session: &Session,
        term: &str,
    ) -> Result<Vec<Project>, ApiError> {
        let url = self.url_with_segment("/api/project/title", term);
        Self::send_json(self.get(session, url)).await
    }

    async fn project_reviews(
        &self,
        session: &Session,
        project: &EntityId,
    ) -> Result<Vec<Review>, ApiError> {
        let url = self.url_with_segment("/api/review/project", &project.0);
        Self::send_json(self.get(session, url)).await
    }

    async fn add_review(
        &self,
        session: &Session,
        project: &EntityId,
        comment: &str,
    ) -> Result<Review, ApiError> {
        let request = self
            .client
            .post(self.url("/api/review"))
            .bearer_auth(&session.token)
            .json(&NewReview {
                comment,
                user_id: &session.user.id,
                project_id: project,
            });
        Self::send_json(request).await
    }

    async fn update_review(
        &self,
        session: &Session,
        id: &EntityId,
        comment: &str,
    ) -> Result<(), ApiError> {
        let request = self
            .client
            .put(self.url_with_segment("/api/review", &id.0))
            .bearer_auth(&session.token)
            .json(&ReviewUpdate { comment });
        Self::send(request).await?;
        Ok(())
    }

    async fn delete_review(&self, session: &Session, id: &EntityId) -> Result<(), ApiError> {
        Self::send(self.delete(session, &format!("/api/review/{id}"))).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let adapter = HttpAdapter::new("https://api.example.test/").unwrap();
        assert_eq!(
            adapter.url("/api/job/user/my-jobs"),
            "https://api.example.test/api/job/user/my-jobs"
        );
        assert_eq!(adapter.url("api/user"), "https://api.example.test/api/user");
    }

    #[test]
    fn test_search_term_is_one_encoded_segment() {
        let adapter = HttpAdapter::new("https://api.example.test/v1/").unwrap();
        assert_eq!(
            adapter
                .url_with_segment("/api/project/title", "web app/2")
                .as_str(),
            "https://api.example.test/v1/api/project/title/web%20app%2F2"
        );
        assert_eq!(
            adapter
                .url_with_segment("/api/project/status", "Pending,In Progress")
                .as_str(),
            "https://api.example.test/v1/api/project/status/Pending,In%20Progress"
        );
    }

    #[test]
    fn test_rejects_non_base_url() {
        assert!(HttpAdapter::new("mailto:ops@example.test").is_err());
        assert!(HttpAdapter::new("not a url").is_err());
    }

    #[test]
    fn test_unauthorized_is_distinguished() {
        assert!(ApiError::Unauthorized.is_unauthorized());
        assert!(ApiError::Status {
            status: 404,
            body: String::new()
        }
        .is_not_found());
        assert!(!ApiError::Status {
            status: 500,
            body: String::new()
        }
        .is_unauthorized());
    }
}
