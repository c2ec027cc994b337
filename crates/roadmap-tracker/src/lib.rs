//! # roadmap-tracker
//!
//! Pivotal Tracker v5 HTTP client for the roadmap generator.
//!
//! Retrieves the raw record set for one project:
//! - project settings (`GET /projects/{id}`)
//! - epics (`GET /projects/{id}/epics`)
//! - iterations with nested stories, paged
//!   (`GET /projects/{id}/iterations?offset=&limit=`)
//!
//! [`TrackerApi`] is the seam the pipeline depends on; [`TrackerClient`] is
//! the reqwest implementation. [`collect_iterations`] accumulates pages.

pub mod epics;
pub mod iterations;
pub mod pagination;
pub mod projects;

mod error;
mod http;

pub use error::TrackerError;
pub use pagination::{IterationPage, Pagination, collect_iterations};

use std::future::Future;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use roadmap_core::{Epic, Project};

/// Header carrying the API token on every request.
pub const TOKEN_HEADER: &str = "x-trackertoken";

// ── Trait ──────────────────────────────────────────────────────────

/// Remote fetch operations needed to build one project's roadmap.
pub trait TrackerApi {
    /// Fetch project settings.
    fn project(&self, project_id: u64) -> impl Future<Output = Result<Project, TrackerError>> + Send;

    /// Fetch every epic of a project.
    fn epics(&self, project_id: u64)
    -> impl Future<Output = Result<Vec<Epic>, TrackerError>> + Send;

    /// Fetch one window of iterations.
    fn iterations_page(
        &self,
        project_id: u64,
        offset: u32,
        limit: u32,
    ) -> impl Future<Output = Result<IterationPage, TrackerError>> + Send;
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the Tracker REST API.
pub struct TrackerClient {
    http: reqwest::Client,
    base_url: String,
}

impl TrackerClient {
    /// Create a client that authenticates every request with `token`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::InvalidToken`] if the token cannot be used as
    /// a header value, or [`TrackerError::Http`] if the client fails to build.
    pub fn new(base_url: &str, token: &str, timeout: Duration) -> Result<Self, TrackerError> {
        let mut token_value =
            HeaderValue::from_str(token.trim()).map_err(|_| TrackerError::InvalidToken)?;
        token_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(TOKEN_HEADER), token_value);

        let http = reqwest::Client::builder()
            .user_agent(concat!("roadmap/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// API root this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn project_url(&self, project_id: u64, path: &str) -> String {
        format!("{}/projects/{project_id}{path}", self.base_url)
    }
}

impl TrackerApi for TrackerClient {
    async fn project(&self, project_id: u64) -> Result<Project, TrackerError> {
        self.fetch_project(project_id).await
    }

    async fn epics(&self, project_id: u64) -> Result<Vec<Epic>, TrackerError> {
        self.fetch_epics(project_id).await
    }

    async fn iterations_page(
        &self,
        project_id: u64,
        offset: u32,
        limit: u32,
    ) -> Result<IterationPage, TrackerError> {
        self.fetch_iterations_page(project_id, offset, limit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_builds_with_plain_token() {
        let client = TrackerClient::new(
            "https://www.pivotaltracker.com/services/v5/",
            "abc123",
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(
            client.base_url(),
            "https://www.pivotaltracker.com/services/v5"
        );
        assert_eq!(
            client.project_url(42, "/epics"),
            "https://www.pivotaltracker.com/services/v5/projects/42/epics"
        );
    }

    #[test]
    fn token_with_newline_is_rejected() {
        let result = TrackerClient::new("http://localhost", "abc\ndef", Duration::from_secs(5));
        assert!(matches!(result, Err(TrackerError::InvalidToken)));
    }

    #[tokio::test]
    #[ignore] // requires network and ROADMAP_TRACKER__TOKEN / ROADMAP_LIVE_PROJECT
    async fn live_collect_iterations() {
        let token = std::env::var("ROADMAP_TRACKER__TOKEN").unwrap();
        let project_id: u64 = std::env::var("ROADMAP_LIVE_PROJECT").unwrap().parse().unwrap();
        let client = TrackerClient::new(
            "https://www.pivotaltracker.com/services/v5",
            &token,
            Duration::from_secs(30),
        )
        .unwrap();

        let project = client.project(project_id).await.unwrap();
        let epics = client.epics(project_id).await.unwrap();
        let iterations = collect_iterations(&client, project_id, 0, 20).await.unwrap();
        println!(
            "\n── {} ── {} epics, {} iterations",
            project.name,
            epics.len(),
            iterations.len()
        );
    }
}
