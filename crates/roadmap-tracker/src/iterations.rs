//! Iterations endpoint.

use roadmap_core::Iteration;

use crate::{
    TrackerClient,
    error::TrackerError,
    http::{check_response, parse_pagination},
    pagination::IterationPage,
};

impl TrackerClient {
    /// Fetch one window of iterations, stories included.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError`] if the HTTP request fails, the API returns a
    /// non-success status, the body cannot be parsed, or the pagination
    /// headers are missing.
    pub async fn fetch_iterations_page(
        &self,
        project_id: u64,
        offset: u32,
        limit: u32,
    ) -> Result<IterationPage, TrackerError> {
        let url = format!(
            "{}?offset={offset}&limit={limit}",
            self.project_url(project_id, "/iterations")
        );
        let resp = check_response(self.http.get(&url).send().await?).await?;

        let headers = resp.headers().clone();
        let body = resp.text().await?;
        let iterations: Vec<Iteration> = serde_json::from_str(&body).map_err(|e| {
            TrackerError::Parse(format!(
                "iterations for project {project_id} at offset {offset}: {e}"
            ))
        })?;
        let pagination = parse_pagination(&headers, iterations.len())?;

        Ok(IterationPage {
            iterations,
            pagination,
        })
    }
}
