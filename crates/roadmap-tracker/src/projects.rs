//! Project settings endpoint.

use roadmap_core::Project;

use crate::{TrackerClient, error::TrackerError, http::check_response};

impl TrackerClient {
    /// Fetch settings for one project.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError`] if the HTTP request fails, the API returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn fetch_project(&self, project_id: u64) -> Result<Project, TrackerError> {
        let url = self.project_url(project_id, "");
        let resp = check_response(self.http.get(&url).send().await?).await?;
        Ok(resp.json().await?)
    }
}
