//! Epics endpoint.

use roadmap_core::Epic;

use crate::{TrackerClient, error::TrackerError, http::check_response};

impl TrackerClient {
    /// Fetch every epic of a project.
    ///
    /// The endpoint is not paginated.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError`] if the HTTP request fails, the API returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn fetch_epics(&self, project_id: u64) -> Result<Vec<Epic>, TrackerError> {
        let url = self.project_url(project_id, "/epics");
        let resp = check_response(self.http.get(&url).send().await?).await?;
        let body = resp.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| TrackerError::Parse(format!("epics for project {project_id}: {e}")))
    }
}
