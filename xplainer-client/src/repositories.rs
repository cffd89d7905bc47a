//! Repository-related API endpoints

use tracing::{debug, info, warn};
use xplainer_core::domain::repository::{RegistrationSummary, Repository};
use xplainer_core::dto::repository::RegisterRepository;

use crate::BackendClient;
use crate::error::{ClientError, RequestError, Result};

impl BackendClient {
    // =============================================================================
    // Repository Registry
    // =============================================================================

    /// List all registered repositories
    ///
    /// # Returns
    /// The repositories exactly as the backend ordered them
    pub async fn list_repositories(&self) -> Result<Vec<Repository>> {
        let url = self.url("/repos/list");
        debug!("GET {}", url);

        self.fetch_repositories(&url).await.map_err(|e| {
            warn!("Failed to list repositories: {}", e);
            ClientError::Fetch(e)
        })
    }

    /// Register a repository with the backend
    ///
    /// The backend indexes the repository before answering, so this call can
    /// take a while. The registry is not updated locally; call
    /// [`BackendClient::list_repositories`] to see the new entry.
    ///
    /// # Arguments
    /// * `owner` - Repository owner
    /// * `name` - Repository name
    ///
    /// # Example
    /// ```no_run
    /// # use xplainer_client::BackendClient;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = BackendClient::new("http://localhost:8000");
    /// client.register_repository("facebook", "react").await?;
    /// let repos = client.list_repositories().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn register_repository(&self, owner: &str, name: &str) -> Result<()> {
        let req = RegisterRepository::new(owner, name)?;

        let url = self.url("/repos/init");
        debug!("POST {} ({}/{})", url, req.owner, req.repo);

        let body = self.post_registration(&url, &req).await.map_err(|e| {
            warn!("Failed to register {}/{}: {}", req.owner, req.repo, e);
            ClientError::Registration(e)
        })?;

        match serde_json::from_str::<RegistrationSummary>(&body) {
            Ok(summary) => info!(
                "Registered {} ({} commits, {} issues, {} pull requests)",
                summary.full_name,
                summary.commits_processed,
                summary.issues_processed,
                summary.prs_processed
            ),
            Err(_) => info!("Registered {}/{}", req.owner, req.repo),
        }

        Ok(())
    }

    async fn fetch_repositories(
        &self,
        url: &str,
    ) -> std::result::Result<Vec<Repository>, RequestError> {
        let response = self.client.get(url).send().await?;
        self.handle_response(response).await
    }

    async fn post_registration(
        &self,
        url: &str,
        req: &RegisterRepository,
    ) -> std::result::Result<String, RequestError> {
        let response = self.client.post(url).json(req).send().await?;
        self.handle_text_response(response).await
    }
}
