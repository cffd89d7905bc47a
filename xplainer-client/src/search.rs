//! Search API endpoint

use tracing::{debug, warn};
use xplainer_core::domain::search::SearchResult;
use xplainer_core::dto::search::SearchRequest;

use crate::BackendClient;
use crate::error::{ClientError, RequestError, Result};

impl BackendClient {
    /// Ask a question about a repository
    ///
    /// Single shot: no retries and no timeout beyond the HTTP client's own.
    /// Whether the repository exists is left to the backend.
    ///
    /// # Arguments
    /// * `query` - The natural-language question
    /// * `owner` - Repository owner
    /// * `name` - Repository name
    ///
    /// # Returns
    /// The generated answer with timing metadata and the prompt used
    pub async fn search(&self, query: &str, owner: &str, name: &str) -> Result<SearchResult> {
        let req = SearchRequest::new(query, owner, name)?;
        self.send_search(&req).await
    }

    /// Send an already-validated search request
    pub async fn send_search(&self, req: &SearchRequest) -> Result<SearchResult> {
        let url = self.url("/search/faiss");
        debug!("POST {} ({}/{})", url, req.owner, req.name);

        let result = self.post_search(&url, req).await.map_err(|e| {
            warn!("Search on {}/{} failed: {}", req.owner, req.name, e);
            ClientError::Search(e)
        })?;

        debug!(
            search_time = result.search_time,
            load_time = result.load_time,
            "Search answered"
        );

        Ok(result)
    }

    async fn post_search(
        &self,
        url: &str,
        req: &SearchRequest,
    ) -> std::result::Result<SearchResult, RequestError> {
        let response = self.client.post(url).json(req).send().await?;
        self.handle_response(response).await
    }
}
