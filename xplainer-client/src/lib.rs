//! Xplainer HTTP Client
//!
//! A small, type-safe HTTP client for the Xplainer backend, plus the
//! per-view state machines that sequence calls to it.
//!
//! The backend exposes three operations:
//! - list the registered repositories
//! - register (and index) a repository
//! - answer a natural-language question about one repository
//!
//! # Example
//!
//! ```no_run
//! use xplainer_client::BackendClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = BackendClient::new("http://localhost:8000");
//!
//!     for repo in client.list_repositories().await? {
//!         println!("{}", repo);
//!     }
//!
//!     let result = client.search("Where is routing set up?", "facebook", "react").await?;
//!     println!("{}", result.summary);
//!     Ok(())
//! }
//! ```

mod api;
pub mod config;
pub mod error;
mod repositories;
mod search;
pub mod views;

// Re-export commonly used types
pub use api::XplainerApi;
pub use config::ClientConfig;
pub use error::{ClientError, ErrorKind, RequestError, Result};
pub use xplainer_core::domain::repository::Repository;
pub use xplainer_core::domain::search::SearchResult;

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the Xplainer backend
#[derive(Debug, Clone)]
pub struct BackendClient {
    /// Base URL of the backend (e.g., "http://localhost:8000")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl BackendClient {
    /// Create a new backend client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the backend (e.g., "http://localhost:8000")
    ///
    /// # Example
    /// ```
    /// use xplainer_client::BackendClient;
    ///
    /// let client = BackendClient::new("http://localhost:8000");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Wrap an existing `reqwest::Client`
    ///
    /// The backend client adds no settings of its own; requests go out with
    /// whatever the given client carries. Useful for sharing one connection
    /// pool between several backend clients.
    ///
    /// # Example
    /// ```
    /// use xplainer_client::BackendClient;
    ///
    /// let shared = reqwest::Client::new();
    /// let primary = BackendClient::with_client("http://localhost:8000", shared.clone());
    /// let staging = BackendClient::with_client("http://staging:8000/", shared);
    /// assert_eq!(staging.base_url(), "http://staging:8000");
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Create a backend client from a validated configuration
    pub fn from_config(config: &ClientConfig) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(Self::new(config.base_url.clone()))
    }

    /// Get the base URL of the backend
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build an absolute URL for a backend path
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// Any non-2xx status is a failure. The body of a failed response is
    /// kept as text for diagnostics and never interpreted.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> std::result::Result<T, RequestError> {
        let response = Self::check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| RequestError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response whose body is optional
    ///
    /// Returns the raw body on success so callers can inspect it if they care.
    async fn handle_text_response(
        &self,
        response: reqwest::Response,
    ) -> std::result::Result<String, RequestError> {
        let response = Self::check_status(response).await?;
        Ok(response.text().await.unwrap_or_default())
    }

    async fn check_status(
        response: reqwest::Response,
    ) -> std::result::Result<reqwest::Response, RequestError> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(RequestError::api_error(status.as_u16(), error_text));
        }

        Ok(response)
    }
}
