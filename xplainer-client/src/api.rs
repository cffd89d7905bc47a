//! Backend API trait
//!
//! Views talk to the backend through this trait so they can be driven by an
//! in-memory fake in tests.

use async_trait::async_trait;
use xplainer_core::domain::repository::Repository;
use xplainer_core::domain::search::SearchResult;

use crate::BackendClient;
use crate::error::Result;

/// Operations the backend offers
#[async_trait]
pub trait XplainerApi: Send + Sync {
    /// Fetches the registered repositories in server order
    async fn list_repositories(&self) -> Result<Vec<Repository>>;

    /// Registers a repository
    ///
    /// Fails with a validation error, without sending anything, if either
    /// part is empty.
    async fn register_repository(&self, owner: &str, name: &str) -> Result<()>;

    /// Asks a question about one repository
    ///
    /// Fails with a validation error, without sending anything, if the query
    /// or either part of the identifier is empty.
    async fn search(&self, query: &str, owner: &str, name: &str) -> Result<SearchResult>;
}

#[async_trait]
impl XplainerApi for BackendClient {
    async fn list_repositories(&self) -> Result<Vec<Repository>> {
        BackendClient::list_repositories(self).await
    }

    async fn register_repository(&self, owner: &str, name: &str) -> Result<()> {
        BackendClient::register_repository(self, owner, name).await
    }

    async fn search(&self, query: &str, owner: &str, name: &str) -> Result<SearchResult> {
        BackendClient::search(self, query, owner, name).await
    }
}
