//! In-memory backend used by the view tests

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;
use xplainer_core::domain::repository::Repository;
use xplainer_core::domain::search::SearchResult;
use xplainer_core::dto::repository::RegisterRepository;
use xplainer_core::dto::search::SearchRequest;

use crate::api::XplainerApi;
use crate::error::{ClientError, RequestError, Result};

/// Fake backend that records every call that would have hit the network
#[derive(Default)]
pub struct FakeApi {
    repos: Mutex<Vec<Repository>>,
    pub fail_list: AtomicBool,
    pub fail_register: AtomicBool,
    pub fail_search: AtomicBool,
    list_calls: AtomicUsize,
    register_calls: AtomicUsize,
    search_calls: AtomicUsize,
    list_gate: Option<Arc<Notify>>,
    register_gate: Option<Arc<Notify>>,
    search_gate: Option<Arc<Notify>>,
}

impl FakeApi {
    pub fn with_repos(repos: &[(&str, &str)]) -> Self {
        let repos = repos
            .iter()
            .map(|(owner, name)| Repository::new(*owner, *name).unwrap())
            .collect();
        Self {
            repos: Mutex::new(repos),
            ..Default::default()
        }
    }

    /// Makes every search wait for a `notify_one` on the gate
    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.search_gate = Some(gate);
        self
    }

    /// Makes every list fetch wait for a `notify_one` on the gate
    pub fn gate_list(mut self, gate: Arc<Notify>) -> Self {
        self.list_gate = Some(gate);
        self
    }

    /// Makes every registration wait for a `notify_one` on the gate
    pub fn gate_register(mut self, gate: Arc<Notify>) -> Self {
        self.register_gate = Some(gate);
        self
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn register_calls(&self) -> usize {
        self.register_calls.load(Ordering::SeqCst)
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    fn unavailable() -> RequestError {
        RequestError::api_error(503, "backend unavailable")
    }
}

#[async_trait]
impl XplainerApi for FakeApi {
    async fn list_repositories(&self) -> Result<Vec<Repository>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.list_gate {
            gate.notified().await;
        }
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(ClientError::Fetch(Self::unavailable()));
        }
        Ok(self.repos.lock().unwrap().clone())
    }

    async fn register_repository(&self, owner: &str, name: &str) -> Result<()> {
        let req = RegisterRepository::new(owner, name)?;
        self.register_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.register_gate {
            gate.notified().await;
        }
        if self.fail_register.load(Ordering::SeqCst) {
            return Err(ClientError::Registration(Self::unavailable()));
        }

        let repo = Repository::new(req.owner, req.repo)?;
        let mut repos = self.repos.lock().unwrap();
        if !repos.contains(&repo) {
            repos.push(repo);
        }
        Ok(())
    }

    async fn search(&self, query: &str, owner: &str, name: &str) -> Result<SearchResult> {
        SearchRequest::new(query, owner, name)?;
        self.search_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(gate) = &self.search_gate {
            gate.notified().await;
        }

        if self.fail_search.load(Ordering::SeqCst) {
            return Err(ClientError::Search(RequestError::ParseError(
                "missing field `summary`".to_string(),
            )));
        }

        Ok(SearchResult {
            summary: "A".to_string(),
            search_time: 0.5,
            load_time: 0.2,
            prompt: "P".to_string(),
        })
    }
}
