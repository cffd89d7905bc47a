//! Search view
//!
//! Asks questions about one of the listed repositories and holds the latest
//! answer.

use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;
use xplainer_core::domain::repository::Repository;
use xplainer_core::domain::search::SearchResult;
use xplainer_core::dto::search::SearchRequest;
use xplainer_core::validation::ValidationError;

use super::ViewError;
use crate::api::XplainerApi;
use crate::error::{ClientError, ErrorKind};

/// State of the answer slot
#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
    /// No question asked yet
    Idle,

    /// A question is in flight
    Pending,

    /// The last question was answered
    Answered(SearchResult),

    /// The last action failed
    Failed(ErrorKind),
}

struct SearchSlots {
    repositories: Vec<Repository>,
    state: SearchState,
}

/// State machine behind the search page
pub struct SearchView<A: XplainerApi + ?Sized> {
    api: Arc<A>,
    slots: Mutex<SearchSlots>,
}

impl<A: XplainerApi + ?Sized> SearchView<A> {
    /// Creates an empty view; call [`SearchView::load`] to populate the
    /// repository choices
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            slots: Mutex::new(SearchSlots {
                repositories: Vec::new(),
                state: SearchState::Idle,
            }),
        }
    }

    /// Fetches the repositories questions can be asked about
    ///
    /// On failure the choices are emptied. A pending search is left alone.
    pub async fn load(&self) -> Result<(), ViewError> {
        let fetched = self.api.list_repositories().await;

        let mut slots = self.slots.lock().await;
        match fetched {
            Ok(repositories) => {
                slots.repositories = repositories;
                if slots.state == SearchState::Failed(ErrorKind::Fetch) {
                    slots.state = SearchState::Idle;
                }
                Ok(())
            }
            Err(e) => {
                slots.repositories.clear();
                if slots.state != SearchState::Pending {
                    slots.state = SearchState::Failed(e.kind());
                }
                Err(e.into())
            }
        }
    }

    /// Asks a question about a listed repository
    ///
    /// Refused without contacting the backend when the query is empty, the
    /// repository has not been listed, or another question is still pending.
    /// A refusal leaves the current state untouched. Otherwise the previous
    /// answer is dropped before the request goes out.
    pub async fn ask(
        &self,
        query: &str,
        repository: &Repository,
    ) -> Result<SearchResult, ViewError> {
        let req = {
            let mut slots = self.slots.lock().await;
            if slots.state == SearchState::Pending {
                return Err(ViewError::Busy);
            }

            let req = SearchRequest::for_repository(query, repository).map_err(ClientError::from)?;
            if !slots.repositories.contains(repository) {
                return Err(ClientError::from(ValidationError::UnknownRepository(
                    repository.full_name(),
                ))
                .into());
            }

            slots.state = SearchState::Pending;
            req
        };

        debug!("Asking about {}/{}", req.owner, req.name);
        let outcome = self.api.search(&req.query, &req.owner, &req.name).await;

        let mut slots = self.slots.lock().await;
        match outcome {
            Ok(result) => {
                slots.state = SearchState::Answered(result.clone());
                Ok(result)
            }
            Err(e) => {
                slots.state = SearchState::Failed(e.kind());
                Err(e.into())
            }
        }
    }

    /// Returns a copy of the answer slot
    pub async fn state(&self) -> SearchState {
        self.slots.lock().await.state.clone()
    }

    /// Summary currently displayed, if the last question was answered
    pub async fn answer(&self) -> Option<String> {
        match &self.slots.lock().await.state {
            SearchState::Answered(result) => Some(result.summary.clone()),
            _ => None,
        }
    }

    /// Repositories questions can be asked about
    pub async fn repositories(&self) -> Vec<Repository> {
        self.slots.lock().await.repositories.clone()
    }

    /// Finds a listed repository by its `owner/name` form
    pub async fn find(&self, full_name: &str) -> Option<Repository> {
        self.slots
            .lock()
            .await
            .repositories
            .iter()
            .find(|r| r.full_name() == full_name)
            .cloned()
    }

    /// User-facing message for the current failure, if any
    pub async fn error_message(&self) -> Option<&'static str> {
        match self.slots.lock().await.state {
            SearchState::Failed(kind) => Some(kind.search_message()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::fake::FakeApi;
    use std::sync::atomic::Ordering;
    use tokio::sync::Notify;

    fn repo(owner: &str, name: &str) -> Repository {
        Repository::new(owner, name).unwrap()
    }

    async fn loaded_view(api: Arc<FakeApi>) -> SearchView<FakeApi> {
        let view = SearchView::new(api);
        view.load().await.unwrap();
        view
    }

    #[tokio::test]
    async fn test_answer_is_the_summary() {
        let api = Arc::new(FakeApi::with_repos(&[("o", "n")]));
        let view = loaded_view(api.clone()).await;

        let result = view.ask("what does it do?", &repo("o", "n")).await.unwrap();

        assert_eq!(result.prompt, "P");
        assert_eq!(view.answer().await.as_deref(), Some("A"));
        assert_eq!(api.search_calls(), 1);
    }

    #[tokio::test]
    async fn test_invalid_input_sends_nothing() {
        let api = Arc::new(FakeApi::with_repos(&[("o", "n")]));
        let view = loaded_view(api.clone()).await;

        assert!(view.ask("", &repo("o", "n")).await.is_err());

        let blank = Repository {
            owner: String::new(),
            name: String::new(),
        };
        assert!(view.ask("q", &blank).await.is_err());

        let err = view.ask("q", &repo("other", "repo")).await.unwrap_err();
        assert!(matches!(
            err,
            ViewError::Client(ClientError::Validation(ValidationError::UnknownRepository(_)))
        ));

        assert_eq!(api.search_calls(), 0);
        assert_eq!(view.state().await, SearchState::Idle);
    }

    #[tokio::test]
    async fn test_refusal_keeps_previous_answer() {
        let api = Arc::new(FakeApi::with_repos(&[("o", "n")]));
        let view = loaded_view(api).await;

        view.ask("q", &repo("o", "n")).await.unwrap();
        assert!(view.ask("", &repo("o", "n")).await.is_err());

        assert_eq!(view.answer().await.as_deref(), Some("A"));
    }

    #[tokio::test]
    async fn test_failure_clears_stale_answer() {
        let api = Arc::new(FakeApi::with_repos(&[("o", "n")]));
        let view = loaded_view(api.clone()).await;
        view.ask("q", &repo("o", "n")).await.unwrap();

        api.fail_search.store(true, Ordering::SeqCst);
        let err = view.ask("q again", &repo("o", "n")).await.unwrap_err();

        assert!(matches!(err, ViewError::Client(ClientError::Search(_))));
        assert_eq!(view.answer().await, None);
        assert_eq!(view.state().await, SearchState::Failed(ErrorKind::Search));
        assert_eq!(
            view.error_message().await,
            Some("Failed to get response. Please try again.")
        );
    }

    #[tokio::test]
    async fn test_second_search_while_pending_is_refused() {
        let gate = Arc::new(Notify::new());
        let api = Arc::new(FakeApi::with_repos(&[("o", "n")]).gated(gate.clone()));
        let view = Arc::new(loaded_view(api.clone()).await);

        let first = {
            let view = view.clone();
            tokio::spawn(async move { view.ask("first", &repo("o", "n")).await })
        };

        while view.state().await != SearchState::Pending {
            tokio::task::yield_now().await;
        }

        let second = view.ask("second", &repo("o", "n")).await;
        assert!(matches!(second, Err(ViewError::Busy)));

        gate.notify_one();
        let answered = first.await.unwrap().unwrap();

        assert_eq!(answered.summary, "A");
        assert_eq!(api.search_calls(), 1);
        assert_eq!(view.answer().await.as_deref(), Some("A"));
    }

    #[tokio::test]
    async fn test_list_failure_empties_choices() {
        let api = Arc::new(FakeApi::with_repos(&[("o", "n")]));
        let view = loaded_view(api.clone()).await;
        assert_eq!(view.find("o/n").await, Some(repo("o", "n")));

        api.fail_list.store(true, Ordering::SeqCst);
        assert!(view.load().await.is_err());

        assert!(view.repositories().await.is_empty());
        assert_eq!(view.state().await, SearchState::Failed(ErrorKind::Fetch));

        // a stale selection can no longer be asked about
        assert!(view.ask("q", &repo("o", "n")).await.is_err());
        assert_eq!(api.search_calls(), 0);

        api.fail_list.store(false, Ordering::SeqCst);
        view.load().await.unwrap();
        assert_eq!(view.state().await, SearchState::Idle);
    }
}
