//! Repositories view
//!
//! Lists the registered repositories and registers new ones. The displayed
//! list is only ever replaced by a full fetch from the backend, never patched
//! locally.

use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;
use xplainer_core::domain::repository::Repository;
use xplainer_core::validation::validate_identifier;

use super::ViewError;
use crate::api::XplainerApi;
use crate::error::{ClientError, ErrorKind};

/// Where the repositories view is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryPhase {
    /// Nothing in flight, list is current
    Idle,

    /// A registration is in flight
    Submitting,

    /// The last action failed
    Failed(ErrorKind),
}

/// Point-in-time copy of the view state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoriesSnapshot {
    pub phase: RegistryPhase,
    pub repositories: Vec<Repository>,
}

struct RegistryState {
    phase: RegistryPhase,
    repositories: Vec<Repository>,
}

/// State machine behind the repositories page
pub struct RepositoriesView<A: XplainerApi + ?Sized> {
    api: Arc<A>,
    state: Mutex<RegistryState>,
}

impl<A: XplainerApi + ?Sized> RepositoriesView<A> {
    /// Creates an empty view; call [`RepositoriesView::load`] to populate it
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            state: Mutex::new(RegistryState {
                phase: RegistryPhase::Idle,
                repositories: Vec::new(),
            }),
        }
    }

    /// Fetches the repository list
    ///
    /// On failure the list is emptied, never left stale. A registration that
    /// starts while the fetch is in flight keeps its `Submitting` phase.
    pub async fn load(&self) -> Result<(), ViewError> {
        if self.state.lock().await.phase == RegistryPhase::Submitting {
            return Err(ViewError::Busy);
        }
        self.refresh(false).await
    }

    /// Registers a repository and re-fetches the list
    ///
    /// Empty input is refused without contacting the backend. A registration
    /// failure keeps the current list; a failure of the follow-up refresh
    /// empties it.
    pub async fn register(&self, owner: &str, name: &str) -> Result<(), ViewError> {
        {
            let mut state = self.state.lock().await;
            if state.phase == RegistryPhase::Submitting {
                return Err(ViewError::Busy);
            }
            if let Err(e) = validate_identifier(owner, name) {
                state.phase = RegistryPhase::Failed(ErrorKind::Validation);
                return Err(ClientError::from(e).into());
            }
            state.phase = RegistryPhase::Submitting;
        }

        if let Err(e) = self.api.register_repository(owner, name).await {
            self.state.lock().await.phase = RegistryPhase::Failed(e.kind());
            return Err(e.into());
        }

        debug!("Registered {}/{}, refreshing list", owner, name);
        self.refresh(true).await
    }

    /// Returns a copy of the current state
    pub async fn snapshot(&self) -> RepositoriesSnapshot {
        let state = self.state.lock().await;
        RepositoriesSnapshot {
            phase: state.phase,
            repositories: state.repositories.clone(),
        }
    }

    /// Returns the repositories currently displayed
    pub async fn repositories(&self) -> Vec<Repository> {
        self.state.lock().await.repositories.clone()
    }

    /// User-facing message for the current failure, if any
    pub async fn error_message(&self) -> Option<&'static str> {
        match self.state.lock().await.phase {
            RegistryPhase::Failed(kind) => Some(kind.user_message()),
            _ => None,
        }
    }

    /// Replaces the list with a fresh fetch
    ///
    /// Only the registration that set `Submitting` may move the phase out of
    /// it; `owns_phase` is true exactly for that caller.
    async fn refresh(&self, owns_phase: bool) -> Result<(), ViewError> {
        let fetched = self.api.list_repositories().await;

        let mut state = self.state.lock().await;
        let may_move_phase = owns_phase || state.phase != RegistryPhase::Submitting;
        match fetched {
            Ok(repositories) => {
                state.repositories = repositories;
                if may_move_phase {
                    state.phase = RegistryPhase::Idle;
                }
                Ok(())
            }
            Err(e) => {
                state.repositories.clear();
                if may_move_phase {
                    state.phase = RegistryPhase::Failed(e.kind());
                }
                Err(e.into())
            }
        }
    }
}
