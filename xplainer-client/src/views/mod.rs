//! View state machines
//!
//! Each view owns its state and sequences backend calls the way the
//! corresponding page does: fetch on load, then register or search on
//! demand. Failures never escape a view as stale data; they are recorded as a
//! [`ErrorKind`](crate::ErrorKind) and mapped to a static message.
//!
//! A view allows one operation of each kind in flight. A second trigger
//! while the first is pending is refused with [`ViewError::Busy`] and sends
//! nothing. Dropping a view abandons whatever it had in flight.

mod repositories;
mod search;

#[cfg(test)]
pub(crate) mod fake;

pub use repositories::{RegistryPhase, RepositoriesSnapshot, RepositoriesView};
pub use search::{SearchState, SearchView};

use thiserror::Error;

use crate::error::ClientError;

/// Reasons a view refused or failed an action
#[derive(Debug, Error)]
pub enum ViewError {
    /// The same action is already in flight from this view
    #[error("another request from this view is still pending")]
    Busy,

    /// The client rejected the input or the request failed
    #[error(transparent)]
    Client(#[from] ClientError),
}

impl ViewError {
    /// Returns the client error, if the action got that far
    pub fn client_error(&self) -> Option<&ClientError> {
        match self {
            ViewError::Busy => None,
            ViewError::Client(e) => Some(e),
        }
    }
}
