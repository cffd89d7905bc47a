//! Repository domain model
//!
//! Represents a code repository the backend has indexed.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::validation::{ValidationError, validate_identifier};

/// A registered repository, identified by its `(owner, name)` pair
///
/// The pair is the whole identity: two repositories with the same owner and
/// name are the same repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Repository {
    /// Account or organisation that owns the repository
    pub owner: String,

    /// Repository name within the owner's namespace
    pub name: String,
}

impl Repository {
    /// Creates a repository identifier, rejecting empty parts
    ///
    /// # Example
    /// ```
    /// use xplainer_core::domain::repository::Repository;
    ///
    /// let repo = Repository::new("facebook", "react").unwrap();
    /// assert_eq!(repo.to_string(), "facebook/react");
    /// assert!(Repository::new("", "react").is_err());
    /// ```
    pub fn new(
        owner: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let owner = owner.into();
        let name = name.into();
        validate_identifier(&owner, &name)?;
        Ok(Self { owner, name })
    }

    /// Checks that both parts are present
    ///
    /// Values decoded from the backend skip `new`, so callers that are about
    /// to send one back re-check it here.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_identifier(&self.owner, &self.name)
    }

    /// Returns the `owner/name` form used as a display and selection key
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl std::fmt::Display for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for Repository {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(name), None) => Repository::new(owner, name)
                .map_err(|_| ValidationError::MalformedReference(s.to_string())),
            _ => Err(ValidationError::MalformedReference(s.to_string())),
        }
    }
}

/// Report the backend returns after indexing a repository
///
/// The client treats any 2xx as success; this body is informational only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationSummary {
    /// `owner/name` as recorded by the backend
    pub full_name: String,

    /// Number of commits ingested
    #[serde(default)]
    pub commits_processed: u64,

    /// Number of issues ingested
    #[serde(default)]
    pub issues_processed: u64,

    /// Number of pull requests ingested
    #[serde(default)]
    pub prs_processed: u64,

    /// Free-form status message
    #[serde(default)]
    pub message: String,
}
