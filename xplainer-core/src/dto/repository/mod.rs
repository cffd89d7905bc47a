//! Repository DTOs
//!
//! Data transfer objects for repository registration.

use serde::{Deserialize, Serialize};

use crate::validation::{ValidationError, validate_identifier};

/// Request to register (and index) a repository
///
/// The backend names the second field `repo`, not `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRepository {
    /// Repository owner
    pub owner: String,

    /// Repository name
    pub repo: String,
}

impl RegisterRepository {
    /// Builds a registration request, rejecting empty parts
    pub fn new(
        owner: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let owner = owner.into();
        let repo = name.into();
        validate_identifier(&owner, &repo)?;
        Ok(Self { owner, repo })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_uses_repo_field() {
        let req = RegisterRepository::new("facebook", "react").unwrap();
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({"owner": "facebook", "repo": "react"}));
    }

    #[test]
    fn test_rejects_empty_parts() {
        assert_eq!(
            RegisterRepository::new("", "x"),
            Err(ValidationError::EmptyOwner)
        );
        assert_eq!(
            RegisterRepository::new("x", ""),
            Err(ValidationError::EmptyName)
        );
    }
}
