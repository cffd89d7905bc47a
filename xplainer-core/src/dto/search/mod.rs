//! Search DTOs

use serde::{Deserialize, Serialize};

use crate::domain::repository::Repository;
use crate::validation::{ValidationError, validate_identifier, validate_query};

/// A question scoped to one repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Natural-language question
    pub query: String,

    /// Repository owner
    pub owner: String,

    /// Repository name
    pub name: String,
}

impl SearchRequest {
    /// Builds a search request
    ///
    /// The query is checked first, then the repository identifier.
    pub fn new(
        query: impl Into<String>,
        owner: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let query = query.into();
        let owner = owner.into();
        let name = name.into();

        validate_query(&query)?;
        validate_identifier(&owner, &name)?;

        Ok(Self { query, owner, name })
    }

    /// Builds a search request for an already-listed repository
    pub fn for_repository(
        query: impl Into<String>,
        repository: &Repository,
    ) -> Result<Self, ValidationError> {
        Self::new(query, repository.owner.clone(), repository.name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let req = SearchRequest::new("how is auth done?", "o", "n").unwrap();
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({"query": "how is auth done?", "owner": "o", "name": "n"})
        );
    }

    #[test]
    fn test_empty_query_is_rejected_first() {
        assert_eq!(
            SearchRequest::new("", "", ""),
            Err(ValidationError::EmptyQuery)
        );
        assert_eq!(
            SearchRequest::new("q", "", ""),
            Err(ValidationError::EmptyOwner)
        );
    }
}
