//! Input validation
//!
//! Every check here runs before a request is built, so a failure never
//! costs a network round trip.

use thiserror::Error;

/// Malformed input caught on the client side
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Repository owner is empty
    #[error("repository owner must not be empty")]
    EmptyOwner,

    /// Repository name is empty
    #[error("repository name must not be empty")]
    EmptyName,

    /// Search question is empty
    #[error("query must not be empty")]
    EmptyQuery,

    /// Repository reference could not be parsed as `owner/name`
    #[error("invalid repository reference '{0}', expected owner/name")]
    MalformedReference(String),

    /// Repository has not been listed by the backend
    #[error("repository '{0}' is not in the list of known repositories")]
    UnknownRepository(String),
}

/// Returns true when the value has at least one non-whitespace character
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Checks an `(owner, name)` pair
pub fn validate_identifier(owner: &str, name: &str) -> Result<(), ValidationError> {
    if !is_present(owner) {
        return Err(ValidationError::EmptyOwner);
    }
    if !is_present(name) {
        return Err(ValidationError::EmptyName);
    }
    Ok(())
}

/// Checks a question before it is sent for a repository
pub fn validate_query(query: &str) -> Result<(), ValidationError> {
    if !is_present(query) {
        return Err(ValidationError::EmptyQuery);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_requires_both_parts() {
        assert_eq!(
            validate_identifier("", "x"),
            Err(ValidationError::EmptyOwner)
        );
        assert_eq!(
            validate_identifier("x", ""),
            Err(ValidationError::EmptyName)
        );
        assert!(validate_identifier("facebook", "react").is_ok());
    }

    #[test]
    fn test_whitespace_is_not_present() {
        assert!(!is_present("   "));
        assert!(!is_present("\t\n"));
        assert!(is_present(" a "));
        assert_eq!(validate_query("  "), Err(ValidationError::EmptyQuery));
    }
}
