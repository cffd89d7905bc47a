//! Error types for the Xplainer client

use thiserror::Error;
use xplainer_core::validation::ValidationError;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Transport-level failure of a single request
#[derive(Debug, Error)]
pub enum RequestError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned a non-2xx status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Raw response body, kept for logs only
        message: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl RequestError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 500)
    }
}

/// Errors that can occur when using the Xplainer client
#[derive(Debug, Error)]
pub enum ClientError {
    /// Input rejected before any request was sent
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// Listing repositories failed
    #[error("Failed to fetch repositories: {0}")]
    Fetch(#[source] RequestError),

    /// Registering a repository failed
    #[error("Failed to register repository: {0}")]
    Registration(#[source] RequestError),

    /// Running a search failed
    #[error("Search failed: {0}")]
    Search(#[source] RequestError),
}

impl ClientError {
    /// Category of this error, without the underlying cause
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Fetch(_) => ErrorKind::Fetch,
            Self::Registration(_) => ErrorKind::Registration,
            Self::Search(_) => ErrorKind::Search,
        }
    }

    /// The underlying transport error, if a request was sent
    pub fn request_error(&self) -> Option<&RequestError> {
        match self {
            Self::Validation(_) => None,
            Self::Fetch(e) | Self::Registration(e) | Self::Search(e) => Some(e),
        }
    }
}

/// Error category as surfaced to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Fetch,
    Registration,
    Search,
}

impl ErrorKind {
    /// Static message shown in place of the failed operation's result
    ///
    /// Validation wording depends on which view rejected the input, see
    /// [`ErrorKind::search_message`].
    pub fn user_message(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "Please enter both owner and repository name.",
            ErrorKind::Fetch => "Failed to fetch repositories. Please try again later.",
            ErrorKind::Registration => "Failed to add repository. Please try again.",
            ErrorKind::Search => "Failed to get response. Please try again.",
        }
    }

    /// Message variant used by the search view
    pub fn search_message(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "Please enter a question and select a repository.",
            other => other.user_message(),
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Validation => write!(f, "Validation"),
            ErrorKind::Fetch => write!(f, "Fetch"),
            ErrorKind::Registration => write!(f, "Registration"),
            ErrorKind::Search => write!(f, "Search"),
        }
    }
}
