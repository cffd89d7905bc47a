//! Client configuration
//!
//! Holds the backend address the client talks to. The address is injected
//! rather than compiled in so the same build can target any deployment.

/// Default backend address used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable consulted by [`ClientConfig::from_env`]
pub const BASE_URL_ENV: &str = "XPLAINER_BASE_URL";

/// Backend client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL (e.g., "http://localhost:8000")
    pub base_url: String,
}

impl ClientConfig {
    /// Creates a configuration pointing at the given backend
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - XPLAINER_BASE_URL (optional, default: http://localhost:8000)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_env_value(std::env::var(BASE_URL_ENV))
    }

    /// Builds a validated configuration from the result of reading
    /// `XPLAINER_BASE_URL`
    fn from_env_value(value: Result<String, std::env::VarError>) -> anyhow::Result<Self> {
        let base_url = match value {
            Ok(url) => url,
            Err(std::env::VarError::NotPresent) => DEFAULT_BASE_URL.to_string(),
            Err(e) => anyhow::bail!("{} is not valid unicode: {}", BASE_URL_ENV, e),
        };

        let config = Self::new(base_url);
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.base_url.is_empty() {
            anyhow::bail!("base_url cannot be empty");
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!("base_url must start with http:// or https://");
        }

        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
