use std::env;
use std::fmt;
use std::time::Duration;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVar(&'static str),
}

/// Connection settings for the hosted backend.
///
/// Built once at startup and passed into the gateway explicitly; there is
/// no ambient client.
#[derive(Clone)]
pub struct RestConfig {
    /// Base URL of the backend, e.g. `https://project.example.co`.
    pub base_url: String,

    /// The anonymous API key sent with every request.
    pub api_key: String,

    /// Per-request timeout. A timed-out request is reported as an
    /// ordinary gateway failure.
    pub timeout: Duration,
}

impl RestConfig {
    /// Default per-request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Create a config with the default timeout.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read `SNAGFLOW_BASE_URL` and `SNAGFLOW_API_KEY` from the
    /// environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = env::var("SNAGFLOW_BASE_URL")
            .map_err(|_| ConfigError::MissingVar("SNAGFLOW_BASE_URL"))?;
        let api_key = env::var("SNAGFLOW_API_KEY")
            .map_err(|_| ConfigError::MissingVar("SNAGFLOW_API_KEY"))?;
        Ok(Self::new(base_url, api_key))
    }
}

// The api key must not leak through debug formatting.
impl fmt::Debug for RestConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"***")
            .field("timeout", &self.timeout)
            .finish()
    }
}
