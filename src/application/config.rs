use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, ENV_BASE_URL, ENV_TIMEOUT_SECS};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Construction-time configuration of a session client
pub struct Config {
    /// Base URL every endpoint path is appended to
    pub base_url: String,
    /// Timeout in seconds applied to every network operation
    pub timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration pointing at the public demo host with a 30 second timeout
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Loads the configuration from the environment
    ///
    /// A `.env` file is loaded first if present. `API_BASE_URL` and
    /// `API_TIMEOUT_SECS` override the defaults; unparsable values fall back to them.
    #[must_use]
    pub fn from_env() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Self {
            base_url: get_env_or_default(ENV_BASE_URL, DEFAULT_BASE_URL.to_string()),
            timeout: get_env_or_default(ENV_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Replaces the base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Replaces the timeout, in seconds
    #[must_use]
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.timeout = timeout;
        self
    }

    /// The timeout as a `Duration`
    #[must_use]
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}
