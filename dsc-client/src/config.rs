//! Where the backend lives and how long to wait for it.

use std::time::Duration;

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";

/// Environment variable read for the base URL, at run time by the CLI and at
/// compile time by the browser build.
pub const BASE_URL_ENV: &str = "DSC_BASE_URL";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Per-request timeout. `None` waits indefinitely. Ignored on `wasm32`.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Base URL baked in at compile time, for the browser build.
    pub fn compiled() -> Self {
        Self::new(option_env!("DSC_BASE_URL").unwrap_or(DEFAULT_BASE_URL))
    }
}
