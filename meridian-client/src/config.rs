//! Client configuration

use std::time::Duration;

/// Default dashboard refresh interval (matches the backend's guidance
/// for in-progress order views)
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(15);

/// Configuration for connecting to the Meridian backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (e.g. "http://localhost:8000/api")
    pub base_url: String,

    /// Auth token, if already logged in
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Interval between order poll fetches
    pub poll_interval: Duration,
}

impl ClientConfig {
    /// Create a new configuration for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Set the auth token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the order poll interval
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> super::HttpClient {
        super::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8000/api")
    }
}
