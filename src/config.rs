//! Connection configuration and per-call timeout resolution.

use std::time::Duration;

/// Username used when a call does not select one explicitly.
pub const DEFAULT_USERNAME: &str = "user";

/// Default per-call timeout applied when the connection does not
/// override it.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection-level defaults shared by every operation.
///
/// `request_timeout` of [`Duration::ZERO`] disables timeout enforcement
/// for calls that do not pass their own override.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Base URL of the host's HTTP file-transfer API.
    pub api_url: String,
    /// Default acting username for all operations.
    pub username: String,
    /// Default per-call timeout.
    pub request_timeout: Duration,
}

impl ConnectionConfig {
    /// Create a configuration for the given file API base URL with
    /// default username and timeout.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            username: DEFAULT_USERNAME.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Resolve the timeout applied to one call: the call-level override
    /// if present, else the connection default. Pure, never fails.
    pub fn effective_timeout(&self, call_override: Option<Duration>) -> Duration {
        call_override.unwrap_or(self.request_timeout)
    }

    /// Resolve the acting username for one call. An absent or empty
    /// override falls back to the connection default.
    pub fn resolve_user<'a>(&'a self, call_override: Option<&'a str>) -> &'a str {
        match call_override {
            Some(user) if !user.is_empty() => user,
            _ => &self.username,
        }
    }
}
