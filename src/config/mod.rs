//! Client configuration (layered: explicit values > env > defaults).

use std::fmt;
use std::time::Duration;

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://clawsino.anma-services.com";

/// Request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const BASE_URL_ENV: &str = "CLAWSINO_BASE_URL";
pub const TOKEN_ENV: &str = "CLAWSINO_TOKEN";

/// Configuration for a [`ClawsinoClient`](crate::client::ClawsinoClient).
///
/// Passed explicitly to the client; there is no process-wide default.
///
/// # Example
/// ```
/// use clawsino::config::ClientConfig;
///
/// let config = ClientConfig::new()
///     .with_base_url("http://localhost:8080")
///     .with_token("session-token");
/// assert!(config.token().is_some());
/// ```
#[derive(Clone)]
pub struct ClientConfig {
    base_url: String,
    token: Option<String>,
    timeout: Duration,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| ".."))
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientConfig {
    /// Production base URL, no token, default timeout.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Apply `CLAWSINO_BASE_URL` / `CLAWSINO_TOKEN` over the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::new();
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            config = config.with_base_url(url);
        }
        if let Ok(token) = std::env::var(TOKEN_ENV) {
            config = config.with_token(token);
        }
        config
    }

    /// Override the base URL. Blank values are ignored.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        let trimmed = url.trim();
        if !trimmed.is_empty() {
            self.base_url = trimmed.to_string();
        }
        self
    }

    /// Set the session token. A blank token clears it.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        let trimmed = token.trim();
        self.token = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    pub fn without_token(mut self) -> Self {
        self.token = None;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
