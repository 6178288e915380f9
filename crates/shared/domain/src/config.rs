use crate::constants::{DEFAULT_API_BASE_URL, DEFAULT_REDIRECT_DELAY_MS, LANDING_ROUTE};
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Top-level client configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfigInner {
    pub api: ApiConfig,
    pub navigation: NavigationConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into front-ends and tasks.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ClientConfig {
    #[serde(flatten, default)]
    inner: Arc<ClientConfigInner>,
}

impl Deref for ClientConfig {
    type Target = ClientConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ClientConfig {
    fn deref_mut(&mut self) -> &mut ClientConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Notification service endpoint settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Scheme, host and port of the service, without the `/api/users` path.
    pub base_url: String,
    /// Optional request timeout. `None` lets a request run until it settles.
    pub timeout_ms: Option<u64>,
}

impl ApiConfig {
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

/// Post-submission navigation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub landing_route: String,
    pub redirect_delay_ms: u64,
}

impl NavigationConfig {
    #[must_use]
    pub const fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }
}

/// Logger settings consumed by the applications.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level (`error`, `warn`, `info`, `debug`, `trace`, `off`).
    pub level: String,
    /// Optional directive list overriding `RUST_LOG`.
    pub filter: Option<String>,
    /// Optional directory for rolling log files.
    pub directory: Option<PathBuf>,
}

// --- Default ---

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_owned(), timeout_ms: None }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self { landing_route: LANDING_ROUTE.to_owned(), redirect_delay_ms: DEFAULT_REDIRECT_DELAY_MS }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), filter: None, directory: None }
    }
}
