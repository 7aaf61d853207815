//! Construction-time adapter settings.

use std::time::Duration;

/// Timeout for cloud vendors when none is configured.
pub const DEFAULT_CLOUD_TIMEOUT: Duration = Duration::from_secs(30);

/// Timeout for local runtimes when none is configured.
pub const DEFAULT_LOCAL_TIMEOUT: Duration = Duration::from_secs(60);

/// Timeout for `is_available` probes.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Overrides read once when an adapter is built.
///
/// Unset fields fall back to the adapter's own defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderSettings {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub default_model: Option<String>,
    pub timeout: Option<Duration>,
    pub rate_limit_per_minute: Option<u32>,
}

impl ProviderSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = Some(model.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_rate_limit(mut self, per_minute: u32) -> Self {
        self.rate_limit_per_minute = Some(per_minute);
        self
    }

    /// API key, ignoring blank values.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().map(str::trim).filter(|k| !k.is_empty())
    }

    /// Base URL or `default`, without a trailing slash.
    pub fn base_url_or(&self, default: &str) -> String {
        self.base_url
            .as_deref()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or(default)
            .trim_end_matches('/')
            .to_string()
    }
}
