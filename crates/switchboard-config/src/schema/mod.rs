//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

mod providers;

pub use providers::*;

pub(crate) fn default_true() -> bool {
    true
}

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub proxy: ProxyConfig,

    #[serde(default)]
    pub orchestrator: OrchestratorConfig,

    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Rate limiter settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProxyConfig {
    /// Sliding window length.
    #[serde(default = "default_window_seconds")]
    pub window_seconds: u64,

    /// How often idle limiter windows are dropped.
    #[serde(default = "default_sweep_interval_seconds")]
    pub sweep_interval_seconds: u64,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            window_seconds: default_window_seconds(),
            sweep_interval_seconds: default_sweep_interval_seconds(),
        }
    }
}

fn default_window_seconds() -> u64 {
    60
}

fn default_sweep_interval_seconds() -> u64 {
    300
}

/// Candidate ordering for automatic provider selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrchestratorConfig {
    #[serde(default = "default_cloud_priority")]
    pub cloud_priority: Vec<String>,

    #[serde(default = "default_local_priority")]
    pub local_priority: Vec<String>,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            cloud_priority: default_cloud_priority(),
            local_priority: default_local_priority(),
        }
    }
}

fn default_cloud_priority() -> Vec<String> {
    CLOUD_PROVIDERS.iter().map(|s| s.to_string()).collect()
}

fn default_local_priority() -> Vec<String> {
    LOCAL_PROVIDERS.iter().map(|s| s.to_string()).collect()
}

/// Per-provider overrides under `[providers.<id>]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_model: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit_per_minute: Option<u32>,

    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            default_model: None,
            timeout_seconds: None,
            rate_limit_per_minute: None,
            enabled: true,
        }
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
