//! Configuration types and loading.
//!
//! Config is loaded from a JSON file (e.g. `~/.supportagent/config.json`) and
//! environment. Covers the demo server (bind, port, typing simulation) and the
//! upstream SupportAgent API (base URL, demo user id, request timeout).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level application config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Demo server settings.
    #[serde(default)]
    pub demo: DemoConfig,

    /// Upstream SupportAgent API settings.
    #[serde(default)]
    pub api: ApiConfig,
}

/// Demo server bind, port, and typing simulation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoConfig {
    /// Port for the demo HTTP server (default 8090).
    #[serde(default = "default_demo_port")]
    pub port: u16,

    /// Bind address (default "127.0.0.1").
    #[serde(default = "default_demo_bind")]
    pub bind: String,

    /// When true (default), reply handlers sleep a randomized interval so the
    /// page's typing indicator looks like a human-ish agent. Tests turn this
    /// off.
    #[serde(default = "default_simulate_typing")]
    pub simulate_typing: bool,
}

fn default_demo_port() -> u16 {
    8090
}

fn default_demo_bind() -> String {
    "127.0.0.1".to_string()
}

fn default_simulate_typing() -> bool {
    true
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            port: default_demo_port(),
            bind: default_demo_bind(),
            simulate_typing: default_simulate_typing(),
        }
    }
}

/// Upstream SupportAgent API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfig {
    /// Base URL of the SupportAgent API (default "http://localhost:8080").
    /// Overridden by SUPPORTAGENT_API_URL when set.
    #[serde(default = "default_api_base_url")]
    pub base_url: String,

    /// User id sent with agent queries. The demo is single-user; the seeded
    /// demo account is id 3.
    #[serde(default = "default_api_user_id")]
    pub user_id: u64,

    /// Per-request timeout in seconds (default 10).
    #[serde(default = "default_api_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_api_user_id() -> u64 {
    3
}

fn default_api_timeout_secs() -> u64 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
            user_id: default_api_user_id(),
            timeout_secs: default_api_timeout_secs(),
        }
    }
}

/// Resolve the API base URL: env SUPPORTAGENT_API_URL overrides config.
/// Trailing slashes are stripped so joining paths stays predictable.
pub fn resolve_api_base_url(config: &Config) -> String {
    std::env::var("SUPPORTAGENT_API_URL")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| config.api.base_url.trim().to_string())
        .trim_end_matches('/')
        .to_string()
}

/// True if the bind address is loopback (127.0.0.1, ::1, etc.).
pub fn is_loopback_bind(bind: &str) -> bool {
    let b = bind.trim();
    b == "127.0.0.1" || b == "::1" || b == "localhost"
}

/// Resolve config path from env or default.
pub fn default_config_path() -> PathBuf {
    std::env::var("SUPPORTAGENT_CONFIG_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            dirs::home_dir()
                .map(|h| h.join(".supportagent").join("config.json"))
                .unwrap_or_else(|| PathBuf::from("config.json"))
        })
}

/// Load config from the default path (or SUPPORTAGENT_CONFIG_PATH). Missing
/// file => default config. Returns the config and the path that was used.
pub fn load_config(path: Option<PathBuf>) -> Result<(Config, PathBuf)> {
    let path = path.unwrap_or_else(default_config_path);
    let config = if !path.exists() {
        log::debug!("config file not found, using defaults: {}", path.display());
        Config::default()
    } else {
        let s = std::fs::read_to_string(&path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        serde_json::from_str(&s)
            .with_context(|| format!("parsing config from {}", path.display()))?
    };
    Ok((config, path))
}
