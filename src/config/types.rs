use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::Delays;

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub data: DataConfig,
}

/// Render loop settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Milliseconds between ticks (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Simulated backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Optional TOML file replacing the built-in browsing catalog.
    #[serde(default)]
    pub catalog_file: Option<PathBuf>,
    /// Artificial latency for catalog loads in milliseconds (default: 1000).
    #[serde(default = "default_catalog_delay_ms")]
    pub catalog_delay_ms: u64,
    /// Artificial latency for the home dashboard (default: 500).
    #[serde(default = "default_dashboard_delay_ms")]
    pub dashboard_delay_ms: u64,
    /// Artificial latency for sign-in submissions (default: 1000).
    #[serde(default = "default_login_delay_ms")]
    pub login_delay_ms: u64,
    /// Artificial latency for registration submissions (default: 1500).
    #[serde(default = "default_register_delay_ms")]
    pub register_delay_ms: u64,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_catalog_delay_ms() -> u64 {
    1000
}

fn default_dashboard_delay_ms() -> u64 {
    500
}

fn default_login_delay_ms() -> u64 {
    1000
}

fn default_register_delay_ms() -> u64 {
    1500
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            catalog_file: None,
            catalog_delay_ms: default_catalog_delay_ms(),
            dashboard_delay_ms: default_dashboard_delay_ms(),
            login_delay_ms: default_login_delay_ms(),
            register_delay_ms: default_register_delay_ms(),
        }
    }
}

impl DataConfig {
    pub fn delays(&self) -> Delays {
        Delays {
            catalog_ms: self.catalog_delay_ms,
            dashboard_ms: self.dashboard_delay_ms,
            login_ms: self.login_delay_ms,
            register_ms: self.register_delay_ms,
        }
    }
}
