//! Service configuration
//!
//! Loaded from an optional `itemsrv.toml` plus `ITEMSRV_`-prefixed
//! environment variables (nested keys separated by `__`, e.g.
//! `ITEMSRV_API__PORT=6005`). Environment variables win over the file.

use crate::error::{ItemSrvError, Result};
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default API bind host (listen on all interfaces)
pub const DEFAULT_API_HOST: &str = "0.0.0.0";

/// Default API port
pub const DEFAULT_API_PORT: u16 = 6005;

/// Default SQLite database path
pub const DEFAULT_DB_PATH: &str = "data/items.db";

/// Default static asset directory (holds the UI page)
pub const DEFAULT_ASSETS_DIR: &str = "static";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_API_HOST.to_string(),
            port: DEFAULT_API_PORT,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite database file; parent directories are created on connect
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_DB_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directory the UI page is served from
    pub dir: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: DEFAULT_ASSETS_DIR.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Top-level service configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ItemsrvConfig {
    pub api: ApiConfig,
    pub database: DatabaseConfig,
    pub assets: AssetsConfig,
    pub log: LogConfig,
}

impl ItemsrvConfig {
    /// Load configuration from the default sources.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (`ITEMSRV_` prefix)
    /// 2. `itemsrv.toml` in the working directory
    /// 3. Default values
    pub fn load() -> Result<Self> {
        Figment::new()
            .merge(Toml::file("itemsrv.toml"))
            .merge(Env::prefixed("ITEMSRV_").split("__"))
            .extract()
            .map_err(|e| ItemSrvError::Config(format!("failed to load configuration: {}", e)))
    }

    /// Load configuration from a specific TOML file, with env overrides
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ItemSrvError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed("ITEMSRV_").split("__"))
            .extract()
            .map_err(|e| ItemSrvError::Config(format!("failed to load configuration: {}", e)))
    }

    /// Reject configurations the service cannot start with
    pub fn validate(&self) -> Result<()> {
        if self.api.host.is_empty() {
            return Err(ItemSrvError::Config("api.host must not be empty".to_string()));
        }
        if self.database.path.is_empty() {
            return Err(ItemSrvError::Config(
                "database.path must not be empty".to_string(),
            ));
        }
        if self.assets.dir.is_empty() {
            return Err(ItemSrvError::Config(
                "assets.dir must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
