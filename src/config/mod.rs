//! Read-only display configuration for reports.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::currency::{CurrencyCode, LocaleConfig};
use crate::errors::FinanceResult;

/// Environment variable that overrides the configuration file location.
pub const CONFIG_PATH_ENV: &str = "FINANCE_CORE_CONFIG";

const APP_DIR: &str = "finance_core";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub locale: String,
    pub currency: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
        }
    }
}

impl Config {
    pub fn currency_code(&self) -> CurrencyCode {
        CurrencyCode::new(&self.currency)
    }

    pub fn locale_config(&self) -> LocaleConfig {
        LocaleConfig::for_tag(&self.locale)
    }
}

/// Locates and loads [`Config`]. Never writes to disk.
pub struct ConfigManager {
    path: Option<PathBuf>,
}

impl ConfigManager {
    /// Uses `FINANCE_CORE_CONFIG` when set, otherwise the platform config
    /// directory. Without a resolvable directory only defaults are served.
    pub fn new() -> Self {
        let path = env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE)));
        Self { path }
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Reads the configuration file, or returns defaults when it is absent.
    /// Missing keys fall back to their defaults individually.
    pub fn load(&self) -> FinanceResult<Config> {
        match self.path.as_deref() {
            Some(path) if path.exists() => {
                let data = fs::read_to_string(path)?;
                let config: Config = serde_json::from_str(&data)?;
                tracing::debug!(path = %path.display(), ?config, "loaded configuration");
                Ok(config)
            }
            _ => Ok(Config::default()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
