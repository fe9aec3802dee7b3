use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "dictrie";
const CONFIG_FILE: &str = "config.json";

/// Environment variable that points at an alternative config file
pub const CONFIG_ENV: &str = "DICTRIE_CONFIG";

/// User configuration stored in the app config directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Word that ends an interactive query session
    #[serde(default = "default_sentinel")]
    pub sentinel: String,

    /// Allow colored output on terminals
    #[serde(default = "default_color")]
    pub color: bool,

    /// Log filter used when neither `DICTRIE_LOG` nor `-v` is given
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_sentinel() -> String {
    crate::query::DEFAULT_SENTINEL.to_string()
}

fn default_color() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sentinel: default_sentinel(),
            color: default_color(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load config from `DICTRIE_CONFIG` or the app config directory, or
    /// return the default if there is none
    pub fn load() -> Result<Self> {
        match get_config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from a specific file; a missing file yields the default
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Save config to a specific file, creating its directory
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        let content = serde_json::to_string_pretty(self)
            .context("Failed to serialize config")?;
        fs::write(path, content)
            .context("Failed to write config file")?;
        Ok(())
    }
}

/// Get the path to the config file, if one can be determined
pub fn get_config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    get_app_config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Get the application config directory
pub fn get_app_config_dir() -> Option<PathBuf> {
    let base = if cfg!(target_os = "macos") {
        dirs::home_dir()
            .map(|h| h.join("Library").join("Application Support"))
    } else {
        // Linux/Unix: XDG_CONFIG_HOME or ~/.config; Windows: roaming AppData
        dirs::config_dir()
    };

    base.map(|b| b.join(APP_NAME))
}
