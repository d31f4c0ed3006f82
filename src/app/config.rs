use anyhow::{Context, Result};
use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::constants::{
    APP_NAME, DEFAULT_STORAGE_FILE, DEFAULT_SUBMIT_LATENCY_MS, ENV_PREFIX, LOCAL_CONFIG_PATH,
};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Where signups are persisted
    #[serde(default)]
    pub storage: StorageConfig,

    /// Submission flow settings
    #[serde(default)]
    pub submission: SubmissionConfig,

    /// UI configuration
    #[serde(default)]
    pub ui: UIConfig,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Data directory (defaults to the platform data dir)
    pub data_dir: Option<PathBuf>,
    /// Storage file name inside the data directory
    pub file_name: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            file_name: DEFAULT_STORAGE_FILE.to_string(),
        }
    }
}

impl StorageConfig {
    /// Resolve the full path of the storage file
    pub fn storage_path(&self) -> Result<PathBuf> {
        let dir = match &self.data_dir {
            Some(dir) => dir.clone(),
            None => get_data_dir()?,
        };
        Ok(dir.join(&self.file_name))
    }
}

/// Submission configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionConfig {
    /// Simulated round-trip before enrolling, in milliseconds
    pub latency_ms: u64,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            latency_ms: DEFAULT_SUBMIT_LATENCY_MS,
        }
    }
}

impl SubmissionConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UIConfig {
    /// Visual variant (midnight, paper, aurora, terminal)
    pub variant: String,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            variant: "midnight".to_string(),
        }
    }
}

/// Load configuration from multiple sources
pub fn load_config() -> Result<Config> {
    let global_config = get_config_dir()?.join("config.toml");
    let local_config = PathBuf::from(LOCAL_CONFIG_PATH);

    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    if global_config.exists() {
        debug!("Using global config {}", global_config.display());
        figment = figment.merge(Toml::file(&global_config));
    }

    if local_config.exists() {
        debug!("Using local config {}", local_config.display());
        figment = figment.merge(Toml::file(&local_config));
    }

    extract(figment)
}

/// Load configuration from an explicit file, still honoring env overrides
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        anyhow::bail!("Config file not found: {}", path.display());
    }

    let figment = Figment::from(Serialized::defaults(Config::default())).merge(Toml::file(path));
    extract(figment)
}

fn extract(figment: Figment) -> Result<Config> {
    // WAITLIST_SUBMISSION__LATENCY_MS=0 -> submission.latency_ms
    figment
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .context("Failed to load configuration")
}

/// Get the configuration directory
pub fn get_config_dir() -> Result<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from("", "", APP_NAME) {
        Ok(proj_dirs.config_dir().to_path_buf())
    } else {
        Ok(home_dir()?.join(".config").join(APP_NAME))
    }
}

/// Get the default data directory
pub fn get_data_dir() -> Result<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from("", "", APP_NAME) {
        Ok(proj_dirs.data_dir().to_path_buf())
    } else {
        Ok(home_dir()?.join(".local").join("share").join(APP_NAME))
    }
}

fn home_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .context("Could not determine home directory")?;
    Ok(PathBuf::from(home))
}

/// Save configuration to file
pub fn save_config(config: &Config, path: Option<PathBuf>) -> Result<()> {
    let path = if let Some(p) = path {
        p
    } else {
        get_config_dir()?.join("config.toml")
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml_string = toml::to_string_pretty(config)?;
    std::fs::write(&path, toml_string)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;

    Ok(())
}

/// Create a default configuration file if it doesn't exist.
///
/// Returns the config path and whether it was newly written.
pub fn init_config() -> Result<(PathBuf, bool)> {
    let config_file = get_config_dir()?.join("config.toml");

    if config_file.exists() {
        return Ok((config_file, false));
    }

    save_config(&Config::default(), Some(config_file.clone()))?;
    Ok((config_file, true))
}
