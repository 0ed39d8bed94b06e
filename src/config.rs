//! Configuration management module
//!
//! YAML configuration for logging and action defaults.

use std::path::PathBuf;

use anyhow::{Context, Result};
use selection_actions::{ActionOptions, PointerOffset};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::{info, warn};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub actions: ActionsConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is not set
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Defaults applied to every selection built from this configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionsConfig {
    /// Pointer offset from the element centre used by double-click
    pub double_click_offset: Option<PointerOffset>,
}

impl ActionsConfig {
    pub fn to_options(&self) -> ActionOptions {
        ActionOptions {
            pointer_offset: self.double_click_offset,
        }
    }
}

pub struct LoadedConfig {
    pub config: Config,
    pub path: PathBuf,
}

/// Priority: ./config/selectkit.yaml > ~/.config/selectkit/config.yaml
pub fn default_config_path() -> Result<PathBuf> {
    let local_config = PathBuf::from("config/selectkit.yaml");
    if local_config.exists() {
        return Ok(local_config);
    }
    let mut path = dirs::config_dir().context("Failed to get config directory")?;
    path.push("selectkit");
    path.push("config.yaml");
    Ok(path)
}

pub async fn load_config(config_path: Option<&PathBuf>) -> Result<LoadedConfig> {
    let config_path = match config_path {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };

    if !config_path.exists() {
        warn!(
            "Config file not found, using defaults: {}",
            config_path.display()
        );
        return Ok(LoadedConfig {
            config: Config::default(),
            path: config_path,
        });
    }

    let content = fs::read_to_string(&config_path)
        .await
        .with_context(|| format!("Failed to read config file {}", config_path.display()))?;
    let config: Config = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", config_path.display()))?;

    info!("Loaded configuration from: {}", config_path.display());
    Ok(LoadedConfig {
        config,
        path: config_path,
    })
}
