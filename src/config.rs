//! Loading of the optional TOML config file.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

pub use types::{Config, TypeaheadConfig};

use crate::error::{Result, TypeaheadError};

const CONFIG_DIR: &str = "typeahead";
const CONFIG_FILE: &str = "config.toml";

/// Loaded config plus a message to surface when the file was unusable
#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the user config, falling back to defaults
pub fn load_config() -> ConfigResult {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => ConfigResult::default(),
    }
}

/// Load config from `path`
///
/// A missing file is not an error. Unreadable or invalid files yield the
/// default config with a warning.
pub fn load_config_from_path(path: &Path) -> ConfigResult {
    if !path.exists() {
        return ConfigResult::default();
    }

    match read_config(path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("Using default config: {}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(e.to_string()),
            }
        }
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    parse_config(&contents, path)
}

pub fn parse_config(content: &str, path: &Path) -> Result<Config> {
    toml::from_str(content).map_err(|e| TypeaheadError::InvalidConfig {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })
}
