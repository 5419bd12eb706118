// Configuration module for bracket-colorizer
// Loads ~/.config/bracket-colorizer/config.toml and validates it into Settings

mod settings;
mod types;

pub use settings::{BracketPairRule, BracketRole, QUOTE_CHARS, Settings, SettingsResult};
pub use types::{
    ColorMode, ColorizerConfig, Config, ConsecutivePairsConfig, DEFAULT_COLORS,
    DEFAULT_ORPHAN_COLOR, DEFAULT_PAIRS, DEFAULT_TIME_OUT_MS, IndependentPairConfig,
};

use std::fs;
use std::path::{Path, PathBuf};

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/bracket-colorizer/config.toml
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config() -> ConfigResult {
    let config_path = get_config_path();

    // A missing default file is the normal case, not worth a warning
    if !config_path.exists() {
        log::debug!("Config file {:?} does not exist, using defaults", config_path);
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    load_config_from(&config_path)
}

/// Loads configuration from an explicit path
pub fn load_config_from(config_path: &Path) -> ConfigResult {
    log::debug!("Loading config from {:?}", config_path);

    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => {
            log::debug!("Config file read successfully, {} bytes", contents.len());
            contents
        }
        Err(e) => {
            log::error!("Failed to read config file {:?}: {}", config_path, e);
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config: {}", e)),
            };
        }
    };

    parse_config(&contents)
}

/// Parses TOML text, falling back to defaults on error
pub fn parse_config(contents: &str) -> ConfigResult {
    match toml::from_str::<Config>(contents) {
        Ok(config) => {
            log::debug!(
                "Config parsed successfully: mode {:?}",
                config.colorizer.color_mode
            );
            ConfigResult {
                config,
                warning: None,
            }
        }
        Err(e) => {
            log::error!("Failed to parse config: {}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config: {}", e)),
            }
        }
    }
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/bracket-colorizer/config.toml on all platforms for consistency.
fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("bracket-colorizer")
        .join("config.toml")
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
