//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (later overrides earlier)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     CALC_GROUPING_SEPARATOR=.   CALC_DECIMAL_SEPARATOR=,               │
//! │     CALC_GROUP_SIZE=3           CALC_LOG_FILTER=debug                  │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     $CALC_CONFIG_PATH, or                                              │
//! │     ~/.config/calc/calc.toml (Linux)                                   │
//! │     ~/Library/Application Support/com.calc.desktop/calc.toml (macOS)   │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     en-US separators, "info,calc=debug"                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! Keys use the same camelCase names the frontend receives from `get_config`.
//! ```toml
//! logFilter = "info,calc=debug"
//!
//! [display]
//! groupingSeparator = "."
//! decimalSeparator = ","
//! groupSize = 3
//! ```
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::PathBuf;

use calc_core::DisplayOptions;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{ConfigError, ConfigResult};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "CALC_CONFIG_PATH";

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "calc.toml";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigState {
    /// How operands are rendered in the output rows.
    pub display: DisplayOptions,

    /// `tracing-subscriber` filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for ConfigState {
    /// Returns default configuration.
    ///
    /// ## Default Values
    /// - Separators: `,` for thousands, `.` for decimals (en-US)
    /// - Logging: `info`, with `debug` for the calc crates
    fn default() -> Self {
        ConfigState {
            display: DisplayOptions::default(),
            log_filter: "info,calc=debug".to_string(),
        }
    }
}

impl ConfigState {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`calc.toml`)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// [`load`](Self::load) with an injectable environment lookup.
    pub fn load_with<F>(config_path: Option<PathBuf>, env: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let path = config_path
            .or_else(|| env(CONFIG_PATH_ENV).map(PathBuf::from))
            .or_else(Self::default_config_path);

        if let Some(path) = path {
            if path.exists() {
                info!(?path, "Loading config from file");
                let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
                    path: path.clone(),
                    source,
                })?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(env);
        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// ## Rules
    /// - Grouping and decimal separators must differ
    /// - Neither separator may be a digit or a minus sign
    pub fn validate(&self) -> ConfigResult<()> {
        let DisplayOptions {
            grouping_separator,
            decimal_separator,
            ..
        } = self.display;

        if grouping_separator == decimal_separator {
            return Err(ConfigError::Invalid(format!(
                "grouping and decimal separators are both '{}'",
                grouping_separator
            )));
        }

        for (name, separator) in [
            ("groupingSeparator", grouping_separator),
            ("decimalSeparator", decimal_separator),
        ] {
            if separator.is_ascii_digit() || separator == '-' {
                return Err(ConfigError::Invalid(format!(
                    "{} cannot be '{}'",
                    name, separator
                )));
            }
        }

        Ok(())
    }

    /// Applies `CALC_*` overrides from the given lookup.
    fn apply_overrides<F>(&mut self, env: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = env("CALC_GROUPING_SEPARATOR") {
            match single_char(&value) {
                Some(c) => self.display.grouping_separator = c,
                None => warn!(value = %value, "CALC_GROUPING_SEPARATOR must be one character"),
            }
        }

        if let Some(value) = env("CALC_DECIMAL_SEPARATOR") {
            match single_char(&value) {
                Some(c) => self.display.decimal_separator = c,
                None => warn!(value = %value, "CALC_DECIMAL_SEPARATOR must be one character"),
            }
        }

        if let Some(value) = env("CALC_GROUP_SIZE") {
            match value.trim().parse::<usize>() {
                Ok(size) => {
                    debug!(group_size = size, "Overriding group size from environment");
                    self.display.group_size = size;
                }
                Err(_) => warn!(value = %value, "CALC_GROUP_SIZE is not a number"),
            }
        }

        if let Some(filter) = env("CALC_LOG_FILTER") {
            self.log_filter = filter;
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "calc", "desktop")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}

fn single_char(value: &str) -> Option<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
