//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Columns per unit of `width_scale`.
pub const COLUMNS_PER_SCALE: f64 = 40.0;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A setting parsed but is out of range.
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue {
        /// Config key.
        key: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/tabjump/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Popup width multiplier; the popup is `width_scale * 40` columns wide.
    #[serde(default)]
    pub width_scale: Option<f64>,

    /// Show the key help line under the list.
    #[serde(default)]
    pub show_help: Option<bool>,

    /// Text pre-filled into the search box.
    #[serde(default)]
    pub initial_query: Option<String>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Popup width multiplier.
    pub width_scale: f64,
    /// Show the key help line.
    pub show_help: bool,
    /// Initial search text (empty for none).
    pub initial_query: String,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            width_scale: 2.0,
            show_help: true,
            initial_query: String::new(),
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Check ranges that TOML types cannot express.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `width_scale` is not a positive
    /// finite number.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.width_scale.is_finite() || self.width_scale <= 0.0 {
            return Err(ConfigError::InvalidValue {
                key: "width_scale",
                reason: format!("must be a positive number, got {}", self.width_scale),
            });
        }
        Ok(())
    }

    /// Popup width in columns for a terminal `terminal_width` columns wide.
    ///
    /// Never wider than the terminal, never narrower than one column.
    pub fn popup_columns(&self, terminal_width: u16) -> u16 {
        let wanted = (self.width_scale * COLUMNS_PER_SCALE).round();
        let wanted = if wanted >= f64::from(u16::MAX) {
            u16::MAX
        } else {
            wanted.max(1.0) as u16
        };
        wanted.min(terminal_width).max(1)
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/tabjump/tabjump.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("tabjump").join("tabjump.log")
    } else {
        PathBuf::from("tabjump.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/tabjump/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tabjump").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `TABJUMP_CONFIG` environment variable
/// 3. Default path `~/.config/tabjump/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("TABJUMP_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        width_scale: config.width_scale.unwrap_or(defaults.width_scale),
        show_help: config.show_help.unwrap_or(defaults.show_help),
        initial_query: config.initial_query.unwrap_or(defaults.initial_query),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `TABJUMP_WIDTH_SCALE`: Override popup width multiplier
///
/// Unparseable values are logged and ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var("TABJUMP_WIDTH_SCALE") {
        match raw.trim().parse::<f64>() {
            Ok(scale) => config.width_scale = scale,
            Err(e) => warn!(value = %raw, error = %e, "Ignoring TABJUMP_WIDTH_SCALE"),
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    width_scale_override: Option<f64>,
    query_override: Option<String>,
) -> ResolvedConfig {
    if let Some(scale) = width_scale_override {
        config.width_scale = scale;
    }

    if let Some(query) = query_override {
        config.initial_query = query;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
