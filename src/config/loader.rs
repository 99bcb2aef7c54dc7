//! Configuration file loading with precedence handling.

use crate::search::ApiConfig;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Default image API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://pixabay.com/api";

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

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// No API key in config file, `PIXSCROLL_API_KEY`, or `--api-key`.
    #[error(
        "No API key configured: set api_key in the config file, PIXSCROLL_API_KEY, or pass --api-key"
    )]
    MissingApiKey,
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/pixscroll/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Image API key.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Image API base URL.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Query submitted on startup.
    #[serde(default)]
    pub initial_query: Option<String>,

    /// Disable colors.
    #[serde(default)]
    pub no_color: Option<bool>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// API key, if any source provided one.
    pub api_key: Option<String>,
    /// Image API base URL.
    pub base_url: String,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Query submitted on startup.
    pub initial_query: Option<String>,
    /// Disable colors.
    pub no_color: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            log_file_path: default_log_path(),
            initial_query: None,
            no_color: false,
        }
    }
}

impl ResolvedConfig {
    /// Endpoint and credentials for the search client.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingApiKey` if no non-blank key was configured.
    pub fn api_config(&self) -> Result<ApiConfig, ConfigError> {
        let api_key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(ApiConfig {
            base_url: self.base_url.clone(),
            api_key: api_key.to_string(),
        })
    }
}

/// CLI-provided overrides. `None` means "not given on the command line".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// API key from `--api-key`.
    pub api_key: Option<String>,
    /// Base URL from `--base-url`.
    pub base_url: Option<String>,
    /// Positional search term.
    pub initial_query: Option<String>,
    /// `Some(true)` when `--no-color` was passed.
    pub no_color: Option<bool>,
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/pixscroll/pixscroll.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("pixscroll").join("pixscroll.log")
    } else {
        PathBuf::from("pixscroll.log")
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
/// Returns `~/.config/pixscroll/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pixscroll").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `PIXSCROLL_CONFIG` environment variable
/// 3. Default path `~/.config/pixscroll/config.toml`
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

    if let Ok(env_path) = std::env::var("PIXSCROLL_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        api_key: config.api_key.or(defaults.api_key),
        base_url: config.base_url.unwrap_or(defaults.base_url),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        initial_query: config.initial_query.or(defaults.initial_query),
        no_color: config.no_color.unwrap_or(defaults.no_color),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `PIXSCROLL_API_KEY`: Override API key
/// - `PIXSCROLL_BASE_URL`: Override API base URL
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(key) = std::env::var("PIXSCROLL_API_KEY") {
        config.api_key = Some(key);
    }

    if let Ok(base_url) = std::env::var("PIXSCROLL_BASE_URL") {
        config.base_url = base_url;
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for values that were explicitly given.
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(key) = cli.api_key {
        config.api_key = Some(key);
    }

    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }

    if let Some(query) = cli.initial_query {
        config.initial_query = Some(query);
    }

    if let Some(no_color) = cli.no_color {
        config.no_color = no_color;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
