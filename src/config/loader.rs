//! Configuration loading from disk.
//!
//! The document format is chosen by extension: `.toml` is TOML, anything else
//! is JSON.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::migration::{migrate, MigrationError};
use crate::config::schema::RoutingConfig;
use crate::config::validation::validate_config;

const APP_DIR: &str = "BrowserRouter";
const CONFIG_FILE: &str = "config.json";

/// Error type for configuration loading and saving.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML write error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error(transparent)]
    Migration(#[from] MigrationError),

    #[error("config has an empty defaultBrowser")]
    MissingDefaultTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Format::Toml,
            _ => Format::Json,
        }
    }
}

/// Default location of the routing document, e.g.
/// `~/Library/Application Support/BrowserRouter/config.json` on macOS.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Parse a document from a string in the given file's format.
pub fn parse_config(path: &Path, content: &str) -> Result<RoutingConfig, ConfigError> {
    let config: RoutingConfig = match Format::of(path) {
        Format::Json => serde_json::from_str(content)?,
        Format::Toml => toml::from_str(content)?,
    };

    let config = migrate(config)?;
    if config.default_target.trim().is_empty() {
        return Err(ConfigError::MissingDefaultTarget);
    }
    Ok(config)
}

/// Load, migrate and check a routing document.
///
/// Validation findings are logged, never returned: a flawed rule only stops
/// matching.
pub fn load_config(path: &Path) -> Result<RoutingConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config = parse_config(path, &content)?;

    for warning in validate_config(&config) {
        tracing::warn!(path = %path.display(), "{}", warning);
    }

    tracing::debug!(
        path = %path.display(),
        rules = config.rules.len(),
        default_target = %config.default_target,
        "Configuration loaded"
    );
    Ok(config)
}

/// Load the document, falling back to [`RoutingConfig::default`] when it is
/// missing or unusable. URLs must always be routable.
pub fn load_or_default(path: &Path) -> RoutingConfig {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config file, using defaults");
        return RoutingConfig::default();
    }

    match load_config(path) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(path = %path.display(), "Config load failed: {}. Using defaults.", e);
            RoutingConfig::default()
        }
    }
}

/// Write the document, creating its directory if needed.
pub fn save_config(path: &Path, config: &RoutingConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let content = match Format::of(path) {
        Format::Json => serde_json::to_string_pretty(config)?,
        Format::Toml => toml::to_string_pretty(config)?,
    };
    fs::write(path, content)?;

    tracing::info!(path = %path.display(), rules = config.rules.len(), "Configuration saved");
    Ok(())
}
