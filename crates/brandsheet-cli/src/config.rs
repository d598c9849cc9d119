//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use brandsheet::{BrandsheetError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {}", .0.display())]
    MissingFile(PathBuf),
}

impl From<ConfigError> for BrandsheetError {
    fn from(err: ConfigError) -> Self {
        BrandsheetError::Io(std::io::Error::other(err.to_string()))
    }
}

const LOCAL_CONFIG: &str = "brandsheet/config.toml";

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (brandsheet/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, BrandsheetError> {
    let system_config = system_config_path();
    if system_config.is_none() {
        debug!("Could not determine platform-specific config directory");
    }
    search_config(
        explicit_path.as_ref().map(|path| -> &Path { path.as_ref() }),
        Path::new(LOCAL_CONFIG),
        system_config.as_deref(),
    )
}

/// Returns `config.toml` inside the platform config directory for brandsheet.
fn system_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "hiic", "brandsheet")
        .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
}

/// Loads the first configuration found among the candidate locations.
fn search_config(
    explicit: Option<&Path>,
    local: &Path,
    system: Option<&Path>,
) -> Result<AppConfig, BrandsheetError> {
    if let Some(path) = explicit {
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    if local.exists() {
        info!(path = local.display().to_string(); "Loading configuration from local path");
        return load_config_file(local);
    }

    if let Some(system) = system {
        if system.exists() {
            info!(path = system.display().to_string(); "Loading configuration from system path");
            return load_config_file(system);
        }
        debug!(path = system.display().to_string(); "System configuration file not found");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if:
/// - File doesn't exist
/// - File cannot be read
/// - TOML parsing fails
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, BrandsheetError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    Ok(config)
}
