//! Configuration loading functionality
//!
//! This module contains functions for locating, loading and validating
//! configuration.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use log::{debug, info};
use serde_yaml::from_str;

use crate::constants::CONFIG_FILE_NAME;
use crate::utils::find_project_folder;

use super::model::Config;

/// Loads a configuration from a file
///
/// # Arguments
/// * `file` - Path to the configuration file
///
/// # Returns
/// * `Result<Config>` - The loaded configuration or an error
///
/// # Errors
/// Returns an error if the file cannot be read or if the configuration is invalid
pub fn load_config(file: &Path) -> Result<Config> {
    let content_str = fs::read_to_string(file).map_err(|e| {
        anyhow!(
            "Failed to read configuration file {}: {}",
            file.display(),
            e
        )
    })?;

    let mut config: Config = if content_str.trim().is_empty() {
        Config::default()
    } else {
        from_str(&content_str).map_err(|e| {
            anyhow!(
                "Failed to parse configuration file {}: {}\nPlease check the YAML syntax.",
                file.display(),
                e
            )
        })?
    };

    config.base_dir = file
        .parent()
        .map(|parent| parent.to_path_buf())
        .filter(|parent| !parent.as_os_str().is_empty());

    config.validate()?;

    debug!("Loaded configuration from {}", file.display());

    Ok(config)
}

/// Locates the configuration file to use
///
/// An explicitly requested file has to exist. Otherwise `config.yaml` in
/// the platform configuration folder is used when present.
///
/// # Returns
/// * `Result<Option<PathBuf>>` - The file to load, or `None` for built-in defaults
pub fn find_config(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(anyhow!(
                "Configuration file {} does not exist",
                path.display()
            ));
        }
        return Ok(Some(path.to_path_buf()));
    }

    let candidate = find_project_folder()?.config_dir().join(CONFIG_FILE_NAME);
    if candidate.is_file() {
        info!("Using configuration file {}", candidate.display());
        Ok(Some(candidate))
    } else {
        debug!(
            "No configuration file at {}, using defaults",
            candidate.display()
        );
        Ok(None)
    }
}

/// Loads the configuration that applies to this run
///
/// Falls back to the built-in defaults when no file is found.
pub fn load_or_default(explicit: Option<&Path>) -> Result<Config> {
    match find_config(explicit)? {
        Some(path) => load_config(&path),
        None => Ok(Config::default()),
    }
}
