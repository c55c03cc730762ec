//! Configuration System
//!
//! Configuration for the dirsettings tool itself (not the settings files it
//! resolves). Layered from built-in defaults, the global config file, the workspace
//! config file, and `DIRSETTINGS__`-prefixed environment variables.

use crate::layers::{SettingsFileNames, GENERIC_SETTINGS_NAME, SETTINGS_EXTENSION};
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;
pub use sources::workspace_file::workspace_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirSettingsConfig {
    /// Settings file naming and defaults
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How settings files are named and where user defaults live
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Stem of the generic settings file
    #[serde(default = "default_generic_name")]
    pub generic_name: String,

    /// Extension of every settings file
    #[serde(default = "default_extension")]
    pub extension: String,

    /// User defaults copied by `create`; defaults to the platform config directory
    #[serde(default)]
    pub user_defaults: Option<PathBuf>,
}

fn default_generic_name() -> String {
    GENERIC_SETTINGS_NAME.to_string()
}

fn default_extension() -> String {
    SETTINGS_EXTENSION.to_string()
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            generic_name: default_generic_name(),
            extension: default_extension(),
            user_defaults: None,
        }
    }
}

impl ResolverConfig {
    pub fn file_names(&self) -> SettingsFileNames {
        SettingsFileNames {
            generic_name: self.generic_name.clone(),
            extension: self.extension.clone(),
        }
    }

    /// Configured user defaults file, or the platform default location.
    pub fn user_defaults_path(&self) -> Option<PathBuf> {
        self.user_defaults.clone().or_else(|| {
            directories::ProjectDirs::from("", "", "dirsettings").map(|dirs| {
                dirs.config_dir()
                    .join(format!("{}.{}", self.generic_name, self.extension))
            })
        })
    }

    /// Validate resolver configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.generic_name.trim().is_empty() {
            return Err("Generic settings name cannot be empty".to_string());
        }
        if self.extension.trim().is_empty() {
            return Err("Settings extension cannot be empty".to_string());
        }
        if self.generic_name.contains(['/', '\\']) || self.extension.contains(['/', '\\']) {
            return Err("Settings file names cannot contain path separators".to_string());
        }
        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Resolver(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Resolver(msg) => write!(f, "Resolver: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl DirSettingsConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.resolver.validate() {
            errors.push(ValidationError::Resolver(e));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
