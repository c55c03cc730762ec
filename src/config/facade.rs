//! Config loading entry points.

use crate::config::merge::merge_policy;
use crate::config::sources::{global_file, workspace_file};
use crate::config::DirSettingsConfig;
use crate::error::SettingsError;
use config::{Environment, File};
use std::path::Path;

/// Environment prefix for configuration overrides, e.g. `DIRSETTINGS__LOGGING__LEVEL`.
pub const ENV_PREFIX: &str = "DIRSETTINGS";

/// Loads `DirSettingsConfig` from its layered sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    ///
    /// Precedence (lowest to highest): defaults, global file, workspace file, environment.
    pub fn load(workspace_root: &Path) -> Result<DirSettingsConfig, SettingsError> {
        Self::load_with_global(workspace_root, global_file::global_config_path().as_deref())
    }

    /// Load configuration with an explicit global config file location.
    pub fn load_with_global(
        workspace_root: &Path,
        global_config: Option<&Path>,
    ) -> Result<DirSettingsConfig, SettingsError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder, global_config)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = builder.add_source(Self::environment());
        Self::finish(builder.build()?)
    }

    /// Load configuration from a single file, over defaults and under the environment.
    pub fn load_from_file(path: &Path) -> Result<DirSettingsConfig, SettingsError> {
        if !path.is_file() {
            return Err(SettingsError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let builder = merge_policy::builder_with_defaults()?
            .add_source(File::from(path))
            .add_source(Self::environment());
        Self::finish(builder.build()?)
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
    }

    fn finish(config: config::Config) -> Result<DirSettingsConfig, SettingsError> {
        let config: DirSettingsConfig = config.try_deserialize()?;
        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            SettingsError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;
        Ok(config)
    }
}
