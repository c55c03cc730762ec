//! Workspace config file source: .dirsettings/config.toml under the workspace root

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::{Path, PathBuf};

/// Path to the workspace config file.
pub fn workspace_config_path(workspace_root: &Path) -> PathBuf {
    workspace_root.join(".dirsettings").join("config.toml")
}

/// Add the workspace config file to builder if present.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let path = workspace_config_path(workspace_root);
    if !path.is_file() {
        return Ok(builder);
    }
    Ok(builder.add_source(File::from(path).required(false)))
}
