//! Creating a directory's generic settings file
//!
//! Backs the `dirsettings create` command: seeds `Preferences.settings` next to a
//! file, either copied from the user's defaults file or from a small built-in set.

use crate::error::SettingsError;
use crate::layers::SettingsFileNames;
use crate::walk::file_parent;
use serde::Serialize;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// First line written into a settings file created from the built-in defaults
pub const DEFAULT_SETTINGS_HEADER: &str = "// Default settings copied by dirsettings";

/// Built-in settings used when no user defaults file exists
pub fn default_settings() -> serde_json::Value {
    json!({
        "font_size": 12,
        "tab_size": 4,
        "translate_tabs_to_spaces": true
    })
}

/// Outcome of creating a directory's generic settings file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CreateOutcome {
    /// A settings file was already present; nothing was written.
    AlreadyExists { path: PathBuf },
    /// The user defaults file was copied verbatim.
    Copied { path: PathBuf, from: PathBuf },
    /// The built-in defaults were written.
    CreatedDefault { path: PathBuf },
}

impl CreateOutcome {
    pub fn path(&self) -> &Path {
        match self {
            CreateOutcome::AlreadyExists { path }
            | CreateOutcome::Copied { path, .. }
            | CreateOutcome::CreatedDefault { path } => path,
        }
    }
}

/// Create the generic settings file in the directory containing `file`.
///
/// An existing settings file is never overwritten.
pub fn create_preferences_file(
    file: &Path,
    user_defaults: Option<&Path>,
    names: &SettingsFileNames,
) -> Result<CreateOutcome, SettingsError> {
    if file.as_os_str().is_empty() {
        return Err(SettingsError::NoFilePath);
    }
    let directory =
        file_parent(file)?.ok_or_else(|| SettingsError::NoDirectory(file.to_path_buf()))?;
    let path = names.generic_file(&directory);

    if path.exists() {
        return Ok(CreateOutcome::AlreadyExists { path });
    }

    if let Some(from) = user_defaults.filter(|p| p.is_file()) {
        fs::copy(from, &path)?;
        info!(path = %path.display(), from = %from.display(), "Copied user settings");
        return Ok(CreateOutcome::Copied {
            path,
            from: from.to_path_buf(),
        });
    }

    fs::write(&path, render_default_settings()?)?;
    info!(path = %path.display(), "Created default settings");
    Ok(CreateOutcome::CreatedDefault { path })
}

fn render_default_settings() -> Result<String, SettingsError> {
    let mut body = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut body, formatter);
    default_settings().serialize(&mut serializer)?;
    Ok(format!(
        "{}\n{}\n",
        DEFAULT_SETTINGS_HEADER,
        String::from_utf8_lossy(&body)
    ))
}
