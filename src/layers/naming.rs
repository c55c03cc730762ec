//! Settings file naming: which files are candidates in a directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Stem of the catch-all settings file present in any directory.
pub const GENERIC_SETTINGS_NAME: &str = "Preferences";

/// Extension shared by every settings file.
pub const SETTINGS_EXTENSION: &str = "settings";

/// Names of the candidate settings files looked up in each directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsFileNames {
    pub generic_name: String,
    pub extension: String,
}

impl Default for SettingsFileNames {
    fn default() -> Self {
        Self {
            generic_name: GENERIC_SETTINGS_NAME.to_string(),
            extension: SETTINGS_EXTENSION.to_string(),
        }
    }
}

impl SettingsFileNames {
    /// `<dir>/Preferences.settings`
    pub fn generic_file(&self, dir: &Path) -> PathBuf {
        dir.join(format!("{}.{}", self.generic_name, self.extension))
    }

    /// `<dir>/<syntax>.settings`, or `None` when the syntax is unknown.
    pub fn syntax_file(&self, dir: &Path, syntax: &str) -> Option<PathBuf> {
        if syntax.is_empty() {
            return None;
        }
        Some(dir.join(format!("{}.{}", syntax, self.extension)))
    }

    /// Candidate files for one directory in merge order: lowest precedence first.
    pub fn candidates(&self, dir: &Path, syntax: &str) -> Vec<PathBuf> {
        let mut files = vec![self.generic_file(dir)];
        files.extend(self.syntax_file(dir, syntax));
        files
    }
}

/// Syntax identifier derived from a syntax descriptor path.
///
/// `Packages/Python/Python.sublime-syntax` becomes `Python`. An empty descriptor
/// gives an empty identifier, which disables the syntax-specific lookup.
pub fn syntax_name(descriptor: &str) -> String {
    Path::new(descriptor)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
