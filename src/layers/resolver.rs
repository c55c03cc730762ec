//! Layered resolution: walk from a file's directory to the root and merge each
//! directory's settings files, nearest directory winning.

use crate::error::PathError;
use crate::layers::decode::{JsoncDecoder, SettingsDecoder};
use crate::layers::loader::{load_source, SettingsFile};
use crate::layers::merge::merge;
use crate::layers::naming::SettingsFileNames;
use crate::layers::Settings;
use crate::walk::{ancestors, file_parent};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Settings contributed by a single directory
#[derive(Debug, Clone, Serialize)]
pub struct SettingsLayer {
    pub directory: PathBuf,
    /// Candidate files in merge order, lowest precedence first
    pub files: Vec<SettingsFile>,
    /// Combined settings for this directory
    pub settings: Settings,
}

/// Resolved settings together with the file each winning value came from
#[derive(Debug, Clone, Default, Serialize)]
pub struct Resolution {
    pub settings: Settings,
    pub origins: BTreeMap<String, PathBuf>,
}

/// Resolves the settings that apply to a file from the directories above it.
///
/// Holds no cache: every call reads the filesystem again.
pub struct LayeredSettingsLoader {
    names: SettingsFileNames,
    decoder: Box<dyn SettingsDecoder>,
}

impl Default for LayeredSettingsLoader {
    fn default() -> Self {
        Self::new(SettingsFileNames::default())
    }
}

impl LayeredSettingsLoader {
    pub fn new(names: SettingsFileNames) -> Self {
        Self::with_decoder(names, Box::new(JsoncDecoder))
    }

    /// Use a different decoder for the settings file text
    pub fn with_decoder(names: SettingsFileNames, decoder: Box<dyn SettingsDecoder>) -> Self {
        Self { names, decoder }
    }

    pub fn names(&self) -> &SettingsFileNames {
        &self.names
    }

    /// Load the settings layer for a single directory.
    ///
    /// The syntax-specific file is overlaid on the generic one.
    pub fn load_directory(&self, directory: &Path, syntax: &str) -> SettingsLayer {
        let files: Vec<SettingsFile> = self
            .names
            .candidates(directory, syntax)
            .iter()
            .map(|path| load_source(path, self.decoder.as_ref()))
            .collect();

        let settings = files
            .iter()
            .fold(Settings::new(), |acc, file| merge(acc, file.settings.clone()));

        SettingsLayer {
            directory: directory.to_path_buf(),
            files,
            settings,
        }
    }

    /// Per-directory layers for `file`, nearest directory first.
    pub fn layers(&self, file: &Path, syntax: &str) -> Result<Vec<SettingsLayer>, PathError> {
        let Some(start) = file_parent(file)? else {
            return Ok(Vec::new());
        };
        Ok(ancestors(&start)?
            .map(|directory| self.load_directory(&directory, syntax))
            .collect())
    }

    /// Resolve the settings that apply to `file`.
    ///
    /// A file with no parent directory resolves to an empty mapping. Only an empty
    /// path (or one that cannot be made absolute) is an error.
    pub fn resolve(&self, file: &Path, syntax: &str) -> Result<Settings, PathError> {
        let Some(start) = file_parent(file)? else {
            return Ok(Settings::new());
        };

        let mut resolved = Settings::new();
        for directory in ancestors(&start)? {
            let layer = self.load_directory(&directory, syntax);
            // Keys already set by a nearer directory are never overwritten
            resolved = merge(layer.settings, resolved);
        }

        debug!(
            file = %file.display(),
            syntax,
            keys = resolved.len(),
            "Resolved settings"
        );
        Ok(resolved)
    }

    /// Resolve like [`resolve`](Self::resolve), also recording the winning file per key.
    pub fn explain(&self, file: &Path, syntax: &str) -> Result<Resolution, PathError> {
        let mut resolution = Resolution::default();
        for layer in self.layers(file, syntax)? {
            for source in layer.files.iter().rev() {
                for (key, value) in &source.settings {
                    if !resolution.settings.contains_key(key) {
                        resolution.settings.insert(key.clone(), value.clone());
                        resolution.origins.insert(key.clone(), source.path.clone());
                    }
                }
            }
        }
        Ok(resolution)
    }
}
