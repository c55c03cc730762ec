//! Loading a single settings file. Never fails: absent or broken files read as empty.

use crate::error::DecodeError;
use crate::layers::decode::SettingsDecoder;
use crate::layers::Settings;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// What happened when a candidate settings file was looked up
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum SourceStatus {
    Loaded,
    Absent,
    Invalid(String),
}

/// One candidate settings file and what it contributed
#[derive(Debug, Clone, Serialize)]
pub struct SettingsFile {
    pub path: PathBuf,
    #[serde(flatten)]
    pub status: SourceStatus,
    pub settings: Settings,
}

impl SettingsFile {
    fn empty(path: &Path, status: SourceStatus) -> Self {
        Self {
            path: path.to_path_buf(),
            status,
            settings: Settings::new(),
        }
    }
}

/// Load the settings in `path`, or an empty mapping if it is missing or unreadable.
pub fn load(path: &Path, decoder: &dyn SettingsDecoder) -> Settings {
    load_source(path, decoder).settings
}

/// Load the settings in `path` and report how the lookup went.
pub fn load_source(path: &Path, decoder: &dyn SettingsDecoder) -> SettingsFile {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => {
            debug!(path = %path.display(), "Settings path is not a file");
            return SettingsFile::empty(path, SourceStatus::Absent);
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "No settings file");
            return SettingsFile::empty(path, SourceStatus::Absent);
        }
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "Cannot inspect settings file, ignoring it"
            );
            return SettingsFile::empty(path, SourceStatus::Invalid(e.to_string()));
        }
    }

    info!(path = %path.display(), "Loading settings");
    let decoded = fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|text| {
            decoder
                .decode(&text)
                .map_err(|e: DecodeError| e.to_string())
        });

    match decoded {
        Ok(settings) => SettingsFile {
            path: path.to_path_buf(),
            status: SourceStatus::Loaded,
            settings,
        },
        Err(reason) => {
            warn!(
                path = %path.display(),
                error = %reason,
                "Error loading settings, ignoring file"
            );
            SettingsFile::empty(path, SourceStatus::Invalid(reason))
        }
    }
}
