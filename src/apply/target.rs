//! Targets: the live units settings are applied to.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Stable opaque identity the host assigns to each live target instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TargetId(pub u64);

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "target#{}", self.0)
    }
}

/// A live target whose settings store receives resolved settings
pub trait Target {
    fn id(&self) -> TargetId;

    /// Path of the backing file; `None` for unsaved targets.
    fn file_path(&self) -> Option<&Path>;

    /// Syntax identifier, empty if unknown.
    fn syntax(&self) -> &str;

    /// Write one key into the settings store, replacing any existing value.
    fn set_setting(&mut self, key: &str, value: Value);
}

/// In-memory target with its own settings store
#[derive(Debug, Clone)]
pub struct Buffer {
    id: TargetId,
    file_path: Option<PathBuf>,
    syntax: String,
    settings: BTreeMap<String, Value>,
}

impl Buffer {
    pub fn new(id: TargetId) -> Self {
        Self {
            id,
            file_path: None,
            syntax: String::new(),
            settings: BTreeMap::new(),
        }
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    pub fn with_syntax(mut self, syntax: impl Into<String>) -> Self {
        self.syntax = syntax.into();
        self
    }

    pub fn with_setting(mut self, key: impl Into<String>, value: Value) -> Self {
        self.settings.insert(key.into(), value);
        self
    }

    /// Give an unsaved buffer a backing file, as a first save does.
    pub fn set_file(&mut self, path: impl Into<PathBuf>) {
        self.file_path = Some(path.into());
    }

    pub fn settings(&self) -> &BTreeMap<String, Value> {
        &self.settings
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.settings.get(key)
    }
}

impl Target for Buffer {
    fn id(&self) -> TargetId {
        self.id
    }

    fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    fn syntax(&self) -> &str {
        &self.syntax
    }

    fn set_setting(&mut self, key: &str, value: Value) {
        self.settings.insert(key.to_string(), value);
    }
}
