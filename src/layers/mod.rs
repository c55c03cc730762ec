//! Layered Settings
//!
//! Discovers settings files in every directory between a file and the filesystem
//! root and merges them into one flat mapping. Nearer directories win, and within a
//! directory the syntax-specific file wins over the generic one.

pub mod decode;
pub mod loader;
pub mod merge;
pub mod naming;
pub mod resolver;

/// Flat settings mapping: opaque key to arbitrary JSON value.
pub type Settings = serde_json::Map<String, serde_json::Value>;

pub use decode::{JsoncDecoder, SettingsDecoder};
pub use loader::{load, load_source, SettingsFile, SourceStatus};
pub use merge::merge;
pub use naming::{syntax_name, SettingsFileNames, GENERIC_SETTINGS_NAME, SETTINGS_EXTENSION};
pub use resolver::{LayeredSettingsLoader, Resolution, SettingsLayer};
