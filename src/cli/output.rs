//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::SettingsError;

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &SettingsError) -> String {
    match e {
        SettingsError::NoFilePath => "Error: no file path given".to_string(),
        _ => format!("Error: {}", e),
    }
}
