//! Presentation: text (comfy-table) and JSON formatters for command results.

use crate::error::SettingsError;
use crate::init::CreateOutcome;
use crate::layers::{Resolution, SettingsLayer, SourceStatus};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use std::path::PathBuf;

fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

pub fn format_resolution_text(resolution: &Resolution, explain: bool) -> String {
    if resolution.settings.is_empty() {
        return "No settings found.".to_string();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    if explain {
        table.set_header(vec!["Key", "Value", "Source"]);
    } else {
        table.set_header(vec!["Key", "Value"]);
    }
    for (key, value) in &resolution.settings {
        let mut row = vec![key.clone(), value.to_string()];
        if explain {
            let source = resolution
                .origins
                .get(key)
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "-".to_string());
            row.push(source);
        }
        table.add_row(row);
    }
    table.to_string()
}

pub fn format_resolution_json(
    resolution: &Resolution,
    explain: bool,
) -> Result<String, SettingsError> {
    let out = if explain {
        serde_json::to_string_pretty(resolution)?
    } else {
        serde_json::to_string_pretty(&resolution.settings)?
    };
    Ok(out)
}

pub fn format_layers_text(layers: &[SettingsLayer]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Settings layers")));
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["File", "Status", "Keys"]);
    let mut found = 0;
    for layer in layers {
        for file in layer.files.iter().rev() {
            let status = match &file.status {
                SourceStatus::Absent => continue,
                SourceStatus::Loaded => "loaded".to_string(),
                SourceStatus::Invalid(reason) => format!("invalid: {}", reason),
            };
            found += 1;
            table.add_row(vec![
                file.path.display().to_string(),
                status,
                file.settings.len().to_string(),
            ]);
        }
    }
    if found == 0 {
        out.push_str(&format!(
            "No settings files found in {} directories.\n",
            layers.len()
        ));
        return out;
    }
    out.push_str(&format!("{}\n", table));
    out
}

pub fn format_layers_json(layers: &[SettingsLayer]) -> Result<String, SettingsError> {
    Ok(serde_json::to_string_pretty(layers)?)
}

pub fn format_ancestors(directories: &[PathBuf]) -> String {
    directories
        .iter()
        .map(|d| d.display().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_create_outcome(outcome: &CreateOutcome) -> String {
    match outcome {
        CreateOutcome::AlreadyExists { path } => {
            format!("Settings file already exists at: {}", path.display())
        }
        CreateOutcome::Copied { path, from } => format!(
            "Created settings file at: {} (copied from {})",
            path.display(),
            from.display()
        ),
        CreateOutcome::CreatedDefault { path } => {
            format!("Created default settings file at: {}", path.display())
        }
    }
}
