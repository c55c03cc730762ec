//! CLI route: single route table and run context.

use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_ancestors, format_create_outcome, format_layers_json, format_layers_text,
    format_resolution_json, format_resolution_text,
};
use crate::config::{ConfigLoader, DirSettingsConfig};
use crate::error::SettingsError;
use crate::init::create_preferences_file;
use crate::layers::{syntax_name, LayeredSettingsLoader};
use crate::walk::ancestors;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Runtime context for CLI execution: loaded configuration and the settings loader.
pub struct RunContext {
    config: DirSettingsConfig,
    loader: LayeredSettingsLoader,
}

impl RunContext {
    /// Create run context from workspace root and optional config path.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, SettingsError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };
        Ok(Self::from_config(config))
    }

    pub fn from_config(config: DirSettingsConfig) -> Self {
        let loader = LayeredSettingsLoader::new(config.resolver.file_names());
        Self { config, loader }
    }

    /// Execute a command and return its rendered output.
    pub fn execute(&self, command: &Commands) -> Result<String, SettingsError> {
        match command {
            Commands::Resolve {
                file,
                syntax,
                syntax_file,
                format,
                explain,
            } => {
                let syntax = pick_syntax(syntax.as_deref(), syntax_file.as_deref());
                self.handle_resolve(file, &syntax, format, *explain)
            }
            Commands::Layers {
                file,
                syntax,
                syntax_file,
                format,
            } => {
                let syntax = pick_syntax(syntax.as_deref(), syntax_file.as_deref());
                self.handle_layers(file, &syntax, format)
            }
            Commands::Ancestors { dir } => {
                let dirs: Vec<PathBuf> = ancestors(dir)?.collect();
                Ok(format_ancestors(&dirs))
            }
            Commands::Create {
                file,
                user_defaults,
            } => self.handle_create(file, user_defaults.clone()),
        }
    }

    fn handle_resolve(
        &self,
        file: &Path,
        syntax: &str,
        format: &str,
        explain: bool,
    ) -> Result<String, SettingsError> {
        debug!(file = %file.display(), syntax, "Resolving settings");
        let resolution = self.loader.explain(file, syntax)?;
        match format {
            "json" => format_resolution_json(&resolution, explain),
            "text" => Ok(format_resolution_text(&resolution, explain)),
            other => Err(invalid_format(other)),
        }
    }

    fn handle_layers(&self, file: &Path, syntax: &str, format: &str) -> Result<String, SettingsError> {
        let layers = self.loader.layers(file, syntax)?;
        match format {
            "json" => format_layers_json(&layers),
            "text" => Ok(format_layers_text(&layers)),
            other => Err(invalid_format(other)),
        }
    }

    fn handle_create(
        &self,
        file: &Path,
        user_defaults: Option<PathBuf>,
    ) -> Result<String, SettingsError> {
        let user_defaults = user_defaults.or_else(|| self.config.resolver.user_defaults_path());
        let outcome =
            create_preferences_file(file, user_defaults.as_deref(), self.loader.names())?;
        Ok(format_create_outcome(&outcome))
    }
}

fn pick_syntax(syntax: Option<&str>, syntax_file: Option<&str>) -> String {
    match (syntax, syntax_file) {
        (Some(name), _) => name.to_string(),
        (None, Some(descriptor)) => syntax_name(descriptor),
        (None, None) => String::new(),
    }
}

fn invalid_format(format: &str) -> SettingsError {
    SettingsError::ConfigError(format!(
        "Invalid output format: {} (must be 'text' or 'json')",
        format
    ))
}
