//! CLI parse: clap types for dirsettings. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// dirsettings CLI - per-directory settings resolution
#[derive(Parser)]
#[command(name = "dirsettings")]
#[command(about = "Resolve settings declared in the directories above a file")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (for the workspace config file)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, short = 'q', default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the settings that apply to a file
    Resolve {
        /// File whose settings are resolved
        file: PathBuf,
        /// Syntax identifier (e.g. Python)
        #[arg(long, conflicts_with = "syntax_file")]
        syntax: Option<String>,
        /// Syntax descriptor path; its base name is the syntax identifier
        #[arg(long)]
        syntax_file: Option<String>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
        /// Show which settings file supplied each value
        #[arg(long)]
        explain: bool,
    },
    /// List the settings layers found above a file, nearest first
    Layers {
        /// File whose layers are listed
        file: PathBuf,
        /// Syntax identifier (e.g. Python)
        #[arg(long, conflicts_with = "syntax_file")]
        syntax: Option<String>,
        /// Syntax descriptor path; its base name is the syntax identifier
        #[arg(long)]
        syntax_file: Option<String>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print a directory and each of its ancestors up to the root
    Ancestors {
        /// Starting directory
        dir: PathBuf,
    },
    /// Create the generic settings file next to a file
    Create {
        /// File whose directory receives the settings file
        file: PathBuf,
        /// Settings file to copy instead of the configured user defaults
        #[arg(long)]
        user_defaults: Option<PathBuf>,
    },
}
