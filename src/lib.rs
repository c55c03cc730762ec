//! dirsettings: Hierarchical Per-Directory Settings
//!
//! Resolves the settings that apply to a file by reading settings files in its
//! directory and every ancestor directory, nearest winning, and applies them once
//! per lifetime to live editor targets.

pub mod apply;
pub mod cli;
pub mod config;
pub mod error;
pub mod init;
pub mod layers;
pub mod logging;
pub mod walk;
