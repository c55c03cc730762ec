//! Merge rules for tool configuration sources.

pub mod merge_policy;
