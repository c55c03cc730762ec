//! Lazy iterator over a directory and all of its ancestors

use crate::error::PathError;
use crate::walk::path::{normalize_dir, parent_dir};
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};

/// Directories from a normalized start up to and including the filesystem root.
///
/// Cloning an `Ancestors` restarts the walk from wherever the clone was taken.
#[derive(Debug, Clone)]
pub struct Ancestors {
    next: Option<PathBuf>,
}

impl Iterator for Ancestors {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        let current = self.next.take()?;
        self.next = parent_dir(&current);
        Some(current)
    }
}

impl FusedIterator for Ancestors {}

/// Walk from `start` up to the root, nearest first.
///
/// Fails with `PathError::InvalidPath` if `start` is empty or cannot be made absolute.
pub fn ancestors(start: impl AsRef<Path>) -> Result<Ancestors, PathError> {
    let start = normalize_dir(start.as_ref())?;
    Ok(Ancestors { next: Some(start) })
}
