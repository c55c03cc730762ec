//! Path normalization utilities

use crate::error::PathError;
use std::path::{Component, Path, PathBuf};
use unicode_normalization::UnicodeNormalization;

/// Normalize a directory path for comparison and parent computation
///
/// This function:
/// 1. Makes the path absolute against the current working directory
/// 2. Resolves `.` and `..` lexically (the directory need not exist)
/// 3. Resolves symlinks in the longest prefix that exists on disk
/// 4. Normalizes Unicode to NFC and removes trailing slashes (except root)
pub fn normalize_dir(path: &Path) -> Result<PathBuf, PathError> {
    let lexical = lexical_absolute(path)?;
    let resolved = canonicalize_existing_prefix(&lexical);

    Ok(PathBuf::from(normalize_path_string(&resolved.to_string_lossy())))
}

/// Directory containing `file`, normalized.
///
/// The file itself is never resolved through symlinks; only its directory is.
/// Returns `Ok(None)` when the file has no parent (it is the root itself).
pub fn file_parent(file: &Path) -> Result<Option<PathBuf>, PathError> {
    let absolute = lexical_absolute(file)?;
    match parent_dir(&absolute) {
        Some(dir) => normalize_dir(&dir).map(Some),
        None => Ok(None),
    }
}

/// Parent of an already-normalized directory, or `None` at the root.
pub fn parent_dir(path: &Path) -> Option<PathBuf> {
    path.parent()
        .filter(|parent| !parent.as_os_str().is_empty() && *parent != path)
        .map(Path::to_path_buf)
}

/// Normalize a path string (without filesystem access)
///
/// Normalizes Unicode to NFC and strips trailing separators, keeping a bare root.
pub fn normalize_path_string(path: &str) -> String {
    let normalized: String = path.nfc().collect();

    let mut result = normalized;
    if result.len() > 1 {
        while result.len() > 1 && (result.ends_with('/') || result.ends_with('\\')) {
            result.pop();
        }
    }

    result
}

/// Canonicalize the deepest existing ancestor of `path` and re-append the rest.
fn canonicalize_existing_prefix(path: &Path) -> PathBuf {
    let mut missing = Vec::new();
    let mut prefix = path;
    loop {
        // Use dunce so Windows paths come back without the verbatim prefix
        if let Ok(canonical) = dunce::canonicalize(prefix) {
            return missing
                .iter()
                .rev()
                .fold(canonical, |acc: PathBuf, name| acc.join(name));
        }
        match (prefix.parent(), prefix.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name.to_os_string());
                prefix = parent;
            }
            _ => return path.to_path_buf(),
        }
    }
}

fn lexical_absolute(path: &Path) -> Result<PathBuf, PathError> {
    if path.as_os_str().is_empty() {
        return Err(PathError::InvalidPath(
            "cannot walk from an empty path".to_string(),
        ));
    }

    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        let cwd = std::env::current_dir().map_err(|e| {
            PathError::InvalidPath(format!(
                "Failed to make {} absolute: {}",
                path.display(),
                e
            ))
        })?;
        cwd.join(path)
    };

    let mut clean = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => clean.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                if matches!(clean.components().next_back(), Some(Component::Normal(_))) {
                    clean.pop();
                }
            }
            Component::Normal(name) => clean.push(name),
        }
    }

    Ok(clean)
}
