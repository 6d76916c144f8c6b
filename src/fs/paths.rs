//! User path expansion and resolution.
//!
//! Paths given on the command line or in the defaults file may start with
//! `~`. They are expanded against the user's home directory and then
//! resolved against the current working directory.

use crate::error::{EatError, Result};
use std::path::{Path, PathBuf};

/// Expand a leading `~` or `~/` to the user's home directory.
///
/// `~user` forms and paths without a leading tilde are returned unchanged,
/// as is everything when no home directory can be determined.
pub fn expand_user(path: &Path) -> PathBuf {
    let mut components = path.components();
    match components.next() {
        Some(std::path::Component::Normal(first)) if first == "~" => match dirs::home_dir() {
            Some(home) if components.as_path().as_os_str().is_empty() => home,
            Some(home) => home.join(components.as_path()),
            None => path.to_path_buf(),
        },
        _ => path.to_path_buf(),
    }
}

/// Expand and canonicalize a path, returning `None` if it does not exist.
pub fn resolve_existing(path: &Path) -> Option<PathBuf> {
    std::fs::canonicalize(expand_user(path)).ok()
}

/// Resolve the directory an agent should operate in.
///
/// The directory must exist; anything else is a usage error.
pub fn resolve_repo_dir(path: &Path) -> Result<PathBuf> {
    let resolved = std::fs::canonicalize(expand_user(path)).map_err(|e| {
        EatError::Usage(format!(
            "repository directory '{}' cannot be resolved: {}",
            path.display(),
            e
        ))
    })?;

    if !resolved.is_dir() {
        return Err(EatError::Usage(format!(
            "repository path '{}' is not a directory",
            resolved.display()
        )));
    }

    Ok(resolved)
}
