//! Expansion of command-line paths into the list of files to validate.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

/// Recognized JSON extensions when scanning directories.
pub const JSON_EXTENSIONS: &[&str] = &["json"];

/// Expands each argument into files to validate.
///
/// Directories are walked recursively for files with a JSON extension, in
/// sorted order. Every other argument is passed through unchanged, including
/// paths that do not exist, so that they are reported as file errors.
pub fn collect_inputs(paths: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for arg in paths {
        let path = Path::new(arg);
        if path.is_dir() {
            files.extend(json_files_in(path)?);
        } else {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

/// Lists JSON files under a directory, sorted by path.
pub fn json_files_in(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry =
            entry.with_context(|| format!("Failed to scan directory: {}", dir.display()))?;
        if entry.file_type().is_file() && has_json_extension(entry.path()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

fn has_json_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| JSON_EXTENSIONS.iter().any(|j| e.eq_ignore_ascii_case(j)))
        .unwrap_or(false)
}

/// Absolute form of a path for display, or the path as given if it cannot
/// be resolved.
pub fn display_path(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
