//! File system utilities for staging.
//!
//! Provides file operations with automatic directory creation and
//! path-carrying errors.

use crate::bundler::error::{Error, ErrorExt, Result};
use std::path::{Path, PathBuf};

/// Creates the given directory path, including missing parents.
///
/// Succeeds if the directory already exists.
pub fn create_dir_all(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).fs_context("creating directory", path)
}

/// Copies a regular file from one path to another, creating any parent
/// directories of the destination path as necessary.
///
/// Fails if the source path is a directory or doesn't exist. Copying a file
/// onto itself is a no-op.
pub fn copy_file(from: &Path, to: &Path) -> Result<()> {
    if !from.exists() {
        return Err(Error::IoFailure {
            context: "copying",
            path: from.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file does not exist"),
        });
    }
    if !from.is_file() {
        return Err(Error::GenericError(format!("{from:?} is not a file")));
    }
    if is_same_file(from, to)? {
        log::debug!("{} is already in place", to.display());
        return Ok(());
    }
    if let Some(dest_dir) = to.parent() {
        create_dir_all(dest_dir)?;
    }
    std::fs::copy(from, to).fs_context("copying file to", to)?;
    Ok(())
}

/// Whether `to` exists and resolves to the same file as `from`.
///
/// `std::fs::copy` truncates its destination before reading the source.
fn is_same_file(from: &Path, to: &Path) -> Result<bool> {
    if !to.exists() {
        return Ok(false);
    }
    let from = std::fs::canonicalize(from).fs_context("resolving path", from)?;
    let to_resolved = std::fs::canonicalize(to).fs_context("resolving path", to)?;
    Ok(from == to_resolved)
}

/// Lists every regular file under `root` as `(relative entry path, file)`.
///
/// Entry paths use `/` separators regardless of platform and are returned in
/// sorted order. A missing root yields an empty list.
pub fn collect_files(root: &Path) -> Result<Vec<(String, PathBuf)>> {
    if !root.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in walkdir::WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let rel_path = entry.path().strip_prefix(root)?;
        let name = rel_path
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        files.push((name, entry.path().to_path_buf()));
    }

    files.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(files)
}
