//! Finds the files whose contents go into the output document.

pub(crate) mod walker;

use crate::core_types::FileInfo;
use crate::errors::{io_error_with_path, Error, Result};
use log::debug;
use std::path::Path;

/// Lists every file below `root`, in the order they will be appended.
///
/// The walk is depth-first with each directory's entries sorted by name, so
/// files come out in the same order the tree listing shows them. Directories
/// are not returned. Symbolic links are not followed into directories; a link
/// to a regular file is included, a dangling link is skipped with a warning.
///
/// # Errors
/// Returns [`Error::InvalidInput`] if `root` is not a directory, or
/// [`Error::Io`] if a directory cannot be read.
pub fn discover_files(root: &Path) -> Result<Vec<FileInfo>> {
    if !root.is_dir() {
        return Err(Error::InvalidInput(format!(
            "The provided path '{}' is not a valid directory.",
            root.display()
        )));
    }

    let mut files = Vec::new();
    for entry in walker::build_walker(root) {
        let entry = entry.map_err(|e| walk_error(e, root))?;

        if entry.file_type().is_dir() {
            continue;
        }

        let absolute_path = entry.path().to_path_buf();
        if entry.path_is_symlink() && !absolute_path.is_file() {
            log::warn!(
                "Skipping symbolic link that does not point to a file: {}",
                absolute_path.display()
            );
            continue;
        }

        let relative_path = absolute_path
            .strip_prefix(root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| absolute_path.clone());
        debug!("Discovered file: {}", relative_path.display());
        files.push(FileInfo {
            absolute_path,
            relative_path,
        });
    }

    debug!("Discovered {} files under {}", files.len(), root.display());
    Ok(files)
}

/// Converts a walkdir failure into the crate error, keeping the offending path.
pub(crate) fn walk_error(e: walkdir::Error, root: &Path) -> Error {
    let path = e
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.to_path_buf());
    match e.into_io_error() {
        Some(io_err) => io_error_with_path(io_err, &path),
        None => Error::InvalidInput(format!(
            "Filesystem loop detected at '{}'",
            path.display()
        )),
    }
}
