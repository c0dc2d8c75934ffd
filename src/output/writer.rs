// src/output/writer.rs

//! Manages the output document on disk.
//!
//! The describe stage creates the document from scratch; the content stage
//! reopens it in append mode once per file, so every block lands on disk as
//! soon as it is written.

use crate::errors::{io_error_with_path, Result};
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter};
use std::path::Path;

/// Removes the output document if it exists. A missing file is not an error.
pub fn remove_previous_output(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => {
            log::debug!("Removed previous output document: {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(io_error_with_path(e, path)),
    }
}

/// Creates (or truncates) the output document, creating parent directories as needed.
pub fn create_output(path: &Path) -> Result<BufWriter<File>> {
    ensure_parent_dir(path)?;
    let file = File::create(path).map_err(|e| io_error_with_path(e, path))?;
    Ok(BufWriter::new(file))
}

/// Opens the output document for appending, creating it if it is missing.
pub fn append_output(path: &Path) -> Result<BufWriter<File>> {
    ensure_parent_dir(path)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| io_error_with_path(e, path))?;
    Ok(BufWriter::new(file))
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            fs::create_dir_all(parent).map_err(|e| io_error_with_path(e, parent))
        }
        _ => Ok(()),
    }
}
