// src/output/contents.rs

//! Appends every file's contents to the output document.

use crate::core_types::FileInfo;
use crate::discovery::discover_files;
use crate::errors::{io_error_with_path, Result};
use crate::output::language::language_hint;
use crate::output::writer::append_output;
use crate::progress::ProgressReporter;
use log::debug;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Reads a file as text, replacing any bytes that are not valid UTF-8.
///
/// Binary or mis-encoded files therefore never abort a run; they produce a
/// best-effort block instead.
pub fn read_lossy(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| io_error_with_path(e, path))?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            debug!("Lossy UTF-8 decode for {}", path.display());
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    })
}

/// Writes one file's heading and fenced block.
///
/// ```
/// use repo2ai::output::contents::write_file_block;
/// use std::path::Path;
///
/// let mut out = Vec::new();
/// write_file_block(&mut out, Path::new("x.py"), "print(1)").unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "\n\n## Content of x.py\n\n```python\nprint(1)\n```\n"
/// );
/// ```
pub fn write_file_block(writer: &mut dyn Write, path: &Path, content: &str) -> std::io::Result<()> {
    let file_name = path
        .file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy();
    write!(writer, "\n\n## Content of {}\n\n", file_name)?;
    write!(writer, "```{}\n{}\n```\n", language_hint(path), content)
}

/// Appends a block for `file_info` and flushes it to disk before returning.
fn append_file(file_info: &FileInfo, output_path: &Path) -> Result<()> {
    let content = read_lossy(&file_info.absolute_path)?;
    let mut writer = append_output(output_path)?;
    write_file_block(&mut writer, &file_info.relative_path, &content)
        .and_then(|_| writer.flush())
        .map_err(|e| io_error_with_path(e, output_path))
}

/// Appends the contents of every file under `root` to the output document.
///
/// Files are visited in the order [`discover_files`] returns them. Each block is
/// appended and flushed on its own, so an interrupted run leaves every block
/// written so far on disk.
///
/// # Returns
/// The path of the output document.
///
/// # Errors
/// Returns an error if `root` is not a directory or a read or write fails.
/// Undecodable file contents are not an error.
pub fn append_file_contents(
    root: &Path,
    output_path: &Path,
    progress: Option<Arc<dyn ProgressReporter>>,
) -> Result<PathBuf> {
    append_all(root, output_path, progress.as_deref()).map_err(|e| {
        log::error!("Error processing files: {}", e);
        e
    })
}

fn append_all(
    root: &Path,
    output_path: &Path,
    progress: Option<&dyn ProgressReporter>,
) -> Result<PathBuf> {
    let files = discover_files(root)?;

    if let Some(p) = progress {
        p.set_length(files.len() as u64);
        p.set_position(0);
        p.set_message("Appending file contents...".to_string());
    }

    for (index, file_info) in files.iter().enumerate() {
        debug!("Appending {}", file_info.relative_path.display());
        append_file(file_info, output_path)?;
        if let Some(p) = progress {
            p.set_position(index as u64 + 1);
        }
    }

    if let Some(p) = progress {
        p.finish_with_message(format!("Appended {} files", files.len()));
    }
    log::info!("File contents appended to: {}", output_path.display());
    Ok(output_path.to_path_buf())
}
