// src/output/tree.rs

//! Writes the indented tree listing that opens the output document.

use crate::constants::{CONTENTS_HEADER, TREE_HEADER, TREE_INDENT, TREE_ROOT_LABEL};
use crate::discovery::walk_error;
use crate::discovery::walker::build_walker;
use crate::errors::{io_error_with_path, Error, Result};
use crate::output::writer::{create_output, remove_previous_output};
use log::debug;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Builds the tree listing for everything below `root`.
///
/// Entries are visited in lexicographic order at each level, one
/// `"- name"` line per entry indented by depth. A directory's children follow
/// it immediately, before its next sibling. Symbolic links are listed but not
/// followed, even when they point at a directory.
pub fn build_tree_listing(root: &Path) -> Result<String> {
    let mut listing = String::new();
    for entry in build_walker(root) {
        let entry = entry.map_err(|e| walk_error(e, root))?;
        listing.push_str(&TREE_INDENT.repeat(entry.depth() - 1));
        listing.push_str("- ");
        listing.push_str(&entry.file_name().to_string_lossy());
        listing.push('\n');
    }
    Ok(listing)
}

/// Writes the repository structure to a fresh output document.
///
/// Any previous document at `output_path` is removed first. The document then
/// holds the structure header, a `root` line, the tree listing, and the header
/// announcing the file contents that [`crate::output::contents`] appends.
///
/// # Returns
/// The path of the written document.
///
/// # Errors
/// Returns [`Error::InvalidInput`] if `root` is not a directory, or
/// [`Error::Io`] if listing or writing fails.
pub fn describe_repo_contents(root: &Path, output_path: &Path) -> Result<PathBuf> {
    describe(root, output_path).map_err(|e| {
        log::error!("Error generating description: {}", e);
        e
    })
}

fn describe(root: &Path, output_path: &Path) -> Result<PathBuf> {
    remove_previous_output(output_path)?;

    if !root.is_dir() {
        return Err(Error::InvalidInput(format!(
            "The provided path '{}' is not a valid directory.",
            root.display()
        )));
    }

    debug!("Building tree listing for {}", root.display());
    let tree = build_tree_listing(root)?;

    let mut writer = create_output(output_path)?;
    write_description(&mut writer, &tree).map_err(|e| io_error_with_path(e, output_path))?;

    log::info!("Repository structure saved to: {}", output_path.display());
    Ok(output_path.to_path_buf())
}

fn write_description(writer: &mut dyn Write, tree: &str) -> std::io::Result<()> {
    writer.write_all(TREE_HEADER.as_bytes())?;
    writeln!(writer, "{}", TREE_ROOT_LABEL)?;
    writer.write_all(tree.as_bytes())?;
    writer.write_all(CONTENTS_HEADER.as_bytes())?;
    writer.flush()
}
