// src/discovery/walker.rs

use log::debug;
use std::path::Path;
use walkdir::WalkDir;

/// Configures the directory walk shared by the tree and content stages.
///
/// Entries are sorted by file name within each directory, and a directory's
/// children follow it directly. Links are not followed.
pub(crate) fn build_walker(root: &Path) -> walkdir::IntoIter {
    debug!("Configuring WalkDir for {}", root.display());
    WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
}
