//! Defines the core data structure passed from discovery to the content stage.

use std::path::PathBuf;

/// A file found under the repository root.
///
/// # Examples
///
/// ```
/// use repo2ai::core_types::FileInfo;
/// use std::path::PathBuf;
///
/// let file_info = FileInfo {
///     absolute_path: PathBuf::from("/work/repo/cryptos/cryptos-main/setup.py"),
///     relative_path: PathBuf::from("cryptos/cryptos-main/setup.py"),
/// };
///
/// assert_eq!(file_info.file_name(), "setup.py");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileInfo {
    /// The path used to read the file.
    pub absolute_path: PathBuf,
    /// The path relative to the walked root.
    pub relative_path: PathBuf,
}

impl FileInfo {
    /// The file's base name, as shown in the `## Content of` heading.
    pub fn file_name(&self) -> String {
        self.relative_path
            .file_name()
            .unwrap_or(self.relative_path.as_os_str())
            .to_string_lossy()
            .into_owned()
    }
}
