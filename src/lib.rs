//! `repo2ai` is a library and command-line tool that flattens a GitHub
//! repository into a single text document.
//!
//! A run is a four-stage, strictly sequential pipeline:
//! 1.  **Resolve**: look up the repository's default branch via the GitHub API.
//! 2.  **Fetch**: download that branch as a ZIP archive and extract it into a
//!     freshly recreated destination directory.
//! 3.  **Describe**: write an indented tree of the destination to the output document.
//! 4.  **Append**: append every file's contents to the document, each in a code
//!     fence tagged with a language inferred from its extension.
//!
//! Each stage reads what the previous one left on disk, and any error stops the
//! run where it happened.
//!
//! # Example: Library Usage
//!
//! The describe and append stages work on any local directory:
//!
//! ```
//! use repo2ai::{append_contents, describe, ConfigBuilder};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().unwrap();
//! let root = temp_dir.path().join("repo");
//! fs::create_dir_all(root.join("a")).unwrap();
//! fs::write(root.join("a/b.txt"), "bee").unwrap();
//! fs::write(root.join("x.py"), "print(1)").unwrap();
//!
//! let config = ConfigBuilder::new()
//!     .destination(root.to_str().unwrap())
//!     .output_file(temp_dir.path().join("output.txt").to_str().unwrap())
//!     .build()
//!     .unwrap();
//!
//! describe(&config).unwrap();
//! append_contents(&config, None).unwrap();
//!
//! let output = fs::read_to_string(&config.output_path).unwrap();
//! assert!(output.contains("root\n- a\n  - b.txt\n- x.py\n"));
//! assert!(output.ends_with("## Content of x.py\n\n```python\nprint(1)\n```\n"));
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod discovery;
pub mod errors;
pub mod git;
pub mod output;
pub mod progress;

// Re-export key public types for easier use as a library
pub use config::{Config, ConfigBuilder};
pub use core_types::FileInfo;
pub use errors::{Error, Result};

use progress::ProgressReporter;
use std::path::PathBuf;
use std::sync::Arc;

/// Downloads and extracts the configured repository.
///
/// This is stages 1 and 2 of the pipeline. The destination directory is
/// replaced, and the archive lands in `<destination>/<repo name>`.
///
/// # Returns
/// The directory the archive was extracted to.
pub fn fetch(config: &Config, progress: Option<Arc<dyn ProgressReporter>>) -> Result<PathBuf> {
    git::download_repo_as_zip(
        &config.repo_url,
        &config.destination,
        &config.fetch_options(),
        progress,
    )
}

/// Writes the tree listing of the destination directory to a fresh output document.
///
/// This is stage 3 of the pipeline.
///
/// # Returns
/// The path of the output document.
pub fn describe(config: &Config) -> Result<PathBuf> {
    output::describe_repo_contents(&config.destination, &config.output_path)
}

/// Appends the contents of every file in the destination directory to the output document.
///
/// This is stage 4 of the pipeline.
///
/// # Returns
/// The path of the output document.
pub fn append_contents(
    config: &Config,
    progress: Option<Arc<dyn ProgressReporter>>,
) -> Result<PathBuf> {
    output::append_file_contents(&config.destination, &config.output_path, progress)
}

/// Executes the complete pipeline: resolve, fetch, describe, and append.
///
/// The stages run unconditionally in order. There is no retry: the first error
/// is returned as-is, and whatever earlier stages wrote stays on disk.
///
/// # Returns
/// The path of the finished output document.
pub fn run(config: &Config, progress: Option<Arc<dyn ProgressReporter>>) -> Result<PathBuf> {
    let extracted = fetch(config, progress.clone())?;
    log::debug!("Fetch stage finished: {}", extracted.display());
    describe(config)?;
    append_contents(config, progress)
}
