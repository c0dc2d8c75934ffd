//! Defines the `Config` struct used to run the pipeline.
//!
//! A `Config` is produced by [`ConfigBuilder`], either from parsed CLI arguments
//! or programmatically, and is immutable afterwards.

use crate::constants::{DEFAULT_DESTINATION, DEFAULT_OUTPUT_FILE, DEFAULT_REPO_URL};
use crate::git::{FetchOptions, GitHubEndpoints};
use std::path::PathBuf;

pub use builder::ConfigBuilder;
mod builder;
mod validation;

/// Settings for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// URL of the repository to fetch.
    pub repo_url: String,
    /// Directory the archive is extracted under; also the root the tree and
    /// content stages walk.
    pub destination: PathBuf,
    /// Path of the output document.
    pub output_path: PathBuf,
    /// Branch to download instead of the repository's default branch.
    pub git_branch: Option<String>,
    /// Endpoints used for the metadata lookup and the archive download.
    pub endpoints: GitHubEndpoints,
}

impl Config {
    /// The options the archive fetcher needs from this configuration.
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            branch: self.git_branch.clone(),
            endpoints: self.endpoints.clone(),
        }
    }

    /// Creates a default `Config` for testing purposes.
    #[doc(hidden)]
    pub fn new_for_test() -> Self {
        Self {
            repo_url: DEFAULT_REPO_URL.to_string(),
            destination: PathBuf::from(DEFAULT_DESTINATION),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            git_branch: None,
            endpoints: GitHubEndpoints::default(),
        }
    }
}
