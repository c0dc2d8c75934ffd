// src/config/builder.rs

use super::validation::{validate_base_url, validate_path_option};
use super::Config;
use crate::cli::Cli;
use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_ARCHIVE_BASE_URL, DEFAULT_DESTINATION, DEFAULT_OUTPUT_FILE,
    DEFAULT_REPO_URL,
};
use crate::errors::Result;
use crate::git::GitHubEndpoints;
use std::path::PathBuf;

/// Builds a [`Config`] from CLI arguments or programmatic settings.
///
/// Unset options fall back to the same defaults the command line uses.
///
/// # Examples
/// ```
/// use repo2ai::ConfigBuilder;
/// use std::path::Path;
///
/// let config = ConfigBuilder::new()
///     .repo_url("https://github.com/rust-lang/cargo")
///     .destination("work/repo")
///     .output_file("work/cargo.txt")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.destination, Path::new("work/repo"));
/// assert_eq!(config.output_path, Path::new("work/cargo.txt"));
/// assert_eq!(config.endpoints.api_base_url, "https://api.github.com");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    repo_url: Option<String>,
    destination: Option<String>,
    output_file: Option<String>,
    git_branch: Option<String>,
    api_url: Option<String>,
    archive_url: Option<String>,
}

impl ConfigBuilder {
    /// Creates a builder with every option unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-populated from parsed command-line arguments.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            repo_url: Some(cli.repo_url),
            destination: Some(cli.destination),
            output_file: Some(cli.output_file),
            git_branch: cli.git_branch,
            api_url: Some(cli.api_url),
            archive_url: Some(cli.archive_url),
        }
    }

    /// Sets the repository URL.
    pub fn repo_url(mut self, url: impl Into<String>) -> Self {
        self.repo_url = Some(url.into());
        self
    }

    /// Sets the extraction directory.
    pub fn destination(mut self, path: impl Into<String>) -> Self {
        self.destination = Some(path.into());
        self
    }

    /// Sets the output document path.
    pub fn output_file(mut self, path: impl Into<String>) -> Self {
        self.output_file = Some(path.into());
        self
    }

    /// Downloads this branch instead of resolving the default branch.
    pub fn git_branch(mut self, branch: impl Into<String>) -> Self {
        self.git_branch = Some(branch.into());
        self
    }

    /// Sets the base URL of the REST API.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    /// Sets the base URL of the archive host.
    pub fn archive_url(mut self, url: impl Into<String>) -> Self {
        self.archive_url = Some(url.into());
        self
    }

    /// Validates the options and produces a [`Config`].
    ///
    /// The repository URL itself is checked later by the archive fetcher, which
    /// owns that rule.
    ///
    /// # Errors
    /// Returns [`crate::errors::Error::Config`] if a path option is empty, a base
    /// URL does not parse or uses a scheme other than http(s), or the branch is blank.
    pub fn build(self) -> Result<Config> {
        let destination = self
            .destination
            .unwrap_or_else(|| DEFAULT_DESTINATION.to_string());
        let output_file = self
            .output_file
            .unwrap_or_else(|| DEFAULT_OUTPUT_FILE.to_string());
        let api_url = self
            .api_url
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let archive_url = self
            .archive_url
            .unwrap_or_else(|| DEFAULT_ARCHIVE_BASE_URL.to_string());

        validate_path_option("--dest", &destination)?;
        validate_path_option("--output", &output_file)?;
        validate_base_url("--api-url", &api_url)?;
        validate_base_url("--archive-url", &archive_url)?;
        if let Some(branch) = &self.git_branch {
            validate_path_option("--git-branch", branch.trim())?;
        }

        let config = Config {
            repo_url: self
                .repo_url
                .unwrap_or_else(|| DEFAULT_REPO_URL.to_string()),
            destination: PathBuf::from(destination),
            output_path: PathBuf::from(output_file),
            git_branch: self.git_branch,
            endpoints: GitHubEndpoints {
                api_base_url: api_url,
                archive_base_url: archive_url,
            },
        };
        log::debug!("Built configuration: {:?}", config);
        Ok(config)
    }
}
