// src/git/mod.rs
//! Fetches GitHub repositories as ZIP archives.
//!
//! This module provides functionality to:
//! - Parse and validate GitHub repository URLs.
//! - Resolve a repository's default branch through the GitHub REST API using `reqwest`.
//! - Download a branch archive and extract it with `zip`.

// Declare the sub-modules.
mod api;
mod archive;
mod url;

// Re-export the public-facing API.
pub use api::{build_reqwest_client, resolve_default_branch, GitHubEndpoints};
pub use archive::{download_repo_as_zip, FetchOptions};
pub use url::{is_github_url, parse_repo_url, validate_repo_url, RepoRef};
