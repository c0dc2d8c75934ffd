// src/git/api.rs
//! Talks to the GitHub REST API to resolve a repository's default branch.

use super::url::{parse_repo_url, RepoRef};
use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_ARCHIVE_BASE_URL, FALLBACK_BRANCH, USER_AGENT as AGENT,
};
use crate::errors::{Error, Result};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Represents the repository metadata from the GitHub API, only for getting the default branch.
#[derive(Deserialize, Debug)]
struct RepoInfo {
    default_branch: Option<String>,
}

/// Base URLs for the two GitHub endpoints a run talks to.
///
/// The defaults point at github.com; overriding them allows GitHub Enterprise
/// hosts or a local test server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubEndpoints {
    /// Base of the REST API, e.g. `https://api.github.com`.
    pub api_base_url: String,
    /// Base of the host serving branch archives, e.g. `https://github.com`.
    pub archive_base_url: String,
}

impl Default for GitHubEndpoints {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            archive_base_url: DEFAULT_ARCHIVE_BASE_URL.to_string(),
        }
    }
}

impl GitHubEndpoints {
    /// URL of the repository metadata resource.
    ///
    /// ```
    /// use repo2ai::git::{GitHubEndpoints, RepoRef};
    ///
    /// let repo = RepoRef { owner: "karpathy".into(), name: "cryptos".into() };
    /// assert_eq!(
    ///     GitHubEndpoints::default().metadata_url(&repo),
    ///     "https://api.github.com/repos/karpathy/cryptos"
    /// );
    /// ```
    pub fn metadata_url(&self, repo: &RepoRef) -> String {
        format!(
            "{}/repos/{}/{}",
            self.api_base_url.trim_end_matches('/'),
            repo.owner,
            repo.name
        )
    }

    /// URL of the ZIP archive for a branch.
    ///
    /// ```
    /// use repo2ai::git::{GitHubEndpoints, RepoRef};
    ///
    /// let repo = RepoRef { owner: "karpathy".into(), name: "cryptos".into() };
    /// assert_eq!(
    ///     GitHubEndpoints::default().archive_url(&repo, "main"),
    ///     "https://github.com/karpathy/cryptos/archive/refs/heads/main.zip"
    /// );
    /// ```
    pub fn archive_url(&self, repo: &RepoRef, branch: &str) -> String {
        format!(
            "{}/{}/{}/archive/refs/heads/{}.zip",
            self.archive_base_url.trim_end_matches('/'),
            repo.owner,
            repo.name,
            branch
        )
    }
}

/// Builds a blocking `reqwest` client with default headers for GitHub.
///
/// Requests have no timeout; a download blocks until the transport finishes or fails.
/// A `GITHUB_TOKEN` environment variable, when present, is sent as a bearer token.
pub fn build_reqwest_client() -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github.v3+json"));
    headers.insert(USER_AGENT, HeaderValue::from_static(AGENT));

    if let Ok(token) = env::var("GITHUB_TOKEN") {
        match HeaderValue::from_str(&format!("Bearer {}", token)) {
            Ok(value) => {
                headers.insert(AUTHORIZATION, value);
                log::debug!("Using GITHUB_TOKEN for authentication.");
            }
            Err(_) => log::warn!("Ignoring GITHUB_TOKEN: not a valid header value."),
        }
    }

    Client::builder()
        .default_headers(headers)
        .timeout(Option::<Duration>::None)
        .build()
        .map_err(|source| Error::Transport {
            url: "<client setup>".to_string(),
            source,
        })
}

/// Resolves the default branch of the repository a URL points at.
///
/// The owner and name come from the URL's last two path segments. If the
/// metadata response has no `default_branch`, `main` is returned.
///
/// # Errors
/// Returns [`Error::Transport`] if the request fails, the server answers with a
/// non-success status, or the body is not the expected JSON. There is no retry.
pub fn resolve_default_branch(
    repo_url: &str,
    endpoints: &GitHubEndpoints,
    client: &Client,
) -> Result<String> {
    let repo = parse_repo_url(repo_url)?;
    let api_url = endpoints.metadata_url(&repo);
    log::debug!("Fetching repo metadata from: {}", api_url);

    fetch_default_branch(&api_url, client).map_err(|source| {
        log::error!("Error fetching default branch: {}", source);
        Error::Transport {
            url: api_url,
            source,
        }
    })
}

fn fetch_default_branch(api_url: &str, client: &Client) -> reqwest::Result<String> {
    let repo_info: RepoInfo = client.get(api_url).send()?.error_for_status()?.json()?;
    Ok(repo_info.default_branch.unwrap_or_else(|| {
        log::debug!(
            "No default_branch in metadata, falling back to '{}'",
            FALLBACK_BRANCH
        );
        FALLBACK_BRANCH.to_string()
    }))
}
