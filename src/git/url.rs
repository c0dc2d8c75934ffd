//! Handles parsing of GitHub repository URLs.

use crate::constants::GITHUB_URL_PREFIX;
use crate::errors::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// The owner/name pair identifying a GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    /// The user or organization owning the repository.
    pub owner: String,
    /// The repository name, without any `.git` suffix.
    pub name: String,
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Checks whether a string starts with the GitHub repository URL prefix.
///
/// # Examples
/// ```
/// use repo2ai::git::is_github_url;
///
/// assert!(is_github_url("https://github.com/karpathy/cryptos"));
/// assert!(!is_github_url("http://github.com/karpathy/cryptos"));
/// assert!(!is_github_url("https://gitlab.com/user/repo"));
/// ```
pub fn is_github_url(url: &str) -> bool {
    url.starts_with(GITHUB_URL_PREFIX)
}

/// Matches the last two non-empty path segments, ignoring trailing slashes
/// and a `.git` suffix on the final segment.
static LAST_TWO_SEGMENTS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([^/]+)/([^/]+?)(?:\.git)?/*$").unwrap());

/// Extracts the owner and name from the last two path segments of a URL.
///
/// No host check is performed; see [`validate_repo_url`] for the strict form.
///
/// # Examples
/// ```
/// use repo2ai::git::parse_repo_url;
///
/// let repo = parse_repo_url("https://github.com/karpathy/cryptos/").unwrap();
/// assert_eq!(repo.owner, "karpathy");
/// assert_eq!(repo.name, "cryptos");
///
/// let repo = parse_repo_url("https://github.com/rust-lang/cargo.git").unwrap();
/// assert_eq!(repo.to_string(), "rust-lang/cargo");
/// ```
pub fn parse_repo_url(url: &str) -> Result<RepoRef> {
    LAST_TWO_SEGMENTS_RE
        .captures(url)
        .and_then(|caps| Some((caps.get(1)?.as_str(), caps.get(2)?.as_str())))
        .filter(|(_, name)| !name.is_empty())
        .map(|(owner, name)| RepoRef {
            owner: owner.to_string(),
            name: name.to_string(),
        })
        .ok_or_else(|| {
            Error::InvalidInput(format!(
                "Could not parse owner/repo from URL: {}",
                url
            ))
        })
}

/// Validates that a URL points at a GitHub repository and parses its owner and name.
///
/// The URL must start with `https://github.com/` and carry at least an owner
/// and a name after it.
///
/// # Errors
/// Returns [`Error::InvalidInput`] for anything else.
pub fn validate_repo_url(url: &str) -> Result<RepoRef> {
    if !is_github_url(url) {
        return Err(Error::InvalidInput(
            "The provided URL must be a GitHub repository URL.".to_string(),
        ));
    }
    let path_part = &url[GITHUB_URL_PREFIX.len()..];

    if path_part.split('/').filter(|s| !s.is_empty()).count() < 2 {
        return Err(Error::InvalidInput(format!(
            "The provided URL must name both an owner and a repository: {}",
            url
        )));
    }

    parse_repo_url(url)
}
