// src/constants.rs

/// Repository fetched when no URL is given on the command line.
pub const DEFAULT_REPO_URL: &str = "https://github.com/karpathy/cryptos/";

/// Every accepted repository URL must start with this prefix.
pub const GITHUB_URL_PREFIX: &str = "https://github.com/";

/// Base URL of the repository metadata API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// Base URL of the host serving branch archives.
pub const DEFAULT_ARCHIVE_BASE_URL: &str = "https://github.com";

/// Branch used when the metadata response carries no `default_branch`.
pub const FALLBACK_BRANCH: &str = "main";

/// Default extraction directory, relative to the working directory.
pub const DEFAULT_DESTINATION: &str = "repo";

/// Default output document, relative to the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "output.txt";

/// Header written before the tree listing.
pub const TREE_HEADER: &str = "# This is the structure of the repository and its contents:\n\n";

/// Label of the first line of the tree listing.
pub const TREE_ROOT_LABEL: &str = "root";

/// Header written after the tree listing, before the file blocks.
pub const CONTENTS_HEADER: &str = "\n\n# The following are the contents of the repository:\n";

/// Indentation added per directory level in the tree listing.
pub const TREE_INDENT: &str = "  ";

/// User agent sent with every request (GitHub rejects requests without one).
pub const USER_AGENT: &str = concat!("repo2ai/", env!("CARGO_PKG_VERSION"));
