// src/cli.rs

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_ARCHIVE_BASE_URL, DEFAULT_DESTINATION, DEFAULT_OUTPUT_FILE,
    DEFAULT_REPO_URL,
};
use clap::Parser;

/// Flattens a GitHub repository into a single text document.
///
/// repo2ai downloads the repository's default branch as a ZIP archive, extracts it,
/// writes an indented tree of its files to the output document, and then appends
/// every file's contents in a fenced block tagged with its language. The result is
/// suited to tools that consume one large text input, such as Large Language Models.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// URL of the GitHub repository (must start with https://github.com/).
    #[arg(default_value = DEFAULT_REPO_URL)]
    pub repo_url: String,

    /// Directory to extract the repository into. Deleted and recreated on every run.
    #[arg(short = 'd', long = "dest", value_name = "PATH", default_value = DEFAULT_DESTINATION)]
    pub destination: String,

    /// File to write the tree listing and file contents to.
    #[arg(short = 'o', long = "output", value_name = "FILE", default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: String,

    /// Download this branch instead of looking up the repository's default branch.
    #[arg(short = 'b', long, alias = "branch", value_name = "BRANCH")]
    pub git_branch: Option<String>,

    /// Base URL of the GitHub REST API (for GitHub Enterprise hosts).
    #[arg(long, value_name = "URL", default_value = DEFAULT_API_BASE_URL)]
    pub api_url: String,

    /// Base URL of the host serving branch archives.
    #[arg(long, value_name = "URL", default_value = DEFAULT_ARCHIVE_BASE_URL)]
    pub archive_url: String,
}
