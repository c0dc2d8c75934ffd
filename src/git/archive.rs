// src/git/archive.rs
//! Downloads a branch snapshot as a ZIP archive and extracts it locally.

use super::api::{build_reqwest_client, resolve_default_branch, GitHubEndpoints};
use super::url::validate_repo_url;
use crate::errors::{io_error_with_path, Error, Result};
use crate::progress::ProgressReporter;
use reqwest::blocking::Client;
use std::fs;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use zip::ZipArchive;

const DOWNLOAD_CHUNK_SIZE: usize = 64 * 1024;
/// Upper bound on the buffer reserved up front from a `Content-Length` header.
const MAX_PREALLOCATION: u64 = DOWNLOAD_CHUNK_SIZE as u64 * 16;

/// Options for [`download_repo_as_zip`] beyond the URL and destination.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// Branch to download. When `None`, the repository's default branch is resolved.
    pub branch: Option<String>,
    /// Endpoints to query.
    pub endpoints: GitHubEndpoints,
}

/// Downloads a GitHub repository as a ZIP archive and extracts it under `destination`.
///
/// The URL is validated before anything on disk is touched. The destination
/// directory is then deleted (if present) and recreated, so it only ever holds
/// the latest extraction. The archive is extracted to `<destination>/<repo name>`.
///
/// # Returns
/// The path the archive was extracted to.
///
/// # Errors
/// * [`Error::InvalidInput`] if the URL does not start with `https://github.com/`.
/// * [`Error::Transport`] if the metadata lookup or the download request fails.
/// * [`Error::Stream`] if the connection drops while the body is being read.
/// * [`Error::Archive`] if the downloaded bytes are not a valid ZIP.
/// * [`Error::Io`] if the destination cannot be cleared or created.
///
/// # Examples
/// ```no_run
/// use repo2ai::git::{download_repo_as_zip, FetchOptions};
/// use std::path::Path;
///
/// # fn main() -> repo2ai::errors::Result<()> {
/// let extracted = download_repo_as_zip(
///     "https://github.com/karpathy/cryptos/",
///     Path::new("repo"),
///     &FetchOptions::default(),
///     None,
/// )?;
/// println!("Extracted to {}", extracted.display());
/// # Ok(())
/// # }
/// ```
pub fn download_repo_as_zip(
    repo_url: &str,
    destination: &Path,
    options: &FetchOptions,
    progress: Option<Arc<dyn ProgressReporter>>,
) -> Result<PathBuf> {
    let repo = validate_repo_url(repo_url)?;

    reset_destination(destination)?;

    let client = build_reqwest_client()?;
    let branch = match &options.branch {
        Some(branch) => {
            log::debug!("Using branch from override: {}", branch);
            branch.clone()
        }
        None => resolve_default_branch(repo_url, &options.endpoints, &client)?,
    };
    let zip_url = options.endpoints.archive_url(&repo, &branch);

    log::info!("Downloading repository as ZIP from: {}", zip_url);
    let bytes = download_bytes(&client, &zip_url, progress.as_deref()).map_err(|e| {
        log::error!("Error downloading repository: {}", e);
        e
    })?;

    let extract_path = destination.join(&repo.name);
    extract_archive(bytes, &extract_path, &zip_url).map_err(|e| {
        log::error!("Error extracting ZIP file: {}", e);
        e
    })?;

    log::info!("Repository extracted to: {}", extract_path.display());
    Ok(extract_path)
}

/// Deletes `destination` if it exists and recreates it empty.
fn reset_destination(destination: &Path) -> Result<()> {
    if destination.exists() {
        log::debug!("Removing previous extraction at {}", destination.display());
        fs::remove_dir_all(destination).map_err(|e| io_error_with_path(e, destination))?;
    }
    fs::create_dir_all(destination).map_err(|e| io_error_with_path(e, destination))
}

/// Streams the response body into memory, reporting bytes received.
fn download_bytes(
    client: &Client,
    url: &str,
    progress: Option<&dyn ProgressReporter>,
) -> Result<Vec<u8>> {
    let transport_error = |source| Error::Transport {
        url: url.to_string(),
        source,
    };
    let mut response = client
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(transport_error)?;
    let total = response.content_length();

    if let Some(p) = progress {
        p.begin_bytes(total);
        p.set_message("Downloading archive...".to_string());
    }

    // The header is only a hint; the buffer grows with the bytes actually received.
    let reserve = total.map_or(0, |n| n.min(MAX_PREALLOCATION) as usize);
    let mut bytes = Vec::with_capacity(reserve);
    let mut chunk = vec![0u8; DOWNLOAD_CHUNK_SIZE];
    loop {
        let read = response.read(&mut chunk).map_err(|source| Error::Stream {
            url: url.to_string(),
            source,
        })?;
        if read == 0 {
            break;
        }
        bytes.extend_from_slice(&chunk[..read]);
        if let Some(p) = progress {
            p.set_position(bytes.len() as u64);
        }
    }

    log::debug!("Downloaded {} bytes from {}", bytes.len(), url);
    if let Some(p) = progress {
        p.set_message("Download complete".to_string());
    }
    Ok(bytes)
}

/// Extracts an in-memory ZIP archive into `extract_path`.
///
/// `source_url` only labels errors. An archive with an entry whose name would
/// escape `extract_path` is rejected as [`Error::Archive`]; entries extracted
/// before that one stay on disk.
fn extract_archive(bytes: Vec<u8>, extract_path: &Path, source_url: &str) -> Result<()> {
    let archive_error = |source| Error::Archive {
        url: source_url.to_string(),
        source,
    };
    let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(archive_error)?;
    log::debug!(
        "Extracting {} archive entries to {}",
        archive.len(),
        extract_path.display()
    );
    fs::create_dir_all(extract_path).map_err(|e| io_error_with_path(e, extract_path))?;
    archive.extract(extract_path).map_err(|source| match source {
        zip::result::ZipError::Io(e) => io_error_with_path(e, extract_path),
        other => archive_error(other),
    })
}
