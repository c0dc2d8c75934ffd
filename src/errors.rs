//! Defines application-specific error types.
//!
//! Every stage of the pipeline returns [`Result`], whose [`Error`] variants map
//! one-to-one onto the failure kinds a run can hit: bad input, a failed HTTP
//! request, a corrupt archive, or a filesystem problem.

use thiserror::Error;

/// Errors produced while resolving, downloading, describing, or appending a repository.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The repository URL or a provided root path was rejected before any work was done.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An HTTP request failed or returned a non-success status.
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        /// The URL that was requested.
        url: String,
        /// The underlying `reqwest::Error`.
        #[source]
        source: reqwest::Error,
    },

    /// The connection failed while the response body was being streamed.
    #[error("Download from '{url}' failed mid-stream: {source}")]
    Stream {
        /// The URL being downloaded.
        url: String,
        /// The underlying read error.
        #[source]
        source: std::io::Error,
    },

    /// The downloaded bytes could not be read or extracted as a ZIP archive.
    #[error("Failed to extract ZIP archive from '{url}': {source}")]
    Archive {
        /// The URL the archive was downloaded from.
        url: String,
        /// The underlying `zip` error.
        #[source]
        source: zip::result::ZipError,
    },

    /// Error occurring during file or directory access (read, write, delete).
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// An option value failed validation while building the configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised by [`crate::config::ConfigBuilder::build`].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// An option was given a value it cannot accept.
    #[error("Invalid value for {option}: {reason}")]
    InvalidValue {
        /// The offending option, as spelled on the command line.
        option: String,
        /// Why the value was rejected.
        reason: String,
    },
}

/// A `Result` alias using this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Helper function to create an `Error::Io` with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error, convertible to `AsRef<std::path::Path>`.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{io, path::PathBuf};

    #[test]
    fn test_io_error_with_path_helper() {
        let path = PathBuf::from("some/test/path.txt");
        let source_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = io_error_with_path(source_error, &path);

        match error {
            Error::Io {
                path: error_path,
                source,
            } => {
                assert!(error_path.contains("some/test/path.txt"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            _ => panic!("Expected Error::Io"),
        }

        let error_perm = io_error_with_path(
            io::Error::new(io::ErrorKind::PermissionDenied, "Access denied"),
            "another/path",
        );
        let message = error_perm.to_string();
        assert!(message.contains("another/path"));
        assert!(message.contains("Access denied"));
    }

    #[test]
    fn test_config_error_is_transparent() {
        let error: Error = ConfigError::InvalidValue {
            option: "--api-url".to_string(),
            reason: "must use http or https".to_string(),
        }
        .into();
        assert_eq!(
            error.to_string(),
            "Invalid value for --api-url: must use http or https"
        );
    }

    #[test]
    fn test_invalid_input_message() {
        let error = Error::InvalidInput("not a GitHub URL".to_string());
        assert_eq!(error.to_string(), "Invalid input: not a GitHub URL");
    }
}
