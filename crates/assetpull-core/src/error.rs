//! Error taxonomy for a fetch run.
//!
//! Every variant is fatal: the run stops at the first one and nothing is retried.

use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single HTTP transfer, before anything touches the disk.
#[derive(Debug, Error)]
pub enum TransferError {
    /// Curl reported an error (DNS, connection refused, timeout, etc.).
    #[error(transparent)]
    Curl(#[from] curl::Error),

    /// HTTP response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),

    /// `base_url + filename` did not parse as a URL.
    #[error("invalid URL {url:?}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// URL parsed but is not http or https.
    #[error("unsupported URL scheme {0:?} (expected http or https)")]
    UnsupportedScheme(String),
}

/// Error that aborts a whole fetch run.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Base URL is not an http(s) prefix; nothing was created or requested.
    #[error("invalid base URL {base_url:?}")]
    InvalidBaseUrl {
        base_url: String,
        #[source]
        source: TransferError,
    },

    /// Destination path is unusable (already exists, is a file, missing parent, ...).
    #[error("cannot create destination directory {}", path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Network or HTTP failure for one asset.
    #[error("failed to fetch {filename} from {url}")]
    Fetch {
        filename: String,
        url: String,
        #[source]
        source: TransferError,
    },

    /// Local write failure (permissions, disk full) while saving a fetched asset.
    #[error("failed to write {filename} to {}", path.display())]
    Write {
        filename: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    /// Manifest entry the run stopped on, if the failure was per-asset.
    pub fn filename(&self) -> Option<&str> {
        match self {
            FetchError::InvalidBaseUrl { .. } | FetchError::DirectoryCreation { .. } => None,
            FetchError::Fetch { filename, .. } | FetchError::Write { filename, .. } => {
                Some(filename)
            }
        }
    }

    /// HTTP status of the failed request, when the server answered with one.
    pub fn http_status(&self) -> Option<u32> {
        match self {
            FetchError::Fetch {
                source: TransferError::Http(code),
                ..
            } => Some(*code),
            _ => None,
        }
    }
}
