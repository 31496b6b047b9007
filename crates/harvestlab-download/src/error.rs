//! Error types for the link downloader

use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single link
///
/// Every variant skips the link; the batch carries on with the next one.
#[derive(Debug, Error)]
pub enum LinkError {
    /// The line is not a URL
    #[error("Invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Only http and https links are fetched
    #[error("Unsupported scheme in {url}")]
    UnsupportedScheme { url: String },

    /// Server answered with a non-2xx status
    #[error("HTTP {status} downloading {url}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// DNS, connection, timeout or body read failure
    #[error("Network error downloading {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The link answered with an HTML page instead of a file
    #[error("No download at {url} (got {content_type})")]
    NotADownload { url: String, content_type: String },

    /// The file could not be written
    #[error("Failed to save {path}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that stop the downloader before the first link
#[derive(Debug, Error)]
pub enum DownloadError {
    /// HTTP client construction failed
    #[error("HTTP client error: {0}")]
    ClientError(#[from] reqwest::Error),

    /// Invalid configuration
    #[error("Config error: {0}")]
    ConfigError(#[from] harvestlab_core::HarvestlabError),

    /// Links file could not be read
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Links file has the `.csv` extension but is not valid CSV
    #[error("Failed to parse {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Output directory could not be created
    #[error("Failed to create {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
