//! Error types for the link harvester

use thiserror::Error;

/// Failure of a single page fetch
///
/// Either variant stops the harvest; neither is retried.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Server answered with a non-2xx status
    #[error("HTTP {status} fetching {url}")]
    HttpStatus {
        /// Page URL
        url: String,
        /// Response status
        status: reqwest::StatusCode,
    },

    /// DNS, connection, timeout or body read failure
    #[error("Network error fetching {url}: {source}")]
    Network {
        /// Page URL
        url: String,
        /// Underlying reqwest error
        #[source]
        source: reqwest::Error,
    },
}

/// Errors that abort the harvester before or after the page loop
#[derive(Debug, Error)]
pub enum LinksError {
    /// HTTP client construction failed
    #[error("HTTP client error: {0}")]
    ClientError(#[from] reqwest::Error),

    /// Token contains characters not allowed in a header value
    #[error("Token is not a valid header value")]
    InvalidToken,

    /// Listing URL template produced an invalid URL
    #[error("URL error: {0}")]
    UrlError(#[from] crate::url::UrlError),

    /// Invalid configuration
    #[error("Config error: {0}")]
    ConfigError(#[from] harvestlab_core::HarvestlabError),

    /// CSV serialization error
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
