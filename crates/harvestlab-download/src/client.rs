//! HTTP client construction for link downloads

use crate::error::DownloadError;
use harvestlab_core::DownloadConfig;
use reqwest::blocking::Client;

/// Builds the client shared by every link
///
/// `connect_timeout` bounds reaching the host, `timeout` bounds the whole
/// link including the body.
///
/// # Errors
///
/// Returns error if client construction fails
pub fn build_client(config: &DownloadConfig) -> Result<Client, DownloadError> {
    Ok(Client::builder()
        .user_agent(config.user_agent.as_str())
        .connect_timeout(config.connect_timeout())
        .timeout(config.timeout())
        .build()?)
}
