//! Single listing page fetch

use crate::error::FetchError;
use reqwest::blocking::Client;
use url::Url;

/// Fetches one listing page and returns its markup
///
/// # Arguments
///
/// * `client` - HTTP client from [`crate::build_client`]
/// * `url` - Fully formed page URL
///
/// # Errors
///
/// Returns error if:
/// - The request cannot be sent or times out (`Network`)
/// - Response status is not success (`HttpStatus`)
/// - The body cannot be read (`Network`)
pub fn fetch_page(client: &Client, url: &Url) -> Result<String, FetchError> {
    let response = client
        .get(url.as_str())
        .send()
        .map_err(|source| FetchError::Network {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::HttpStatus {
            url: url.to_string(),
            status,
        });
    }

    response.text().map_err(|source| FetchError::Network {
        url: url.to_string(),
        source,
    })
}
