//! HTTP client construction for listing page requests

use crate::error::LinksError;
use harvestlab_core::LinksConfig;
use harvestlab_core::config::consts::TOKEN_ENV;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};

/// Builds the HTTP client shared by every page fetch
///
/// Every request carries the configured user agent, `Accept: text/html`
/// and, when a token is given, `Authorization: Bearer <token>`.
///
/// # Arguments
///
/// * `config` - Harvester settings (user agent, timeout)
/// * `token` - Optional bearer token
///
/// # Errors
///
/// Returns error if the token is not a valid header value or client
/// construction fails
pub fn build_client(config: &LinksConfig, token: Option<&str>) -> Result<Client, LinksError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("text/html"));

    if let Some(token) = token {
        let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| LinksError::InvalidToken)?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    Ok(Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout())
        .default_headers(headers)
        .build()?)
}

/// Picks the bearer token: an explicit value wins over `GITHUB_TOKEN`
///
/// Empty strings count as "no token".
pub fn resolve_token(explicit: Option<&str>) -> Option<String> {
    explicit
        .map(str::to_string)
        .or_else(|| std::env::var(TOKEN_ENV).ok())
        .filter(|token| !token.trim().is_empty())
}
