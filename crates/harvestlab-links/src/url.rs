//! URL construction helpers for listing pages and repository links

use harvestlab_core::config::consts::PAGE_PLACEHOLDER;
use thiserror::Error;
use url::Url;

/// Builds the URL of one listing page
///
/// # Arguments
///
/// * `template` - Listing URL containing `{page}`
/// * `page` - 1-based page index
///
/// # Errors
///
/// Returns error if the template lacks the placeholder or the result does not parse
pub fn page_url(template: &str, page: u32) -> Result<Url, UrlError> {
    if !template.contains(PAGE_PLACEHOLDER) {
        return Err(UrlError::MissingPlaceholder {
            template: template.to_string(),
        });
    }

    let url = template.replace(PAGE_PLACEHOLDER, &page.to_string());
    Ok(Url::parse(&url)?)
}

/// Builds the canonical `<base>/<owner>/<repo>` URL
///
/// Segments are joined verbatim; the href filter is syntactic and so is this.
pub fn repo_url(link_base: &str, owner: &str, repo: &str) -> String {
    format!("{}/{}/{}", link_base.trim_end_matches('/'), owner, repo)
}

/// URL construction errors
#[derive(Debug, Error)]
pub enum UrlError {
    /// Template has nowhere to put the page index
    #[error("Listing URL has no {{page}} placeholder: {template}")]
    MissingPlaceholder {
        /// The offending template
        template: String,
    },

    /// Invalid URL parse error
    #[error("Invalid URL: {0}")]
    ParseError(#[from] url::ParseError),
}
