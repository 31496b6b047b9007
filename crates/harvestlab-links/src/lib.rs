//! Repository link harvesting for organization listing pages.
//!
//! # Pipeline
//!
//! ```text
//! run()
//!     ↓
//! 1. build_client()          user agent, timeout, optional bearer token
//!     ↓
//! 2. harvest()               for page in 1..=total_pages
//!     → fetch_page()         GET, non-2xx or transport failure stops the loop
//!     → extract_repo_links() <a href="/owner/repo"> → https://host/owner/repo
//!     → merge into BTreeSet  deduplicated, lexicographic
//!     ↓
//! 3. write_csv()             header `repository_url`, one URL per row
//! ```
//!
//! A fetch failure is not an error of [`run`]: the links gathered before it
//! are still written and the failure is reported in [`HarvestReport::stopped_by`].

pub mod client;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod harvest;
pub mod url;
pub mod write;

// Re-export commonly used types
pub use client::{build_client, resolve_token};
pub use error::{FetchError, LinksError};
pub use extract::{LinkFilter, extract_repo_links};
pub use fetch::fetch_page;
pub use harvest::{HarvestReport, NoopObserver, PageObserver, PageProgress, harvest, run};
pub use write::write_csv;

pub type Result<T> = std::result::Result<T, LinksError>;
