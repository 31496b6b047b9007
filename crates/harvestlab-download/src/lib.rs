//! Sequential downloader for a list of links.
//!
//! # Pipeline
//!
//! ```text
//! run()
//!     ↓
//! 1. read_links()       one URL per line, or the first column of a CSV
//!     ↓
//! 2. build_client()     user agent, connect timeout, per-link timeout
//!     ↓
//! 3. download_all()     for link in links, one at a time
//!     → download_link() GET, reject non-2xx and bare HTML pages
//!     → file_name_for() Content-Disposition, URL path, download_<n>
//!     → <output_dir>/<name>
//! ```
//!
//! A failing link is skipped and the loop continues; [`DownloadReport`]
//! keeps the saved files and the reasons for every skip.

pub mod batch;
pub mod client;
pub mod error;
pub mod fetch;
pub mod links;
pub mod name;

// Re-export commonly used types
pub use batch::{
    DownloadReport, LinkObserver, NoopObserver, SavedLink, SkippedLink, download_all, run,
};
pub use client::build_client;
pub use error::{DownloadError, LinkError};
pub use fetch::download_link;
pub use links::read_links;
pub use name::file_name_for;

pub type Result<T> = std::result::Result<T, DownloadError>;
