//! Shared configuration and error types for the harvestlab pipelines.

// Core modules
pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::{Config, DownloadConfig, LinksConfig, TilesConfig};
pub use error::{HarvestlabError, Result};
