//! CLI command implementations

pub mod download;
pub mod links;
pub mod tiles;
