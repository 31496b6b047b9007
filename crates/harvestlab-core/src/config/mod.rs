//! harvestlab.toml configuration

pub mod consts;
pub mod model;

pub use model::{Config, DownloadConfig, LinksConfig, TilesConfig};
