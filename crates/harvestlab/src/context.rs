//! Global context for CLI commands

use anyhow::{Context as _, Result};
use harvestlab_core::Config;
use harvestlab_core::config::consts::CONFIG_FILE_NAME;
use std::path::Path;

/// Loaded configuration shared by the commands
pub struct Context {
    pub config: Config,
    pub verbose: bool,
}

impl Context {
    /// Loads the configuration
    ///
    /// An explicit path must exist. Without one, `./harvestlab.toml` is
    /// used when present and the built-in defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load(config_path: Option<&Path>, verbose: bool) -> Result<Self> {
        let config = match config_path {
            Some(path) => Config::from_file(path)
                .with_context(|| format!("Failed to load {}", path.display()))?,
            None => Config::load_or_default(CONFIG_FILE_NAME)?,
        };

        log::debug!("Loaded configuration: {config:?}");

        Ok(Self { config, verbose })
    }
}
