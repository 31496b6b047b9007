use super::consts::{self, PAGE_PLACEHOLDER};
use crate::error::{HarvestlabError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// harvestlab.toml schema
///
/// Every section and field is optional; missing values fall back to the
/// defaults in [`consts`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub links: LinksConfig,
    #[serde(default)]
    pub tiles: TilesConfig,
    #[serde(default)]
    pub download: DownloadConfig,
}

/// `[links]` section: repository link harvester
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    /// Listing page URL, `{page}` is replaced by the 1-based page index
    pub listing_url: String,
    /// Scheme and host prefixed to `/<owner>/<repo>` paths
    pub link_base: String,
    pub total_pages: u32,
    pub page_delay_ms: u64,
    pub timeout_secs: u64,
    pub user_agent: String,
    pub output: PathBuf,
    /// Only keep links whose owner segment equals this value
    pub owner: Option<String>,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            listing_url: consts::links::LISTING_URL.to_string(),
            link_base: consts::links::LINK_BASE.to_string(),
            total_pages: consts::links::TOTAL_PAGES,
            page_delay_ms: consts::links::PAGE_DELAY_MS,
            timeout_secs: consts::links::TIMEOUT_SECS,
            user_agent: consts::links::USER_AGENT.to_string(),
            output: PathBuf::from(consts::links::OUTPUT),
            owner: None,
        }
    }
}

impl LinksConfig {
    pub fn page_delay(&self) -> Duration {
        Duration::from_millis(self.page_delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.listing_url.contains(PAGE_PLACEHOLDER) {
            return Err(HarvestlabError::invalid(
                "links.listing_url",
                format!("must contain the {PAGE_PLACEHOLDER} placeholder"),
            ));
        }

        if self.total_pages == 0 {
            return Err(HarvestlabError::invalid(
                "links.total_pages",
                "must be at least 1",
            ));
        }

        if self.timeout_secs == 0 {
            return Err(HarvestlabError::invalid(
                "links.timeout_secs",
                "must be at least 1",
            ));
        }

        let base = url::Url::parse(&self.link_base)
            .map_err(|e| HarvestlabError::invalid("links.link_base", e.to_string()))?;
        if !matches!(base.scheme(), "http" | "https") || base.host_str().is_none() {
            return Err(HarvestlabError::invalid(
                "links.link_base",
                "must be an absolute http(s) URL",
            ));
        }

        if let Some(owner) = &self.owner
            && (owner.is_empty() || owner.contains('/'))
        {
            return Err(HarvestlabError::invalid(
                "links.owner",
                "must be a single non-empty path segment",
            ));
        }

        Ok(())
    }
}

/// `[tiles]` section: chunk tile merger
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TilesConfig {
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    pub jpeg_quality: u8,
}

impl Default for TilesConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(consts::tiles::SOURCE_DIR),
            output_dir: PathBuf::from(consts::tiles::OUTPUT_DIR),
            jpeg_quality: consts::tiles::JPEG_QUALITY,
        }
    }
}

impl TilesConfig {
    pub fn validate(&self) -> Result<()> {
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(HarvestlabError::invalid(
                "tiles.jpeg_quality",
                format!("{} is outside 1..=100", self.jpeg_quality),
            ));
        }
        Ok(())
    }
}

/// `[download]` section: sequential link downloader
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DownloadConfig {
    pub links_file: PathBuf,
    pub output_dir: PathBuf,
    pub connect_timeout_secs: u64,
    /// Whole-request limit per link
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            links_file: PathBuf::from(consts::download::LINKS_FILE),
            output_dir: PathBuf::from(consts::download::OUTPUT_DIR),
            connect_timeout_secs: consts::download::CONNECT_TIMEOUT_SECS,
            timeout_secs: consts::download::TIMEOUT_SECS,
            user_agent: consts::links::USER_AGENT.to_string(),
        }
    }
}

impl DownloadConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<()> {
        if self.connect_timeout_secs == 0 {
            return Err(HarvestlabError::invalid(
                "download.connect_timeout_secs",
                "must be at least 1",
            ));
        }
        if self.timeout_secs == 0 {
            return Err(HarvestlabError::invalid(
                "download.timeout_secs",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

impl Config {
    /// Reads and parses a harvestlab.toml file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| HarvestlabError::ConfigParseError(e.to_string()))?;

        Self::from_toml(&content)
    }

    /// Loads `path` if it exists, otherwise returns the defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| HarvestlabError::ConfigParseError(e.to_string()))
    }

    /// Checks value ranges the type system cannot express
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalidValue` naming the first offending field
    pub fn validate(&self) -> Result<()> {
        self.links.validate()?;
        self.tiles.validate()?;
        self.download.validate()
    }
}
