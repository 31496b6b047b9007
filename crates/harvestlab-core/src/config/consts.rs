//! Defaults shared by the configuration model and the CLI.

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "harvestlab.toml";

/// Environment variable holding the optional bearer token
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Placeholder substituted with the page index in listing URLs
pub const PAGE_PLACEHOLDER: &str = "{page}";

/// Link harvester defaults
pub mod links {
    /// Organization repository listing, one page per `{page}`
    pub const LISTING_URL: &str =
        "https://github.com/orgs/kanripo/repositories?type=all&page={page}";

    /// Scheme and host used for canonical repository URLs
    pub const LINK_BASE: &str = "https://github.com";

    /// Number of listing pages to walk
    pub const TOTAL_PAGES: u32 = 312;

    /// Courtesy delay between two page fetches (milliseconds)
    pub const PAGE_DELAY_MS: u64 = 500;

    /// Per-request timeout (seconds)
    pub const TIMEOUT_SECS: u64 = 20;

    /// Descriptive client identifier sent with every request
    pub const USER_AGENT: &str = "GitHub-Repo-Scraper/1.0";

    /// CSV output path
    pub const OUTPUT: &str = "kanripo_repositories.csv";
}

/// Tile merger defaults
pub mod tiles {
    /// Directory scanned for chunk files
    pub const SOURCE_DIR: &str = "images";

    /// Directory receiving `<id>.jpg` composites
    pub const OUTPUT_DIR: &str = "images/output";

    /// JPEG quality for composites
    pub const JPEG_QUALITY: u8 = 75;
}

/// Link downloader defaults
pub mod download {
    /// Links to download, one URL per line (a harvester CSV also works)
    pub const LINKS_FILE: &str = "links.txt";

    /// Directory receiving downloaded files
    pub const OUTPUT_DIR: &str = "downloads";

    /// Time allowed to connect to a link's host (seconds)
    pub const CONNECT_TIMEOUT_SECS: u64 = 15;

    /// Time allowed for one whole link, body included (seconds)
    pub const TIMEOUT_SECS: u64 = 300;
}
