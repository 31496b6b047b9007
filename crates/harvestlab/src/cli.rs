//! CLI command structure using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "harvestlab")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (default: ./harvestlab.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Harvest repository links from paginated listing pages into a CSV file
    Links(LinksArgs),

    /// Reassemble 8-chunk image groups into <id>.jpg composites
    Tiles(TilesArgs),

    /// Download every link of a links file, one at a time
    Download(DownloadArgs),
}

#[derive(Args, Default)]
pub struct LinksArgs {
    /// Listing URL template containing {page}
    #[arg(long)]
    pub listing_url: Option<String>,

    /// Number of pages to fetch
    #[arg(short, long)]
    pub pages: Option<u32>,

    /// CSV output path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Delay between page fetches in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Keep only links owned by this account
    #[arg(long)]
    pub owner: Option<String>,

    /// Bearer token (falls back to GITHUB_TOKEN)
    #[arg(long)]
    pub token: Option<String>,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Default)]
pub struct TilesArgs {
    /// Directory containing <id>-<n> chunk files
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// Directory receiving composites (created if absent)
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// JPEG quality (1-100)
    #[arg(short, long)]
    pub quality: Option<u8>,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Default)]
pub struct DownloadArgs {
    /// Links file: one URL per line, or a CSV whose first column holds URLs
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Directory receiving downloads (created if absent)
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Seconds allowed per link, body included
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}
