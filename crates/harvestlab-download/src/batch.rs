//! Sequential loop over every link of a links file

use crate::client::build_client;
use crate::error::{DownloadError, LinkError};
use crate::fetch::download_link;
use crate::links::read_links;
use harvestlab_core::DownloadConfig;
use log::{debug, warn};
use reqwest::blocking::Client;
use std::fs;
use std::path::{Path, PathBuf};

/// Receives progress of the download loop
///
/// `index` is 1-based, `total` is the number of links read.
pub trait LinkObserver {
    fn link_started(&mut self, _index: usize, _total: usize, _url: &str) {}
    fn link_saved(&mut self, _index: usize, _path: &Path) {}
    fn link_skipped(&mut self, _index: usize, _error: &LinkError) {}
}

/// Observer that ignores every event
#[derive(Debug, Default)]
pub struct NoopObserver;

impl LinkObserver for NoopObserver {}

#[derive(Debug)]
pub struct SavedLink {
    pub index: usize,
    pub url: String,
    pub path: PathBuf,
}

#[derive(Debug)]
pub struct SkippedLink {
    pub index: usize,
    pub url: String,
    pub error: LinkError,
}

/// Outcome of a download batch, both lists in link order
#[derive(Debug, Default)]
pub struct DownloadReport {
    pub saved: Vec<SavedLink>,
    pub skipped: Vec<SkippedLink>,
}

impl DownloadReport {
    pub fn total(&self) -> usize {
        self.saved.len() + self.skipped.len()
    }
}

/// Downloads `links` one at a time into `output_dir`
///
/// A failing link is reported and skipped. Links that resolve to the same
/// file name overwrite each other, the later one wins.
pub fn download_all(
    client: &Client,
    links: &[String],
    output_dir: &Path,
    observer: &mut dyn LinkObserver,
) -> DownloadReport {
    let total = links.len();
    let mut report = DownloadReport::default();

    for (index, url) in (1..).zip(links) {
        debug!("Downloading #{} / {}: {}", index, total, url);
        observer.link_started(index, total, url);

        match download_link(client, url, output_dir, index) {
            Ok(path) => {
                observer.link_saved(index, &path);
                report.saved.push(SavedLink {
                    index,
                    url: url.clone(),
                    path,
                });
            }
            Err(error) => {
                warn!("Skipping link #{}: {}", index, error);
                observer.link_skipped(index, &error);
                report.skipped.push(SkippedLink {
                    index,
                    url: url.clone(),
                    error,
                });
            }
        }
    }

    report
}

/// Runs the whole downloader: links file, output directory, client, loop
///
/// # Errors
///
/// Returns error if the configuration is invalid, the links file cannot
/// be read, the output directory cannot be created or the client cannot
/// be built. Per-link failures are in the report instead.
pub fn run(
    config: &DownloadConfig,
    observer: &mut dyn LinkObserver,
) -> Result<DownloadReport, DownloadError> {
    config.validate()?;

    let links = read_links(&config.links_file)?;
    debug!(
        "Read {} links from {}",
        links.len(),
        config.links_file.display()
    );

    fs::create_dir_all(&config.output_dir).map_err(|source| DownloadError::CreateDir {
        path: config.output_dir.clone(),
        source,
    })?;

    let client = build_client(config)?;
    Ok(download_all(&client, &links, &config.output_dir, observer))
}
