//! Page loop aggregating candidate links across the whole listing

use crate::client::build_client;
use crate::error::{FetchError, LinksError};
use crate::extract::{LinkFilter, extract_repo_links};
use crate::fetch::fetch_page;
use crate::url::page_url;
use crate::write::write_csv;
use harvestlab_core::LinksConfig;
use log::{debug, warn};
use reqwest::blocking::Client;
use std::collections::BTreeSet;
use std::thread;
use url::Url;

/// Counts reported after a page has been merged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageProgress {
    pub page: u32,
    pub total_pages: u32,
    /// Distinct candidates on this page
    pub found: usize,
    /// Aggregate size before the merge
    pub before: usize,
    /// Aggregate size after the merge
    pub after: usize,
}

impl PageProgress {
    pub fn added(&self) -> usize {
        self.after - self.before
    }
}

/// Receives progress of the page loop
pub trait PageObserver {
    fn page_started(&mut self, _page: u32, _total_pages: u32, _url: &Url) {}
    fn page_merged(&mut self, _progress: &PageProgress) {}
    fn page_failed(&mut self, _page: u32, _error: &FetchError) {}
}

/// Observer that ignores every event
#[derive(Debug, Default)]
pub struct NoopObserver;

impl PageObserver for NoopObserver {}

/// Outcome of a harvest
#[derive(Debug, Default)]
pub struct HarvestReport {
    /// Deduplicated links in lexicographic order
    pub links: BTreeSet<String>,
    /// Pages fetched and merged successfully
    pub pages_fetched: u32,
    /// The failure that ended the loop early, if any
    pub stopped_by: Option<FetchError>,
}

impl HarvestReport {
    pub fn completed(&self) -> bool {
        self.stopped_by.is_none()
    }
}

/// Fetches pages `1..=total_pages` in order and merges their links
///
/// The first fetch failure stops the loop; links gathered up to that
/// point stay in the report. Pages are separated by the configured delay.
///
/// # Errors
///
/// Returns error only if a page URL cannot be built from the template
pub fn harvest(
    client: &Client,
    config: &LinksConfig,
    observer: &mut dyn PageObserver,
) -> Result<HarvestReport, LinksError> {
    let filter = LinkFilter::from_owner(config.owner.as_deref());
    let mut report = HarvestReport::default();

    for page in 1..=config.total_pages {
        if page > 1 && !config.page_delay().is_zero() {
            thread::sleep(config.page_delay());
        }

        let url = page_url(&config.listing_url, page)?;
        debug!("Fetching page {}/{}: {}", page, config.total_pages, url);
        observer.page_started(page, config.total_pages, &url);

        let html = match fetch_page(client, &url) {
            Ok(html) => html,
            Err(err) => {
                warn!("Stopping at page {}: {}", page, err);
                observer.page_failed(page, &err);
                report.stopped_by = Some(err);
                break;
            }
        };

        let found = extract_repo_links(&html, &config.link_base, &filter);
        let before = report.links.len();
        let found_count = found.len();
        report.links.extend(found);
        report.pages_fetched += 1;

        let progress = PageProgress {
            page,
            total_pages: config.total_pages,
            found: found_count,
            before,
            after: report.links.len(),
        };
        debug!(
            "Page {}: {} candidates, {} unique so far (added {})",
            progress.page,
            progress.found,
            progress.after,
            progress.added()
        );
        observer.page_merged(&progress);
    }

    Ok(report)
}

/// Runs the whole harvester: client, page loop, CSV output
///
/// The CSV is written even when the loop stopped early.
///
/// # Arguments
///
/// * `config` - Harvester settings
/// * `token` - Optional bearer token
/// * `observer` - Progress receiver
///
/// # Errors
///
/// Returns error if the configuration is invalid, the client cannot be
/// built, or the output cannot be written
pub fn run(
    config: &LinksConfig,
    token: Option<&str>,
    observer: &mut dyn PageObserver,
) -> Result<HarvestReport, LinksError> {
    config.validate()?;

    let client = build_client(config, token)?;
    let report = harvest(&client, config, observer)?;

    write_csv(&config.output, &report.links)?;
    debug!(
        "Saved {} repositories to {}",
        report.links.len(),
        config.output.display()
    );

    Ok(report)
}
