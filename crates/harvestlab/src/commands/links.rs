//! `harvestlab links` - repository link harvester (thin endpoint layer)

use crate::cli::LinksArgs;
use crate::context::Context;
use crate::output::{print_json, print_progress, print_text};
use anyhow::Result;
use colored::Colorize;
use harvestlab_core::LinksConfig;
use harvestlab_links::{FetchError, PageObserver, PageProgress, resolve_token};
use serde::Serialize;
use url::Url;

/// Summary output schema
#[derive(Debug, Serialize)]
struct LinksSummary {
    output: String,
    repositories: usize,
    pages_fetched: u32,
    total_pages: u32,
    completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    stopped_by: Option<String>,
}

/// Prints one progress block per page
struct ConsoleObserver;

impl PageObserver for ConsoleObserver {
    fn page_started(&mut self, page: u32, total_pages: u32, url: &Url) {
        print_progress(&format!("Fetching page {page}/{total_pages}: {url}"));
    }

    fn page_merged(&mut self, progress: &PageProgress) {
        print_progress(&format!(
            "  Found {} candidate links on this page.",
            progress.found
        ));
        print_progress(&format!(
            "  Total unique repos so far: {} (added {})",
            progress.after,
            progress.added()
        ));
    }

    fn page_failed(&mut self, page: u32, error: &FetchError) {
        let kind = match error {
            FetchError::HttpStatus { .. } => "HTTP error",
            FetchError::Network { .. } => "Network error",
        };
        print_progress(&format!("{} on page {}: {}", kind, page, error).red().to_string());
    }
}

/// Run the link harvester
///
/// # Returns
///
/// Ok(()) even when the page loop stopped early; the partial CSV is written
pub fn run(ctx: Context, args: LinksArgs) -> Result<()> {
    let config = apply_overrides(ctx.config.links, &args);
    let token = resolve_token(args.token.as_deref());

    if ctx.verbose {
        eprintln!(
            "Harvesting {} page(s) from {} ({})",
            config.total_pages,
            config.listing_url,
            if token.is_some() { "authenticated" } else { "anonymous" }
        );
    }

    let report = if args.json {
        harvestlab_links::run(&config, token.as_deref(), &mut harvestlab_links::NoopObserver)?
    } else {
        harvestlab_links::run(&config, token.as_deref(), &mut ConsoleObserver)?
    };

    let summary = LinksSummary {
        output: config.output.display().to_string(),
        repositories: report.links.len(),
        pages_fetched: report.pages_fetched,
        total_pages: config.total_pages,
        completed: report.completed(),
        stopped_by: report.stopped_by.as_ref().map(ToString::to_string),
    };

    if args.json {
        print_json(&summary)?;
    } else {
        print_human_readable_summary(&summary)?;
    }

    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn apply_overrides(mut config: LinksConfig, args: &LinksArgs) -> LinksConfig {
    if let Some(listing_url) = &args.listing_url {
        config.listing_url = listing_url.clone();
    }
    if let Some(pages) = args.pages {
        config.total_pages = pages;
    }
    if let Some(output) = &args.output {
        config.output = output.clone();
    }
    if let Some(delay_ms) = args.delay_ms {
        config.page_delay_ms = delay_ms;
    }
    if let Some(owner) = &args.owner {
        config.owner = Some(owner.clone());
    }
    config
}

fn print_human_readable_summary(summary: &LinksSummary) -> std::io::Result<()> {
    if let Some(reason) = &summary.stopped_by {
        print_text(
            &format!(
                "Stopped after {}/{} pages: {}",
                summary.pages_fetched, summary.total_pages, reason
            )
            .yellow()
            .to_string(),
        )?;
    }

    print_text(&format!("Extracted {} repository URLs in total.", summary.repositories))?;
    print_text(
        &format!(
            "Saved {} repositories to {}",
            summary.repositories, summary.output
        )
        .green()
        .to_string(),
    )
}
