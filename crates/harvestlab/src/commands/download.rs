//! `harvestlab download` - sequential link downloader (thin endpoint layer)

use crate::cli::DownloadArgs;
use crate::context::Context;
use crate::output::{print_json, print_progress, print_text};
use anyhow::Result;
use colored::Colorize;
use harvestlab_core::DownloadConfig;
use harvestlab_download::{DownloadReport, LinkError, LinkObserver, NoopObserver};
use serde::Serialize;
use std::path::Path;

/// Summary output schema
#[derive(Debug, Serialize)]
struct DownloadSummary {
    output_dir: String,
    total: usize,
    saved: Vec<SavedEntry>,
    skipped: Vec<SkippedEntry>,
}

#[derive(Debug, Serialize)]
struct SavedEntry {
    index: usize,
    url: String,
    path: String,
}

#[derive(Debug, Serialize)]
struct SkippedEntry {
    index: usize,
    url: String,
    error: String,
}

/// Prints `#i / N` progress per link
struct ConsoleObserver;

impl LinkObserver for ConsoleObserver {
    fn link_started(&mut self, index: usize, total: usize, url: &str) {
        print_progress(&format!("Processing #{index} / {total}: {url}"));
    }

    fn link_saved(&mut self, _index: usize, path: &Path) {
        print_progress(&format!("  Saved to {}", path.display()).green().to_string());
    }

    fn link_skipped(&mut self, index: usize, error: &LinkError) {
        print_progress(&format!("  Skipping #{index}: {error}").yellow().to_string());
    }
}

/// Run the link downloader
///
/// # Returns
///
/// Ok(()) even when some links were skipped
pub fn run(ctx: Context, args: DownloadArgs) -> Result<()> {
    let config = apply_overrides(ctx.config.download, &args);

    if ctx.verbose {
        eprintln!(
            "Downloading links from {} into {}",
            config.links_file.display(),
            config.output_dir.display()
        );
    }

    let report = if args.json {
        harvestlab_download::run(&config, &mut NoopObserver)?
    } else {
        harvestlab_download::run(&config, &mut ConsoleObserver)?
    };
    let summary = summarize(&config, &report);

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

fn apply_overrides(mut config: DownloadConfig, args: &DownloadArgs) -> DownloadConfig {
    if let Some(input) = &args.input {
        config.links_file = input.clone();
    }
    if let Some(out_dir) = &args.out_dir {
        config.output_dir = out_dir.clone();
    }
    if let Some(timeout_secs) = args.timeout_secs {
        config.timeout_secs = timeout_secs;
    }
    config
}

fn summarize(config: &DownloadConfig, report: &DownloadReport) -> DownloadSummary {
    DownloadSummary {
        output_dir: config.output_dir.display().to_string(),
        total: report.total(),
        saved: report
            .saved
            .iter()
            .map(|saved| SavedEntry {
                index: saved.index,
                url: saved.url.clone(),
                path: saved.path.display().to_string(),
            })
            .collect(),
        skipped: report
            .skipped
            .iter()
            .map(|skipped| SkippedEntry {
                index: skipped.index,
                url: skipped.url.clone(),
                error: skipped.error.to_string(),
            })
            .collect(),
    }
}

fn print_human_readable_summary(summary: &DownloadSummary) -> std::io::Result<()> {
    let line = format!(
        "Download complete. {} saved, {} skipped of {} links.",
        summary.saved.len(),
        summary.skipped.len(),
        summary.total
    );
    if summary.skipped.is_empty() {
        print_text(&line.green().to_string())
    } else {
        print_text(&line.yellow().to_string())
    }
}
