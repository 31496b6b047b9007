//! `harvestlab tiles` - chunk tile merger (thin endpoint layer)

use crate::cli::TilesArgs;
use crate::context::Context;
use crate::output::{print_json, print_text};
use anyhow::Result;
use colored::Colorize;
use harvestlab_core::TilesConfig;
use harvestlab_tiles::{MergeReport, merge_all};
use serde::Serialize;

/// Summary output schema
#[derive(Debug, Serialize)]
struct TilesSummary {
    output_dir: String,
    groups: usize,
    saved: Vec<String>,
    failed: Vec<FailedGroup>,
    skipped: Vec<SkippedGroup>,
}

#[derive(Debug, Serialize)]
struct FailedGroup {
    id: String,
    error: String,
}

#[derive(Debug, Serialize)]
struct SkippedGroup {
    id: String,
    chunks: usize,
    missing: Vec<u8>,
    duplicated: Vec<u8>,
}

/// Run the tile merger
///
/// # Returns
///
/// Ok(()) even when some groups failed or were skipped
pub fn run(ctx: Context, args: TilesArgs) -> Result<()> {
    let config = apply_overrides(ctx.config.tiles, &args);

    if ctx.verbose {
        eprintln!(
            "Merging chunks from {} into {}",
            config.source_dir.display(),
            config.output_dir.display()
        );
    }

    let report = merge_all(&config)?;
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

fn apply_overrides(mut config: TilesConfig, args: &TilesArgs) -> TilesConfig {
    if let Some(source) = &args.source {
        config.source_dir = source.clone();
    }
    if let Some(out_dir) = &args.out_dir {
        config.output_dir = out_dir.clone();
    }
    if let Some(quality) = args.quality {
        config.jpeg_quality = quality;
    }
    config
}

fn summarize(config: &TilesConfig, report: &MergeReport) -> TilesSummary {
    TilesSummary {
        output_dir: config.output_dir.display().to_string(),
        groups: report.total_groups(),
        saved: report.saved.iter().map(|(id, _)| id.clone()).collect(),
        failed: report
            .failed
            .iter()
            .map(|failure| FailedGroup {
                id: failure.id.clone(),
                error: failure.error.to_string(),
            })
            .collect(),
        skipped: report
            .skipped
            .iter()
            .map(|group| SkippedGroup {
                id: group.id.clone(),
                chunks: group.count(),
                missing: group.missing(),
                duplicated: group.duplicated(),
            })
            .collect(),
    }
}

fn describe_indices(skipped: &SkippedGroup) -> String {
    let join = |indices: &[u8]| {
        indices
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut parts = Vec::new();
    if !skipped.missing.is_empty() {
        parts.push(format!("missing {}", join(&skipped.missing)));
    }
    if !skipped.duplicated.is_empty() {
        parts.push(format!("duplicated {}", join(&skipped.duplicated)));
    }
    parts.join("; ")
}

fn print_human_readable_summary(summary: &TilesSummary) -> std::io::Result<()> {
    print_text(&format!("Found {} complete chunk groups", summary.groups))?;

    for skipped in &summary.skipped {
        print_text(
            &format!(
                "Warning: group {} has {} chunks, expected 8 ({}); skipped",
                skipped.id,
                skipped.chunks,
                describe_indices(skipped)
            )
            .yellow()
            .to_string(),
        )?;
    }

    for failed in &summary.failed {
        print_text(&format!("Failed: {}: {}", failed.id, failed.error).red().to_string())?;
    }

    let line = format!(
        "Merge complete. {} succeeded, {} failed, {} skipped.",
        summary.saved.len(),
        summary.failed.len(),
        summary.skipped.len()
    );
    if summary.failed.is_empty() && summary.skipped.is_empty() {
        print_text(&line.green().to_string())
    } else {
        print_text(&line.yellow().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_apply_overrides() {
        let args = TilesArgs {
            source: Some(PathBuf::from("/in")),
            quality: Some(95),
            ..Default::default()
        };

        let config = apply_overrides(TilesConfig::default(), &args);

        assert_eq!(config.source_dir, PathBuf::from("/in"));
        assert_eq!(config.output_dir, PathBuf::from("images/output"));
        assert_eq!(config.jpeg_quality, 95);
    }

    #[test]
    fn test_summarize_counts() {
        let report = MergeReport {
            saved: vec![("001".to_string(), PathBuf::from("out/001.jpg"))],
            failed: Vec::new(),
            skipped: vec![harvestlab_tiles::MalformedGroup {
                id: "002".to_string(),
                indices: vec![1, 2, 3],
            }],
        };

        let summary = summarize(&TilesConfig::default(), &report);

        assert_eq!(summary.groups, 1);
        assert_eq!(summary.saved, vec!["001".to_string()]);
        assert_eq!(summary.skipped[0].chunks, 3);
        assert_eq!(summary.skipped[0].missing, vec![4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_describe_indices_names_duplicates() {
        let skipped = SkippedGroup {
            id: "003".to_string(),
            chunks: 8,
            missing: vec![8],
            duplicated: vec![2],
        };
        assert_eq!(describe_indices(&skipped), "missing 8; duplicated 2");

        let skipped = SkippedGroup {
            id: "004".to_string(),
            chunks: 9,
            missing: Vec::new(),
            duplicated: vec![8],
        };
        assert_eq!(describe_indices(&skipped), "duplicated 8");
    }
}
