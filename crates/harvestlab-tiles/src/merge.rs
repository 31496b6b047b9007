//! Driving loop: collect, assemble and save every group

use crate::assemble::{assemble, load_chunk};
use crate::collect::{ChunkGroup, MalformedGroup, collect_chunks};
use crate::error::TileError;
use crate::write::save_composite;
use harvestlab_core::TilesConfig;
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// A group that was complete but could not be merged
#[derive(Debug)]
pub struct GroupFailure {
    pub id: String,
    pub error: TileError,
}

/// Outcome of [`merge_all`]
#[derive(Debug, Default)]
pub struct MergeReport {
    /// `(id, composite path)` per saved group, ascending by id
    pub saved: Vec<(String, PathBuf)>,
    pub failed: Vec<GroupFailure>,
    /// Groups rejected before assembly
    pub skipped: Vec<MalformedGroup>,
}

impl MergeReport {
    /// Complete groups found (saved + failed)
    pub fn total_groups(&self) -> usize {
        self.saved.len() + self.failed.len()
    }

    /// Groups that produced no composite (failed + skipped)
    pub fn unmerged(&self) -> usize {
        self.failed.len() + self.skipped.len()
    }
}

/// Loads, assembles and saves one complete group
///
/// Decoded chunks and intermediate canvases are dropped before this returns.
///
/// # Errors
///
/// Returns the first chunk that fails to load, or the save failure
pub fn merge_group(group: &ChunkGroup, output_dir: &Path, quality: u8) -> Result<PathBuf, TileError> {
    let chunks = group
        .chunks
        .iter()
        .map(|path| load_chunk(path))
        .collect::<Result<Vec<_>, _>>()?;

    let composite = assemble(&chunks)?;
    save_composite(&composite, output_dir, &group.id, quality)
}

/// Merges every complete group of `config.source_dir` into `config.output_dir`
///
/// The output directory is created if absent. A failing group is recorded
/// and the loop moves on.
///
/// # Errors
///
/// Returns error if the configuration is invalid, the output directory
/// cannot be created, or the source directory cannot be listed
pub fn merge_all(config: &TilesConfig) -> Result<MergeReport, TileError> {
    config.validate()?;

    fs::create_dir_all(&config.output_dir).map_err(|e| TileError::io(&config.output_dir, e))?;

    let collection = collect_chunks(&config.source_dir)?;
    info!("Found {} complete chunk groups", collection.groups.len());

    let mut report = MergeReport {
        skipped: collection.malformed,
        ..Default::default()
    };

    for group in &collection.groups {
        match merge_group(group, &config.output_dir, config.jpeg_quality) {
            Ok(path) => {
                info!("Saved: {}", path.display());
                report.saved.push((group.id.clone(), path));
            }
            Err(error) => {
                warn!("Group {} failed: {}", group.id, error);
                report.failed.push(GroupFailure {
                    id: group.id.clone(),
                    error,
                });
            }
        }
    }

    info!(
        "Merge finished: {} saved, {} failed, {} skipped",
        report.saved.len(),
        report.failed.len(),
        report.skipped.len()
    );

    Ok(report)
}
