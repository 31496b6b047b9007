//! Chunk discovery and grouping

use crate::error::TileError;
use crate::name::{CHUNKS_PER_GROUP, ParsedChunkName};
use log::{debug, warn};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A complete set of chunks for one composite, ordered 1..=8
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkGroup {
    pub id: String,
    pub chunks: [PathBuf; CHUNKS_PER_GROUP as usize],
}

/// A group that cannot be assembled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedGroup {
    pub id: String,
    /// Chunk indices found, ascending, duplicates kept
    pub indices: Vec<u8>,
}

impl MalformedGroup {
    pub fn count(&self) -> usize {
        self.indices.len()
    }

    /// Indices of 1..=8 with no chunk
    pub fn missing(&self) -> Vec<u8> {
        (1..=CHUNKS_PER_GROUP)
            .filter(|index| !self.indices.contains(index))
            .collect()
    }

    /// Indices present more than once, each listed once
    pub fn duplicated(&self) -> Vec<u8> {
        let mut duplicated: Vec<u8> = self
            .indices
            .windows(2)
            .filter(|pair| pair[0] == pair[1])
            .map(|pair| pair[0])
            .collect();
        duplicated.dedup();
        duplicated
    }
}

/// Groups found in a source directory
#[derive(Debug, Default)]
pub struct Collection {
    /// Complete groups, ascending by id
    pub groups: Vec<ChunkGroup>,
    /// Incomplete or duplicated groups, ascending by id
    pub malformed: Vec<MalformedGroup>,
}

/// Scans `dir` and groups chunk files by id
///
/// Only regular files are considered (symlinks are followed). Dotfiles,
/// directories and names that are not chunk names are ignored.
///
/// # Errors
///
/// Returns error if the directory cannot be listed
pub fn collect_chunks(dir: &Path) -> Result<Collection, TileError> {
    let entries = fs::read_dir(dir).map_err(|e| TileError::io(dir, e))?;

    let mut chunks = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| TileError::io(dir, e))?;
        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            debug!("Skipping non UTF-8 name {:?}", entry.file_name());
            continue;
        };

        if file_name.starts_with('.') {
            continue;
        }

        let path = entry.path();
        if !fs::metadata(&path).is_ok_and(|meta| meta.is_file()) {
            continue;
        }

        match ParsedChunkName::parse(file_name) {
            ParsedChunkName::Chunk { id, index } => chunks.push((id, index, path)),
            ParsedChunkName::NotAChunk => debug!("Ignoring {}", path.display()),
        }
    }

    Ok(group_chunks(chunks))
}

/// Groups parsed chunks and separates complete groups from malformed ones
///
/// A group is complete when it holds exactly one chunk for each index
/// 1..=8. Anything else is malformed and logged as a warning.
pub fn group_chunks(chunks: impl IntoIterator<Item = (String, u8, PathBuf)>) -> Collection {
    let mut by_id: BTreeMap<String, Vec<(u8, PathBuf)>> = BTreeMap::new();
    for (id, index, path) in chunks {
        by_id.entry(id).or_default().push((index, path));
    }

    let mut collection = Collection::default();
    for (id, mut members) in by_id {
        members.sort();
        let indices: Vec<u8> = members.iter().map(|(index, _)| *index).collect();

        if !indices.iter().copied().eq(1..=CHUNKS_PER_GROUP) {
            warn!(
                "Group {} has {} chunks {:?}, expected exactly one of each 1-{}; skipping",
                id,
                indices.len(),
                indices,
                CHUNKS_PER_GROUP
            );
            collection.malformed.push(MalformedGroup { id, indices });
            continue;
        }

        let paths: Vec<PathBuf> = members.into_iter().map(|(_, path)| path).collect();
        match <[PathBuf; CHUNKS_PER_GROUP as usize]>::try_from(paths) {
            Ok(chunks) => collection.groups.push(ChunkGroup { id, chunks }),
            Err(_) => collection.malformed.push(MalformedGroup { id, indices }),
        }
    }

    collection
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(id: &str, indices: &[u8]) -> Vec<(String, u8, PathBuf)> {
        indices
            .iter()
            .map(|i| (id.to_string(), *i, PathBuf::from(format!("{id}-{i}.jpg"))))
            .collect()
    }

    #[test]
    fn test_group_chunks_orders_by_index() {
        let collection = group_chunks(entries("001", &[8, 3, 1, 5, 2, 7, 4, 6]));

        assert!(collection.malformed.is_empty());
        assert_eq!(collection.groups.len(), 1);
        let group = &collection.groups[0];
        assert_eq!(group.id, "001");
        for (i, path) in group.chunks.iter().enumerate() {
            assert_eq!(path, &PathBuf::from(format!("001-{}.jpg", i + 1)));
        }
    }

    #[test]
    fn test_group_chunks_rejects_short_group() {
        let collection = group_chunks(entries("002", &[1, 2, 3, 4, 5, 6, 7]));

        assert!(collection.groups.is_empty());
        assert_eq!(
            collection.malformed,
            vec![MalformedGroup {
                id: "002".to_string(),
                indices: vec![1, 2, 3, 4, 5, 6, 7],
            }]
        );
        assert_eq!(collection.malformed[0].count(), 7);
    }

    #[test]
    fn test_group_chunks_rejects_duplicate_index_with_eight_members() {
        let collection = group_chunks(entries("003", &[1, 1, 2, 3, 4, 5, 6, 7]));

        assert!(collection.groups.is_empty());
        assert_eq!(collection.malformed[0].indices, vec![1, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(collection.malformed[0].duplicated(), vec![1]);
        assert_eq!(collection.malformed[0].missing(), vec![8]);
    }

    #[test]
    fn test_malformed_group_index_diagnostics() {
        let group = MalformedGroup {
            id: "005".to_string(),
            indices: vec![2, 2, 2, 4, 8, 8],
        };

        assert_eq!(group.duplicated(), vec![2, 8]);
        assert_eq!(group.missing(), vec![1, 3, 5, 6, 7]);
    }

    #[test]
    fn test_group_chunks_rejects_nine_members() {
        let mut all = entries("004", &[1, 2, 3, 4, 5, 6, 7, 8]);
        all.push(("004".to_string(), 8, PathBuf::from("004-8.jpeg")));

        let collection = group_chunks(all);
        assert!(collection.groups.is_empty());
        assert_eq!(collection.malformed[0].count(), 9);
        assert_eq!(collection.malformed[0].duplicated(), vec![8]);
        assert!(collection.malformed[0].missing().is_empty());
    }

    #[test]
    fn test_group_chunks_sorted_by_id() {
        let mut all = entries("200", &[1, 2, 3, 4, 5, 6, 7, 8]);
        all.extend(entries("100", &[1, 2, 3, 4, 5, 6, 7, 8]));
        all.extend(entries("150", &[1]));

        let collection = group_chunks(all);
        let ids: Vec<&str> = collection.groups.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["100", "200"]);
        assert_eq!(collection.malformed[0].id, "150");
    }

    #[test]
    fn test_group_chunks_empty_input() {
        let collection = group_chunks(Vec::new());
        assert!(collection.groups.is_empty());
        assert!(collection.malformed.is_empty());
    }
}
