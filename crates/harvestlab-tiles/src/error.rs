//! Error types for the tile merger

use std::path::PathBuf;
use thiserror::Error;

/// Tile merger errors
///
/// Per-group variants (`Decode`, `Encode`, `Io` on a chunk or composite)
/// fail only that group. Directory-level `Io` and `ConfigError` abort the run.
#[derive(Debug, Error)]
pub enum TileError {
    /// Filesystem error
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path being read or written
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Chunk could not be opened or decoded as an image
    #[error("Failed to decode {path}: {source}")]
    Decode {
        /// Chunk path
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Composite could not be encoded
    #[error("Failed to encode {path}: {source}")]
    Encode {
        /// Composite path
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Assembly was given the wrong number of chunks
    #[error("Expected {expected} chunks, got {found}")]
    ChunkCount {
        /// Required chunk count
        expected: usize,
        /// Chunks supplied
        found: usize,
    },

    /// Summed chunk dimensions overflow the canvas size type
    #[error("Composite canvas too large: {width}x{height}")]
    CanvasTooLarge {
        /// Requested width
        width: u64,
        /// Requested height
        height: u64,
    },

    /// Invalid configuration
    #[error("Config error: {0}")]
    ConfigError(#[from] harvestlab_core::HarvestlabError),
}

impl TileError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TileError::Io {
            path: path.into(),
            source,
        }
    }
}
