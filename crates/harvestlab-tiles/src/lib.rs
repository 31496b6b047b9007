//! Reassembly of numbered image chunks into composites.
//!
//! Chunk files are named `<id>-<n>` (any extension) where `id` is three
//! characters and `n` is 1..=8. Each complete group becomes `<id>.jpg`:
//!
//! ```text
//! +-----+-----+-----+-----+
//! |  1  |  2  |  3  |  4  |
//! +-----+-----+-----+-----+
//! |  5  |  6  |  7  |  8  |
//! +-----+-----+-----+-----+
//! ```
//!
//! Incomplete groups are skipped with a warning; a chunk that fails to
//! decode fails only its own group.

pub mod assemble;
pub mod collect;
pub mod error;
pub mod merge;
pub mod name;
pub mod write;

// Re-export commonly used types
pub use assemble::{assemble, load_chunk};
pub use collect::{ChunkGroup, Collection, MalformedGroup, collect_chunks, group_chunks};
pub use error::TileError;
pub use merge::{GroupFailure, MergeReport, merge_all, merge_group};
pub use name::{CHUNKS_PER_GROUP, ID_LEN, ParsedChunkName};
pub use write::save_composite;

pub type Result<T> = std::result::Result<T, TileError>;
