//! Chunk file name parsing

use std::path::Path;

/// Chunks making up one composite
pub const CHUNKS_PER_GROUP: u8 = 8;

/// Length of the group id, in characters
pub const ID_LEN: usize = 3;

/// Result of parsing one file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedChunkName {
    /// `<id>-<index>` with a 3-character id and index 1..=8
    Chunk {
        /// Group id
        id: String,
        /// Position in the grid, 1-based
        index: u8,
    },
    /// Anything else; unrelated files are expected in the source directory
    NotAChunk,
}

impl ParsedChunkName {
    /// Parses a file name such as `001-3.jpg` or `001-3`
    ///
    /// The extension is stripped first and not checked. The stem is split
    /// at its first `-`; the index part must be all ASCII digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use harvestlab_tiles::ParsedChunkName;
    ///
    /// assert_eq!(
    ///     ParsedChunkName::parse("133-8.jpg"),
    ///     ParsedChunkName::Chunk { id: "133".to_string(), index: 8 }
    /// );
    /// assert_eq!(ParsedChunkName::parse("133-9.jpg"), ParsedChunkName::NotAChunk);
    /// ```
    pub fn parse(file_name: &str) -> Self {
        let Some(stem) = Path::new(file_name).file_stem().and_then(|s| s.to_str()) else {
            return ParsedChunkName::NotAChunk;
        };

        let Some((id, index)) = stem.split_once('-') else {
            return ParsedChunkName::NotAChunk;
        };

        if id.chars().count() != ID_LEN
            || index.is_empty()
            || !index.bytes().all(|b| b.is_ascii_digit())
        {
            return ParsedChunkName::NotAChunk;
        }

        // Overlong digit strings fail to parse and are not chunks either
        match index.parse::<u32>() {
            Ok(n) if (1..=u32::from(CHUNKS_PER_GROUP)).contains(&n) => ParsedChunkName::Chunk {
                id: id.to_string(),
                index: n as u8,
            },
            _ => ParsedChunkName::NotAChunk,
        }
    }
}
