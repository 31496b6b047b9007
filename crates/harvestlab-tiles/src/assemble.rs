//! Chunk decoding and 2x4 grid assembly

use crate::error::TileError;
use crate::name::CHUNKS_PER_GROUP;
use image::{ImageReader, RgbImage, imageops};
use std::path::Path;

/// Chunks per grid row
pub const ROW_LEN: usize = 4;

/// Opens a chunk and converts it to 8-bit RGB
///
/// The format is sniffed from the content, so extension-less files work.
///
/// # Errors
///
/// Returns `Io` if the file cannot be opened, `Decode` if it is not a
/// supported image
pub fn load_chunk(path: &Path) -> Result<RgbImage, TileError> {
    let reader = ImageReader::open(path)
        .map_err(|e| TileError::io(path, e))?
        .with_guessed_format()
        .map_err(|e| TileError::io(path, e))?;

    let decoded = reader.decode().map_err(|source| TileError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(decoded.to_rgb8())
}

/// Pastes images left to right onto one row canvas
///
/// The canvas is as wide as the summed widths and as tall as the tallest
/// image. Shorter images sit at the top; the uncovered area stays black.
pub fn concat_row(images: &[RgbImage]) -> Result<RgbImage, TileError> {
    let width: u64 = images.iter().map(|img| u64::from(img.width())).sum();
    let height = images.iter().map(RgbImage::height).max().unwrap_or(0);

    let mut canvas = new_canvas(width, u64::from(height))?;
    let mut x: i64 = 0;
    for img in images {
        imageops::replace(&mut canvas, img, x, 0);
        x += i64::from(img.width());
    }

    Ok(canvas)
}

/// Stacks `top` above `bottom`
///
/// The canvas is as wide as the wider row. The narrower row is not
/// stretched; the strip to its right stays black.
pub fn stack_rows(top: &RgbImage, bottom: &RgbImage) -> Result<RgbImage, TileError> {
    let width = top.width().max(bottom.width());
    let height = u64::from(top.height()) + u64::from(bottom.height());

    let mut canvas = new_canvas(u64::from(width), height)?;
    imageops::replace(&mut canvas, top, 0, 0);
    imageops::replace(&mut canvas, bottom, 0, i64::from(top.height()));

    Ok(canvas)
}

/// Builds the composite from chunks ordered 1..=8
///
/// Chunks 1-4 form the top row and 5-8 the bottom row.
///
/// # Errors
///
/// Returns `ChunkCount` unless exactly eight chunks are given, and
/// `CanvasTooLarge` if the summed dimensions overflow
pub fn assemble(chunks: &[RgbImage]) -> Result<RgbImage, TileError> {
    if chunks.len() != usize::from(CHUNKS_PER_GROUP) {
        return Err(TileError::ChunkCount {
            expected: usize::from(CHUNKS_PER_GROUP),
            found: chunks.len(),
        });
    }

    let (first, second) = chunks.split_at(ROW_LEN);
    let top = concat_row(first)?;
    let bottom = concat_row(second)?;

    stack_rows(&top, &bottom)
}

fn new_canvas(width: u64, height: u64) -> Result<RgbImage, TileError> {
    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok(RgbImage::new(w, h)),
        _ => Err(TileError::CanvasTooLarge { width, height }),
    }
}
