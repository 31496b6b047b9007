//! Composite output

use crate::error::TileError;
use image::RgbImage;
use image::codecs::jpeg::JpegEncoder;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes `composite` to `<output_dir>/<id>.jpg`, replacing any existing file
///
/// The image is encoded in memory and written through a `.part` sibling
/// that is renamed into place, so a failed encode or write leaves an
/// existing `<id>.jpg` untouched and creates no new one.
///
/// # Returns
///
/// Path of the written file
///
/// # Errors
///
/// Returns `Encode` if JPEG encoding fails, `Io` if the file cannot be
/// written or renamed
pub fn save_composite(
    composite: &RgbImage,
    output_dir: &Path,
    id: &str,
    quality: u8,
) -> Result<PathBuf, TileError> {
    let path = output_dir.join(format!("{id}.jpg"));

    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, quality)
        .encode_image(composite)
        .map_err(|source| TileError::Encode {
            path: path.clone(),
            source,
        })?;

    let part = output_dir.join(format!("{id}.jpg.part"));
    if let Err(e) = fs::write(&part, &bytes).and_then(|()| fs::rename(&part, &path)) {
        let _ = fs::remove_file(&part);
        return Err(TileError::io(&path, e));
    }

    Ok(path)
}
