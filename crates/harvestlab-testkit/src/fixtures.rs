//! Fixture builders for listing pages and chunk images

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::path::{Path, PathBuf};

/// Distinct colours for chunks 1..=8, in chunk order
pub const CHUNK_COLORS: [[u8; 3]; 8] = [
    [255, 0, 0],
    [0, 255, 0],
    [0, 0, 255],
    [255, 255, 0],
    [255, 0, 255],
    [0, 255, 255],
    [128, 64, 32],
    [255, 255, 255],
];

/// Builds a minimal listing page whose body holds one anchor per href
///
/// # Examples
///
/// ```rust
/// use harvestlab_testkit::listing_page;
///
/// let html = listing_page(&["/acme/widgets"]);
/// assert!(html.contains(r#"<a href="/acme/widgets">"#));
/// ```
pub fn listing_page(hrefs: &[&str]) -> String {
    let anchors: String = hrefs
        .iter()
        .map(|href| format!("    <li><a href=\"{href}\">{href}</a></li>\n"))
        .collect();

    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>Repositories</title></head>\n<body>\n  <ul>\n{anchors}  </ul>\n</body>\n</html>\n"
    )
}

/// Writes a `width`x`height` image filled with `color` to `dir/name`
///
/// The pixels are PNG-encoded regardless of the file name, so colours
/// survive exactly and extension-less names still decode.
///
/// # Panics
///
/// Panics if the file cannot be written
pub fn write_solid_chunk(dir: &Path, name: &str, width: u32, height: u32, color: [u8; 3]) -> PathBuf {
    let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(color)));
    write_chunk_image(dir, name, &img, ImageFormat::Png)
}

/// Writes `img` to `dir/name` encoded as `format`, keeping its colour type
/// where the format supports it (grayscale, alpha, lossy JPEG chunks)
///
/// # Panics
///
/// Panics if the file cannot be written
pub fn write_chunk_image(dir: &Path, name: &str, img: &DynamicImage, format: ImageFormat) -> PathBuf {
    let path = dir.join(name);
    img.save_with_format(&path, format)
        .expect("Failed to write chunk fixture");
    path
}

/// Writes `<id>-1.jpg` .. `<id>-8.jpg` coloured with [`CHUNK_COLORS`]
///
/// # Panics
///
/// Panics if any file cannot be written
pub fn write_chunk_group(dir: &Path, id: &str, width: u32, height: u32) -> Vec<PathBuf> {
    CHUNK_COLORS
        .iter()
        .enumerate()
        .map(|(i, color)| write_solid_chunk(dir, &format!("{id}-{}.jpg", i + 1), width, height, *color))
        .collect()
}
