//! Image loading, strip composition and PNG export

use crate::io::error::{Result, UnshredError};
use crate::spatial::strips::Strip;
use image::RgbImage;
use std::path::Path;

/// Decode an image file into 8-bit RGB
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded
pub fn load_rgb_image(path: &Path) -> Result<RgbImage> {
    let img = image::open(path).map_err(|e| UnshredError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(img.to_rgb8())
}

/// Copy `strips` side by side into a new canvas, left to right
///
/// The canvas is as wide as the strips combined, so columns that did not fit
/// into a whole strip are not carried over.
pub fn render_strips(source: &RgbImage, strips: &[Strip]) -> RgbImage {
    let width: usize = strips.iter().map(Strip::width).sum();
    let mut canvas = RgbImage::new(width as u32, source.height());

    let mut dest_x = 0u32;
    for strip in strips {
        for src_x in strip.columns() {
            for y in 0..source.height() {
                if let Some(pixel) = source.get_pixel_checked(src_x as u32, y) {
                    canvas.put_pixel(dest_x, y, *pixel);
                }
            }
            dest_x += 1;
        }
    }

    canvas
}

/// Save an image, creating the parent directory when needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn export_image(image: &RgbImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| UnshredError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    image
        .save(output_path)
        .map_err(|e| UnshredError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
