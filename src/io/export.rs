//! Mask export as PNG or plain text
//!
//! Grids run south to north while images run top to bottom, so both formats write
//! the last row first to keep north up.

use std::path::Path;

use image::{ImageBuffer, Rgba};
use ndarray::Axis;

use crate::io::configuration::{INSIDE_CHAR, INSIDE_COLOR, OUTSIDE_CHAR, OUTSIDE_COLOR};
use crate::io::error::{MaskError, Result, invalid_parameter};
use crate::spatial::mask::Mask;

/// Render a mask as an RGBA image, one pixel per sample, north up
///
/// # Errors
///
/// Returns an error if a mask dimension does not fit in `u32`
pub fn render_mask_image(mask: &Mask) -> Result<ImageBuffer<Rgba<u8>, Vec<u8>>> {
    let width = u32::try_from(mask.width())
        .map_err(|e| invalid_parameter("width", &mask.width(), &e))?;
    let height = u32::try_from(mask.height())
        .map_err(|e| invalid_parameter("height", &mask.height(), &e))?;

    Ok(ImageBuffer::from_fn(width, height, |x, y| {
        let row = (height - 1 - y) as usize;
        if mask.get(x as usize, row).unwrap_or(false) {
            Rgba(INSIDE_COLOR)
        } else {
            Rgba(OUTSIDE_COLOR)
        }
    }))
}

/// Render a mask as lines of `1`/`0`, north first
pub fn render_mask_text(mask: &Mask) -> String {
    let mut text = String::with_capacity((mask.width() + 1) * mask.height());
    for row in mask.as_array().axis_iter(Axis(0)).rev() {
        text.extend(
            row.iter()
                .map(|&inside| if inside { INSIDE_CHAR } else { OUTSIDE_CHAR }),
        );
        text.push('\n');
    }
    text
}

/// Save a mask as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_mask_as_png(mask: &Mask, output_path: &Path) -> Result<()> {
    let img = render_mask_image(mask)?;
    ensure_parent(output_path)?;

    img.save(output_path).map_err(|e| MaskError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })
}

/// Save a mask as a text matrix
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written
pub fn export_mask_as_text(mask: &Mask, output_path: &Path) -> Result<()> {
    ensure_parent(output_path)?;

    std::fs::write(output_path, render_mask_text(mask)).map_err(|e| MaskError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "write mask",
        source: e,
    })
}

fn ensure_parent(output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| MaskError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }
    Ok(())
}
