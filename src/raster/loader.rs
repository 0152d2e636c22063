use std::path::Path;

use image::{DynamicImage, ImageReader, RgbaImage};
use log::debug;

use crate::error::DemaskError;

/// Decode the image at `path` into an 8-bit RGBA raster.
///
/// The format is sniffed from the file contents rather than its extension, so
/// a mask saved as `.bmp` but named `.png` still decodes.
pub fn load_raster(path: &Path) -> Result<RgbaImage, DemaskError> {
    if !path.exists() {
        return Err(DemaskError::InputNotFound(path.to_path_buf()));
    }

    let decoded = ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|e| DemaskError::Open {
            path: path.to_path_buf(),
            source: e,
        })?
        .decode()
        .map_err(|e| DemaskError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?;

    debug!(
        "Decoded '{}' ({}x{}, {:?})",
        path.display(),
        decoded.width(),
        decoded.height(),
        decoded.color()
    );

    Ok(to_canonical(decoded))
}

/// Convert any decoded pixel representation (indexed, grayscale, 16-bit,
/// float) to the canonical 8-bit RGBA model.
pub fn to_canonical(image: DynamicImage) -> RgbaImage {
    image.into_rgba8()
}
