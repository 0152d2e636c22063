use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::cli::CompressionLevel;
use crate::error::DemaskError;

/// Encode an RGBA raster as PNG, optionally recompressed losslessly with oxipng.
///
/// `path` is only used to label errors.
pub fn encode_png(
    image: &RgbaImage,
    path: &Path,
    compress: Option<CompressionLevel>,
) -> Result<Vec<u8>, DemaskError> {
    let mut png_data = Cursor::new(Vec::new());
    image
        .write_to(&mut png_data, ImageFormat::Png)
        .map_err(|e| DemaskError::ImageSave {
            path: path.to_path_buf(),
            source: e,
        })?;

    let Some(level) = compress else {
        return Ok(png_data.into_inner());
    };

    let opts = match level {
        CompressionLevel::Level(n) => oxipng::Options::from_preset(n),
        CompressionLevel::Max => oxipng::Options::max_compression(),
    };
    oxipng::optimize_from_memory(&png_data.into_inner(), &opts).map_err(|e| {
        DemaskError::PngCompress {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
    })
}

/// Write `image` to `path` as PNG, replacing any existing file
pub fn save_png(
    image: &RgbaImage,
    path: &Path,
    compress: Option<CompressionLevel>,
) -> Result<(), DemaskError> {
    let data = encode_png(image, path, compress)?;

    fs::write(path, data).map_err(|e| DemaskError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
