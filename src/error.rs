use std::path::PathBuf;
use thiserror::Error;

use crate::raster::Bounds;

#[derive(Error, Debug)]
pub enum DemaskError {
    #[error("Failed to open '{path}': {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to load image '{path}': {source}")]
    ImageLoad {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to save image '{path}': {source}")]
    ImageSave {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Image bounds do not match: source is {source_bounds}, mask is {mask_bounds}")]
    BoundsMismatch {
        source_bounds: Bounds,
        mask_bounds: Bounds,
    },

    #[error("Invalid sprite size {width}x{height}: both dimensions must be positive")]
    InvalidCellSize { width: i64, height: i64 },

    #[error("Failed to create output directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to resolve absolute path for '{path}': {source}")]
    ResolvePath {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to compress PNG '{path}': {message}")]
    PngCompress { path: PathBuf, message: String },

    #[error("Input path does not exist: {0}")]
    InputNotFound(PathBuf),

    #[error("Missing required argument --{0}")]
    MissingArgument(&'static str),
}
