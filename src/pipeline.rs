use std::path::{Path, PathBuf};

use anyhow::Result;
use image::RgbaImage;
use log::{debug, info};

use crate::cli::CompressionLevel;
use crate::composite::{AlphaMode, composite};
use crate::output::{prepare_output_dir, save_png, source_stem, tile_filename};
use crate::raster::load_raster;
use crate::tile::{CellSize, tile_views};

/// The mask-and-slice pipeline.
///
/// One builder covers every profile: tiled or single-file output, straight or
/// premultiplied alpha, absolute or as-given output paths.
#[derive(Debug, Clone)]
pub struct Demasker {
    /// Sprite cell size; `None` writes one file
    pub cell: Option<CellSize>,
    pub alpha_mode: AlphaMode,
    pub absolute_paths: bool,
    pub compress: Option<CompressionLevel>,
}

impl Default for Demasker {
    fn default() -> Self {
        Self::new()
    }
}

impl Demasker {
    pub fn new() -> Self {
        Self {
            cell: Some(CellSize::default()),
            alpha_mode: AlphaMode::Premultiplied,
            absolute_paths: true,
            compress: None,
        }
    }

    pub fn tile(mut self, cell: Option<CellSize>) -> Self {
        self.cell = cell;
        self
    }

    pub fn premultiply(mut self, premultiply: bool) -> Self {
        self.alpha_mode = AlphaMode::from_premultiply(premultiply);
        self
    }

    pub fn absolute_paths(mut self, absolute: bool) -> Self {
        self.absolute_paths = absolute;
        self
    }

    pub fn compress(mut self, compress: Option<CompressionLevel>) -> Self {
        self.compress = compress;
        self
    }

    /// Load `input` and `mask`, composite them and write the result to
    /// `output`. Returns the written files in creation order.
    ///
    /// Nothing is written unless both images decode and their bounds match.
    pub fn run(&self, input: &Path, mask: &Path, output: &Path) -> Result<Vec<PathBuf>> {
        let source = load_raster(input)?;
        let mask_image = load_raster(mask)?;
        info!(
            "Loaded {} ({}x{}) with mask {}",
            input.display(),
            source.width(),
            source.height(),
            mask.display()
        );

        let composited = composite(&source, &mask_image, self.alpha_mode)?;

        match self.cell {
            Some(cell) => self.export_tiles(&composited, cell, &source_stem(input), output),
            None => {
                save_png(&composited, output, self.compress)?;
                info!("Saved {}", output.display());
                Ok(vec![output.to_path_buf()])
            }
        }
    }

    /// Write every grid cell of `image` as `<dir>/<stem>-<y>-<x>.png`.
    ///
    /// The first failed write aborts the remaining cells.
    pub fn export_tiles(
        &self,
        image: &RgbaImage,
        cell: CellSize,
        stem: &str,
        dir: &Path,
    ) -> Result<Vec<PathBuf>> {
        let dir = prepare_output_dir(dir, self.absolute_paths)?;

        let mut written = Vec::new();
        for (tile, view) in tile_views(image, cell) {
            let path = dir.join(tile_filename(stem, &tile));
            save_png(&view.to_image(), &path, self.compress)?;
            debug!(
                "Saved {} ({}x{} at {},{})",
                path.display(),
                tile.rect.width,
                tile.rect.height,
                tile.rect.x,
                tile.rect.y
            );
            written.push(path);
        }

        info!(
            "Wrote {} sprites of {}x{} to {}",
            written.len(),
            cell.width(),
            cell.height(),
            dir.display()
        );

        Ok(written)
    }
}
