use image::{Rgba, RgbaImage};
use log::debug;

use crate::error::DemaskError;
use crate::raster::Bounds;

/// How the source color channels are written next to the derived alpha
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AlphaMode {
    /// Copy color channels from the source unchanged
    Straight,
    /// Scale color channels by the derived alpha
    #[default]
    Premultiplied,
}

impl AlphaMode {
    pub fn from_premultiply(premultiply: bool) -> Self {
        if premultiply {
            AlphaMode::Premultiplied
        } else {
            AlphaMode::Straight
        }
    }
}

/// Alpha for a mask pixel. Only red is read: dark is opaque, light is transparent.
pub fn mask_alpha(mask: &Rgba<u8>) -> u8 {
    255 - mask[0]
}

/// `floor(channel * alpha / 255)`, multiplied in 16 bits.
pub fn premultiply_channel(channel: u8, alpha: u8) -> u8 {
    let scaled = u16::from(channel) * u16::from(alpha) / 255;
    u8::try_from(scaled).unwrap_or(u8::MAX)
}

/// Derive a new RGBA raster from `source` whose alpha comes from `mask`.
///
/// Both rasters must have identical bounds. The source's own alpha channel is
/// ignored. The result is a fresh allocation; neither input is touched.
pub fn composite(
    source: &RgbaImage,
    mask: &RgbaImage,
    mode: AlphaMode,
) -> Result<RgbaImage, DemaskError> {
    let source_bounds = Bounds::of(source);
    let mask_bounds = Bounds::of(mask);
    if !source_bounds.is_compatible(&mask_bounds) {
        return Err(DemaskError::BoundsMismatch {
            source_bounds,
            mask_bounds,
        });
    }

    let mut target = RgbaImage::new(source_bounds.width, source_bounds.height);

    // Same dimensions, so the three buffers walk the same coordinates in lockstep
    for ((out, src), m) in target
        .pixels_mut()
        .zip(source.pixels())
        .zip(mask.pixels())
    {
        let alpha = mask_alpha(m);
        let [r, g, b, _] = src.0;
        *out = match mode {
            AlphaMode::Straight => Rgba([r, g, b, alpha]),
            AlphaMode::Premultiplied => Rgba([
                premultiply_channel(r, alpha),
                premultiply_channel(g, alpha),
                premultiply_channel(b, alpha),
                alpha,
            ]),
        };
    }

    debug!("Composited {} raster ({:?} alpha)", source_bounds, mode);

    Ok(target)
}
