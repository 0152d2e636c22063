use std::fmt;

use image::GenericImageView;

use crate::tile::Rect;

/// Pixel extent of a raster. Decoded rasters always start at (0, 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn of<I: GenericImageView>(image: &I) -> Self {
        let (width, height) = image.dimensions();
        Self { width, height }
    }

    /// Two rasters can be composited only when their extents are identical
    pub fn is_compatible(&self, other: &Bounds) -> bool {
        self.width == other.width && self.height == other.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn to_rect(self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, RgbaImage};

    #[test]
    fn test_bounds_of_image() {
        let img = RgbaImage::new(60, 44);
        assert_eq!(Bounds::of(&img), Bounds::new(60, 44));
    }

    #[test]
    fn test_compatible_ignores_pixel_format() {
        let rgba = Bounds::of(&RgbaImage::new(8, 4));
        let gray = Bounds::of(&GrayImage::new(8, 4));
        assert!(rgba.is_compatible(&gray));
        assert!(!rgba.is_compatible(&Bounds::new(4, 8)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Bounds::new(30, 22).to_string(), "30x22");
    }
}
