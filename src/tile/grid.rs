use std::iter::FusedIterator;

use image::{GenericImageView, RgbaImage, SubImage, imageops};

use super::{CellSize, Rect};
use crate::error::DemaskError;
use crate::raster::Bounds;

/// One cell of the sprite grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// Unclipped grid origin (x coordinate)
    pub origin_x: u32,
    /// Unclipped grid origin (y coordinate)
    pub origin_y: u32,
    /// Cell rectangle clipped to the raster bounds
    pub rect: Rect,
}

/// Lazy walk over the sprite grid covering a raster.
///
/// Cells are visited column by column: every `origin_y` of a column before
/// moving `origin_x` one cell to the right. Edge cells are clipped, never
/// padded. A fresh grid (or a clone taken before iterating) replays the
/// same sequence.
#[derive(Debug, Clone)]
pub struct TileGrid {
    bounds: Bounds,
    cell: CellSize,
    next_x: u32,
    next_y: u32,
    done: bool,
}

impl TileGrid {
    pub fn new(bounds: Bounds, cell: CellSize) -> Self {
        Self {
            bounds,
            cell,
            next_x: 0,
            next_y: 0,
            done: bounds.is_empty(),
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn cell(&self) -> CellSize {
        self.cell
    }

    /// Number of grid columns, `ceil(width / cell width)`
    pub fn columns(&self) -> u32 {
        self.bounds.width.div_ceil(self.cell.width())
    }

    /// Number of grid rows, `ceil(height / cell height)`
    pub fn rows(&self) -> u32 {
        self.bounds.height.div_ceil(self.cell.height())
    }

    fn remaining(&self) -> u64 {
        if self.done {
            return 0;
        }
        let rows = u64::from(self.rows());
        let column = u64::from(self.next_x / self.cell.width());
        let row = u64::from(self.next_y / self.cell.height());
        (u64::from(self.columns()) - column) * rows - row
    }
}

impl Iterator for TileGrid {
    type Item = Tile;

    fn next(&mut self) -> Option<Tile> {
        if self.done {
            return None;
        }

        let (x, y) = (self.next_x, self.next_y);
        let rect = Rect::new(x, y, self.cell.width(), self.cell.height())
            .intersection(&self.bounds.to_rect());

        match y.checked_add(self.cell.height()) {
            Some(next_y) if next_y < self.bounds.height => self.next_y = next_y,
            _ => {
                self.next_y = 0;
                match x.checked_add(self.cell.width()) {
                    Some(next_x) if next_x < self.bounds.width => self.next_x = next_x,
                    _ => self.done = true,
                }
            }
        }

        Some(Tile {
            origin_x: x,
            origin_y: y,
            rect,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining()).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TileGrid {}

impl FusedIterator for TileGrid {}

/// Build the sprite grid for `image`, rejecting non-positive cell sizes
/// before any cell is produced.
pub fn tile_grid<I: GenericImageView>(
    image: &I,
    cell_width: i64,
    cell_height: i64,
) -> Result<TileGrid, DemaskError> {
    let cell = CellSize::new(cell_width, cell_height)?;
    Ok(TileGrid::new(Bounds::of(image), cell))
}

/// Pair every grid cell with a borrowed view of its pixels
pub fn tile_views(
    image: &RgbaImage,
    cell: CellSize,
) -> impl Iterator<Item = (Tile, SubImage<&RgbaImage>)> {
    TileGrid::new(Bounds::of(image), cell).map(move |tile| {
        let r = tile.rect;
        (tile, imageops::crop_imm(image, r.x, r.y, r.width, r.height))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn grid(width: u32, height: u32, cw: u32, ch: u32) -> TileGrid {
        let cell = CellSize::new(i64::from(cw), i64::from(ch)).unwrap();
        TileGrid::new(Bounds::new(width, height), cell)
    }

    #[test]
    fn test_sprite_sheet_origins() {
        let origins: Vec<_> = grid(60, 44, 30, 22)
            .map(|t| (t.origin_x, t.origin_y))
            .collect();

        assert_eq!(origins, vec![(0, 0), (0, 22), (30, 0), (30, 22)]);
    }

    #[test]
    fn test_column_major_order() {
        let origins: Vec<_> = grid(20, 30, 10, 10)
            .map(|t| (t.origin_x, t.origin_y))
            .collect();

        assert_eq!(
            origins,
            vec![(0, 0), (0, 10), (0, 20), (10, 0), (10, 10), (10, 20)]
        );
    }

    #[test]
    fn test_tile_count() {
        for &(w, h, cw, ch) in &[
            (60, 44, 30, 22),
            (61, 44, 30, 22),
            (59, 45, 30, 22),
            (1, 1, 30, 22),
            (100, 7, 1, 1),
            (7, 100, 7, 100),
            (33, 17, 5, 4),
        ] {
            let g = grid(w, h, cw, ch);
            let expected = (w.div_ceil(cw) * h.div_ceil(ch)) as usize;
            assert_eq!(g.len(), expected, "{w}x{h} / {cw}x{ch}");
            assert_eq!(g.count(), expected, "{w}x{h} / {cw}x{ch}");
        }
    }

    #[test]
    fn test_cover_without_overlap() {
        let (w, h) = (33u32, 17u32);
        let mut hits = vec![0u8; (w * h) as usize];
        let bounds = Rect::new(0, 0, w, h);

        for tile in grid(w, h, 5, 4) {
            assert!(bounds.contains(&tile.rect));
            assert!(!tile.rect.is_empty());
            for y in tile.rect.y..tile.rect.bottom() {
                for x in tile.rect.x..tile.rect.right() {
                    hits[(y * w + x) as usize] += 1;
                }
            }
        }

        assert!(hits.iter().all(|&n| n == 1));
    }

    #[test]
    fn test_edge_tiles_are_clipped() {
        let tiles: Vec<_> = grid(50, 40, 22, 22).collect();
        let last = tiles.last().unwrap();

        assert_eq!((last.origin_x, last.origin_y), (44, 22));
        assert_eq!(last.rect, Rect::new(44, 22, 6, 18));
    }

    #[test]
    fn test_cell_larger_than_image() {
        let tiles: Vec<_> = grid(10, 5, 30, 22).collect();
        assert_eq!(tiles.len(), 1);
        assert_eq!(tiles[0].rect, Rect::new(0, 0, 10, 5));
    }

    #[test]
    fn test_empty_image_has_no_tiles() {
        assert_eq!(grid(0, 10, 3, 3).count(), 0);
        assert_eq!(grid(10, 0, 3, 3).count(), 0);
    }

    #[test]
    fn test_size_hint_tracks_progress() {
        let mut g = grid(60, 44, 30, 22);
        assert_eq!(g.len(), 4);
        g.next();
        assert_eq!(g.len(), 3);
        g.next();
        g.next();
        assert_eq!(g.len(), 1);
        g.next();
        assert_eq!(g.len(), 0);
        assert!(g.next().is_none());
        assert!(g.next().is_none());
    }

    #[test]
    fn test_restartable_from_clone() {
        let fresh = grid(33, 17, 5, 4);
        let first: Vec<_> = fresh.clone().collect();
        let second: Vec<_> = fresh.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_tile_grid_rejects_bad_cell() {
        let img = RgbaImage::new(10, 10);
        assert!(matches!(
            tile_grid(&img, 0, 5),
            Err(DemaskError::InvalidCellSize { .. })
        ));
        assert!(matches!(
            tile_grid(&img, 5, -1),
            Err(DemaskError::InvalidCellSize { .. })
        ));
        assert_eq!(tile_grid(&img, 5, 5).unwrap().len(), 4);
    }

    #[test]
    fn test_views_borrow_the_right_pixels() {
        let img = RgbaImage::from_fn(4, 4, |x, y| Rgba([x as u8, y as u8, 0, 255]));
        let cell = CellSize::new(3, 3).unwrap();

        let views: Vec<_> = tile_views(&img, cell).collect();
        assert_eq!(views.len(), 4);

        let (tile, view) = &views[3];
        assert_eq!((tile.origin_x, tile.origin_y), (3, 3));
        assert_eq!(view.dimensions(), (1, 1));
        assert_eq!(view.get_pixel(0, 0), Rgba([3, 3, 0, 255]));

        let (_, view) = &views[1];
        assert_eq!(view.dimensions(), (3, 1));
        assert_eq!(view.to_image().get_pixel(2, 0), &Rgba([2, 3, 0, 255]));
    }
}
