mod cell;
mod grid;
mod rect;

pub use cell::CellSize;
pub use grid::{Tile, TileGrid, tile_grid, tile_views};
pub use rect::Rect;
