pub mod cli;
pub mod composite;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod raster;
pub mod tile;

pub use cli::{CliArgs, CompressionLevel};
pub use composite::{AlphaMode, composite};
pub use error::DemaskError;
pub use pipeline::Demasker;
pub use raster::{Bounds, load_raster};
pub use tile::{CellSize, Rect, Tile, TileGrid};
