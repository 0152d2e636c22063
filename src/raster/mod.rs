mod bounds;
mod loader;

pub use bounds::Bounds;
pub use loader::{load_raster, to_canonical};
