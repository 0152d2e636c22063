mod paths;
mod png;

pub use paths::{prepare_output_dir, source_stem, tile_filename};
pub use png::{encode_png, save_png};
