mod compositor;

pub use compositor::{AlphaMode, composite, mask_alpha, premultiply_channel};
