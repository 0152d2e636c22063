use serde::{Deserialize, Serialize};

use crate::cli::CompressionLevel;
use crate::tile::CellSize;

/// PNG compression level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompressConfig {
    /// Optimization level 0-6
    Level(u8),
    /// Maximum compression ("max")
    Max(String),
}

impl CompressConfig {
    pub fn to_level(&self) -> Result<CompressionLevel, String> {
        match self {
            CompressConfig::Level(n) => CompressionLevel::from_level(*n),
            CompressConfig::Max(s) => s.parse(),
        }
    }
}

/// demasker configuration file structure.
///
/// All paths in the config are relative to the config file location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemaskConfig {
    /// Config file version (currently 1)
    pub version: u32,
    /// Source image
    pub input: Option<String>,
    /// Mask image
    pub mask: Option<String>,
    /// Sprite directory, or output file when `tile` is false
    pub output: Option<String>,
    /// Cut the composited image into sprites
    pub tile: bool,
    /// Sprite width in pixels
    pub sprite_width: i32,
    /// Sprite height in pixels
    pub sprite_height: i32,
    /// Premultiply color channels by the derived alpha
    pub premultiply: bool,
    /// Resolve the sprite directory to an absolute path before writing
    pub absolute_paths: bool,
    /// PNG compression configuration (optional)
    pub compress: Option<CompressConfig>,
}

impl Default for DemaskConfig {
    fn default() -> Self {
        Self {
            version: 1,
            input: None,
            mask: None,
            output: None,
            tile: true,
            sprite_width: CellSize::DEFAULT_WIDTH as i32,
            sprite_height: CellSize::DEFAULT_HEIGHT as i32,
            premultiply: true,
            absolute_paths: true,
            compress: None,
        }
    }
}
