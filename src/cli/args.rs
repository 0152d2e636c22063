use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "demasker")]
#[command(
    version,
    about = "Apply a grayscale alpha mask to an image and cut the result into sprites",
    long_about = None
)]
pub struct CliArgs {
    /// Source image file
    #[arg(long = "in", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Mask image (dark = opaque, light = transparent); must match the source size
    #[arg(long, value_name = "FILE")]
    pub mask: Option<PathBuf>,

    /// Output directory for sprites, or the output file with --no-tile
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Load settings from a JSON config file
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Sprite width in pixels [default: 30]
    #[arg(
        long = "sw",
        visible_alias = "sprite-width",
        value_name = "PIXELS",
        allow_negative_numbers = true
    )]
    pub sprite_width: Option<i32>,

    /// Sprite height in pixels [default: 22]
    #[arg(
        long = "sh",
        visible_alias = "sprite-height",
        value_name = "PIXELS",
        allow_negative_numbers = true
    )]
    pub sprite_height: Option<i32>,

    /// Write the whole composited image to a single file instead of sprites
    #[arg(long)]
    pub no_tile: bool,

    /// Keep source colors as-is instead of premultiplying them by alpha
    #[arg(long)]
    pub no_premultiply: bool,

    /// Write sprites under the output path as given, without resolving it to an absolute path
    #[arg(long)]
    pub relative_paths: bool,

    /// Compress PNG output (0-6 or 'max'). Default level is 2 if flag is present without value.
    #[arg(long, value_name = "LEVEL", default_missing_value = "2", num_args = 0..=1)]
    pub compress: Option<CompressionLevel>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// PNG compression level (0-6 or max)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionLevel {
    /// Optimization level 0-6
    Level(u8),
    /// Maximum compression
    Max,
}

impl std::str::FromStr for CompressionLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("max") {
            return Ok(CompressionLevel::Max);
        }
        let n = s
            .parse::<u8>()
            .map_err(|_e| format!("invalid compression level: {}", s))?;
        CompressionLevel::from_level(n)
    }
}

impl CompressionLevel {
    pub fn from_level(n: u8) -> Result<Self, String> {
        if n <= 6 {
            Ok(CompressionLevel::Level(n))
        } else {
            Err(format!("compression level must be 0-6 or 'max', got {}", n))
        }
    }
}

impl Default for CompressionLevel {
    fn default() -> Self {
        CompressionLevel::Level(2)
    }
}
