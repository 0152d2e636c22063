use std::path::PathBuf;

use anyhow::{Result, anyhow};

use super::LoadedConfig;
use crate::cli::{CliArgs, CompressionLevel};
use crate::error::DemaskError;
use crate::tile::CellSize;

/// Merged configuration from CLI args and optional config file.
#[derive(Debug, Clone)]
pub struct Settings {
    pub input: PathBuf,
    pub mask: PathBuf,
    pub output: PathBuf,
    /// `None` selects the single-file profile
    pub cell: Option<CellSize>,
    pub premultiply: bool,
    pub absolute_paths: bool,
    pub compress: Option<CompressionLevel>,
    pub verbose: bool,
}

impl Settings {
    /// Merge config file values with CLI arguments.
    /// CLI arguments always take precedence over config values.
    pub fn merge(args: &CliArgs, loaded: Option<&LoadedConfig>) -> Result<Self> {
        let defaults = super::DemaskConfig::default();
        let config = loaded.map_or(&defaults, |lc| &lc.config);

        let input = args
            .input
            .clone()
            .or_else(|| loaded.and_then(LoadedConfig::resolve_input))
            .ok_or(DemaskError::MissingArgument("in"))?;

        let mask = args
            .mask
            .clone()
            .or_else(|| loaded.and_then(LoadedConfig::resolve_mask))
            .ok_or(DemaskError::MissingArgument("mask"))?;

        let output = args
            .out
            .clone()
            .or_else(|| loaded.and_then(LoadedConfig::resolve_output))
            .ok_or(DemaskError::MissingArgument("out"))?;

        // Boolean flags: CLI presence switches the feature off, otherwise use config
        let tile = !args.no_tile && config.tile;
        let premultiply = !args.no_premultiply && config.premultiply;
        let absolute_paths = !args.relative_paths && config.absolute_paths;

        // Cell size is validated only when sprites are actually cut
        let cell = if tile {
            let width = args.sprite_width.unwrap_or(config.sprite_width);
            let height = args.sprite_height.unwrap_or(config.sprite_height);
            Some(CellSize::new(i64::from(width), i64::from(height))?)
        } else {
            None
        };

        let compress = match (args.compress, &config.compress) {
            (Some(level), _) => Some(level),
            (None, Some(c)) => Some(
                c.to_level()
                    .map_err(|e| anyhow!("invalid compress value in config file: {}", e))?,
            ),
            (None, None) => None,
        };

        Ok(Self {
            input,
            mask,
            output,
            cell,
            premultiply,
            absolute_paths,
            compress,
            // Verbose is CLI-only
            verbose: args.verbose,
        })
    }
}
