use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::types::DemaskConfig;

/// A loaded configuration file with its associated directory.
///
/// Paths in the config are relative to the config file location,
/// so we need to track where the config was loaded from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// The parsed configuration
    pub config: DemaskConfig,
    /// The directory containing the config file
    pub config_dir: PathBuf,
}

impl LoadedConfig {
    /// Load a config file from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        let config_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Self::parse(&content, config_dir)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Parse config JSON as if it had been read from `config_dir`.
    pub fn parse(content: &str, config_dir: PathBuf) -> Result<Self> {
        let config: DemaskConfig = serde_json::from_str(content)?;
        Ok(Self { config, config_dir })
    }

    pub fn resolve_input(&self) -> Option<PathBuf> {
        self.resolve(self.config.input.as_deref())
    }

    pub fn resolve_mask(&self) -> Option<PathBuf> {
        self.resolve(self.config.mask.as_deref())
    }

    pub fn resolve_output(&self) -> Option<PathBuf> {
        self.resolve(self.config.output.as_deref())
    }

    fn resolve(&self, path: Option<&str>) -> Option<PathBuf> {
        path.map(|p| self.config_dir.join(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CompressConfig;

    #[test]
    fn test_empty_config_uses_defaults() {
        let loaded = LoadedConfig::parse("{}", PathBuf::from("/project")).unwrap();
        let config = &loaded.config;

        assert_eq!(config.version, 1);
        assert!(config.tile);
        assert!(config.premultiply);
        assert!(config.absolute_paths);
        assert_eq!(config.sprite_width, 30);
        assert_eq!(config.sprite_height, 22);
        assert!(loaded.resolve_input().is_none());
    }

    #[test]
    fn test_paths_resolve_relative_to_config_dir() {
        let json = r#"{ "input": "art/hero.png", "mask": "art/hero_mask.png", "output": "out" }"#;
        let loaded = LoadedConfig::parse(json, PathBuf::from("/project")).unwrap();

        assert_eq!(
            loaded.resolve_input(),
            Some(PathBuf::from("/project/art/hero.png"))
        );
        assert_eq!(
            loaded.resolve_mask(),
            Some(PathBuf::from("/project/art/hero_mask.png"))
        );
        assert_eq!(loaded.resolve_output(), Some(PathBuf::from("/project/out")));
    }

    #[test]
    fn test_compress_variants() {
        let level = LoadedConfig::parse(r#"{ "compress": 4 }"#, PathBuf::from(".")).unwrap();
        assert_eq!(level.config.compress, Some(CompressConfig::Level(4)));

        let max = LoadedConfig::parse(r#"{ "compress": "max" }"#, PathBuf::from(".")).unwrap();
        assert_eq!(max.config.compress, Some(CompressConfig::Max("max".to_string())));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(LoadedConfig::parse("{ tile: yes", PathBuf::from(".")).is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(LoadedConfig::load(Path::new("/no/such/demasker.json")).is_err());
    }
}
