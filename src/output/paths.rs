use std::fs;
use std::path::{Path, PathBuf};

use crate::error::DemaskError;
use crate::tile::Tile;

/// File name of the source without its extension, used to prefix sprite files
pub fn source_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "sprite".to_string())
}

/// `<stem>-<originY>-<originX>.png`
pub fn tile_filename(stem: &str, tile: &Tile) -> String {
    format!("{}-{}-{}.png", stem, tile.origin_y, tile.origin_x)
}

/// Create the sprite directory (with parents) and return the path tiles
/// should be written under, resolved to absolute form when requested.
pub fn prepare_output_dir(dir: &Path, absolute: bool) -> Result<PathBuf, DemaskError> {
    let dir = if absolute {
        std::path::absolute(dir).map_err(|e| DemaskError::ResolvePath {
            path: dir.to_path_buf(),
            source: e,
        })?
    } else {
        dir.to_path_buf()
    };

    fs::create_dir_all(&dir).map_err(|e| DemaskError::CreateDir {
        path: dir.clone(),
        source: e,
    })?;

    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::Rect;

    #[test]
    fn test_source_stem_strips_extension() {
        assert_eq!(source_stem(Path::new("art/hero.png")), "hero");
        assert_eq!(source_stem(Path::new("/abs/knight.walk.png")), "knight.walk");
        assert_eq!(source_stem(Path::new("noext")), "noext");
    }

    #[test]
    fn test_tile_filename_is_row_then_column() {
        let tile = Tile {
            origin_x: 30,
            origin_y: 22,
            rect: Rect::new(30, 22, 30, 22),
        };
        assert_eq!(tile_filename("hero", &tile), "hero-22-30.png");
    }

    #[test]
    fn test_prepare_creates_nested_absolute_dir() {
        let root = std::env::temp_dir().join(format!(
            "demasker_paths_{}_{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        let nested = root.join("a").join("b");

        let dir = prepare_output_dir(&nested, true).unwrap();
        assert!(dir.is_absolute());
        assert!(dir.is_dir());

        // Existing directories are fine
        prepare_output_dir(&nested, false).unwrap();

        std::fs::remove_dir_all(&root).ok();
    }
}
