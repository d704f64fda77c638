//! Level loading and saving
//!
//! Uses RON (Rusty Object Notation) for human-readable level files.
//! - Parsing is split from file IO so WASM builds can feed in text fetched
//!   through macroquad's async loader
//! - Every loaded map is validated before the game touches it

use std::fs;
use std::path::Path;

use super::{TileLayer, TileMap};

/// Validation limits to prevent resource exhaustion from malicious files
pub mod limits {
    /// Maximum grid dimension (width or height) for a map
    pub const MAX_MAP_SIZE: u32 = 1024;
    /// Maximum tile id referencing the tileset strip
    pub const MAX_TILE_ID: u16 = 256;
}

/// Error type for level loading
#[derive(Debug)]
pub enum LevelError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    SerializeError(ron::Error),
    ValidationError(String),
}

impl From<std::io::Error> for LevelError {
    fn from(e: std::io::Error) -> Self {
        LevelError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for LevelError {
    fn from(e: ron::error::SpannedError) -> Self {
        LevelError::ParseError(e)
    }
}

impl From<ron::Error> for LevelError {
    fn from(e: ron::Error) -> Self {
        LevelError::SerializeError(e)
    }
}

impl std::fmt::Display for LevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelError::IoError(e) => write!(f, "IO error: {}", e),
            LevelError::ParseError(e) => write!(f, "Parse error: {}", e),
            LevelError::SerializeError(e) => write!(f, "Serialize error: {}", e),
            LevelError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

fn validate_layer(layer: &TileLayer, expected: usize, name: &str) -> Result<(), String> {
    if layer.cells.len() != expected {
        return Err(format!(
            "{} layer has {} cells, expected {}",
            name,
            layer.cells.len(),
            expected
        ));
    }
    for (i, &id) in layer.cells.iter().enumerate() {
        if id > limits::MAX_TILE_ID {
            return Err(format!("{} layer cell {} has tile id {}", name, i, id));
        }
    }
    Ok(())
}

/// Validate a parsed map against the limits above
pub fn validate_map(map: &TileMap) -> Result<(), LevelError> {
    if map.width == 0 || map.height == 0 {
        return Err(LevelError::ValidationError(format!(
            "empty grid {}x{}",
            map.width, map.height
        )));
    }
    if map.width > limits::MAX_MAP_SIZE || map.height > limits::MAX_MAP_SIZE {
        return Err(LevelError::ValidationError(format!(
            "grid {}x{} exceeds maximum {}",
            map.width,
            map.height,
            limits::MAX_MAP_SIZE
        )));
    }

    let expected = (map.width * map.height) as usize;
    validate_layer(&map.ground, expected, "ground").map_err(LevelError::ValidationError)?;
    validate_layer(&map.coins, expected, "coin").map_err(LevelError::ValidationError)?;

    if map.spawn.0 >= map.width || map.spawn.1 >= map.height {
        return Err(LevelError::ValidationError(format!(
            "spawn ({}, {}) outside {}x{} grid",
            map.spawn.0, map.spawn.1, map.width, map.height
        )));
    }
    Ok(())
}

/// Parse and validate a map from RON text
pub fn parse_map(text: &str) -> Result<TileMap, LevelError> {
    let map: TileMap = ron::from_str(text)?;
    validate_map(&map)?;
    Ok(map)
}

/// Load a map from a RON file on disk (native builds and tests)
pub fn load_map_file(path: &Path) -> Result<TileMap, LevelError> {
    let text = fs::read_to_string(path)?;
    parse_map(&text)
}

/// Serialize a map to RON text
pub fn serialize_map(map: &TileMap) -> Result<String, LevelError> {
    let pretty = ron::ser::PrettyConfig::new().depth_limit(3);
    Ok(ron::ser::to_string_pretty(map, pretty)?)
}

/// Save a map to a RON file on disk
pub fn save_map_file(map: &TileMap, path: &Path) -> Result<(), LevelError> {
    validate_map(map)?;
    let text = serialize_map(map)?;
    fs::write(path, text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.ron");

        let map = TileMap::sample();
        save_map_file(&map, &path).unwrap();
        let loaded = load_map_file(&path).unwrap();

        assert_eq!(loaded.width, map.width);
        assert_eq!(loaded.height, map.height);
        assert_eq!(loaded.ground.cells, map.ground.cells);
        assert_eq!(loaded.coins.cells, map.coins.cells);
        assert_eq!(loaded.spawn, map.spawn);
    }

    #[test]
    fn test_rejects_layer_length_mismatch() {
        let mut map = TileMap::sample();
        map.ground.cells.pop();
        assert!(matches!(
            validate_map(&map),
            Err(LevelError::ValidationError(_))
        ));
    }

    #[test]
    fn test_rejects_spawn_outside_grid() {
        let mut map = TileMap::sample();
        map.spawn = (map.width, 0);
        assert!(matches!(
            validate_map(&map),
            Err(LevelError::ValidationError(_))
        ));
    }

    #[test]
    fn test_rejects_oversized_grid() {
        let mut map = TileMap::sample();
        map.width = limits::MAX_MAP_SIZE + 1;
        assert!(validate_map(&map).is_err());
    }

    #[test]
    fn test_parse_error_is_not_validation_error() {
        assert!(matches!(
            parse_map("this is not ron"),
            Err(LevelError::ParseError(_))
        ));
    }
}
