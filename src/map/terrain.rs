// src/map/terrain.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// The base ground type of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerrainTag {
    #[default]
    Grass,
    Water,
    Mountain,
    Forest,
    Sand,
    Stone,
}

impl TerrainTag {
    /// Key used in map files.
    pub fn name(&self) -> &'static str {
        match self {
            TerrainTag::Grass => "grass",
            TerrainTag::Water => "water",
            TerrainTag::Mountain => "mountain",
            TerrainTag::Forest => "forest",
            TerrainTag::Sand => "sand",
            TerrainTag::Stone => "stone",
        }
    }

    /// Returns a user-friendly name for the palette.
    pub fn display_name(&self) -> &'static str {
        match self {
            TerrainTag::Grass => "Grass",
            TerrainTag::Water => "Water",
            TerrainTag::Mountain => "Mountain",
            TerrainTag::Forest => "Forest",
            TerrainTag::Sand => "Sand",
            TerrainTag::Stone => "Stone",
        }
    }

    /// Fill colour of a cell with this terrain, as RGB.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            TerrainTag::Grass => (0x7c, 0xb3, 0x42),
            TerrainTag::Water => (0x42, 0xa5, 0xf5),
            TerrainTag::Mountain => (0x75, 0x75, 0x75),
            TerrainTag::Forest => (0x2e, 0x7d, 0x32),
            TerrainTag::Sand => (0xfd, 0xd8, 0x35),
            TerrainTag::Stone => (0x90, 0xa4, 0xae),
        }
    }

    /// Single character used by the ASCII renderer.
    pub fn symbol(&self) -> char {
        match self {
            TerrainTag::Grass => '.',
            TerrainTag::Water => '~',
            TerrainTag::Mountain => '^',
            TerrainTag::Forest => '"',
            TerrainTag::Sand => ':',
            TerrainTag::Stone => '#',
        }
    }

    /// Returns all terrain tags in palette order.
    pub fn all() -> &'static [TerrainTag] {
        &[
            TerrainTag::Grass,
            TerrainTag::Water,
            TerrainTag::Mountain,
            TerrainTag::Forest,
            TerrainTag::Sand,
            TerrainTag::Stone,
        ]
    }
}

impl fmt::Display for TerrainTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_names_match_keys() {
        for terrain in TerrainTag::all() {
            let json = serde_json::to_string(terrain).unwrap();
            assert_eq!(json, format!("\"{}\"", terrain.name()));
        }
    }

    #[test]
    fn test_unknown_terrain_rejected() {
        assert!(serde_json::from_str::<TerrainTag>("\"lava\"").is_err());
    }
}
