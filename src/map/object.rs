// src/map/object.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// An overlay entity occupying a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectTag {
    House,
    Castle,
    Tree,
    Rock,
    Chest,
    Enemy,
    Player,
    Flag,
}

impl ObjectTag {
    pub fn name(&self) -> &'static str {
        match self {
            ObjectTag::House => "house",
            ObjectTag::Castle => "castle",
            ObjectTag::Tree => "tree",
            ObjectTag::Rock => "rock",
            ObjectTag::Chest => "chest",
            ObjectTag::Enemy => "enemy",
            ObjectTag::Player => "player",
            ObjectTag::Flag => "flag",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ObjectTag::House => "House",
            ObjectTag::Castle => "Castle",
            ObjectTag::Tree => "Tree",
            ObjectTag::Rock => "Rock",
            ObjectTag::Chest => "Chest",
            ObjectTag::Enemy => "Enemy",
            ObjectTag::Player => "Player",
            ObjectTag::Flag => "Flag",
        }
    }

    /// Glyph drawn on top of the terrain colour. Also used by the ASCII renderer.
    pub fn glyph(&self) -> char {
        match self {
            ObjectTag::House => 'H',
            ObjectTag::Castle => 'C',
            ObjectTag::Tree => 'T',
            ObjectTag::Rock => 'R',
            ObjectTag::Chest => '$',
            ObjectTag::Enemy => 'E',
            ObjectTag::Player => '@',
            ObjectTag::Flag => 'F',
        }
    }

    /// Returns all object tags in palette order.
    pub fn all() -> &'static [ObjectTag] {
        &[
            ObjectTag::House,
            ObjectTag::Castle,
            ObjectTag::Tree,
            ObjectTag::Rock,
            ObjectTag::Chest,
            ObjectTag::Enemy,
            ObjectTag::Player,
            ObjectTag::Flag,
        ]
    }
}

impl fmt::Display for ObjectTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
