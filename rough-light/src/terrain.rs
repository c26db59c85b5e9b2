//! Terrain tiles used by the game.

use rough_rl::Tile;

use crate::colors;

/// Solid rock. Unwritten dungeon cells read as this.
pub fn wall() -> Tile {
    Tile::new(colors::LIT_WALL, true).with_dark_color(colors::DARK_WALL)
}

/// Walkable room and corridor floor.
pub fn floor() -> Tile {
    Tile::new(colors::LIT_GROUND, false).with_dark_color(colors::DARK_GROUND)
}

/// Stand-in drawn for cells the player has never seen.
pub fn unexplored() -> Tile {
    Tile::new(colors::UNEXPLORED, true)
}
