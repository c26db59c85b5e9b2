//! Colour palette.

use rough_core::Color;

/// Wall in view.
pub const LIT_WALL: Color = Color::from_rgb(130, 110, 50);
/// Floor in view.
pub const LIT_GROUND: Color = Color::from_rgb(200, 180, 50);
/// Wall remembered but out of view.
pub const DARK_WALL: Color = Color::from_rgb(0, 0, 30);
/// Floor remembered but out of view.
pub const DARK_GROUND: Color = Color::from_rgb(20, 20, 80);
/// Never explored.
pub const UNEXPLORED: Color = Color::BLACK;

pub const PLAYER: Color = Color::WHITE;
pub const LABEL: Color = Color::WHITE;
pub const CREATURE: Color = Color::RED;
