//! The [`Tile`] value stored in every grid cell.

use rough_core::Color;

/// Appearance and traversal properties of a single cell.
///
/// Tiles are plain values. The grid always stores its own clone, so a
/// template such as a shared "wall" tile can be changed afterwards without
/// repainting cells that were already placed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    /// Tint while the cell is in view.
    pub color: Color,
    /// Tint while the cell is explored but not currently seen.
    pub dark_color: Color,
    /// Creatures cannot enter the cell.
    pub blocked: bool,
    /// Rays stop at the cell.
    pub blocks_sight: bool,
    /// Opaque event tags, carried along but never interpreted here.
    pub events: Vec<String>,
}

impl Tile {
    /// A tile whose sight blocking follows `blocked` and whose dark tint is
    /// its normal tint.
    pub fn new(color: Color, blocked: bool) -> Self {
        Self {
            color,
            dark_color: color,
            blocked,
            blocks_sight: blocked,
            events: Vec::new(),
        }
    }

    /// Override sight blocking (builder).
    pub fn with_blocks_sight(mut self, blocks_sight: bool) -> Self {
        self.blocks_sight = blocks_sight;
        self
    }

    /// Override the explored-but-unseen tint (builder).
    pub fn with_dark_color(mut self, dark_color: Color) -> Self {
        self.dark_color = dark_color;
        self
    }

    /// Attach an event tag (builder).
    pub fn with_event(mut self, event: impl Into<String>) -> Self {
        self.events.push(event.into());
        self
    }

    /// `color` if the cell is lit, `dark_color` otherwise.
    #[inline]
    pub fn tint(&self, lit: bool) -> Color {
        if lit { self.color } else { self.dark_color }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn tile_round_trip() {
        let t = Tile::new(Color::YELLOW, true).with_event("door");
        let json = serde_json::to_string(&t).unwrap();
        let back: Tile = serde_json::from_str(&json).unwrap();
        assert_eq!(t, back);
    }
}
