//! A sparse, logically infinite grid of [`Tile`] values.
//!
//! Only written cells are stored. Every other coordinate reads as the
//! grid's default tile, so reads never fail and the plane has no edges.

use std::collections::HashMap;

use rough_core::{Point, Rect};

use crate::tile::Tile;

/// Infinite tile plane backed by a hash map, plus the list of placed rooms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseGrid {
    cells: HashMap<Point, Tile>,
    default: Tile,
    rooms: Vec<Rect>,
}

impl SparseGrid {
    /// An empty grid where every cell reads as `default`.
    pub fn new(default: Tile) -> Self {
        Self {
            cells: HashMap::new(),
            default,
            rooms: Vec::new(),
        }
    }

    /// A grid pre-populated with hand-placed tiles.
    pub fn with_tiles(tiles: impl IntoIterator<Item = (Point, Tile)>, default: Tile) -> Self {
        Self {
            cells: tiles.into_iter().collect(),
            default,
            rooms: Vec::new(),
        }
    }

    /// The tile at `p`, or the default tile if `p` was never written.
    #[inline]
    pub fn get(&self, p: Point) -> &Tile {
        self.cells.get(&p).unwrap_or(&self.default)
    }

    /// Store `tile` at `p`, replacing whatever was there.
    #[inline]
    pub fn set(&mut self, p: Point, tile: Tile) {
        self.cells.insert(p, tile);
    }

    /// Paint every cell of `rect` with its own clone of `tile`.
    ///
    /// With `is_room` the rectangle is also appended (once) to the room list.
    pub fn set_rect(&mut self, rect: Rect, tile: &Tile, is_room: bool) {
        for p in rect {
            self.cells.insert(p, tile.clone());
        }
        if is_room {
            self.rooms.push(rect);
        }
    }

    /// Carve an L-shaped corridor of the given width between `from` and `to`.
    ///
    /// The horizontal bar runs along `from.y` and is widened by `width / 2`
    /// on both ends so it meets the vertical bar, which runs along `to.x`.
    /// The vertical bar covers `[min(from.y, to.y), max(from.y, to.y))`, so
    /// when `to` lies above `from` the row of `to` itself is left uncarved;
    /// room centers sit inside carved rooms, where this never shows.
    /// Corridors are never recorded as rooms and may cut through anything.
    /// A non-positive width carves nothing.
    pub fn connect(&mut self, from: Point, to: Point, width: i32, tile: &Tile) {
        if width <= 0 {
            return;
        }
        let half = width / 2;
        let start_x = from.x.min(to.x) - half;
        let start_y = from.y.min(to.y);

        let horizontal = Rect::new(start_x, from.y - half, (from.x - to.x).abs() + width, width);
        let vertical = Rect::new(to.x - half, start_y, width, (from.y - to.y).abs());

        self.set_rect(horizontal, tile, false);
        self.set_rect(vertical, tile, false);
    }

    /// The tile returned for unwritten cells.
    #[inline]
    pub fn default_tile(&self) -> &Tile {
        &self.default
    }

    /// Rectangles painted as rooms, in placement order.
    #[inline]
    pub fn rooms(&self) -> &[Rect] {
        &self.rooms
    }

    /// Number of explicitly stored cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over the explicitly stored cells, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &Tile)> + '_ {
        self.cells.iter().map(|(&p, t)| (p, t))
    }

    /// Whether terrain at `p` stops movement.
    #[inline]
    pub fn is_blocked(&self, p: Point) -> bool {
        self.get(p).blocked
    }
}
