//! Room-and-corridor dungeon generation.
//!
//! Rooms are rejection-sampled inside a bounding rectangle. Each accepted
//! room is stitched to the previously accepted one with an L-shaped
//! corridor. A retry budget caps the work: once it runs out the generator
//! stops and hands back whatever it has built, which is still a valid map.

use rand::Rng;
use rough_core::{Point, Rect};

use crate::grid::SparseGrid;
use crate::tile::Tile;

/// Consecutive rejected candidates tolerated before generation stops.
pub const DEFAULT_RETRY_BUDGET: u32 = 1000;

/// Parameters for [`DungeonGen::generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DungeonParams {
    /// Every sampled room must fit inside this rectangle.
    pub bounds: Rect,
    /// Total number of rooms wanted, the starting room included.
    pub room_count: usize,
    /// Smallest room side.
    pub min_size: i32,
    /// Largest room side; also the side of the starting room.
    pub max_size: i32,
    /// Center of the starting room.
    pub start_center: Point,
    /// See [`DEFAULT_RETRY_BUDGET`].
    pub retry_budget: u32,
}

impl Default for DungeonParams {
    fn default() -> Self {
        Self {
            bounds: Rect::new(-100, -100, 200, 200),
            room_count: 26,
            min_size: 10,
            max_size: 10,
            start_center: Point::new(50, 28),
            retry_budget: DEFAULT_RETRY_BUDGET,
        }
    }
}

/// Dungeon generator driven by an injected random source.
///
/// The same seed and parameters always produce the same grid.
pub struct DungeonGen<R: Rng> {
    rng: R,
}

impl<R: Rng> DungeonGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Build a dungeon whose unwritten cells read as `wall` and whose rooms
    /// and corridors are painted with `floor`.
    ///
    /// The starting room is a `max_size` square around `start_center` and is
    /// not checked against the bounds. Sampled rooms are rejected when they
    /// leave the bounds or touch any earlier room, edges included. Corridors
    /// are carved without any overlap check.
    pub fn generate(&mut self, params: &DungeonParams, wall: &Tile, floor: &Tile) -> SparseGrid {
        let mut grid = SparseGrid::new(wall.clone());

        let lo = params.min_size.min(params.max_size).max(1);
        let hi = params.min_size.max(params.max_size).max(1);

        let start = params.start_center;
        let start_room = Rect::new(start.x - hi / 2, start.y - hi / 2, hi, hi);
        grid.set_rect(start_room, floor, true);

        let bounds = params.bounds;
        if bounds.is_empty() {
            if params.room_count > 1 {
                log::warn!("dungeon bounds {bounds} are empty, only the starting room was placed");
            }
            return grid;
        }

        let mut retries = params.retry_budget;
        let mut last_center = start;

        while grid.rooms().len() < params.room_count {
            let w = self.rng.random_range(lo..=hi);
            let h = self.rng.random_range(lo..=hi);
            let x = self.rng.random_range(bounds.x1..bounds.x2);
            let y = self.rng.random_range(bounds.y1..bounds.y2);
            let room = Rect::new(x, y, w, h);

            let rejected =
                !bounds.contains(room) || grid.rooms().iter().any(|&other| room.intersects(other));
            if rejected {
                retries = retries.saturating_sub(1);
                if retries == 0 {
                    log::warn!(
                        "room placement retries exhausted, generation stopped with {} of {} rooms",
                        grid.rooms().len(),
                        params.room_count
                    );
                    break;
                }
                continue;
            }

            grid.set_rect(room, floor, true);
            retries = params.retry_budget;

            let center = room.center();
            let tunnel_width = self.rng.random_range(2..=2 + w / 4);
            grid.connect(last_center, center, tunnel_width, floor);
            log::debug!("placed room {room}, corridor {last_center} -> {center} width {tunnel_width}");
            last_center = center;
        }

        grid
    }
}
