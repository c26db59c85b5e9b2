//! Roguelike core for Rough Light: an infinite sparse tile grid, a
//! room-and-corridor dungeon generator, and a raycast field of view with
//! per-viewer seen/explored bookkeeping.

pub mod error;
pub mod grid;
pub mod mapgen;
pub mod raycast;
pub mod tile;
pub mod viewer;
pub mod window;

pub use error::{MapError, Result};
pub use grid::SparseGrid;
pub use mapgen::{DEFAULT_RETRY_BUDGET, DungeonGen, DungeonParams};
pub use raycast::{Opacity, Raycaster, compute_visible};
pub use tile::Tile;
pub use viewer::{ViewState, Viewer};
pub use window::{Window, same_window, screen_position, window_of};
