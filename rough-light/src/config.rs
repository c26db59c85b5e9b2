//! Game configuration.

use rough_rl::DungeonParams;

/// Display window width, in cells.
pub const SCREEN_WIDTH: i32 = 100;
/// Display window height, in cells.
pub const SCREEN_HEIGHT: i32 = 56;
/// Player sight radius.
pub const FOV_RADIUS: i32 = 20;
pub const STARTING_LIFE: i32 = 10;

/// Everything needed to set up a new game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Width of the display window the plane is paged into.
    pub width: i32,
    /// Height of the display window the plane is paged into.
    pub height: i32,
    pub fov_radius: i32,
    pub starting_life: i32,
    /// Seed for dungeon generation.
    pub seed: u64,
    /// The player starts at `dungeon.start_center`.
    pub dungeon: DungeonParams,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            fov_radius: FOV_RADIUS,
            starting_life: STARTING_LIFE,
            seed: 0,
            dungeon: DungeonParams::default(),
        }
    }
}
