//! Rough Light, a roguelike built on `rough-rl`.
//!
//! This crate owns everything the core leaves to its consumer: the entity
//! list, collision against entities, which entities get drawn, and how each
//! cell is tinted from the player's seen/explored state.

pub mod colors;
pub mod config;
pub mod entity;
pub mod game;
pub mod terrain;

pub use config::GameConfig;
pub use entity::{Entity, EntityKind, Id, PLAYER_ID};
pub use game::{Direction, Game, build_game};
