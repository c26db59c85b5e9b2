//! Entities: the player, creatures and room labels.

use rough_core::{Color, Point};
use rough_rl::{SparseGrid, Viewer};

use crate::colors;

/// Index into the game's entity list.
pub type Id = usize;

/// The player is always the first entity.
pub const PLAYER_ID: Id = 0;

/// What an entity is, as far as the game cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    Creature,
    /// Map annotation; never moves or blocks.
    Label,
}

/// Something placed on the map.
#[derive(Debug, Clone)]
pub struct Entity {
    pub name: String,
    pub kind: EntityKind,
    pub location: Point,
    pub glyph: char,
    pub color: Color,
    /// Whether the entity is ever drawn.
    pub visible: bool,
    /// Whether the entity stops movement into its cell.
    pub blocks: bool,
    pub can_move: bool,
    pub life: Option<i32>,
    /// Only entities with vision track seen and explored cells.
    pub vision: Option<Viewer>,
}

impl Entity {
    pub fn player(location: Point, fov_radius: i32, life: i32) -> Self {
        Self {
            name: "player".into(),
            kind: EntityKind::Player,
            location,
            glyph: '@',
            color: colors::PLAYER,
            visible: true,
            blocks: true,
            can_move: true,
            life: Some(life),
            vision: Some(Viewer::new(fov_radius)),
        }
    }

    pub fn creature(name: impl Into<String>, location: Point, glyph: char, life: i32) -> Self {
        Self {
            name: name.into(),
            kind: EntityKind::Creature,
            location,
            glyph,
            color: colors::CREATURE,
            visible: true,
            blocks: true,
            can_move: true,
            life: Some(life),
            vision: None,
        }
    }

    pub fn label(location: Point, glyph: char) -> Self {
        Self {
            name: format!("label {glyph}"),
            kind: EntityKind::Label,
            location,
            glyph,
            color: colors::LABEL,
            visible: true,
            blocks: false,
            can_move: false,
            life: None,
            vision: None,
        }
    }

    /// Entities without a life total never die.
    pub fn is_alive(&self) -> bool {
        self.life.is_none_or(|hp| hp > 0)
    }

    /// Recompute this entity's vision from where it stands.
    pub fn update_vision(&mut self, map: &SparseGrid) {
        if let Some(vision) = &mut self.vision {
            vision.recompute(self.location, map);
        }
    }

    /// Step by `delta` if the entity can move and the terrain allows it.
    ///
    /// Only terrain is checked here; collision with other entities is the
    /// game's concern.
    pub fn step(&mut self, delta: Point, map: &SparseGrid) -> bool {
        let target = self.location + delta;
        if !self.can_move || map.is_blocked(target) {
            return false;
        }
        self.location = target;
        self.update_vision(map);
        true
    }
}

/// Glyph labelling the room at `index`: 'a' through 'z', then wrapping.
pub fn room_label(index: usize) -> char {
    char::from(b'a' + (index % 26) as u8)
}
