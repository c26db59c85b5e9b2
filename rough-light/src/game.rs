//! Core game state.

use rand::Rng;
use rough_core::{Color, Point};
use rough_rl::{DungeonGen, Result, SparseGrid, Tile, Window, same_window, screen_position};

use crate::config::GameConfig;
use crate::entity::{Entity, Id, PLAYER_ID, room_label};
use crate::terrain;

/// A single-cell move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Offset of one step; up is +y.
    pub fn delta(self) -> Point {
        match self {
            Direction::Up => Point::new(0, 1),
            Direction::Down => Point::new(0, -1),
            Direction::Left => Point::new(-1, 0),
            Direction::Right => Point::new(1, 0),
        }
    }
}

/// The map, the entities on it and the display window size.
pub struct Game {
    map: SparseGrid,
    entities: Vec<Entity>,
    width: i32,
    height: i32,
}

impl Game {
    /// Start a game on `map`: the player stands at the dungeon's starting
    /// point and each room gets a letter label at its center.
    pub fn new(map: SparseGrid, config: &GameConfig) -> Self {
        let mut player = Entity::player(
            config.dungeon.start_center,
            config.fov_radius,
            config.starting_life,
        );
        player.update_vision(&map);

        let mut entities = Vec::with_capacity(map.rooms().len() + 1);
        entities.push(player);
        for (i, room) in map.rooms().iter().enumerate() {
            entities.push(Entity::label(room.center(), room_label(i)));
        }

        Self {
            map,
            entities,
            width: config.width,
            height: config.height,
        }
    }

    /// Add an entity and return its id.
    pub fn add_entity(&mut self, entity: Entity) -> Id {
        self.entities.push(entity);
        self.entities.len() - 1
    }

    /// Whether terrain or a blocking entity occupies `p`.
    pub fn is_blocked(&self, p: Point) -> bool {
        self.map.is_blocked(p) || self.entities.iter().any(|e| e.blocks && e.location == p)
    }

    /// Try to move the player one cell. Returns whether the move happened.
    pub fn move_player(&mut self, direction: Direction) -> bool {
        let delta = direction.delta();
        let target = self.player().location + delta;
        if self.is_blocked(target) {
            log::debug!("player move {direction:?} to {target} refused");
            return false;
        }
        let Self { map, entities, .. } = self;
        entities[PLAYER_ID].step(delta, map)
    }

    // -------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------

    pub fn player(&self) -> &Entity {
        &self.entities[PLAYER_ID]
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn map(&self) -> &SparseGrid {
        &self.map
    }

    /// Display window size as `(width, height)`.
    pub fn window_size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    // -------------------------------------------------------------------
    // Drawing queries
    // -------------------------------------------------------------------

    /// Entities to draw, in draw order: visible, currently seen by the
    /// player and in the player's window. The list is reversed so the
    /// player comes last and ends up on top.
    pub fn visible_entities(&self) -> Result<Vec<&Entity>> {
        let player = self.player();
        let Some(vision) = &player.vision else {
            return Ok(Vec::new());
        };
        let mut drawn = Vec::new();
        for e in self.entities.iter().rev() {
            if e.visible
                && vision.is_seen(e.location)
                && same_window(self.width, self.height, e.location, player.location)?
            {
                drawn.push(e);
            }
        }
        Ok(drawn)
    }

    /// The window the player is standing in.
    pub fn current_window(&self) -> Result<Window<'_>> {
        self.map
            .window_contents(self.width, self.height, self.player().location)
    }

    /// Display position of `p` inside its window.
    pub fn screen_position(&self, p: Point) -> Result<Point> {
        screen_position(self.width, self.height, p)
    }

    /// Colour to draw cell `p` with: lit if seen, dark if only explored,
    /// otherwise the colour of `unexplored`.
    pub fn cell_tint(&self, p: Point, unexplored: &Tile) -> Color {
        match &self.player().vision {
            Some(v) if v.is_seen(p) => self.map.get(p).tint(true),
            Some(v) if v.is_explored(p) => self.map.get(p).tint(false),
            _ => unexplored.color,
        }
    }
}

/// Generate a dungeon from `rng` and start a game on it.
pub fn build_game(config: &GameConfig, rng: &mut impl Rng) -> Game {
    let map = DungeonGen::new(rng).generate(&config.dungeon, &terrain::wall(), &terrain::floor());
    log::info!("dungeon generated with {} rooms", map.rooms().len());
    Game::new(map, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rough_core::Rect;
    use rough_rl::DungeonParams;

    use crate::colors;
    use crate::entity::EntityKind;

    fn small_config() -> GameConfig {
        GameConfig {
            width: 20,
            height: 10,
            fov_radius: 8,
            dungeon: DungeonParams {
                bounds: Rect::new(-40, -40, 80, 80),
                room_count: 4,
                min_size: 4,
                max_size: 6,
                start_center: Point::new(5, 5),
                ..DungeonParams::default()
            },
            ..GameConfig::default()
        }
    }

    /// One 10x3 room starting at the origin, player at (1, 1).
    fn hall() -> Game {
        let mut map = SparseGrid::new(terrain::wall());
        map.set_rect(Rect::new(0, 0, 10, 3), &terrain::floor(), true);
        let config = GameConfig {
            width: 20,
            height: 10,
            fov_radius: 6,
            dungeon: DungeonParams {
                start_center: Point::new(1, 1),
                ..DungeonParams::default()
            },
            ..GameConfig::default()
        };
        Game::new(map, &config)
    }

    #[test]
    fn new_game_places_player_and_labels() {
        let g = hall();
        assert_eq!(g.player().kind, EntityKind::Player);
        assert_eq!(g.player().location, Point::new(1, 1));
        assert_eq!(g.entities().len(), 2);
        let label = &g.entities()[1];
        assert_eq!(label.kind, EntityKind::Label);
        assert_eq!(label.glyph, 'a');
        assert_eq!(label.location, Point::new(5, 1));
        assert!(g.player().vision.as_ref().unwrap().is_seen(Point::new(1, 1)));
    }

    #[test]
    fn move_player_respects_walls_and_entities() {
        let mut g = hall();
        assert!(g.move_player(Direction::Up));
        assert_eq!(g.player().location, Point::new(1, 2));
        assert!(!g.move_player(Direction::Up));
        assert_eq!(g.player().location, Point::new(1, 2));

        g.add_entity(Entity::creature("rat", Point::new(2, 2), 'r', 2));
        assert!(g.is_blocked(Point::new(2, 2)));
        assert!(!g.move_player(Direction::Right));

        // Labels do not block.
        let mut g = hall();
        for _ in 0..4 {
            assert!(g.move_player(Direction::Right));
        }
        assert_eq!(g.player().location, Point::new(5, 1));
    }

    #[test]
    fn visible_entities_puts_player_last() {
        let mut g = hall();
        g.add_entity(Entity::creature("rat", Point::new(3, 1), 'r', 2));
        // Out of sight behind rock.
        g.add_entity(Entity::creature("mole", Point::new(3, 6), 'm', 2));
        let mut hidden = Entity::creature("ghost", Point::new(2, 1), 'g', 2);
        hidden.visible = false;
        g.add_entity(hidden);

        let drawn = g.visible_entities().unwrap();
        let names: Vec<&str> = drawn.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["rat", "label a", "player"]);
    }

    #[test]
    fn visible_entities_stay_in_player_window() {
        let map = SparseGrid::new(terrain::floor());
        let config = GameConfig {
            width: 4,
            height: 4,
            fov_radius: 10,
            dungeon: DungeonParams {
                start_center: Point::new(3, 1),
                ..DungeonParams::default()
            },
            ..GameConfig::default()
        };
        let mut g = Game::new(map, &config);
        g.add_entity(Entity::creature("near", Point::new(1, 1), 'n', 1));
        g.add_entity(Entity::creature("far", Point::new(5, 1), 'f', 1));
        let names: Vec<String> = g
            .visible_entities()
            .unwrap()
            .iter()
            .map(|e| e.name.clone())
            .collect();
        assert_eq!(names, vec!["near".to_string(), "player".to_string()]);
    }

    #[test]
    fn cell_tint_follows_visibility() {
        let mut g = hall();
        let unexplored = terrain::unexplored();
        assert_eq!(g.cell_tint(Point::new(1, 1), &unexplored), colors::LIT_GROUND);
        assert_eq!(g.cell_tint(Point::new(1, 3), &unexplored), colors::LIT_WALL);
        assert_eq!(g.cell_tint(Point::new(50, 50), &unexplored), colors::UNEXPLORED);

        // Walk to the far end; the start is remembered but out of range.
        for _ in 0..8 {
            g.move_player(Direction::Right);
        }
        assert_eq!(g.player().location, Point::new(9, 1));
        assert_eq!(g.cell_tint(Point::new(1, 1), &unexplored), colors::DARK_GROUND);
    }

    #[test]
    fn current_window_contains_player() {
        let g = hall();
        let w = g.current_window().unwrap();
        assert_eq!(w.origin(), Point::new(0, 0));
        let pos = g.screen_position(g.player().location).unwrap();
        let (p, _) = w.cell(pos.x, pos.y).unwrap();
        assert_eq!(p, g.player().location);
    }

    #[test]
    fn zero_sized_window_is_an_error() {
        let mut map = SparseGrid::new(terrain::floor());
        map.set_rect(Rect::new(0, 0, 3, 3), &terrain::floor(), true);
        let config = GameConfig {
            width: 0,
            ..small_config()
        };
        let g = Game::new(map, &config);
        assert!(g.visible_entities().is_err());
        assert!(g.current_window().is_err());
    }

    #[test]
    fn build_game_is_deterministic() {
        let config = small_config();
        let a = build_game(&config, &mut StdRng::seed_from_u64(17));
        let b = build_game(&config, &mut StdRng::seed_from_u64(17));
        assert_eq!(a.map(), b.map());
        assert_eq!(a.entities().len(), a.map().rooms().len() + 1);
        assert!(!a.is_blocked(a.player().location));
    }

    #[test]
    fn directions_are_unit_steps() {
        for d in Direction::ALL {
            let p = d.delta();
            assert_eq!(p.x.abs() + p.y.abs(), 1);
        }
        assert_eq!(Direction::Up.delta(), Point::new(0, 1));
    }
}
