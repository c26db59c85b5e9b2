//! Rough Light: generate a dungeon, take a random walk through it and report
//! what the player has seen.

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use rough_light::{Direction, GameConfig, build_game};

#[derive(Parser, Debug)]
#[command(name = "rough-light", about = "Generate a dungeon and walk the player through it")]
struct Args {
    /// Seed for dungeon generation and the walk.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Number of rooms to place, the starting room included.
    #[arg(long)]
    rooms: Option<usize>,

    /// Player sight radius.
    #[arg(long)]
    radius: Option<i32>,

    /// Random moves to attempt.
    #[arg(long, default_value_t = 200)]
    steps: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = GameConfig {
        seed: args.seed,
        ..GameConfig::default()
    };
    if let Some(rooms) = args.rooms {
        config.dungeon.room_count = rooms;
    }
    if let Some(radius) = args.radius {
        config.fov_radius = radius;
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut game = build_game(&config, &mut rng);

    let mut moved = 0;
    for _ in 0..args.steps {
        let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
        if game.move_player(direction) {
            moved += 1;
        }
    }

    let player = game.player();
    let window = game.current_window()?;
    println!("rooms:       {}", game.map().rooms().len());
    println!("moves:       {moved} of {}", args.steps);
    println!("player:      {}", player.location);
    println!("window:      {}", window.origin());
    if let Some(vision) = &player.vision {
        println!("seen:        {}", vision.seen().len());
        println!("explored:    {}", vision.explored().len());
    }
    println!("in view:     {}", game.visible_entities()?.len());
    Ok(())
}
