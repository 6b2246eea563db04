//! Headless session runner (default binary).
//!
//! Drives one complete session from first spawn to game over with a seeded
//! value stream and a randomized command policy, printing notifications to
//! stdout. This is the end-to-end smoke path through the public API.
//!
//! Usage: `sumfall [--seed N] [--dt MS]`

use anyhow::{anyhow, Result};

use sumfall::core::{Phase, Session, SessionObserver, SimpleRng};
use sumfall::types::{Command, Tile};

#[derive(Debug, Clone, PartialEq, Eq)]
struct RunConfig {
    seed: u32,
    dt_ms: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self { seed: 1, dt_ms: 16 }
    }
}

fn parse_args(args: &[String]) -> Result<RunConfig> {
    let mut config = RunConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                config.seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
            }
            "--dt" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --dt"))?;
                config.dt_ms = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --dt value: {}", v))?;
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    if config.dt_ms == 0 {
        return Err(anyhow!("--dt must be at least 1"));
    }

    Ok(config)
}

/// Prints one line per notification, with per-tick clock updates throttled
/// to whole seconds
#[derive(Debug, Default)]
struct StdoutObserver {
    last_whole_second: u32,
}

impl SessionObserver for StdoutObserver {
    fn elapsed_changed(&mut self, elapsed: f32) {
        let whole = elapsed as u32;
        if whole != self.last_whole_second {
            self.last_whole_second = whole;
            println!("t {}s", whole);
        }
    }

    fn score_changed(&mut self, score: u32) {
        println!("score {}", score);
    }

    fn combo_changed(&mut self, combo: u32) {
        println!("combo x{}", combo);
    }

    fn bonus_clear(&mut self) {
        println!("bonus clear");
    }

    fn plain_clear(&mut self) {
        println!("plain clear");
    }

    fn tile_spawned(&mut self, tile: Tile) {
        println!("spawn {} at ({}, {})", tile.value, tile.x, tile.y);
    }

    fn tile_locked(&mut self, tile: Tile) {
        println!("lock {} at ({}, {})", tile.value, tile.x, tile.y);
    }

    fn row_cleared(&mut self, tiles: &[Tile]) {
        let values: Vec<String> = tiles.iter().map(|t| t.value.to_string()).collect();
        let sum: u32 = tiles.iter().map(|t| t.value as u32).sum();
        println!("row cleared: {} (sum {})", values.join("+"), sum);
    }

    fn game_over(&mut self, final_score: u32) {
        println!("game over, final score {}", final_score);
    }
}

/// Randomized command policy: mostly drift, occasionally drop
fn next_command(rng: &mut SimpleRng) -> Option<Command> {
    match rng.next_range(12) {
        0 | 1 => Some(Command::MoveLeft),
        2 | 3 => Some(Command::MoveRight),
        4 => Some(Command::SoftDrop),
        5 => Some(Command::HardDrop),
        _ => None,
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args)?;
    run(&config)
}

fn run(config: &RunConfig) -> Result<()> {
    let dt = config.dt_ms as f32 / 1000.0;
    // Separate stream for the command policy so it does not mirror the tiles
    let mut policy = SimpleRng::new(!config.seed);
    let mut observer = StdoutObserver::default();

    let mut session = Session::new(config.seed);

    println!("sumfall seed {} dt {}ms", config.seed, config.dt_ms);
    session.start(&mut observer);

    let mut ticks = 0u64;
    while session.phase() == Phase::Active {
        session.tick(dt, next_command(&mut policy), &mut observer);
        ticks += 1;
    }

    println!("{} ticks, {:.2}s played", ticks, session.elapsed());
    Ok(())
}
