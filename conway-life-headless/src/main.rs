#![deny(clippy::all)]
#![forbid(unsafe_code)]

use clap::Parser;
use conway_life::config::{CELL_SIZE, FRAME_RATE, STEP_DELAY_MILLIS};
use conway_life::{Game, GameConfig, GameError, PlayState, Random, Viewport};
use log::{debug, info, warn};
use std::error::Error;

const VIEWPORT_WIDTH: i32 = 1280;
const VIEWPORT_HEIGHT: i32 = 720;
const FRAMES: u32 = 300;

#[derive(Parser, Debug)]
#[command(name = "conway-life-headless")]
#[command(version)]
#[command(about = "Runs Conway's Game of Life without a window, one simulated frame at a time")]
struct Cli {
    /// Viewport width in pixels
    #[arg(long, default_value_t = VIEWPORT_WIDTH, allow_negative_numbers = true)]
    width: i32,

    /// Viewport height in pixels
    #[arg(long, default_value_t = VIEWPORT_HEIGHT, allow_negative_numbers = true)]
    height: i32,

    /// Pixels per cell edge
    #[arg(long, default_value_t = CELL_SIZE)]
    cell_size: u32,

    /// Milliseconds between generations
    #[arg(long, default_value_t = STEP_DELAY_MILLIS)]
    step_delay: u32,

    /// Simulated frames per second
    #[arg(long, default_value_t = FRAME_RATE)]
    frame_rate: u32,

    /// Number of frames to run
    #[arg(short, long, default_value_t = FRAMES)]
    frames: u32,

    /// Replace the seed line with random life at this density
    #[arg(long)]
    random_fill: Option<f64>,

    /// Seed for --random-fill
    #[arg(long)]
    seed: Option<u64>,

    /// Toggle the cell at column,row before running (repeatable)
    #[arg(long, value_parser = parse_cell)]
    toggle: Vec<(i64, i64)>,

    /// Print the final generation
    #[arg(short, long)]
    print: bool,
}

fn parse_cell(arg: &str) -> Result<(i64, i64), String> {
    let (x, y) = arg
        .split_once(',')
        .ok_or_else(|| format!("expected column,row but got {arg:?}"))?;
    let parse = |value: &str| {
        value
            .trim()
            .parse::<i64>()
            .map_err(|err| format!("{value:?}: {err}"))
    };
    Ok((parse(x)?, parse(y)?))
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let config = GameConfig {
        cell_size: cli.cell_size,
        step_delay_millis: cli.step_delay,
        frame_rate: cli.frame_rate,
    };
    let mut game = Game::new(&config, Viewport::new(cli.width, cli.height))?;
    prepare(&mut game, &cli)?;
    run(&mut game, cli.frames, config.frame_millis())?;

    if cli.print {
        print!("{}", game.grid());
    }
    Ok(())
}

fn prepare(game: &mut Game, cli: &Cli) -> Result<(), GameError> {
    if let Some(probability) = cli.random_fill {
        let mut rand = match cli.seed {
            Some(seed) => Random::from_seed(seed),
            None => Random::new(),
        };
        let grid = game.grid_mut();
        grid.clear();
        grid.add_random_life(&mut rand, probability)?;
    } else if cli.seed.is_some() {
        warn!("--seed has no effect without --random-fill");
    }

    for &(x, y) in &cli.toggle {
        game.grid_mut().touch_ended(x, y)?;
    }
    Ok(())
}

fn run(game: &mut Game, frames: u32, frame_millis: f64) -> Result<(), GameError> {
    if game.toggle_pause() != PlayState::Running {
        game.toggle_pause();
    }
    info!(
        "Running {} frames on a {}x{} grid, {} live cells",
        frames,
        game.grid().cols(),
        game.grid().rows(),
        game.grid().population()
    );

    for _ in 0..frames {
        if game.frame(frame_millis)? {
            debug!(
                "Generation {}: {} live cells",
                game.generation(),
                game.grid().population()
            );
        }
    }

    info!(
        "Finished at generation {} with {} live cells",
        game.generation(),
        game.grid().population()
    );
    Ok(())
}
