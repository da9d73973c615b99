#![deny(clippy::all)]
#![forbid(unsafe_code)]

//! Conway's Game of Life on a finite, viewport-sized grid, with a step timer
//! and a headless game controller that a renderer can drive frame by frame.
//!
//! ```
//! use conway_life::{Game, GameConfig, Viewport};
//!
//! let mut game = Game::new(&GameConfig::default(), Viewport::new(1280, 720)).unwrap();
//! game.step().unwrap();
//! assert_eq!(game.generation(), 1);
//! ```

pub mod config;
pub mod error;
pub mod game;
pub mod grid;
pub mod timer;

pub use config::GameConfig;
pub use error::{ConfigError, GameError, GridError, TimerError};
pub use game::{Game, InitState, PlayState, Viewport};
pub use grid::{LifeCell, LifeGrid};
pub use timer::Timer;
pub use world_grid::Random;
