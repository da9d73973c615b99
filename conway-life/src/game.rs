use crate::config::GameConfig;
use crate::error::GameError;
use crate::grid::LifeGrid;
use crate::timer::Timer;
use log::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayState {
    Paused,
    Running,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitState {
    Uninitialized,
    Initialized,
}

/// Pixel size of the area the grid is drawn into.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Frame-driven controller around one grid and one timer. A renderer calls
/// `frame` once per displayed frame and forwards play/pause, step, reset,
/// clicks and resizes. `Game` never draws anything itself.
#[derive(Clone, Debug)]
pub struct Game {
    grid: LifeGrid,
    timer: Timer,
    viewport: Viewport,
    step_delay_millis: u32,
    play_state: PlayState,
    init_state: InitState,
    generation: u64,
}

impl Game {
    /// Builds the game and runs the first draw pass, so the returned game is
    /// paused and shows the seed pattern.
    pub fn new(config: &GameConfig, viewport: Viewport) -> Result<Self, GameError> {
        config.validate()?;
        let mut grid = LifeGrid::new(config.cell_size)?;
        grid.resize(viewport.width, viewport.height);

        let step_delay_millis = GameConfig::snap_step_delay(config.step_delay_millis);
        let mut timer = Timer::new(step_delay_millis as f64);
        timer.start();

        let mut game = Self {
            grid,
            timer,
            viewport,
            step_delay_millis,
            play_state: PlayState::Paused,
            init_state: InitState::Uninitialized,
            generation: 0,
        };
        game.draw_pass(0.0, true)?;
        Ok(game)
    }

    pub fn grid(&self) -> &LifeGrid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut LifeGrid {
        &mut self.grid
    }

    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn play_state(&self) -> PlayState {
        self.play_state
    }

    pub fn init_state(&self) -> InitState {
        self.init_state
    }

    /// Generations computed since the last (re)initialization.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn step_delay_millis(&self) -> u32 {
        self.step_delay_millis
    }

    /// Takes effect the next time the timer is rearmed. Returns the delay
    /// actually used.
    pub fn set_step_delay(&mut self, millis: u32) -> u32 {
        self.step_delay_millis = GameConfig::snap_step_delay(millis);
        self.step_delay_millis
    }

    pub fn toggle_pause(&mut self) -> PlayState {
        self.play_state = match self.play_state {
            PlayState::Paused => PlayState::Running,
            PlayState::Running => PlayState::Paused,
        };
        debug!("Play state now {:?}", self.play_state);
        self.play_state
    }

    /// One displayed frame, `delta` milliseconds after the previous one.
    /// Paused games ignore frames. Returns whether a new generation was made.
    pub fn frame(&mut self, delta: f64) -> Result<bool, GameError> {
        match self.play_state {
            PlayState::Paused => Ok(false),
            PlayState::Running => self.draw_pass(delta, true),
        }
    }

    /// A single redraw. While paused this advances exactly one generation.
    pub fn step(&mut self) -> Result<bool, GameError> {
        debug!("Step at generation {}", self.generation);
        self.draw_pass(0.0, true)
    }

    pub fn reset(&mut self) {
        debug!("Reset");
        self.init_state = InitState::Uninitialized;
        self.reinitialize();
    }

    pub fn window_resized(&mut self, width: i32, height: i32) {
        self.viewport = Viewport::new(width, height);
        self.grid.resize(width, height);
    }

    /// Toggles the cell under a pixel position, then redraws without
    /// advancing.
    pub fn touch_ended(&mut self, pixel_x: i32, pixel_y: i32) -> Result<(), GameError> {
        let cell_size = self.grid.cell_size() as i64;
        let x = (pixel_x as i64).div_euclid(cell_size);
        let y = (pixel_y as i64).div_euclid(cell_size);
        self.grid.touch_ended(x, y)?;
        self.draw_pass(0.0, false)?;
        Ok(())
    }

    fn reinitialize(&mut self) {
        self.grid.resize(self.viewport.width, self.viewport.height);
        self.grid.setup();
        self.generation = 0;
    }

    fn draw_pass(&mut self, delta: f64, advance: bool) -> Result<bool, GameError> {
        Timer::validate_delta(delta)?;
        if self.init_state == InitState::Uninitialized {
            self.reinitialize();
        }
        if advance {
            self.advance(delta)
        } else {
            Ok(false)
        }
    }

    fn advance(&mut self, delta: f64) -> Result<bool, GameError> {
        if self.init_state == InitState::Uninitialized {
            self.init_state = InitState::Initialized;
            return Ok(false);
        }

        let due = self.play_state == PlayState::Paused || !self.timer.is_active();
        if due {
            self.timer.duration = self.step_delay_millis as f64;
            self.grid.update();
            self.generation += 1;
            self.timer.start();
        }
        self.timer.tick(delta)?;
        Ok(due)
    }
}
