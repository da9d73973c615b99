use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    #[error("cell size must be positive")]
    ZeroCellSize,
    #[error("cell ({x}, {y}) is outside the {cols}x{rows} grid")]
    InvalidCoordinate { x: i64, y: i64, cols: u32, rows: u32 },
    #[error("cell index {index} is outside a grid of {len} cells")]
    InvalidIndex { index: usize, len: usize },
    #[error("fill probability {0} must be between 0.0 and 1.0")]
    InvalidProbability(f64),
}

#[derive(Debug, Error, PartialEq)]
pub enum TimerError {
    #[error("tick delta {0} must be a non-negative number")]
    InvalidDelta(f64),
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("cell size must be positive")]
    ZeroCellSize,
    #[error("frame rate must be positive")]
    ZeroFrameRate,
}

#[derive(Debug, Error, PartialEq)]
pub enum GameError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Timer(#[from] TimerError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
