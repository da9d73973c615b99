use crate::error::ConfigError;

pub const CELL_SIZE: u32 = 64;
pub const STEP_DELAY_MILLIS: u32 = 500;
pub const FRAME_RATE: u32 = 30;

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    /// Pixels per cell edge.
    pub cell_size: u32,
    /// Delay between generations while running.
    pub step_delay_millis: u32,
    /// Frames per second the driver feeds into `Game::frame`.
    pub frame_rate: u32,
}

impl GameConfig {
    pub const MIN_STEP_DELAY_MILLIS: u32 = 100;
    pub const MAX_STEP_DELAY_MILLIS: u32 = 3000;
    pub const STEP_DELAY_INCREMENT_MILLIS: u32 = 100;

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if self.frame_rate == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }
        Ok(())
    }

    pub fn frame_millis(&self) -> f64 {
        1000.0 / self.frame_rate as f64
    }

    /// Clamps a requested delay into the slider range and snaps it to the
    /// nearest increment.
    pub fn snap_step_delay(millis: u32) -> u32 {
        let clamped = millis.clamp(Self::MIN_STEP_DELAY_MILLIS, Self::MAX_STEP_DELAY_MILLIS);
        let increment = Self::STEP_DELAY_INCREMENT_MILLIS;
        (clamped + increment / 2) / increment * increment
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            step_delay_millis: STEP_DELAY_MILLIS,
            frame_rate: FRAME_RATE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.cell_size, 64);
        assert_eq!(config.step_delay_millis, 500);
    }

    #[test]
    fn rejects_zero_values() {
        let config = GameConfig {
            cell_size: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroCellSize));

        let config = GameConfig {
            frame_rate: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroFrameRate));
    }

    #[test]
    fn snaps_step_delay_to_slider() {
        assert_eq!(GameConfig::snap_step_delay(0), 100);
        assert_eq!(GameConfig::snap_step_delay(449), 400);
        assert_eq!(GameConfig::snap_step_delay(450), 500);
        assert_eq!(GameConfig::snap_step_delay(10_000), 3000);
    }

    #[test]
    fn frame_millis_follows_frame_rate() {
        let config = GameConfig {
            frame_rate: 50,
            ..GameConfig::default()
        };
        assert_eq!(config.frame_millis(), 20.0);
    }
}
