use crate::error::TimerError;

/// One-shot interval gate, in milliseconds. Once `elapsed` reaches
/// `duration` the timer goes idle and stays idle until `start` rearms it.
#[derive(Clone, Debug, PartialEq)]
pub struct Timer {
    pub duration: f64,
    elapsed: f64,
    active: bool,
}

impl Timer {
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            elapsed: 0.0,
            active: false,
        }
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn start(&mut self) {
        self.elapsed = 0.0;
        self.active = true;
    }

    pub fn validate_delta(delta: f64) -> Result<(), TimerError> {
        if delta.is_nan() || delta < 0.0 {
            return Err(TimerError::InvalidDelta(delta));
        }
        Ok(())
    }

    pub fn tick(&mut self, delta: f64) -> Result<(), TimerError> {
        Self::validate_delta(delta)?;
        if self.active {
            self.elapsed += delta;
            if self.elapsed >= self.duration {
                self.active = false;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let timer = Timer::new(100.0);
        assert!(!timer.is_active());
        assert_eq!(timer.elapsed(), 0.0);
    }

    #[test]
    fn arms_and_fires() {
        let mut timer = Timer::new(100.0);
        timer.start();
        assert!(timer.is_active());
        assert_eq!(timer.elapsed(), 0.0);

        timer.tick(60.0).unwrap();
        assert!(timer.is_active());
        assert_eq!(timer.elapsed(), 60.0);

        timer.tick(50.0).unwrap();
        assert!(!timer.is_active());
        assert_eq!(timer.elapsed(), 110.0);
    }

    #[test]
    fn fires_on_exact_duration() {
        let mut timer = Timer::new(100.0);
        timer.start();
        timer.tick(100.0).unwrap();
        assert!(!timer.is_active());
    }

    #[test]
    fn idle_timer_ignores_ticks() {
        let mut timer = Timer::new(10.0);
        timer.tick(25.0).unwrap();
        assert_eq!(timer.elapsed(), 0.0);

        timer.start();
        timer.tick(25.0).unwrap();
        timer.tick(25.0).unwrap();
        assert_eq!(timer.elapsed(), 25.0);
    }

    #[test]
    fn start_rearms_after_firing() {
        let mut timer = Timer::new(10.0);
        timer.start();
        timer.tick(15.0).unwrap();
        timer.start();
        assert!(timer.is_active());
        assert_eq!(timer.elapsed(), 0.0);
    }

    #[test]
    fn duration_change_applies_on_next_tick() {
        let mut timer = Timer::new(100.0);
        timer.start();
        timer.tick(40.0).unwrap();
        timer.duration = 50.0;
        assert!(timer.is_active());
        timer.tick(10.0).unwrap();
        assert!(!timer.is_active());
        assert_eq!(timer.elapsed(), 50.0);
    }

    #[test]
    fn rejects_negative_and_nan_delta() {
        let mut timer = Timer::new(100.0);
        timer.start();
        timer.tick(30.0).unwrap();

        assert_eq!(timer.tick(-1.0), Err(TimerError::InvalidDelta(-1.0)));
        assert!(timer.tick(f64::NAN).is_err());
        assert_eq!(timer.elapsed(), 30.0);
        assert!(timer.is_active());
    }
}
