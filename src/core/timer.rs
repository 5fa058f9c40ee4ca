//! Fixed-rate tick source for hosts whose redraw rate differs from the
//! rate the camera speed was calibrated for

/// Fixed-rate step counter - converts frame deltas into whole ticks
#[derive(Debug, Clone, Copy)]
pub struct FixedHz {
    pub interval: f32,
    pub accumulator: f32,
    max_steps: u32,
}

impl FixedHz {
    /// Counter for `hz` ticks per second, catching up at most 8 ticks per frame
    pub fn new(hz: f32) -> Self {
        Self::with_max_steps(hz, 8)
    }

    /// Cap catch-up steps so a long stall does not teleport the camera
    pub fn with_max_steps(hz: f32, max_steps: u32) -> Self {
        Self {
            interval: 1.0 / hz,
            accumulator: 0.0,
            max_steps,
        }
    }

    /// Add a frame delta, returns how many ticks to run for it
    pub fn steps(&mut self, delta: f32) -> u32 {
        self.accumulator += delta;

        let steps = (self.accumulator / self.interval).floor() as u32;
        self.accumulator -= steps as f32 * self.interval;

        if steps > self.max_steps {
            // Drop the backlog instead of replaying it later.
            self.accumulator = 0.0;
            self.max_steps
        } else {
            steps
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_counts_whole_intervals() {
        let mut timer = FixedHz::new(10.0);

        assert_eq!(timer.steps(0.05), 0);
        assert_eq!(timer.steps(0.26), 3);
        assert!(timer.accumulator < 0.02);
    }

    #[test]
    fn steps_are_capped() {
        let mut timer = FixedHz::with_max_steps(60.0, 4);

        assert_eq!(timer.steps(1.0), 4);
        assert_eq!(timer.accumulator, 0.0);
        assert_eq!(timer.steps(0.001), 0);
    }
}
