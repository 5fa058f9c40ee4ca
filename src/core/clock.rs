use std::time::Instant;

/// Wall-clock source for per-frame deltas
#[derive(Debug)]
pub struct Clock {
    last_frame: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
        }
    }

    /// Seconds since the previous call (or since creation/reset)
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        delta
    }

    /// Restart timing, e.g. once the window exists
    pub fn reset(&mut self) {
        self.last_frame = Instant::now();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

/// Frames-per-second over a sliding report window
#[derive(Debug, Clone, Copy)]
pub struct FpsCounter {
    report_interval: f32,
    frames: u32,
    elapsed: f32,
    fps: f32,
}

impl FpsCounter {
    pub fn new(report_interval: f32) -> Self {
        Self {
            report_interval,
            frames: 0,
            elapsed: 0.0,
            fps: 0.0,
        }
    }

    /// Count one frame; returns the new rate when a report window closes
    pub fn frame(&mut self, delta: f32) -> Option<f32> {
        self.frames += 1;
        self.elapsed += delta;

        if self.elapsed >= self.report_interval {
            self.fps = self.frames as f32 / self.elapsed;
            self.frames = 0;
            self.elapsed = 0.0;
            Some(self.fps)
        } else {
            None
        }
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }
}
