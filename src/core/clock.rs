use std::time::Instant;

/// Longest delta handed to the simulation; a suspended window must not fast-forward timers
pub const MAX_FRAME_DELTA: f32 = 0.25;

/// Timing for one frame of the render loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTiming {
    pub number: u64,
    /// Seconds since the previous frame, clamped to `MAX_FRAME_DELTA`
    pub delta: f32,
    /// Seconds since the clock started
    pub elapsed: f32,
}

/// Minimal frame clock - tracks delta time and frame numbers
/// Systems manage their own internal state
#[derive(Debug)]
pub struct Clock {
    start: Instant,
    last_tick: Instant,
    frame: u64,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
            frame: 0,
        }
    }

    /// Advance the clock and describe the frame that starts now
    pub fn tick(&mut self) -> FrameTiming {
        let now = Instant::now();
        let delta = now
            .duration_since(self.last_tick)
            .as_secs_f32()
            .min(MAX_FRAME_DELTA);
        self.last_tick = now;

        let timing = FrameTiming {
            number: self.frame,
            delta,
            elapsed: now.duration_since(self.start).as_secs_f32(),
        };
        self.frame += 1;
        timing
    }

    /// Reset delta measurement to current time (after a resume)
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn clock_measures_delta() {
        let mut clock = Clock::new();

        thread::sleep(Duration::from_millis(10));
        let timing = clock.tick();

        assert!(timing.delta >= 0.009);
        assert!(timing.delta <= MAX_FRAME_DELTA);
        assert_eq!(timing.number, 0);
    }

    #[test]
    fn clock_counts_frames() {
        let mut clock = Clock::new();

        clock.tick();
        clock.tick();
        let timing = clock.tick();

        assert_eq!(timing.number, 2);
        assert!(timing.elapsed >= timing.delta);
    }

    #[test]
    fn clock_clamps_long_stalls() {
        let mut clock = Clock::new();
        clock.last_tick -= Duration::from_secs(2);

        let timing = clock.tick();
        assert_eq!(timing.delta, MAX_FRAME_DELTA);
    }

    #[test]
    fn clock_resets() {
        let mut clock = Clock::new();

        thread::sleep(Duration::from_millis(10));
        clock.reset();

        let timing = clock.tick();
        assert!(timing.delta < 0.005);
    }
}
