/// Self-contained timers - accumulate delta time (seconds) and decide when to fire
/// Nothing here reads the wall clock; callers feed deltas from the frame loop

/// Fixed rate timer - fires at specific Hz
#[derive(Debug, Clone, Copy)]
pub struct FixedHz {
    pub interval: f32,
    pub accumulator: f32,
}

impl FixedHz {
    /// Create timer that fires at given frequency
    pub fn new(hz: f32) -> Self {
        Self {
            interval: 1.0 / hz,
            accumulator: 0.0,
        }
    }

    /// Update with delta, returns true if should fire
    pub fn tick(&mut self, delta: f32) -> bool {
        self.accumulator += delta;

        if self.accumulator >= self.interval {
            // Drop whole missed intervals so a stalled frame fires once
            self.accumulator %= self.interval;
            true
        } else {
            false
        }
    }
}

/// Countdown timer - fires once after duration, then goes inactive
#[derive(Debug, Clone, Copy)]
pub struct Countdown {
    duration: f32,
    elapsed: f32,
    active: bool,
}

impl Countdown {
    /// Create inactive countdown
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            elapsed: 0.0,
            active: false,
        }
    }

    /// Start (or restart) the countdown from zero
    pub fn start(&mut self) {
        self.elapsed = 0.0;
        self.active = true;
    }

    /// Stop without firing
    pub fn cancel(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Tick with delta, returns true on the tick that completes it
    pub fn tick(&mut self, delta: f32) -> bool {
        if !self.active {
            return false;
        }

        self.elapsed += delta;

        if self.elapsed >= self.duration {
            self.active = false;
            true
        } else {
            false
        }
    }

    /// Time past the deadline on the completing tick, so chained stages keep their spacing
    pub fn overshoot(&self) -> f32 {
        (self.elapsed - self.duration).max(0.0)
    }

    /// Get progress [0, 1]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }
}

/// Cooldown - blocks while armed, duration chosen per arm
#[derive(Debug, Clone, Copy, Default)]
pub struct Cooldown {
    duration: f32,
    elapsed: f32,
}

impl Cooldown {
    /// Create an expired cooldown
    pub fn new() -> Self {
        Self::default()
    }

    /// Block for `duration` seconds from now
    pub fn arm(&mut self, duration: f32) {
        self.duration = duration.max(0.0);
        self.elapsed = 0.0;
    }

    pub fn tick(&mut self, delta: f32) {
        if self.is_active() {
            self.elapsed += delta;
        }
    }

    pub fn is_active(&self) -> bool {
        self.elapsed < self.duration
    }

    pub fn remaining(&self) -> f32 {
        (self.duration - self.elapsed).max(0.0)
    }

    /// Expire immediately
    pub fn clear(&mut self) {
        self.duration = 0.0;
        self.elapsed = 0.0;
    }
}
