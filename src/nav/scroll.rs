use crate::config::NavigationSettings;
use crate::core::timer::Countdown;
use crate::math::ease_out_cubic;
use crate::sections::Section;

/// Per-second rate of the exponential "native" smooth scroll
pub const SMOOTH_SCROLL_RATE: f32 = 12.0;

/// Positions closer than this to the target snap onto it
const SNAP_DISTANCE: f32 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Motion {
    Still,
    /// Exponential approach toward the target
    Smooth,
    /// Fixed-duration cubic ease-out from `from`
    Eased { from: f32, elapsed: f32 },
}

/// Scroll position of the section stack, measured in sections
///
/// Position 2.0 means section 2 fills the viewport. Scrolling to the last
/// section runs a fixed cubic ease-out; every other section uses a smooth
/// exponential approach. Both start after a short delay.
#[derive(Debug, Clone)]
pub struct SectionScroller {
    position: f32,
    target: f32,
    delay: Countdown,
    motion: Motion,
    pending: Motion,
    scroll_delay: f32,
    last_scroll_delay: f32,
    last_scroll_duration: f32,
}

impl SectionScroller {
    pub fn new(settings: &NavigationSettings) -> Self {
        Self {
            position: 0.0,
            target: 0.0,
            delay: Countdown::new(0.0),
            motion: Motion::Still,
            pending: Motion::Still,
            scroll_delay: settings.scroll_delay,
            last_scroll_delay: settings.last_scroll_delay,
            last_scroll_duration: settings.last_scroll_duration,
        }
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_animating(&self) -> bool {
        self.delay.is_active() || self.motion != Motion::Still
    }

    /// Begin scrolling to `section` after the configured delay
    pub fn scroll_to(&mut self, section: usize) {
        let section = section.min(Section::LAST);
        let (delay, pending) = if section == Section::LAST {
            (self.last_scroll_delay, Motion::Eased { from: 0.0, elapsed: 0.0 })
        } else {
            (self.scroll_delay, Motion::Smooth)
        };

        self.target = section as f32;
        self.pending = pending;
        self.delay = Countdown::new(delay);
        self.delay.start();
    }

    pub fn tick(&mut self, delta: f32) {
        let mut delta = delta;

        if self.delay.is_active() {
            if !self.delay.tick(delta) {
                return;
            }
            delta = self.delay.overshoot();
            self.motion = match self.pending {
                Motion::Eased { .. } => Motion::Eased { from: self.position, elapsed: 0.0 },
                other => other,
            };
        }

        match self.motion {
            Motion::Still => {}
            Motion::Smooth => {
                let blend = 1.0 - (-SMOOTH_SCROLL_RATE * delta).exp();
                self.position += (self.target - self.position) * blend;
                if (self.target - self.position).abs() < SNAP_DISTANCE {
                    self.position = self.target;
                    self.motion = Motion::Still;
                }
            }
            Motion::Eased { from, elapsed } => {
                let elapsed = elapsed + delta;
                let progress = if self.last_scroll_duration > 0.0 {
                    (elapsed / self.last_scroll_duration).min(1.0)
                } else {
                    1.0
                };
                self.position = from + (self.target - from) * ease_out_cubic(progress);
                self.motion = if progress >= 1.0 {
                    self.position = self.target;
                    Motion::Still
                } else {
                    Motion::Eased { from, elapsed }
                };
            }
        }
    }

    /// Stop where it is
    pub fn cancel(&mut self) {
        self.delay.cancel();
        self.motion = Motion::Still;
        self.pending = Motion::Still;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scroller() -> SectionScroller {
        SectionScroller::new(&NavigationSettings::default())
    }

    #[test]
    fn test_waits_for_delay() {
        let mut s = scroller();
        s.scroll_to(1);
        s.tick(0.04);
        assert_eq!(s.position(), 0.0);
        assert!(s.is_animating());
    }

    #[test]
    fn test_smooth_scroll_converges() {
        let mut s = scroller();
        s.scroll_to(2);
        for _ in 0..120 {
            s.tick(1.0 / 60.0);
        }
        assert_eq!(s.position(), 2.0);
        assert!(!s.is_animating());
    }

    #[test]
    fn test_last_section_eases_over_duration() {
        let mut s = scroller();
        s.scroll_to(Section::LAST);

        // 0.1 s delay, then half of the 0.7 s ease
        s.tick(0.1 + 0.35);
        let expected = Section::LAST as f32 * ease_out_cubic(0.5);
        assert!((s.position() - expected).abs() < 1e-3);

        s.tick(0.4);
        assert_eq!(s.position(), Section::LAST as f32);
        assert!(!s.is_animating());
    }

    #[test]
    fn test_out_of_range_clamped() {
        let mut s = scroller();
        s.scroll_to(42);
        assert_eq!(s.target(), Section::LAST as f32);
    }

    #[test]
    fn test_cancel_stops_motion() {
        let mut s = scroller();
        s.scroll_to(1);
        s.tick(0.1);
        let pos = s.position();
        s.cancel();
        s.tick(1.0);
        assert_eq!(s.position(), pos);
        assert!(!s.is_animating());
    }
}
