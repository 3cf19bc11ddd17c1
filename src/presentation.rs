// presentation.rs - Per-section fade and slide state for the overlay
use crate::math::SECTION_EASE;
use crate::nav::{Direction, NavSnapshot};
use crate::sections::Section;

/// Vertical slide of the section being left, as a fraction of the viewport height
pub const PREVIOUS_SLIDE: f32 = 0.1;
/// Fade/slide duration in seconds
pub const FADE_DURATION: f32 = 0.6;
/// Fade/slide duration for the last section
pub const LAST_FADE_DURATION: f32 = 0.7;

/// How one section should be drawn this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionVisual {
    pub section: Section,
    pub opacity: f32,
    /// Vertical offset as a fraction of the viewport height; negative is up
    pub offset: f32,
    pub active: bool,
    pub previous: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Tween {
    from: f32,
    to: f32,
    elapsed: f32,
    duration: f32,
}

impl Tween {
    fn settled(value: f32) -> Self {
        Self {
            from: value,
            to: value,
            elapsed: 0.0,
            duration: 0.0,
        }
    }

    fn value(&self) -> f32 {
        if self.duration <= 0.0 || self.elapsed >= self.duration {
            return self.to;
        }
        let t = SECTION_EASE.ease(self.elapsed / self.duration);
        self.from + (self.to - self.from) * t
    }

    fn retarget(&mut self, to: f32, duration: f32) {
        if to == self.to {
            return;
        }
        *self = Self {
            from: self.value(),
            to,
            elapsed: 0.0,
            duration,
        };
    }

    fn tick(&mut self, delta: f32) {
        self.elapsed = (self.elapsed + delta).min(self.duration.max(0.0));
    }
}

#[derive(Debug, Clone, Copy)]
struct SectionTrack {
    opacity: Tween,
    offset: Tween,
    active: bool,
    previous: bool,
}

/// Animates section opacity and offset toward what the navigator snapshot implies
#[derive(Debug, Clone)]
pub struct SectionPresenter {
    tracks: [SectionTrack; Section::COUNT],
}

/// Resting opacity and offset for section `index` under `snapshot`
fn resting_state(index: usize, snapshot: &NavSnapshot) -> (f32, f32, bool, bool) {
    if index == snapshot.active {
        return (1.0, 0.0, true, false);
    }
    if snapshot.previous == Some(index) {
        let offset = match snapshot.direction {
            Direction::Down => -PREVIOUS_SLIDE,
            Direction::Up => PREVIOUS_SLIDE,
        };
        return (0.0, offset, false, true);
    }
    (0.0, 0.0, false, false)
}

impl SectionPresenter {
    /// Start settled on `snapshot` with no animation
    pub fn new(snapshot: &NavSnapshot) -> Self {
        let tracks = std::array::from_fn(|index| {
            let (opacity, offset, active, previous) = resting_state(index, snapshot);
            SectionTrack {
                opacity: Tween::settled(opacity),
                offset: Tween::settled(offset),
                active,
                previous,
            }
        });
        Self { tracks }
    }

    /// Retarget every section from a fresh navigator snapshot
    pub fn sync(&mut self, snapshot: &NavSnapshot) {
        for (index, track) in self.tracks.iter_mut().enumerate() {
            let (opacity, offset, active, previous) = resting_state(index, snapshot);
            let duration = if index == Section::LAST {
                LAST_FADE_DURATION
            } else {
                FADE_DURATION
            };
            track.opacity.retarget(opacity, duration);
            track.offset.retarget(offset, duration);
            track.active = active;
            track.previous = previous;
        }
    }

    pub fn tick(&mut self, delta: f32) {
        for track in &mut self.tracks {
            track.opacity.tick(delta);
            track.offset.tick(delta);
        }
    }

    pub fn visual(&self, section: Section) -> SectionVisual {
        let track = &self.tracks[section.index()];
        SectionVisual {
            section,
            opacity: track.opacity.value(),
            offset: track.offset.value(),
            active: track.active,
            previous: track.previous,
        }
    }

    pub fn visuals(&self) -> Vec<SectionVisual> {
        Section::ALL.iter().map(|&section| self.visual(section)).collect()
    }

    /// Whether any section is still mid-fade
    pub fn is_animating(&self) -> bool {
        self.tracks.iter().any(|t| {
            t.opacity.value() != t.opacity.to || t.offset.value() != t.offset.to
        })
    }
}
