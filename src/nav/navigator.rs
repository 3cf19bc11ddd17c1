use log::{debug, trace};

use crate::config::NavigationSettings;
use crate::core::timer::{Cooldown, Countdown};
use crate::sections::Section;

/// Direction of the most recent section change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Up,
    #[default]
    Down,
}

/// A recognized navigation gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Advance,
    Retreat,
}

/// Where a gesture came from; selects the cool-down length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Wheel,
    Touch,
    Keyboard,
    Pointer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    Idle { section: usize },
    Transitioning { from: usize, to: usize, direction: Direction },
}

/// Outcome of handing a command to the navigator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Accepted { from: usize, to: usize, direction: Direction },
    /// Dropped; an earlier gesture's cool-down is still running
    CoolingDown,
    /// Dropped; a transition is already in flight
    Busy,
    /// Dropped; no section in that direction
    AtBoundary,
}

/// Stage changes reported by `SectionNavigator::tick`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    SectionCommitted { section: usize, direction: Direction },
    TransitionFinished { section: usize },
    AnimationsComplete { section: usize },
}

/// Everything the presentation layer needs, copied out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSnapshot {
    pub active: usize,
    pub previous: Option<usize>,
    pub transitioning: bool,
    pub direction: Direction,
    pub animations_complete: bool,
}

/// Owns the active section index and the transition timeline
///
/// A transition runs in three stages: after `commit_delay` the index moves,
/// after a further `finish_delay` the navigator is idle again, and after a
/// further `settle_delay` animations are reported complete.
#[derive(Debug, Clone)]
pub struct SectionNavigator {
    settings: NavigationSettings,
    state: NavState,
    active: usize,
    previous: Option<usize>,
    direction: Direction,
    animations_complete: bool,
    cooldown: Cooldown,
    commit: Countdown,
    finish: Countdown,
    settle: Countdown,
}

impl SectionNavigator {
    pub fn new(settings: &NavigationSettings) -> Self {
        Self {
            settings: settings.clone(),
            state: NavState::Idle { section: 0 },
            active: 0,
            previous: None,
            direction: Direction::Down,
            animations_complete: true,
            cooldown: Cooldown::new(),
            commit: Countdown::new(settings.commit_delay),
            finish: Countdown::new(settings.finish_delay),
            settle: Countdown::new(settings.settle_delay),
        }
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    /// Committed section index
    pub fn active(&self) -> usize {
        self.active
    }

    pub fn is_cooling(&self) -> bool {
        self.cooldown.is_active()
    }

    pub fn snapshot(&self) -> NavSnapshot {
        NavSnapshot {
            active: self.active,
            previous: self.previous,
            transitioning: matches!(self.state, NavState::Transitioning { .. }),
            direction: self.direction,
            animations_complete: self.animations_complete,
        }
    }

    /// Apply a gesture; any gesture outside a cool-down re-arms it, except a
    /// key press that has nowhere to go
    pub fn dispatch(&mut self, command: NavCommand, source: InputSource) -> Dispatch {
        if self.cooldown.is_active() {
            trace!("{command:?} from {source:?} dropped, {:.2}s cool-down left", self.cooldown.remaining());
            return Dispatch::CoolingDown;
        }

        let section = match self.state {
            NavState::Idle { section } => section,
            NavState::Transitioning { .. } => {
                self.cooldown.arm(self.settings.cooldown_for(source));
                trace!("{command:?} from {source:?} dropped, transition in flight");
                return Dispatch::Busy;
            }
        };

        let (to, direction) = match command {
            NavCommand::Advance if section < Section::LAST => (section + 1, Direction::Down),
            NavCommand::Retreat if section > 0 => (section - 1, Direction::Up),
            _ => {
                if source != InputSource::Keyboard {
                    self.cooldown.arm(self.settings.cooldown_for(source));
                }
                trace!("{command:?} from {source:?} at boundary section {section}");
                return Dispatch::AtBoundary;
            }
        };

        self.cooldown.arm(self.settings.cooldown_for(source));

        self.direction = direction;
        self.previous = Some(section);
        self.animations_complete = false;
        self.state = NavState::Transitioning {
            from: section,
            to,
            direction,
        };
        self.finish.cancel();
        self.settle.cancel();
        self.commit.start();

        debug!("transition {section} -> {to} ({direction:?}) via {source:?}");
        Dispatch::Accepted {
            from: section,
            to,
            direction,
        }
    }

    /// Advance timers by `delta` seconds; stages that complete within one tick all fire
    pub fn tick(&mut self, delta: f32) -> Vec<NavEvent> {
        self.cooldown.tick(delta);

        let mut events = Vec::new();
        let mut carry = delta;

        if self.commit.is_active() {
            if self.commit.tick(carry) {
                carry = self.commit.overshoot();
                if let NavState::Transitioning { to, direction, .. } = self.state {
                    self.active = to;
                    debug!("section {to} committed");
                    events.push(NavEvent::SectionCommitted { section: to, direction });
                }
                self.finish.start();
            } else {
                carry = 0.0;
            }
        }

        if self.finish.is_active() {
            if self.finish.tick(carry) {
                carry = self.finish.overshoot();
                self.state = NavState::Idle { section: self.active };
                debug!("transition to {} finished", self.active);
                events.push(NavEvent::TransitionFinished { section: self.active });
                self.settle.start();
            } else {
                carry = 0.0;
            }
        }

        if self.settle.is_active() && self.settle.tick(carry) {
            self.animations_complete = true;
            events.push(NavEvent::AnimationsComplete { section: self.active });
        }

        events
    }

    /// Drop every pending timer and settle on the committed section
    pub fn cancel(&mut self) {
        self.commit.cancel();
        self.finish.cancel();
        self.settle.cancel();
        self.cooldown.clear();
        self.state = NavState::Idle { section: self.active };
    }
}
