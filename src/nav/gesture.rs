use log::trace;

use super::navigator::{InputSource, NavCommand};
use crate::config::NavigationSettings;
use crate::core::controller::{InputEvent, NavKey};

/// Clamp a wheel delta to `clamp` in magnitude, keeping its sign
pub fn normalize_wheel(delta: f32, clamp: f32) -> f32 {
    if !delta.is_finite() {
        return 0.0;
    }
    delta.signum() * delta.abs().min(clamp)
}

/// Keys that move between sections
pub fn key_command(key: NavKey) -> NavCommand {
    match key {
        NavKey::PageDown | NavKey::ArrowDown | NavKey::End => NavCommand::Advance,
        NavKey::PageUp | NavKey::ArrowUp | NavKey::Home => NavCommand::Retreat,
    }
}

/// Turns raw input events into navigation commands
///
/// Holds the touch anchor between events. While the navigator is cooling
/// down, wheel, move and key events are ignored and the anchor is kept.
#[derive(Debug, Clone)]
pub struct GestureRecognizer {
    wheel_clamp: f32,
    touch_threshold: f32,
    touch_start: Option<f32>,
}

impl GestureRecognizer {
    pub fn new(settings: &NavigationSettings) -> Self {
        Self {
            wheel_clamp: settings.wheel_clamp,
            touch_threshold: settings.touch_threshold,
            touch_start: None,
        }
    }

    pub fn touch_anchor(&self) -> Option<f32> {
        self.touch_start
    }

    pub fn recognize(&mut self, event: &InputEvent, cooling: bool) -> Option<(NavCommand, InputSource)> {
        match *event {
            InputEvent::Wheel { delta_y } => {
                if cooling {
                    return None;
                }
                let delta = normalize_wheel(delta_y, self.wheel_clamp);
                if delta > 0.0 {
                    Some((NavCommand::Advance, InputSource::Wheel))
                } else if delta < 0.0 {
                    Some((NavCommand::Retreat, InputSource::Wheel))
                } else {
                    None
                }
            }
            InputEvent::TouchStart { y } => {
                self.touch_start = Some(y);
                None
            }
            InputEvent::TouchMove { y } => {
                if cooling {
                    return None;
                }
                let Some(start) = self.touch_start else {
                    self.touch_start = Some(y);
                    return None;
                };

                let swipe = start - y;
                if swipe.abs() <= self.touch_threshold {
                    return None;
                }

                trace!("swipe of {swipe:.1}px from {start:.1}");
                self.touch_start = Some(y);
                let command = if swipe > 0.0 {
                    NavCommand::Advance
                } else {
                    NavCommand::Retreat
                };
                Some((command, InputSource::Touch))
            }
            InputEvent::TouchEnd => {
                self.touch_start = None;
                None
            }
            InputEvent::Key(key) => {
                if cooling {
                    return None;
                }
                Some((key_command(key), InputSource::Keyboard))
            }
            InputEvent::ToggleTheme | InputEvent::Quit => None,
        }
    }
}
