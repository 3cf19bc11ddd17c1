use winit::event::{ElementState, KeyEvent, MouseScrollDelta, TouchPhase, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{InputEvent, NavKey};

/// Pixels scrolled per wheel line step
pub const DEFAULT_LINE_HEIGHT: f32 = 40.0;

/// Convert a winit scroll delta into downward-positive pixels
///
/// winit reports scrolling up (content moving down) as positive y; pages
/// treat positive as "scroll toward later content", so the sign flips.
pub fn wheel_delta_to_pixels(delta: MouseScrollDelta, line_height: f32) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => -y * line_height,
        MouseScrollDelta::PixelDelta(position) => -position.y as f32,
    }
}

/// Map a pressed key to an input event
pub fn keycode_to_input(keycode: KeyCode) -> Option<InputEvent> {
    let key = match keycode {
        KeyCode::PageUp => NavKey::PageUp,
        KeyCode::PageDown => NavKey::PageDown,
        KeyCode::ArrowUp => NavKey::ArrowUp,
        KeyCode::ArrowDown => NavKey::ArrowDown,
        KeyCode::Home => NavKey::Home,
        KeyCode::End => NavKey::End,
        KeyCode::KeyT => return Some(InputEvent::ToggleTheme),
        KeyCode::Escape => return Some(InputEvent::Quit),
        _ => return None,
    };
    Some(InputEvent::Key(key))
}

/// Adapter that bridges winit window events to backend-neutral input events
///
/// Only the first finger down is tracked; other touches are ignored until it lifts.
#[derive(Debug, Clone)]
pub struct WinitInputAdapter {
    line_height: f32,
    active_touch: Option<u64>,
}

impl WinitInputAdapter {
    pub fn new(line_height: f32) -> Self {
        Self {
            line_height,
            active_touch: None,
        }
    }

    /// Translate one window event, `None` if it is not navigation input
    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::MouseWheel { delta, .. } => Some(InputEvent::Wheel {
                delta_y: wheel_delta_to_pixels(*delta, self.line_height),
            }),
            WindowEvent::Touch(touch) => self.touch(touch.id, touch.phase, touch.location.y as f32),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(keycode),
                        ..
                    },
                ..
            } => keycode_to_input(*keycode),
            _ => None,
        }
    }

    /// Track a touch point through its phases
    pub fn touch(&mut self, id: u64, phase: TouchPhase, y: f32) -> Option<InputEvent> {
        match phase {
            TouchPhase::Started => {
                if self.active_touch.is_some() {
                    return None;
                }
                self.active_touch = Some(id);
                Some(InputEvent::TouchStart { y })
            }
            TouchPhase::Moved => (self.active_touch == Some(id)).then_some(InputEvent::TouchMove { y }),
            TouchPhase::Ended | TouchPhase::Cancelled => {
                if self.active_touch != Some(id) {
                    return None;
                }
                self.active_touch = None;
                Some(InputEvent::TouchEnd)
            }
        }
    }
}

impl Default for WinitInputAdapter {
    fn default() -> Self {
        Self::new(DEFAULT_LINE_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    // Building full WindowEvents needs private winit fields, so the pure helpers are tested

    #[test]
    fn test_line_delta_flips_sign() {
        // One notch down in winit is negative y
        assert_eq!(wheel_delta_to_pixels(MouseScrollDelta::LineDelta(0.0, -1.0), 40.0), 40.0);
        assert_eq!(wheel_delta_to_pixels(MouseScrollDelta::LineDelta(0.0, 2.0), 40.0), -80.0);
    }

    #[test]
    fn test_pixel_delta_flips_sign() {
        let delta = MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -12.5));
        assert_eq!(wheel_delta_to_pixels(delta, 40.0), 12.5);
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(keycode_to_input(KeyCode::PageDown), Some(InputEvent::Key(NavKey::PageDown)));
        assert_eq!(keycode_to_input(KeyCode::Home), Some(InputEvent::Key(NavKey::Home)));
        assert_eq!(keycode_to_input(KeyCode::KeyT), Some(InputEvent::ToggleTheme));
        assert_eq!(keycode_to_input(KeyCode::Escape), Some(InputEvent::Quit));
        assert_eq!(keycode_to_input(KeyCode::KeyW), None);
    }

    #[test]
    fn test_first_finger_only() {
        let mut adapter = WinitInputAdapter::default();

        assert_eq!(adapter.touch(1, TouchPhase::Started, 300.0), Some(InputEvent::TouchStart { y: 300.0 }));
        assert_eq!(adapter.touch(2, TouchPhase::Started, 100.0), None);
        assert_eq!(adapter.touch(2, TouchPhase::Moved, 50.0), None);
        assert_eq!(adapter.touch(1, TouchPhase::Moved, 240.0), Some(InputEvent::TouchMove { y: 240.0 }));
        assert_eq!(adapter.touch(2, TouchPhase::Ended, 50.0), None);
        assert_eq!(adapter.touch(1, TouchPhase::Cancelled, 240.0), Some(InputEvent::TouchEnd));

        // Second finger can start once the first lifts
        assert!(adapter.touch(2, TouchPhase::Started, 10.0).is_some());
    }
}
