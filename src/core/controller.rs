/// Navigation keys understood by the section navigator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
    PageUp,
    PageDown,
    ArrowUp,
    ArrowDown,
    Home,
    End,
}

/// Input event normalized away from the windowing backend
///
/// Wheel deltas follow the browser convention: positive means the user
/// scrolled down (toward later content).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Wheel { delta_y: f32 },
    TouchStart { y: f32 },
    TouchMove { y: f32 },
    TouchEnd,
    Key(NavKey),
    ToggleTheme,
    Quit,
}

impl InputEvent {
    /// Events that can turn into a section change
    pub fn is_gesture(&self) -> bool {
        matches!(
            self,
            InputEvent::Wheel { .. }
                | InputEvent::TouchStart { .. }
                | InputEvent::TouchMove { .. }
                | InputEvent::TouchEnd
                | InputEvent::Key(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_nav_key_hash() {
        let mut set = HashSet::new();
        set.insert(NavKey::PageUp);
        set.insert(NavKey::PageUp);
        set.insert(NavKey::End);

        assert_eq!(set.len(), 2);
        assert!(set.contains(&NavKey::End));
        assert!(!set.contains(&NavKey::Home));
    }

    #[test]
    fn test_gesture_classification() {
        assert!(InputEvent::Wheel { delta_y: 3.0 }.is_gesture());
        assert!(InputEvent::TouchMove { y: 10.0 }.is_gesture());
        assert!(InputEvent::Key(NavKey::ArrowDown).is_gesture());
        assert!(!InputEvent::ToggleTheme.is_gesture());
        assert!(!InputEvent::Quit.is_gesture());
    }

    #[test]
    fn test_nav_key_debug() {
        assert_eq!(format!("{:?}", NavKey::PageDown), "PageDown");
    }
}
