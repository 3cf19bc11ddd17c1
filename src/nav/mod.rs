mod gesture;
mod navigator;
mod scroll;

pub use gesture::{key_command, normalize_wheel, GestureRecognizer};
pub use navigator::{
    Direction, Dispatch, InputSource, NavCommand, NavEvent, NavSnapshot, NavState, SectionNavigator,
};
pub use scroll::{SectionScroller, SMOOTH_SCROLL_RATE};
