mod clip;
mod color;
mod easing;

pub use clip::{clip_segment, ClipBounds, Segment, MAX_COORDINATE};
pub use color::{srgb_to_linear, Rgba};
pub use easing::{
    approach, approach_angle, ease_out_cubic, shortest_angle_delta, CubicBezier, SECTION_EASE,
};
