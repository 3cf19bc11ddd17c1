mod engine;
mod field;
mod projection;

pub use engine::{FrameStats, WaveEngine, LINE_COLUMN_STEP, POINT_CULL_MARGIN, POINT_STEP};
pub use field::{wave_height, GridField};
pub use projection::{Projected, Projector, MAX_PROJECTION_SCALE};
