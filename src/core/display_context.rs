use glam::Vec2;

use crate::math::ClipBounds;

/// Padding applied on each side of the viewport when clipping grid lines
pub const CLIP_PADDING: f32 = 0.5;

/// Display context - contains rendering dimensions and metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayContext {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl DisplayContext {
    /// Create new display context, never smaller than 1x1
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Total number of pixels
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Total size in bytes for RGBA buffer
    pub fn buffer_size(&self) -> usize {
        self.pixel_count() * 4
    }

    /// Projection centre
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width as f32 / 2.0, self.height as f32 / 2.0)
    }

    /// Line clip rectangle, the viewport extended by half its size on every side
    pub fn clip_bounds(&self) -> ClipBounds {
        ClipBounds::padded(self.width as f32, self.height as f32, CLIP_PADDING)
    }

    /// Whether `point` lies within the viewport grown by `margin` pixels
    pub fn contains_with_margin(&self, point: Vec2, margin: f32) -> bool {
        point.x >= -margin
            && point.x <= self.width as f32 + margin
            && point.y >= -margin
            && point.y <= self.height as f32 + margin
    }
}
