use glam::Vec2;

use super::display_context::DisplayContext;
use crate::math::{clip_segment, ClipBounds, Rgba};

/// 2D drawing operations for canvas
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Fill entire canvas with color
    Clear(Rgba),

    /// One pixel wide line, alpha blended
    Line { from: Vec2, to: Vec2, color: Rgba },

    /// Filled circle, alpha blended
    FilledCircle { center: Vec2, radius: f32, color: Rgba },
}

/// Canvas state - RGBA pixel buffer with pending draw operations
#[derive(Clone)]
pub struct Canvas {
    /// RGBA pixel buffer
    pixels: Vec<u8>,
    /// Pending draw operations
    operations: Vec<DrawOp>,
    /// Canvas dimensions
    width: u32,
    height: u32,
}

impl Canvas {
    /// Create new canvas with dimensions
    pub fn new(width: u32, height: u32) -> Self {
        let ctx = DisplayContext::new(width, height);

        Self {
            pixels: vec![0; ctx.buffer_size()],
            operations: Vec::new(),
            width: ctx.width,
            height: ctx.height,
        }
    }

    /// Reallocate for new dimensions; contents are discarded
    pub fn resize(&mut self, width: u32, height: u32) {
        let ctx = DisplayContext::new(width, height);
        self.width = ctx.width;
        self.height = ctx.height;
        self.pixels.clear();
        self.pixels.resize(ctx.buffer_size(), 0);
        self.operations.clear();
    }

    /// Add draw operation - builder style
    pub fn draw(mut self, op: DrawOp) -> Self {
        self.operations.push(op);
        self
    }

    /// Queue draw operation in place
    pub fn push(&mut self, op: DrawOp) {
        self.operations.push(op);
    }

    /// Number of queued operations
    pub fn pending_ops(&self) -> usize {
        self.operations.len()
    }

    /// Execute all pending operations into the pixel buffer
    pub fn execute_ops(&mut self) {
        let operations = std::mem::take(&mut self.operations);

        for op in &operations {
            self.execute_op(op);
        }

        // Hand the allocation back for the next frame
        self.operations = operations;
        self.operations.clear();
    }

    /// Execute single draw operation (mutates internal state)
    fn execute_op(&mut self, op: &DrawOp) {
        match op {
            DrawOp::Clear(color) => self.clear(*color),
            DrawOp::Line { from, to, color } => self.draw_line(*from, *to, *color),
            DrawOp::FilledCircle { center, radius, color } => {
                self.draw_filled_circle(*center, *radius, *color)
            }
        }
    }

    /// Clear canvas to color
    fn clear(&mut self, color: Rgba) {
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&[color.r, color.g, color.b, color.a]);
        }
    }

    /// Blend single pixel; out of range coordinates are ignored
    fn blend_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }

        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let dst = [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ];
        self.pixels[idx..idx + 4].copy_from_slice(&color.blend_over(dst));
    }

    /// Filled circle from the pixel centres that fall within `radius`
    fn draw_filled_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        if !center.is_finite() || !radius.is_finite() || radius <= 0.0 {
            return;
        }

        let r_sq = radius * radius;
        let min_x = (center.x - radius).floor().max(0.0) as i32;
        let max_x = (center.x + radius).ceil().min(self.width as f32 - 1.0) as i32;
        let min_y = (center.y - radius).floor().max(0.0) as i32;
        let max_y = (center.y + radius).ceil().min(self.height as f32 - 1.0) as i32;

        for py in min_y..=max_y {
            for px in min_x..=max_x {
                let dx = px as f32 + 0.5 - center.x;
                let dy = py as f32 + 0.5 - center.y;
                if dx * dx + dy * dy <= r_sq {
                    self.blend_pixel(px, py, color);
                }
            }
        }
    }

    /// Draw line using Bresenham's algorithm, clipped to the canvas first
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Rgba) {
        let bounds = ClipBounds::new(0.0, self.width as f32 - 1.0, 0.0, self.height as f32 - 1.0);
        let Some(segment) = clip_segment(from, to, &bounds) else {
            return;
        };

        let (mut x, mut y) = (segment.start.x.round() as i32, segment.start.y.round() as i32);
        let (x2, y2) = (segment.end.x.round() as i32, segment.end.y.round() as i32);

        let dx = (x2 - x).abs();
        let dy = -(y2 - y).abs();
        let sx = if x < x2 { 1 } else { -1 };
        let sy = if y < y2 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.blend_pixel(x, y, color);

            if x == x2 && y == y2 {
                break;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Get pixel buffer
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// RGBA at (x, y), `None` when out of range
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        Some([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ])
    }

    /// Get canvas dimensions
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
