use glam::Vec2;

/// Screen-space coordinates beyond this magnitude are treated as garbage
pub const MAX_COORDINATE: f32 = 1e6;

/// Axis-aligned clip rectangle in screen pixels (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipBounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl ClipBounds {
    pub fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left, right, top, bottom }
    }

    /// Viewport of `width` x `height` extended by `pad` times its size on every side
    pub fn padded(width: f32, height: f32, pad: f32) -> Self {
        Self {
            left: -pad * width,
            right: (1.0 + pad) * width,
            top: -pad * height,
            bottom: (1.0 + pad) * height,
        }
    }

    /// Strictly inside; points on an edge do not count
    pub fn contains_strict(&self, point: Vec2) -> bool {
        point.x > self.left && point.x < self.right && point.y > self.top && point.y < self.bottom
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Visible part of a line segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

fn is_sane(point: Vec2) -> bool {
    point.is_finite() && point.x.abs() <= MAX_COORDINATE && point.y.abs() <= MAX_COORDINATE
}

/// Liang-Barsky clip of `start -> end` against `bounds`
///
/// Returns `None` when either endpoint is non-finite or absurdly large, or when
/// no part of the segment lies inside the rectangle. The parametric interval is
/// kept when `t0 == t1`, so a segment touching a corner yields a point segment.
pub fn clip_segment(start: Vec2, end: Vec2, bounds: &ClipBounds) -> Option<Segment> {
    if !is_sane(start) || !is_sane(end) {
        return None;
    }

    let delta = end - start;
    let mut t0 = 0.0f32;
    let mut t1 = 1.0f32;

    let edges = [
        (-delta.x, start.x - bounds.left),
        (delta.x, bounds.right - start.x),
        (-delta.y, start.y - bounds.top),
        (delta.y, bounds.bottom - start.y),
    ];

    for (p, q) in edges {
        if p == 0.0 {
            // Parallel to this edge
            if q < 0.0 {
                return None;
            }
            continue;
        }

        let t = q / p;
        if p < 0.0 {
            t0 = t0.max(t);
        } else {
            t1 = t1.min(t);
        }

        if t0 > t1 {
            return None;
        }
    }

    Some(Segment {
        start: start + delta * t0,
        end: start + delta * t1,
    })
}
