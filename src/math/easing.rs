use std::f32::consts::{PI, TAU};

/// Move `current` toward `target` by a fixed fraction of the gap
pub fn approach(current: f32, target: f32, rate: f32) -> f32 {
    current + (target - current) * rate
}

/// Signed difference `to - from` wrapped into (-PI, PI]
pub fn shortest_angle_delta(from: f32, to: f32) -> f32 {
    let wrapped = (to - from + PI).rem_euclid(TAU) - PI;
    // rem_euclid maps onto [-PI, PI); fold the lower edge onto PI
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// `approach` for angles, always turning the short way round
pub fn approach_angle(current: f32, target: f32, rate: f32) -> f32 {
    current + shortest_angle_delta(current, target) * rate
}

/// Cubic ease-out, `1 - (1 - t)^3` on [0, 1]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// CSS-style cubic bezier timing curve through (0,0) and (1,1)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

/// Section fade/slide curve
pub const SECTION_EASE: CubicBezier = CubicBezier {
    x1: 0.23,
    y1: 1.0,
    x2: 0.32,
    y2: 1.0,
};

impl CubicBezier {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn sample(a1: f32, a2: f32, s: f32) -> f32 {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * a1 + 3.0 * inv * s * s * a2 + s * s * s
    }

    fn slope(a1: f32, a2: f32, s: f32) -> f32 {
        let inv = 1.0 - s;
        3.0 * inv * inv * a1 + 6.0 * inv * s * (a2 - a1) + 3.0 * s * s * (1.0 - a2)
    }

    /// Curve parameter whose x equals `x`
    fn solve_parameter(&self, x: f32) -> f32 {
        let mut s = x;
        for _ in 0..8 {
            let error = Self::sample(self.x1, self.x2, s) - x;
            if error.abs() < 1e-6 {
                return s;
            }
            let d = Self::slope(self.x1, self.x2, s);
            if d.abs() < 1e-6 {
                break;
            }
            s -= error / d;
        }

        // Newton stalled; fall back to bisection
        let (mut lo, mut hi) = (0.0f32, 1.0f32);
        s = x;
        for _ in 0..32 {
            let value = Self::sample(self.x1, self.x2, s);
            if (value - x).abs() < 1e-6 {
                break;
            }
            if value < x {
                lo = s;
            } else {
                hi = s;
            }
            s = 0.5 * (lo + hi);
        }
        s
    }

    /// Eased progress for linear progress `t` in [0, 1]
    pub fn ease(&self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        Self::sample(self.y1, self.y2, self.solve_parameter(t))
    }
}
