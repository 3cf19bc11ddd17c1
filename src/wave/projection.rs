use glam::{Vec2, Vec3};

use crate::camera::CameraPose;

/// Perspective scales at or above this are treated as degenerate
pub const MAX_PROJECTION_SCALE: f32 = 10.0;

/// A world point mapped to the screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub screen: Vec2,
    /// Depth after rotation, before perspective divide
    pub depth: f32,
    pub scale: f32,
}

/// Projects world points through one camera pose; trig is evaluated once per frame
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    eye: Vec3,
    fov: f32,
    center: Vec2,
    sin_yaw: f32,
    cos_yaw: f32,
    sin_tilt: f32,
    cos_tilt: f32,
}

impl Projector {
    pub fn new(pose: &CameraPose, center: Vec2) -> Self {
        let (sin_yaw, cos_yaw) = pose.yaw.sin_cos();
        let (sin_tilt, cos_tilt) = pose.tilt.sin_cos();

        Self {
            eye: pose.position,
            fov: pose.fov,
            center,
            sin_yaw,
            cos_yaw,
            sin_tilt,
            cos_tilt,
        }
    }

    /// Map a world point to the screen, `None` when it is behind the eye or degenerate
    pub fn project(&self, point: Vec3) -> Option<Projected> {
        let p = point - self.eye;

        // Yaw about the vertical axis
        let rot_x = p.x * self.cos_yaw - p.z * self.sin_yaw;
        let rot_z = p.z * self.cos_yaw + p.x * self.sin_yaw;

        // Tilt about the horizontal axis
        let rot_y = p.y * self.cos_tilt - rot_z * self.sin_tilt;
        let depth = rot_z * self.cos_tilt + p.y * self.sin_tilt;

        if !(depth > -self.fov) {
            return None;
        }

        let scale = self.fov / (self.fov + depth);
        if !(scale > 0.0 && scale < MAX_PROJECTION_SCALE) {
            return None;
        }

        let screen = self.center + Vec2::new(rot_x, rot_y) * scale;
        if !screen.is_finite() {
            return None;
        }

        Some(Projected { screen, depth, scale })
    }
}
