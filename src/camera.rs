use glam::Vec3;
use std::fmt;

use crate::math::{approach, approach_angle};
use crate::sections::CameraTarget;

/// Base field-of-view distance
pub const BASE_FOV: f32 = 3000.0;
/// Base eye depth
pub const BASE_EYE_Z: f32 = -500.0;
/// Tilt before any section target is applied
pub const INITIAL_TILT: f32 = std::f32::consts::PI / 6.0;

/// Full camera state at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    /// Field-of-view distance; larger is flatter
    pub fov: f32,
    /// Rotation about the horizontal axis
    pub tilt: f32,
    /// Rotation about the vertical axis
    pub yaw: f32,
}

impl CameraPose {
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.fov.is_finite() && self.tilt.is_finite() && self.yaw.is_finite()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraError {
    /// The eased pose contained NaN or infinity
    NonFinite,
    /// Easing rate outside (0, 1]
    InvalidRate(f32),
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::NonFinite => write!(f, "camera pose became non-finite"),
            CameraError::InvalidRate(rate) => write!(f, "camera easing rate {rate} outside (0, 1]"),
        }
    }
}

impl std::error::Error for CameraError {}

/// Camera that eases toward a per-section target with a small organic drift
#[derive(Debug, Clone)]
pub struct WaveCamera {
    base_fov: f32,
    base_eye_z: f32,
    current: CameraPose,
    target: CameraPose,
    oscillation: Vec3,
    last_good: CameraPose,
}

impl WaveCamera {
    pub fn new(base_fov: f32, base_eye_z: f32) -> Self {
        let pose = CameraPose {
            position: Vec3::new(0.0, 0.0, base_eye_z),
            fov: base_fov,
            tilt: INITIAL_TILT,
            yaw: 0.0,
        };

        Self {
            base_fov,
            base_eye_z,
            current: pose,
            target: pose,
            oscillation: Vec3::ZERO,
            last_good: pose,
        }
    }

    /// Current (eased) pose
    pub fn pose(&self) -> &CameraPose {
        &self.current
    }

    /// Pose being eased toward, without oscillation
    pub fn target(&self) -> &CameraPose {
        &self.target
    }

    pub fn oscillation(&self) -> Vec3 {
        self.oscillation
    }

    /// Point the camera at a section target; `time` drives the idle yaw sway
    pub fn aim(&mut self, target: &CameraTarget, time: f64) {
        self.target = CameraPose {
            position: Vec3::new(0.0, 0.0, self.base_eye_z) + target.offset,
            fov: self.base_fov * target.fov_scale,
            tilt: target.tilt,
            yaw: target.yaw + target.yaw_sway * (time * 0.1).sin() as f32,
        };
    }

    /// Ease every component a fraction `rate` of the way toward the target
    ///
    /// On a non-finite result the camera falls back to its last good pose and
    /// reports the fault; the caller decides whether to log it.
    pub fn update(&mut self, time: f64, rate: f32) -> Result<(), CameraError> {
        if !(rate > 0.0 && rate <= 1.0) {
            return Err(CameraError::InvalidRate(rate));
        }

        self.oscillation = Vec3::new(
            (time * 0.31).sin() as f32 * 3.0,
            (time * 0.27).sin() as f32 * 5.0,
            (time * 0.19).sin() as f32 * 3.0,
        );

        let goal = self.target.position + self.oscillation;
        let next = CameraPose {
            position: self.current.position + (goal - self.current.position) * rate,
            fov: approach(self.current.fov, self.target.fov, rate),
            tilt: approach(self.current.tilt, self.target.tilt, rate),
            yaw: approach_angle(self.current.yaw, self.target.yaw, rate),
        };

        if !next.is_finite() {
            self.recover();
            return Err(CameraError::NonFinite);
        }

        self.current = next;
        self.last_good = next;
        Ok(())
    }

    /// Restore the last finite pose
    pub fn recover(&mut self) {
        self.current = self.last_good;
        if !self.target.is_finite() {
            self.target = self.last_good;
        }
    }
}

impl Default for WaveCamera {
    fn default() -> Self {
        Self::new(BASE_FOV, BASE_EYE_Z)
    }
}
