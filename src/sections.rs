// sections.rs - Section list and the per-section camera/time tables
use glam::Vec3;
use std::f32::consts::PI;

/// Page sections, in scroll order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Skills,
    Experience,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::Skills,
        Section::Experience,
        Section::Projects,
        Section::Contact,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Highest valid section index
    pub const LAST: usize = Self::COUNT - 1;

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Skills => "skills",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Hero => "Hello",
            Section::Skills => "Skills",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }
}

/// Where the camera heads for a section
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTarget {
    /// Rotation about the horizontal axis
    pub tilt: f32,
    /// Rotation about the vertical axis
    pub yaw: f32,
    /// Amplitude of the slow idle yaw sway, `yaw_sway * sin(0.1 t)`
    pub yaw_sway: f32,
    /// Added to the base eye position
    pub offset: Vec3,
    /// Multiplier on the base field-of-view distance
    pub fov_scale: f32,
}

/// Targets for sections 0..=3
pub const CAMERA_TARGETS: [CameraTarget; 4] = [
    CameraTarget {
        tilt: PI / 6.0,
        yaw: 0.0,
        yaw_sway: 0.1,
        offset: Vec3::new(0.0, -50.0, 0.0),
        fov_scale: 1.0,
    },
    CameraTarget {
        tilt: PI / 5.0,
        yaw: PI / 8.0,
        yaw_sway: 0.0,
        offset: Vec3::new(-150.0, 0.0, -50.0),
        fov_scale: 0.95,
    },
    CameraTarget {
        tilt: PI / 7.0,
        yaw: -PI / 8.0,
        yaw_sway: 0.0,
        offset: Vec3::new(150.0, 50.0, -50.0),
        fov_scale: 0.95,
    },
    CameraTarget {
        tilt: PI / 4.0,
        yaw: PI / 6.0,
        yaw_sway: 0.0,
        offset: Vec3::new(0.0, 100.0, -80.0),
        fov_scale: 0.9,
    },
];

/// Used for the last section and any out-of-range index
pub const DEFAULT_CAMERA_TARGET: CameraTarget = CameraTarget {
    tilt: PI / 6.0,
    yaw: 0.0,
    yaw_sway: 0.0,
    offset: Vec3::ZERO,
    fov_scale: 1.0,
};

/// Camera target for a section index; a pure table lookup
pub fn camera_target(index: usize) -> CameraTarget {
    CAMERA_TARGETS
        .get(index)
        .copied()
        .unwrap_or(DEFAULT_CAMERA_TARGET)
}

/// Animation speed multiplier for a section index
///
/// Hero runs at 1.0, projects at 1.5 and every other section at 1.2;
/// indices past the last section fall back to 1.0.
pub fn time_scale(index: usize) -> f32 {
    match index {
        1 | 2 | 4 => 1.2,
        3 => 1.5,
        _ => 1.0,
    }
}
