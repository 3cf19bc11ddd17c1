// theme.rs - Light/dark palette for the background and overlay
use crate::math::Rgba;

pub const DARK_BACKGROUND: Rgba = Rgba::rgb(0x0f, 0x17, 0x2a);
pub const LIGHT_BACKGROUND: Rgba = Rgba::rgb(0xf8, 0xfa, 0xfc);

pub const DARK_ACCENT: Rgba = Rgba::rgb(56, 189, 248);
pub const LIGHT_ACCENT: Rgba = Rgba::rgb(37, 99, 235);

/// Colour scheme; toggling never touches animation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Theme {
    pub dark: bool,
}

impl Theme {
    pub fn new(dark: bool) -> Self {
        Self { dark }
    }

    pub fn toggled(self) -> Self {
        Self { dark: !self.dark }
    }

    pub fn name(&self) -> &'static str {
        if self.dark {
            "dark"
        } else {
            "light"
        }
    }

    pub fn background(&self) -> Rgba {
        if self.dark {
            DARK_BACKGROUND
        } else {
            LIGHT_BACKGROUND
        }
    }

    pub fn accent(&self) -> Rgba {
        if self.dark {
            DARK_ACCENT
        } else {
            LIGHT_ACCENT
        }
    }

    /// Grid line colour at animation time `t`, alpha breathing around 0.3
    pub fn line_color(&self, t: f64) -> Rgba {
        self.accent().with_alpha(0.3 + (t * 0.5).sin() as f32 * 0.1)
    }

    /// Grid point colour at animation time `t`, alpha breathing around 0.6
    pub fn point_color(&self, t: f64) -> Rgba {
        self.accent().with_alpha(0.6 + (t * 0.3).sin() as f32 * 0.2)
    }

    /// Overlay heading colour
    pub fn text(&self) -> Rgba {
        if self.dark {
            Rgba::rgb(0xf1, 0xf5, 0xf9)
        } else {
            Rgba::rgb(0x1e, 0x29, 0x3b)
        }
    }

    /// Overlay secondary text colour
    pub fn muted_text(&self) -> Rgba {
        if self.dark {
            Rgba::rgb(0x94, 0xa3, 0xb8)
        } else {
            Rgba::rgb(0x64, 0x74, 0x8b)
        }
    }
}
