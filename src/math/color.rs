/// 8-bit RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque colour
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Same colour with alpha given as [0, 1]
    pub fn with_alpha(self, alpha: f32) -> Self {
        let a = if alpha.is_finite() {
            (alpha.clamp(0.0, 1.0) * 255.0).round() as u8
        } else {
            0
        };
        Self { a, ..self }
    }

    pub fn alpha_f32(&self) -> f32 {
        self.a as f32 / 255.0
    }

    /// Source-over composite of `self` onto `dst`
    pub fn blend_over(self, dst: [u8; 4]) -> [u8; 4] {
        match self.a {
            0 => dst,
            255 => [self.r, self.g, self.b, 255],
            _ => {
                let a = self.alpha_f32();
                let mix = |s: u8, d: u8| (s as f32 * a + d as f32 * (1.0 - a)).round() as u8;
                let out_a = a + dst[3] as f32 / 255.0 * (1.0 - a);
                [
                    mix(self.r, dst[0]),
                    mix(self.g, dst[1]),
                    mix(self.b, dst[2]),
                    (out_a * 255.0).round() as u8,
                ]
            }
        }
    }

    /// Linear-light float components, for GPU uniforms
    pub fn to_linear(&self) -> [f32; 4] {
        [
            srgb_to_linear(self.r),
            srgb_to_linear(self.g),
            srgb_to_linear(self.b),
            self.alpha_f32(),
        ]
    }
}

/// sRGB transfer function, 8-bit encoded to linear
pub fn srgb_to_linear(channel: u8) -> f32 {
    let c = channel as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
