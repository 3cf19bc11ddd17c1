/// Height of the wave surface at world position (x, z) and time `t`
///
/// Five sine sources summed, then scaled by `max(5, 1 - 0.0005 d)`.
/// Phases are summed in f64 so long-running `t` keeps its resolution.
/// May return NaN for non-finite input; `GridField::recompute` sanitizes.
pub fn wave_height(x: f32, z: f32, t: f64) -> f32 {
    let (x, z) = (f64::from(x), f64::from(z));
    let distance = (x * x + z * z).sqrt();

    let height = 3.0 * (distance * 0.005 + t).sin()
        + 2.0 * (distance * 0.01 + t * 1.3).sin()
        + 2.5 * (x * 0.008 + t * 0.7).sin()
        + 1.5 * (z * 0.009 + t * 0.5).sin()
        + 1.0 * ((x + z) * 0.005 + t * 0.6).sin();

    (height * (1.0 - distance * 0.0005).max(5.0)) as f32
}

/// Regular grid of heights, column-major (`i` across, `j` deep)
#[derive(Debug, Clone)]
pub struct GridField {
    cols: usize,
    rows: usize,
    spacing: f32,
    heights: Vec<f32>,
}

impl GridField {
    pub fn new(cols: usize, rows: usize, spacing: f32) -> Self {
        Self {
            cols,
            rows,
            spacing,
            heights: vec![0.0; cols * rows],
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// World x of column `i`, centred on the origin
    pub fn world_x(&self, i: usize) -> f32 {
        (i as f32 - self.cols as f32 / 2.0) * self.spacing
    }

    /// World z of row `j`, centred on the origin
    pub fn world_z(&self, j: usize) -> f32 {
        (j as f32 - self.rows as f32 / 2.0) * self.spacing
    }

    pub fn height(&self, i: usize, j: usize) -> f32 {
        self.heights[i * self.rows + j]
    }

    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    /// Regenerate every height for time `t`; returns how many were replaced by 0
    pub fn recompute(&mut self, t: f64) -> usize {
        let mut sanitized = 0;

        for i in 0..self.cols {
            let x = self.world_x(i);
            for j in 0..self.rows {
                let z = self.world_z(j);
                let h = wave_height(x, z, t);
                self.heights[i * self.rows + j] = if h.is_finite() {
                    h
                } else {
                    sanitized += 1;
                    0.0
                };
            }
        }

        sanitized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_coordinates_centered() {
        let field = GridField::new(200, 60, 50.0);
        assert_eq!(field.world_x(0), -5000.0);
        assert_eq!(field.world_x(100), 0.0);
        assert_eq!(field.world_z(0), -1500.0);
        assert_eq!(field.world_z(59), 1450.0);
    }

    #[test]
    fn test_height_at_origin() {
        // Every sine argument is zero
        assert_eq!(wave_height(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_height_bounded() {
        // Amplitudes sum to 10; multiplier is 5 near the origin
        for &(x, z, t) in &[(100.0, -300.0, 1.0), (-5000.0, 1450.0, 42.0), (2500.0, 0.0, 7.5)] {
            let h = wave_height(x, z, t);
            assert!(h.abs() <= 50.0 + 1e-3, "height {h} out of range");
        }
    }

    #[test]
    fn test_recompute_fills_grid() {
        let mut field = GridField::new(8, 4, 50.0);
        let sanitized = field.recompute(1.25);

        assert_eq!(sanitized, 0);
        assert_eq!(field.heights().len(), 32);
        assert_eq!(field.height(3, 2), wave_height(field.world_x(3), field.world_z(2), 1.25));
    }

    #[test]
    fn test_recompute_sanitizes_nan_time() {
        let mut field = GridField::new(4, 4, 50.0);
        let sanitized = field.recompute(f64::NAN);

        assert_eq!(sanitized, 16);
        assert!(field.heights().iter().all(|h| *h == 0.0));
    }
}
