use glam::{Vec2, Vec3};
use log::warn;

use super::field::GridField;
use super::projection::{Projected, Projector};
use crate::camera::WaveCamera;
use crate::config::AnimationSettings;
use crate::core::canvas_layer::{Canvas, DrawOp};
use crate::core::display_context::DisplayContext;
use crate::math::{clip_segment, ClipBounds, Rgba};
use crate::sections::{camera_target, time_scale};
use crate::theme::Theme;

/// Grid points closer than this to the viewport edge are still drawn
pub const POINT_CULL_MARGIN: f32 = 20.0;

/// Lines follow every row but only every `LINE_COLUMN_STEP`-th column
pub const LINE_COLUMN_STEP: usize = 2;
/// Points are drawn on every `POINT_STEP`-th vertex in both directions
pub const POINT_STEP: usize = 4;

/// What one frame drew and what it had to discard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub lines: usize,
    pub points: usize,
    pub rejected_projections: usize,
    pub sanitized_heights: usize,
    pub camera_recovered: bool,
}

/// Background animation state, stepped once per display refresh
pub struct WaveEngine {
    settings: AnimationSettings,
    smooth: bool,
    display: DisplayContext,
    clip: ClipBounds,
    theme: Theme,
    field: GridField,
    camera: WaveCamera,
    /// Animation clock; f64 so per-frame increments never fall below its precision
    time: f64,
    projected: Vec<Option<Projected>>,
}

impl WaveEngine {
    pub fn new(settings: &AnimationSettings, display: DisplayContext, theme: Theme, smooth: bool) -> Self {
        let field = GridField::new(settings.cols, settings.rows, settings.spacing);
        let vertex_count = settings.cols * settings.rows;

        Self {
            settings: settings.clone(),
            smooth,
            display,
            clip: display.clip_bounds(),
            theme,
            field,
            camera: WaveCamera::new(settings.base_fov, settings.base_eye_z),
            time: 0.0,
            projected: vec![None; vertex_count],
        }
    }

    /// New surface size; camera and time carry on
    pub fn resize(&mut self, display: DisplayContext) {
        self.display = display;
        self.clip = display.clip_bounds();
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_smooth(&mut self, smooth: bool) {
        self.smooth = smooth;
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn camera(&self) -> &WaveCamera {
        &self.camera
    }

    pub fn field(&self) -> &GridField {
        &self.field
    }

    pub fn display(&self) -> DisplayContext {
        self.display
    }

    pub fn clip_bounds(&self) -> ClipBounds {
        self.clip
    }

    /// Render one frame for `section` into `canvas` and advance time
    pub fn step(&mut self, section: usize, canvas: &mut Canvas) -> FrameStats {
        let mut stats = FrameStats::default();
        let t = self.time;

        if canvas.dimensions() != (self.display.width, self.display.height) {
            canvas.resize(self.display.width, self.display.height);
        }
        canvas.push(DrawOp::Clear(self.theme.background()));

        self.camera.aim(&camera_target(section), t);
        stats.sanitized_heights = self.field.recompute(t);
        if stats.sanitized_heights > 0 {
            warn!("replaced {} non-finite wave heights at t={t}", stats.sanitized_heights);
        }

        let rate = self.settings.transition_speed(self.smooth);
        if let Err(err) = self.camera.update(t, rate) {
            warn!("{err}; restored last good camera pose");
            stats.camera_recovered = true;
        }

        stats.rejected_projections = self.project_field();
        stats.lines = self.draw_lines(canvas, t);
        stats.points = self.draw_points(canvas, t);
        canvas.execute_ops();

        self.time += f64::from(self.settings.wave_speed(self.smooth)) * f64::from(time_scale(section));
        stats
    }

    /// Project every vertex once; returns the number rejected
    fn project_field(&mut self) -> usize {
        let projector = Projector::new(self.camera.pose(), self.display.center());
        let rows = self.field.rows();
        let mut rejected = 0;

        for i in 0..self.field.cols() {
            let x = self.field.world_x(i);
            for j in 0..rows {
                let point = Vec3::new(x, self.field.height(i, j), self.field.world_z(j));
                let projected = projector.project(point);
                if projected.is_none() {
                    rejected += 1;
                }
                self.projected[i * rows + j] = projected;
            }
        }

        rejected
    }

    /// Strictly-inside projection of vertex (i, j)
    fn visible(&self, i: usize, j: usize) -> Option<Projected> {
        self.projected[i * self.field.rows() + j].filter(|p| self.clip.contains_strict(p.screen))
    }

    fn draw_lines(&self, canvas: &mut Canvas, t: f64) -> usize {
        let color = self.theme.line_color(t);
        let (cols, rows) = (self.field.cols(), self.field.rows());
        let mut drawn = 0;

        for j in 0..rows {
            drawn += self.draw_polyline(canvas, (0..cols).map(|i| (i, j)), color);
        }
        for i in (0..cols).step_by(LINE_COLUMN_STEP) {
            drawn += self.draw_polyline(canvas, (0..rows).map(|j| (i, j)), color);
        }

        drawn
    }

    /// Connect consecutive visible vertices; any invisible vertex breaks the line
    fn draw_polyline(
        &self,
        canvas: &mut Canvas,
        vertices: impl Iterator<Item = (usize, usize)>,
        color: Rgba,
    ) -> usize {
        let mut last: Option<Vec2> = None;
        let mut drawn = 0;

        for (i, j) in vertices {
            let Some(current) = self.visible(i, j) else {
                last = None;
                continue;
            };
            if let Some(prev) = last {
                if let Some(segment) = clip_segment(prev, current.screen, &self.clip) {
                    canvas.push(DrawOp::Line {
                        from: segment.start,
                        to: segment.end,
                        color,
                    });
                    drawn += 1;
                }
            }
            last = Some(current.screen);
        }

        drawn
    }

    fn draw_points(&self, canvas: &mut Canvas, t: f64) -> usize {
        let color = self.theme.point_color(t);
        let rows = self.field.rows();
        let mut drawn = 0;

        for i in (0..self.field.cols()).step_by(POINT_STEP) {
            let x = self.field.world_x(i);
            for j in (0..rows).step_by(POINT_STEP) {
                let Some(p) = self.projected[i * rows + j] else {
                    continue;
                };
                if !self.display.contains_with_margin(p.screen, POINT_CULL_MARGIN) {
                    continue;
                }

                let z = self.field.world_z(j);
                let phase = t * 2.0 + f64::from(x * 0.01 + z * 0.01);
                let pulse = phase.sin() as f32 * 0.4 + 1.0;
                let radius = (1.5 * p.scale * pulse).max(1.0);

                canvas.push(DrawOp::FilledCircle {
                    center: p.screen,
                    radius,
                    color,
                });
                drawn += 1;
            }
        }

        drawn
    }
}
