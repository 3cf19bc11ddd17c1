// overlay.rs - egui layer: section titles, navigation dots, theme toggle, loading screen
use egui::{Align2, Color32, FontId, Id, LayerId, Order, Pos2, RichText};
use winit::event::WindowEvent;
use winit::window::Window;

use crate::core::surface_renderer::OverlayFrame;
use crate::core::timer::Countdown;
use crate::math::Rgba;
use crate::nav::NavSnapshot;
use crate::presentation::SectionVisual;
use crate::sections::Section;
use crate::theme::Theme;
use crate::wave::FrameStats;

const TITLE_SIZE: f32 = 56.0;
const DOT_RADIUS: f32 = 5.0;
const DOT_SPACING: f32 = 22.0;
/// Active navigation dot is drawn this much larger
const ACTIVE_DOT_SCALE: f32 = 1.25;
const UNDERLINE_WIDTH: f32 = 96.0;

/// Requests raised by overlay widgets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayAction {
    Advance,
    ToggleTheme,
}

/// What the overlay shows this frame
#[derive(Debug, Clone, Copy)]
pub struct OverlayView<'a> {
    pub visuals: &'a [SectionVisual],
    pub nav: NavSnapshot,
    /// Section stack scroll position, in sections
    pub scroll: f32,
    pub theme: Theme,
    pub loading: bool,
    pub show_stats: bool,
    pub fps: f32,
    pub stats: FrameStats,
}

fn color32(color: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

/// The section being left is drawn muted while it fades out
fn title_color(visual: &SectionVisual, theme: Theme) -> Color32 {
    let base = if visual.previous { theme.muted_text() } else { theme.text() };
    color32(base).gamma_multiply(visual.opacity)
}

/// Accent underline once the active section has finished entering
fn shows_underline(visual: &SectionVisual, nav: &NavSnapshot) -> bool {
    visual.active && nav.animations_complete
}

/// Hero "Next" button: hero active and visible, no transition in flight
fn shows_next_button(view: &OverlayView<'_>) -> bool {
    !view.nav.transitioning
        && view
            .visuals
            .iter()
            .any(|v| v.section == Section::Hero && v.active && v.opacity > 0.5)
}

/// Lay out the overlay for one frame and collect widget actions
pub fn build_ui(ctx: &egui::Context, view: &OverlayView<'_>) -> Vec<OverlayAction> {
    let mut actions = Vec::new();
    let screen = ctx.screen_rect();
    let theme = view.theme;

    if view.loading {
        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("loading")));
        painter.rect_filled(screen, 0.0, color32(theme.background()));
        painter.text(
            screen.center(),
            Align2::CENTER_CENTER,
            "Loading",
            FontId::proportional(24.0),
            color32(theme.muted_text()),
        );
        return actions;
    }

    // Section titles follow the scroll position and the fade/slide state
    let painter = ctx.layer_painter(LayerId::new(Order::Background, Id::new("section_titles")));
    for visual in view.visuals {
        if visual.opacity <= 0.001 {
            continue;
        }
        let index = visual.section.index() as f32;
        let y = screen.center().y + (index - view.scroll + visual.offset) * screen.height();
        painter.text(
            Pos2::new(screen.center().x, y),
            Align2::CENTER_CENTER,
            visual.section.title(),
            FontId::proportional(TITLE_SIZE),
            title_color(visual, theme),
        );

        if shows_underline(visual, &view.nav) {
            let line_y = y + TITLE_SIZE * 0.75;
            let half = UNDERLINE_WIDTH / 2.0;
            painter.line_segment(
                [
                    Pos2::new(screen.center().x - half, line_y),
                    Pos2::new(screen.center().x + half, line_y),
                ],
                egui::Stroke::new(3.0, color32(theme.accent()).gamma_multiply(visual.opacity)),
            );
        }
    }

    // Navigation dots, indicators only
    let dots = ctx.layer_painter(LayerId::new(Order::Middle, Id::new("nav_dots")));
    let first_y = screen.center().y - DOT_SPACING * (Section::COUNT as f32 - 1.0) / 2.0;
    for section in Section::ALL {
        let center = Pos2::new(screen.right() - 24.0, first_y + DOT_SPACING * section.index() as f32);
        if section.index() == view.nav.active {
            dots.circle_filled(center, DOT_RADIUS * ACTIVE_DOT_SCALE, color32(theme.accent()));
        } else {
            dots.circle_filled(center, DOT_RADIUS, color32(theme.muted_text()).gamma_multiply(0.6));
        }
    }

    egui::Area::new(Id::new("theme_toggle"))
        .anchor(Align2::RIGHT_TOP, egui::vec2(-16.0, 16.0))
        .show(ctx, |ui| {
            let label = if theme.dark { "Light mode" } else { "Dark mode" };
            if ui.button(label).clicked() {
                actions.push(OverlayAction::ToggleTheme);
            }
        });

    if shows_next_button(view) {
        egui::Area::new(Id::new("hero_next"))
            .anchor(Align2::CENTER_BOTTOM, egui::vec2(0.0, -48.0))
            .show(ctx, |ui| {
                if ui.button(RichText::new("Next").size(18.0)).clicked() {
                    actions.push(OverlayAction::Advance);
                }
            });
    }

    if view.show_stats {
        egui::Window::new("FPS")
            .title_bar(false)
            .resizable(false)
            .fixed_pos(egui::pos2(10.0, 10.0))
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                ui.label(
                    RichText::new(format!("{:.0}", view.fps))
                        .size(32.0)
                        .color(color32(theme.accent())),
                );
                ui.label(
                    RichText::new(format!(
                        "{} lines  {} points  {} culled",
                        view.stats.lines, view.stats.points, view.stats.rejected_projections
                    ))
                    .size(12.0)
                    .color(color32(theme.muted_text())),
                );
            });
    }

    actions
}

/// egui context and winit integration for the overlay
pub struct Overlay {
    ctx: egui::Context,
    state: egui_winit::State,
    loading: Countdown,
}

impl Overlay {
    pub fn new(window: &Window, loading_duration: f32) -> Self {
        let ctx = egui::Context::default();
        let state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );

        let mut loading = Countdown::new(loading_duration);
        loading.start();

        Self { ctx, state, loading }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_active()
    }

    pub fn tick(&mut self, delta: f32) {
        if self.loading.tick(delta) {
            log::debug!("loading screen dismissed");
        }
    }

    /// Feed a window event to egui; returns true if egui consumed it
    pub fn on_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.state.on_window_event(window, event).consumed
    }

    /// Run the UI and tessellate it for the renderer
    pub fn run(&mut self, window: &Window, view: &OverlayView<'_>) -> (OverlayFrame, Vec<OverlayAction>) {
        let raw_input = self.state.take_egui_input(window);
        let mut actions = Vec::new();
        let full_output = self.ctx.run(raw_input, |ctx| {
            actions = build_ui(ctx, view);
        });

        self.state
            .handle_platform_output(window, full_output.platform_output);

        let primitives = self
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        (
            OverlayFrame {
                primitives,
                textures_delta: full_output.textures_delta,
                pixels_per_point: full_output.pixels_per_point,
            },
            actions,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::Direction;
    use crate::presentation::SectionPresenter;

    fn settled() -> NavSnapshot {
        NavSnapshot {
            active: 0,
            previous: None,
            transitioning: false,
            direction: Direction::Down,
            animations_complete: true,
        }
    }

    fn visuals() -> Vec<SectionVisual> {
        SectionPresenter::new(&settled()).visuals()
    }

    fn view(visuals: &[SectionVisual], loading: bool) -> OverlayView<'_> {
        OverlayView {
            visuals,
            nav: settled(),
            scroll: 0.0,
            theme: Theme::new(true),
            loading,
            show_stats: true,
            fps: 60.0,
            stats: FrameStats::default(),
        }
    }

    #[test]
    fn test_headless_frame_paints_without_actions() {
        let ctx = egui::Context::default();
        let visuals = visuals();
        let mut actions = Vec::new();

        let output = ctx.run(egui::RawInput::default(), |ctx| {
            actions = build_ui(ctx, &view(&visuals, false));
        });

        assert!(actions.is_empty());
        assert!(!output.shapes.is_empty());
    }

    #[test]
    fn test_loading_screen_paints() {
        let ctx = egui::Context::default();
        let visuals = visuals();

        let output = ctx.run(egui::RawInput::default(), |ctx| {
            build_ui(ctx, &view(&visuals, true));
        });

        assert!(!output.shapes.is_empty());
    }

    #[test]
    fn test_next_button_hidden_while_transitioning() {
        let visuals = visuals();
        let mut view = view(&visuals, false);
        assert!(shows_next_button(&view));

        view.nav.transitioning = true;
        assert!(!shows_next_button(&view));
    }

    #[test]
    fn test_next_button_needs_active_hero() {
        let leaving = NavSnapshot {
            active: 1,
            previous: Some(0),
            ..settled()
        };
        let visuals = SectionPresenter::new(&leaving).visuals();
        let mut view = view(&visuals, false);
        view.nav = leaving;

        assert!(!shows_next_button(&view));
    }

    #[test]
    fn test_underline_waits_for_animations() {
        let visuals = visuals();
        let hero = visuals[0];
        let mut nav = settled();
        assert!(shows_underline(&hero, &nav));

        nav.animations_complete = false;
        assert!(!shows_underline(&hero, &nav));
        assert!(!shows_underline(&visuals[1], &settled()));
    }

    #[test]
    fn test_previous_title_is_muted() {
        let theme = Theme::new(true);
        let mut visual = visuals()[0];
        assert_eq!(title_color(&visual, theme), color32(theme.text()));

        visual.previous = true;
        visual.active = false;
        assert_eq!(title_color(&visual, theme), color32(theme.muted_text()));
    }
}
