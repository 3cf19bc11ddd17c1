use glam::Vec2;
use wavefolio::config::AnimationSettings;
use wavefolio::core::canvas_layer::{Canvas, DrawOp};
use wavefolio::core::display_context::DisplayContext;
use wavefolio::math::Rgba;
use wavefolio::theme::{Theme, DARK_BACKGROUND, LIGHT_BACKGROUND};
use wavefolio::wave::WaveEngine;

const WHITE: Rgba = Rgba::rgb(255, 255, 255);
const RED: Rgba = Rgba::rgb(255, 0, 0);

// ============================================================================
// Canvas Core Functionality Tests
// ============================================================================

#[test]
fn test_canvas_new() {
    let canvas = Canvas::new(640, 480);
    assert_eq!(canvas.dimensions(), (640, 480));
    assert_eq!(canvas.pixels().len(), 640 * 480 * 4);
}

#[test]
fn test_canvas_clear_then_line() {
    let mut canvas = Canvas::new(100, 100)
        .draw(DrawOp::Clear(WHITE))
        .draw(DrawOp::Line { from: Vec2::new(10.0, 50.0), to: Vec2::new(90.0, 50.0), color: RED });
    assert_eq!(canvas.pending_ops(), 2);

    canvas.execute_ops();
    assert_eq!(canvas.pending_ops(), 0);
    assert_eq!(canvas.pixel(10, 50), Some([255, 0, 0, 255]));
    assert_eq!(canvas.pixel(90, 50), Some([255, 0, 0, 255]));
    assert_eq!(canvas.pixel(50, 49), Some([255, 255, 255, 255]));
    assert_eq!(canvas.pixel(9, 50), Some([255, 255, 255, 255]));
}

#[test]
fn test_line_far_off_canvas_is_clipped() {
    let mut canvas = Canvas::new(64, 64);
    canvas.push(DrawOp::Clear(WHITE));
    canvas.push(DrawOp::Line {
        from: Vec2::new(-5000.0, 32.0),
        to: Vec2::new(5000.0, 32.0),
        color: RED,
    });
    canvas.execute_ops();

    assert_eq!(canvas.pixel(0, 32), Some([255, 0, 0, 255]));
    assert_eq!(canvas.pixel(63, 32), Some([255, 0, 0, 255]));
}

#[test]
fn test_translucent_circle_blends() {
    let mut canvas = Canvas::new(32, 32);
    canvas.push(DrawOp::Clear(Rgba::rgb(0, 0, 0)));
    canvas.push(DrawOp::FilledCircle {
        center: Vec2::new(16.0, 16.0),
        radius: 3.0,
        color: WHITE.with_alpha(0.5),
    });
    canvas.execute_ops();

    let [r, g, b, a] = canvas.pixel(16, 16).expect("in range");
    assert!((120..=135).contains(&r));
    assert_eq!(r, g);
    assert_eq!(g, b);
    assert_eq!(a, 255);
    assert_eq!(canvas.pixel(0, 0), Some([0, 0, 0, 255]));
}

#[test]
fn test_nan_ops_leave_canvas_untouched() {
    let mut canvas = Canvas::new(16, 16);
    canvas.push(DrawOp::Clear(WHITE));
    canvas.execute_ops();
    let before = canvas.pixels().to_vec();

    canvas.push(DrawOp::Line { from: Vec2::new(f32::NAN, 0.0), to: Vec2::new(8.0, 8.0), color: RED });
    canvas.push(DrawOp::FilledCircle { center: Vec2::new(8.0, 8.0), radius: f32::NAN, color: RED });
    canvas.execute_ops();

    assert_eq!(canvas.pixels(), before.as_slice());
}

// ============================================================================
// Wave engine into canvas
// ============================================================================

fn engine(dark: bool) -> WaveEngine {
    let settings = AnimationSettings {
        cols: 40,
        rows: 20,
        ..AnimationSettings::default()
    };
    WaveEngine::new(&settings, DisplayContext::new(320, 200), Theme::new(dark), true)
}

#[test]
fn test_engine_frame_draws_over_background() {
    let mut engine = engine(true);
    let mut canvas = Canvas::new(320, 200);

    let mut stats = engine.step(0, &mut canvas);
    for _ in 0..30 {
        stats = engine.step(0, &mut canvas);
    }

    assert!(stats.lines > 0);
    assert!(!stats.camera_recovered);
    assert_eq!(stats.sanitized_heights, 0);

    let bg = DARK_BACKGROUND;
    let background = [bg.r, bg.g, bg.b, 255];
    let drawn = canvas.pixels().chunks_exact(4).filter(|px| *px != background).count();
    assert!(drawn > 0);
}

#[test]
fn test_engine_follows_resize_and_theme() {
    let mut engine = engine(false);
    let mut canvas = Canvas::new(320, 200);
    engine.step(0, &mut canvas);

    engine.resize(DisplayContext::new(160, 100));
    engine.set_theme(Theme::new(true));
    engine.step(0, &mut canvas);
    assert_eq!(canvas.dimensions(), (160, 100));
    assert!(engine.theme().dark);

    let light = [LIGHT_BACKGROUND.r, LIGHT_BACKGROUND.g, LIGHT_BACKGROUND.b, 255];
    assert!(canvas.pixels().chunks_exact(4).all(|px| px != light));
}

#[test]
fn test_engine_time_scales_by_section() {
    let mut hero = engine(false);
    let mut projects = engine(false);
    let mut canvas = Canvas::new(320, 200);

    hero.step(0, &mut canvas);
    projects.step(3, &mut canvas);

    assert!((projects.time() - hero.time() * 1.5).abs() < 1e-6);
}
