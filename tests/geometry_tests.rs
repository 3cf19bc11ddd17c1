use glam::{Vec2, Vec3};
use proptest::prelude::*;
use std::f32::consts::PI;

use wavefolio::camera::{WaveCamera, BASE_EYE_Z, BASE_FOV};
use wavefolio::math::{clip_segment, shortest_angle_delta, ClipBounds};
use wavefolio::sections::{camera_target, CameraTarget};
use wavefolio::wave::{wave_height, GridField};

fn bounds() -> ClipBounds {
    ClipBounds::padded(800.0, 600.0, 0.5)
}

// ============================================================================
// Clipping
// ============================================================================

#[test]
fn test_clip_diagonal_through_viewport() {
    let b = bounds();
    let segment = clip_segment(Vec2::new(-100.0, -100.0), Vec2::new(900.0, 700.0), &b)
        .expect("diagonal crosses the viewport");

    assert!(segment.start.x >= b.left - 1e-3 && segment.start.y >= b.top - 1e-3);
    assert!(segment.end.x <= b.right + 1e-3 && segment.end.y <= b.bottom + 1e-3);
}

#[test]
fn test_clip_rejects_non_finite() {
    let b = bounds();
    assert!(clip_segment(Vec2::new(f32::NAN, 10.0), Vec2::new(20.0, 20.0), &b).is_none());
    assert!(clip_segment(Vec2::new(10.0, 10.0), Vec2::new(f32::INFINITY, 20.0), &b).is_none());
}

#[test]
fn test_clip_outside_is_none() {
    let b = bounds();
    assert!(clip_segment(Vec2::new(-50.0, -50.0), Vec2::new(-10.0, 300.0), &b).is_none());
}

proptest! {
    #[test]
    fn prop_clipped_segment_inside_bounds(
        x0 in -2000.0f32..2000.0, y0 in -2000.0f32..2000.0,
        x1 in -2000.0f32..2000.0, y1 in -2000.0f32..2000.0,
    ) {
        let b = bounds();
        if let Some(segment) = clip_segment(Vec2::new(x0, y0), Vec2::new(x1, y1), &b) {
            for p in [segment.start, segment.end] {
                prop_assert!(p.is_finite());
                prop_assert!(p.x >= b.left - 1e-2 && p.x <= b.right + 1e-2);
                prop_assert!(p.y >= b.top - 1e-2 && p.y <= b.bottom + 1e-2);
            }
        }
    }

    #[test]
    fn prop_inside_segment_unchanged(
        x0 in 1.0f32..799.0, y0 in 1.0f32..599.0,
        x1 in 1.0f32..799.0, y1 in 1.0f32..599.0,
    ) {
        let start = Vec2::new(x0, y0);
        let end = Vec2::new(x1, y1);
        let segment = clip_segment(start, end, &bounds());
        prop_assert!(segment.is_some());
        let segment = segment.unwrap();
        prop_assert!((segment.start - start).length() < 1e-3);
        prop_assert!((segment.end - end).length() < 1e-3);
    }

    #[test]
    fn prop_shortest_angle_in_range(from in -50.0f32..50.0, to in -50.0f32..50.0) {
        let delta = shortest_angle_delta(from, to);
        prop_assert!(delta > -PI - 1e-4 && delta <= PI + 1e-4);
    }

    #[test]
    fn prop_wave_height_finite(x in -1e5f32..1e5, z in -1e5f32..1e5, t in 0.0f64..1e7) {
        prop_assert!(wave_height(x, z, t).is_finite());
    }
}

#[test]
fn test_field_heights_finite_over_time() {
    let mut field = GridField::new(40, 20, 50.0);
    for frame in 0..200 {
        assert_eq!(field.recompute(frame as f64 * 0.01), 0);
        assert!(field.heights().iter().all(|h| h.is_finite()));
    }
}

// ============================================================================
// Camera easing
// ============================================================================

#[test]
fn test_camera_converges_without_overshoot() {
    let mut camera = WaveCamera::new(BASE_FOV, BASE_EYE_Z);
    let target = camera_target(3);
    // Time held at zero so the oscillation stays at rest
    camera.aim(&target, 0.0);

    let mut gap = (camera.pose().tilt - target.tilt).abs();
    for _ in 0..400 {
        camera.update(0.0, 0.03).expect("finite camera");
        let next = (camera.pose().tilt - target.tilt).abs();
        assert!(next <= gap);
        assert!(camera.pose().tilt <= target.tilt + 1e-6);
        gap = next;
    }
    assert!(gap < 1e-3);

    let goal = camera.target().position;
    assert!((camera.pose().position - goal).length() < 1.0);
}

#[test]
fn test_camera_stays_within_oscillation_while_time_runs() {
    let mut camera = WaveCamera::new(BASE_FOV, BASE_EYE_Z);
    let target = camera_target(3);
    let amplitude = Vec3::new(3.0, 5.0, 3.0);
    let mut peak = Vec3::ZERO;

    for frame in 0..1500 {
        let time = frame as f64 * 0.05;
        camera.aim(&target, time);
        camera.update(time, 0.03).expect("finite camera");
        peak = peak.max(camera.oscillation().abs());

        // Past the initial approach only the oscillation separates pose and target
        if frame >= 800 {
            let offset = (camera.pose().position - camera.target().position).abs();
            assert!(offset.cmple(amplitude + Vec3::splat(1e-2)).all(), "frame {frame}: {offset:?}");
            assert!((camera.pose().tilt - target.tilt).abs() < 1e-4);
        }
    }

    // The oscillation really moved
    assert!(peak.y > 4.0);
}

#[test]
fn test_camera_yaw_takes_short_way() {
    let mut camera = WaveCamera::new(BASE_FOV, BASE_EYE_Z);
    let near_pi = CameraTarget { yaw: 3.0, yaw_sway: 0.0, ..camera_target(0) };
    camera.aim(&near_pi, 0.0);
    for _ in 0..600 {
        camera.update(0.0, 0.05).expect("finite camera");
    }

    // -3.0 is 0.28 rad away across the seam, not 6.0 rad back through zero
    let across = CameraTarget { yaw: -3.0, ..near_pi };
    camera.aim(&across, 0.0);
    let before = camera.pose().yaw;
    camera.update(0.0, 0.05).expect("finite camera");
    let step = camera.pose().yaw - before;

    assert!(step > 0.0);
    assert!(step.abs() <= PI * 0.05 + 1e-4);
    assert!(shortest_angle_delta(camera.pose().yaw, -3.0).abs() < shortest_angle_delta(before, -3.0).abs());
}

#[test]
fn test_camera_rejects_bad_rate() {
    let mut camera = WaveCamera::new(BASE_FOV, BASE_EYE_Z);
    let before = *camera.pose();

    assert!(camera.update(0.0, 0.0).is_err());
    assert!(camera.update(0.0, f32::NAN).is_err());
    assert_eq!(*camera.pose(), before);
}
