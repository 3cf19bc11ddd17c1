use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::{Vec2, Vec3};

use wavefolio::camera::WaveCamera;
use wavefolio::config::AnimationSettings;
use wavefolio::core::canvas_layer::Canvas;
use wavefolio::core::display_context::DisplayContext;
use wavefolio::math::{clip_segment, ClipBounds};
use wavefolio::sections::camera_target;
use wavefolio::theme::Theme;
use wavefolio::wave::{GridField, Projector, WaveEngine};

fn bench_field_recompute(c: &mut Criterion) {
    let settings = AnimationSettings::default();
    let mut field = GridField::new(settings.cols, settings.rows, settings.spacing);
    let mut t = 0.0f64;

    c.bench_function("field_recompute_200x60", |b| {
        b.iter(|| {
            t += 0.01;
            black_box(field.recompute(black_box(t)))
        })
    });
}

fn bench_projection(c: &mut Criterion) {
    let mut camera = WaveCamera::default();
    camera.aim(&camera_target(1), 0.0);
    camera.update(0.0, 1.0).ok();
    let projector = Projector::new(camera.pose(), Vec2::new(640.0, 400.0));

    let points: Vec<Vec3> = (0..12_000)
        .map(|i| Vec3::new((i % 200) as f32 * 50.0 - 5000.0, 10.0, (i / 200) as f32 * 50.0 - 1500.0))
        .collect();

    c.bench_function("project_12k_vertices", |b| {
        b.iter(|| {
            points
                .iter()
                .filter_map(|p| projector.project(black_box(*p)))
                .count()
        })
    });
}

fn bench_clip(c: &mut Criterion) {
    let bounds = ClipBounds::padded(1280.0, 800.0, 0.5);

    c.bench_function("clip_segment_crossing", |b| {
        b.iter(|| {
            clip_segment(
                black_box(Vec2::new(-300.0, 120.0)),
                black_box(Vec2::new(1500.0, 700.0)),
                &bounds,
            )
        })
    });
}

fn bench_full_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("wave_step");
    group.sample_size(20);

    for (width, height) in [(640u32, 400u32), (1280, 800)] {
        let settings = AnimationSettings::default();
        let mut engine = WaveEngine::new(&settings, DisplayContext::new(width, height), Theme::new(true), true);
        let mut canvas = Canvas::new(width, height);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{width}x{height}")),
            &(),
            |b, _| b.iter(|| black_box(engine.step(black_box(1), &mut canvas))),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_field_recompute,
    bench_projection,
    bench_clip,
    bench_full_step,
);

criterion_main!(benches);
