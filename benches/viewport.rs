use criterion::{black_box, criterion_group, criterion_main, Criterion};
use viewport_fp::math::model_matrix;
use viewport_fp::{Action, Viewport};
use glam::Vec3;

/// Benchmark: tick with every movement action held
fn bench_tick_all_keys(c: &mut Criterion) {
    let mut viewport = Viewport::with_size(1280, 720).unwrap();
    for action in Action::ALL.iter().filter(|a| a.is_movement()) {
        viewport.on_key_down(*action);
    }

    c.bench_function("tick_all_keys", |b| {
        b.iter(|| {
            viewport.tick();
            black_box(viewport.view_matrix())
        })
    });
}

/// Benchmark: tick with nothing held (view rebuild only)
fn bench_tick_idle(c: &mut Criterion) {
    let mut viewport = Viewport::with_size(1280, 720).unwrap();

    c.bench_function("tick_idle", |b| {
        b.iter(|| {
            viewport.tick();
            black_box(viewport.view_matrix())
        })
    });
}

/// Benchmark: mouse look sample
fn bench_mouse_motion(c: &mut Criterion) {
    let mut viewport = Viewport::with_size(1280, 720).unwrap();

    c.bench_function("mouse_motion", |b| {
        b.iter(|| {
            viewport.on_mouse_motion(black_box(1.5), black_box(-0.75));
            black_box(viewport.target())
        })
    });
}

/// Benchmark: model matrix construction for a scatter of objects
fn bench_model_matrices(c: &mut Criterion) {
    let positions: Vec<Vec3> = (0..30)
        .map(|i| Vec3::new((i as f32 * 0.37).sin(), (i as f32 * 0.91).cos(), i as f32 * -0.1))
        .collect();

    c.bench_function("model_matrices_30", |b| {
        b.iter(|| {
            for (i, position) in positions.iter().enumerate() {
                let r = i as f32 * 10.0;
                black_box(model_matrix(*position, Vec3::splat(r), Vec3::splat(0.5)));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_tick_all_keys,
    bench_tick_idle,
    bench_mouse_motion,
    bench_model_matrices
);
criterion_main!(benches);
