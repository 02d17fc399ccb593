use std::io;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_cube::core::{draw_cube, tumble, Cube};
use tui_cube::term::{AnimationState, Canvas, FrameLoop, InterruptFlag};
use tui_cube::types::{Config, Point2, ROTATION_STEP};

fn bench_tumble(c: &mut Criterion) {
    let mut cube = Cube::default();

    c.bench_function("tumble_cube", |b| {
        b.iter(|| {
            tumble(&mut cube, black_box(ROTATION_STEP));
        })
    });
}

fn bench_rasterize(c: &mut Criterion) {
    let mut cube = Cube::default();
    tumble(&mut cube, 0.7);
    let mut pts: Vec<Point2> = Vec::with_capacity(4096);

    c.bench_function("rasterize_cube_edges", |b| {
        b.iter(|| {
            pts.clear();
            draw_cube(black_box(&cube), &mut pts).unwrap();
        })
    });
}

fn bench_render_frame(c: &mut Criterion) {
    let config = Config::default();
    let canvas = Canvas::new(io::sink(), &config);
    let mut fl = FrameLoop::new(
        config,
        canvas,
        AnimationState::from_config(&config),
        InterruptFlag::new(),
    )
    .unwrap();

    c.bench_function("render_frame_150x80", |b| {
        b.iter(|| {
            fl.render_frame().unwrap();
        })
    });
}

criterion_group!(benches, bench_tumble, bench_rasterize, bench_render_frame);
criterion_main!(benches);
