// Copyright 2026 the Corbel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for side selection and anchor placement.
//!
//! Uses a deterministic synthetic grid of trigger frames spanning the whole
//! viewport, so every fallback branch of the priority scan gets exercised:
//! comfortable centers, tight edges, and cramped corners.

use corbel_placement::{FitThresholds, Gap, Side, SideChooser, fitting_sides, placement};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};

const VIEWPORT: Size = Size::new(1280.0, 720.0);

fn synthetic_frames() -> Vec<Rect> {
    let mut frames = Vec::new();
    let cols = 32;
    let rows = 18;
    for row in 0..rows {
        for col in 0..cols {
            let x = col as f64 * VIEWPORT.width / cols as f64;
            let y = row as f64 * VIEWPORT.height / rows as f64;
            frames.push(Rect::new(x, y, x + 48.0, y + 24.0));
        }
    }
    frames
}

fn bench_fitting_sides(c: &mut Criterion) {
    let frames = synthetic_frames();
    let thresholds = FitThresholds::default();
    c.bench_function("fitting_sides/grid_576", |b| {
        b.iter(|| {
            for &frame in &frames {
                black_box(fitting_sides(black_box(frame), VIEWPORT, thresholds));
            }
        });
    });
}

fn bench_choose(c: &mut Criterion) {
    let frames = synthetic_frames();
    c.bench_function("choose/grid_576", |b| {
        b.iter(|| {
            let mut chooser = SideChooser::new();
            for &frame in &frames {
                black_box(chooser.choose(black_box(frame), VIEWPORT, None));
            }
        });
    });
}

fn bench_resolve(c: &mut Criterion) {
    let frames = synthetic_frames();
    let gap = Gap::default();
    c.bench_function("resolve/grid_576", |b| {
        b.iter(|| {
            let mut chooser = SideChooser::new();
            for &frame in &frames {
                black_box(chooser.resolve(black_box(frame), VIEWPORT, None, gap));
            }
        });
    });
}

fn bench_placement_per_side(c: &mut Criterion) {
    let frame = Rect::new(200.0, 100.0, 250.0, 120.0);
    let gap = Gap::default();
    c.bench_function("placement/four_sides", |b| {
        b.iter(|| {
            for side in Side::PRIORITY {
                black_box(placement(black_box(frame), side, gap));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_fitting_sides,
    bench_choose,
    bench_resolve,
    bench_placement_per_side
);
criterion_main!(benches);
