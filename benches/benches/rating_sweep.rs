// Copyright 2025 the Starband Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Rect};
use starband_gesture::feedback::NoHooks;
use starband_gesture::machine::{GestureConfig, RatingGesture};
use starband_gesture::pointer::PointerSample;
use starband_layout::{ItemSize, RowLayout};

fn measured_row() -> RowLayout {
    let mut row = RowLayout::new(ItemSize::Fixed(40.0), 4.0);
    row.on_measure(Rect::new(0.0, 0.0, 40.0, 40.0));
    row
}

fn sweep(count: usize) -> Vec<PointerSample> {
    // Left of the row, across all cells, past the right edge.
    (0..count)
        .map(|i| {
            let x = -40.0 + (i as f64) * (300.0 / count as f64);
            PointerSample::at(Point::new(x, 10.0))
        })
        .collect()
}

fn bench_compute_live_rating(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/compute_live_rating");
    let row = measured_row();
    let gesture = RatingGesture::new(GestureConfig::new(20.0));

    for count in [64usize, 256, 1024] {
        let samples = sweep(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &samples, |b, samples| {
            b.iter(|| {
                let mut acc = 0u32;
                for sample in samples {
                    acc += gesture.compute_live_rating(&row, sample).unwrap_or(0);
                }
                black_box(acc);
            });
        });
    }
    group.finish();
}

fn bench_full_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/lifecycle");
    let row = measured_row();
    let moves = sweep(16);

    group.throughput(Throughput::Elements(moves.len() as u64));
    group.bench_function("grant_moves_release", |b| {
        b.iter_batched(
            || RatingGesture::new(GestureConfig::new(20.0)),
            |mut gesture| {
                let mut hooks = NoHooks;
                gesture.on_grant(&row, PointerSample::at(Point::new(5.0, 10.0)), &mut hooks);
                for sample in &moves {
                    gesture.on_move(&row, *sample, &mut hooks);
                }
                gesture.on_release(PointerSample::at(Point::new(250.0, 12.0)), &mut hooks);
                black_box(gesture.committed());
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_compute_live_rating, bench_full_gesture);
criterion_main!(benches);
