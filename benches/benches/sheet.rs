// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_event_state::pan::{PanRecognizer, PanSample};
use understory_sheet::{FixedSurface, Sheet, SheetController, SheetState};

fn states(n: u32) -> impl Iterator<Item = SheetState<u32>> {
    // Reverse order so construction has to sort.
    (0..n).rev().map(|i| SheetState::new(i, 100.0 + f64::from(i) * 120.0))
}

fn drag_samples(count: u32) -> Vec<PanSample> {
    let mut pan = PanRecognizer::default();
    pan.begin(Point::new(0.0, 40.0), 0);
    let mut samples = Vec::new();
    for i in 1..=count {
        let y = 40.0 - f64::from(i) * 3.0;
        samples.extend(pan.update(Point::new(0.0, y), u64::from(i) * 8));
    }
    let last = Point::new(0.0, 40.0 - f64::from(count) * 3.0);
    samples.extend(pan.end(last, u64::from(count + 1) * 8));
    samples
}

fn bench_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("sheet_nearest");
    for n in [2_u32, 5, 16] {
        let controller = SheetController::from_states(states(n)).unwrap();
        let max = controller.max_height();
        group.bench_function(format!("nearest_index/{n}"), |b| {
            let mut target = 0.0;
            b.iter(|| {
                target = if target > max { 0.0 } else { target + 7.5 };
                black_box(controller.nearest_index(black_box(target)))
            });
        });
    }
    group.finish();
}

fn bench_config(c: &mut Criterion) {
    c.bench_function("sheet_config/from_states/5", |b| {
        b.iter(|| black_box(SheetController::from_states(states(5)).unwrap()));
    });
}

fn bench_drag(c: &mut Criterion) {
    let samples = drag_samples(120);
    c.bench_function("sheet_drag/stream_120", |b| {
        b.iter_batched(
            || {
                (
                    Sheet::from_states(states(5)).unwrap(),
                    FixedSurface::new(100.0),
                )
            },
            |(mut sheet, mut surface)| {
                for sample in &samples {
                    black_box(sheet.handle_pan(&mut surface, sample));
                }
                sheet.current_index()
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_nearest, bench_config, bench_drag);
criterion_main!(benches);
