// Copyright 2026 the Slideway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use slideway_gesture::{InputArbiter, InputEvent, classify};
use slideway_pin::{NoAmbientScroll, PinController, ScrollRegion};

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/classify");
    let deltas: Vec<f64> = (0..4_096).map(|i| ((i * 37) % 241) as f64 - 120.0).collect();
    group.throughput(Throughput::Elements(deltas.len() as u64));

    group.bench_function("pure", |b| {
        b.iter(|| {
            for (i, delta) in deltas.iter().enumerate() {
                black_box(classify(*delta, false, i % 7, 7));
            }
        });
    });

    group.bench_function("arbitrate", |b| {
        b.iter(|| {
            let mut arbiter = InputArbiter::default();
            let mut index = 0;
            for (i, delta) in deltas.iter().enumerate() {
                let event = InputEvent::wheel(*delta, i as u64 * 8);
                let action = arbiter.arbitrate(&event, index, 7);
                if let Some(next) = action.target(index, 7) {
                    index = next;
                }
            }
            black_box(index)
        });
    });

    group.finish();
}

fn bench_pin_updates(c: &mut Criterion) {
    let mut group = c.benchmark_group("pin/update");

    // Sweep through and past the region, back and forth.
    for slides in [3_usize, 12, 48] {
        let region = ScrollRegion::for_slides(1_000.0, 800.0, slides);
        let reach = region.end + 2_000.0;
        let offsets: Vec<f64> = (0..2_048)
            .map(|i| {
                let t = (i % 512) as f64 / 511.0;
                if (i / 512) % 2 == 0 {
                    t * reach
                } else {
                    (1.0 - t) * reach
                }
            })
            .collect();
        group.throughput(Throughput::Elements(offsets.len() as u64));

        group.bench_with_input(BenchmarkId::new("sweep", slides), &offsets, |b, offsets| {
            b.iter(|| {
                let mut pin = PinController::new(NoAmbientScroll);
                pin.bind(region);
                let mut transitions = 0;
                for offset in offsets {
                    transitions += pin.update(*offset).len();
                }
                black_box(transitions)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_classify, bench_pin_updates);
criterion_main!(benches);
