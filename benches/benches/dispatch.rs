// Copyright 2026 the Slideway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Point;
use slideway::{Carousel, HostEvent, NoAmbientScroll, ScriptedInput, ScrollSurface, SectionLayout};

const TOP: f64 = 1_000.0;
const VH: f64 = 800.0;

struct Document;

impl ScrollSurface for Document {
    fn jump_to(&mut self, offset: f64) {
        black_box(offset);
    }
}

fn carousel(count: usize) -> Carousel<NoAmbientScroll, Document> {
    let mut carousel = Carousel::new(NoAmbientScroll, Document);
    carousel.add_animator(|t: &slideway::SlideTransition| {
        black_box(t);
    });
    let _ = carousel.load_slides(count, 0);
    carousel.relayout(SectionLayout::new(TOP, VH), TOP, 0);
    carousel
}

/// A mixed stream: wheel bursts (mostly swallowed by the cooldown), swipes,
/// native scroll reports, and dot clicks, 16 ms apart.
fn session(len: usize, count: usize) -> Vec<HostEvent> {
    let span = count as f64 * VH;
    (0..len)
        .map(|i| {
            let now = i as u64 * 16;
            match i % 8 {
                0 | 1 | 2 => HostEvent::wheel(if i % 64 < 32 { 120.0 } else { -120.0 }, now),
                3 => HostEvent::touch_start(Point::new(0.0, 500.0), now),
                4 => HostEvent::touch_move(Point::new(0.0, 420.0), now),
                5 => HostEvent::touch_end(now),
                6 => HostEvent::scroll(TOP + (i % 97) as f64 / 97.0 * span, now),
                _ => HostEvent::navigate(i % count, now),
            }
        })
        .collect()
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/dispatch");

    for len in [256_usize, 4_096, 65_536] {
        let events = session(len, 7);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("pump", len), &events, |b, events| {
            b.iter_batched(
                || (carousel(7), events.iter().copied().collect::<ScriptedInput>()),
                |(mut carousel, mut script)| {
                    black_box(carousel.pump(&mut script));
                    carousel
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("dispatch", len), &events, |b, events| {
            b.iter_batched(
                || carousel(7),
                |mut carousel| {
                    for event in events {
                        black_box(carousel.dispatch(*event));
                    }
                    carousel
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_pinned_scroll(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/scroll");

    // Scroll reports inside the region with the index following along.
    for count in [3_usize, 12, 48] {
        let span = count as f64 * VH;
        let offsets: Vec<f64> = (0..1_024).map(|i| TOP + (i as f64 / 1_023.0) * span).collect();
        group.throughput(Throughput::Elements(offsets.len() as u64));

        group.bench_with_input(BenchmarkId::new("follow", count), &offsets, |b, offsets| {
            b.iter_batched(
                || carousel(count),
                |mut carousel| {
                    for (i, offset) in offsets.iter().enumerate() {
                        black_box(carousel.handle_scroll(*offset, i as u64));
                    }
                    carousel
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_dispatch, bench_pinned_scroll);
criterion_main!(benches);
