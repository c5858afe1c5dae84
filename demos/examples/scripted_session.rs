// Copyright 2026 the Slideway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted carousel session.
//!
//! Replays a recorded sequence of host events through a seven-slide carousel:
//! scroll onto the section, step through with the wheel, swipe back, and
//! scroll out past the first slide. Each response is printed next to the
//! disposition a browser host would apply.
//!
//! Run:
//! - `cargo run -p slideway_demos --example scripted_session`
//! - `RUST_LOG=slideway=trace cargo run -p slideway_demos --example scripted_session`

use kurbo::Point;
use slideway::{
    AmbientScroll, Carousel, HostEvent, InputSource, PinHooks, ScriptedInput, ScrollSurface,
    SectionLayout, SlideTransition,
};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Stands in for a smooth-scroll library.
struct SmoothScroller;

impl AmbientScroll for SmoothScroller {
    fn start(&mut self) {
        println!("  [ambient] smooth scrolling resumed");
    }

    fn stop(&mut self) {
        println!("  [ambient] smooth scrolling paused");
    }
}

/// Stands in for the document scroll position.
struct Document;

impl ScrollSurface for Document {
    fn jump_to(&mut self, offset: f64) {
        println!("  [page] scrollTo({offset:.1})");
    }

    fn request_measure(&mut self) {
        println!("  [page] measure requested");
    }
}

struct Overscroll;

impl PinHooks for Overscroll {
    fn on_pinned(&mut self) {
        println!("  [hooks] pinned: header animations paused");
    }

    fn on_unpinned(&mut self) {
        println!("  [hooks] unpinned: header animations resumed");
    }
}

fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("slideway=debug"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().without_time().compact())
        .init();

    let mut carousel = Carousel::new(SmoothScroller, Document);
    carousel.add_pin_hooks(Overscroll);
    carousel.add_animator(|t: &SlideTransition| {
        println!(
            "  [animator] {} -> {} ({:?}, {:?})",
            t.from, t.to, t.direction, t.cause
        );
    });

    if let Err(err) = carousel.load_slides(7, 0) {
        eprintln!("{err}");
        return;
    }
    let layout = SectionLayout::new(1_200.0, 800.0);

    let mut script: ScriptedInput = [
        HostEvent::layout(layout, 0.0, 0),
        HostEvent::scroll(900.0, 100),
        HostEvent::scroll(1_200.0, 200),
        HostEvent::wheel(120.0, 1_000),
        HostEvent::wheel(120.0, 1_100),
        HostEvent::wheel(120.0, 1_800),
        HostEvent::navigate(5, 2_000),
        HostEvent::navigate(1, 2_800),
        HostEvent::touch_start(Point::new(180.0, 400.0), 3_600),
        HostEvent::touch_move(Point::new(180.0, 420.0), 3_610),
        HostEvent::touch_move(Point::new(180.0, 470.0), 3_620),
        HostEvent::touch_end(3_630),
        HostEvent::tick(4_300),
        HostEvent::wheel(-120.0, 4_400),
        HostEvent::scroll(1_150.0, 4_420),
        HostEvent::scroll(300.0, 4_500),
    ]
    .into_iter()
    .collect();

    while let Some(event) = script.next_event() {
        println!("{:>5}ms {:?}", event.timestamp, event.kind);
        let response = carousel.dispatch(event);
        let disposition = if response.suppresses_native() {
            "preventDefault"
        } else {
            "native"
        };
        println!("        -> {response:?} [{disposition}]");
    }

    println!(
        "final: slide {:?} of {}, {:?}",
        carousel.index(),
        carousel.count(),
        carousel.pin_state()
    );
    tracing::info!("session finished");
}
