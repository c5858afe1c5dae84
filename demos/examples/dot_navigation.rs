// Copyright 2026 the Slideway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dot-indicator navigation with a configuration loaded from TOML.
//!
//! Clicks on dot indicators go through `go_to_index` and share the animation
//! lock with gestures, so rapid clicks are dropped rather than queued.
//!
//! Run:
//! - `cargo run -p slideway_demos --example dot_navigation`

use slideway::{Carousel, CarouselConfig, Navigation, NoAmbientScroll, ScrollSurface, SectionLayout};

const CONFIG: &str = r#"
# Snappier clicks than gestures.
navigation_cooldown_ms = 400
wheel_cooldown_ms = 700
touch_threshold_px = 36.0
"#;

#[derive(Default)]
struct Document {
    scroll_y: f64,
}

impl ScrollSurface for Document {
    fn jump_to(&mut self, offset: f64) {
        self.scroll_y = offset;
    }
}

fn dots(current: Option<usize>, count: usize) -> String {
    (0..count)
        .map(|i| if Some(i) == current { '●' } else { '○' })
        .collect()
}

fn main() {
    let config = match CarouselConfig::from_toml_str(CONFIG) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("invalid carousel config: {err}");
            return;
        }
    };
    let mut carousel = match Carousel::with_config(config, NoAmbientScroll, Document::default()) {
        Ok(carousel) => carousel,
        Err(err) => {
            eprintln!("invalid carousel config: {err}");
            return;
        }
    };

    if let Err(err) = carousel.load_slides(5, 0) {
        eprintln!("{err}");
        return;
    }
    carousel.relayout(SectionLayout::new(2_000.0, 900.0), 0.0, 0);
    println!("{}  (not pinned yet)", dots(carousel.index(), carousel.count()));

    for (target, now) in [(3, 100), (4, 300), (4, 600), (0, 700), (9, 1_200)] {
        let outcome = carousel.go_to_index(target, now);
        let note = match outcome {
            Navigation::Moved(t) => format!("moved {} -> {} ({:?})", t.from, t.to, t.direction),
            Navigation::Unchanged => "already there".to_owned(),
            Navigation::Locked => "dropped: transition in flight".to_owned(),
            Navigation::Unavailable => "not measured yet".to_owned(),
        };
        println!(
            "{}  t={now:>4}ms click {target}: {note}; scroll_y = {:.0}",
            dots(carousel.index(), carousel.count()),
            carousel.surface().scroll_y,
        );
    }

    // A second declaration with another count is refused.
    if let Err(err) = carousel.load_slides(8, 1_300) {
        println!("{err}");
    }
}
