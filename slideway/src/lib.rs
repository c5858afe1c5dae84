// Copyright 2026 the Slideway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=slideway --heading-base-level=0

//! Slideway: a scroll-synchronized slide carousel controller.
//!
//! A carousel section reserves one viewport of document scroll per slide.
//! When the page scrolls the section to the top of the viewport it pins, the
//! ambient smooth-scroll engine pauses, and wheel and touch input step
//! through slides one at a time. At the first and last slide input passes
//! through, so continued scrolling leaves the carousel naturally.
//!
//! [`Carousel`] ties together:
//!
//! - [`SlideIndexStore`]: the authoritative index, count, and [`Direction`].
//! - [`PinController`](slideway_pin::PinController): the
//!   `Unpinned → Entering → Pinned → Leaving` cycle and the [`AmbientScroll`] handle.
//! - [`InputArbiter`](slideway_gesture::InputArbiter): turns events into
//!   [`Action`]s under a cooldown lock.
//! - Scroll synchronization: index changes jump the [`ScrollSurface`], and
//!   native scrolling while pinned moves the index.
//! - [`TransitionAnimator`]: the seam where visuals receive
//!   `(from, to, direction)`; the carousel never waits on it.
//!
//! Host events can be fed through the individual `handle_*` methods, routed
//! with [`Carousel::dispatch`], or drained from an injected [`InputSource`]
//! with [`Carousel::pump`].
//!
//! ## Minimal example
//!
//! ```rust
//! use slideway::{Action, Carousel, NoAmbientScroll, ScrollSurface, SectionLayout};
//!
//! #[derive(Default)]
//! struct Page {
//!     offset: f64,
//! }
//!
//! impl ScrollSurface for Page {
//!     fn jump_to(&mut self, offset: f64) {
//!         self.offset = offset;
//!     }
//! }
//!
//! let mut page = Page::default();
//! let mut carousel = Carousel::new(NoAmbientScroll, &mut page);
//! carousel.add_animator(|t: &slideway::SlideTransition| {
//!     // Start a crossfade from `t.from` to `t.to` here.
//!     assert!(t.to < 7);
//! });
//!
//! // Seven slides in a section at 1000px, 800px viewport.
//! carousel.load_slides(7, 0).unwrap();
//! carousel.relayout(SectionLayout::new(1_000.0, 800.0), 0.0, 0);
//!
//! // Scrolling down to the section pins it.
//! carousel.handle_scroll(1_000.0, 16);
//! assert!(carousel.is_pinned());
//!
//! // One wheel notch, one slide; the next notch within the cooldown is swallowed.
//! assert_eq!(carousel.handle_wheel(120.0, 32), Action::Next);
//! assert_eq!(carousel.handle_wheel(120.0, 48), Action::Ignore);
//! assert_eq!(carousel.index(), Some(1));
//!
//! drop(carousel);
//! assert!((page.offset - (1_000.0 + 5_600.0 / 6.0)).abs() < 1e-9);
//! ```
//!
//! ## Features
//!
//! - `std` (default): build the dependencies with the standard library.
//! - `serde`: `Serialize`/`Deserialize` for [`CarouselConfig`].
//! - `toml`: `CarouselConfig::from_toml_str`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod animator;
mod carousel;
mod config;
mod error;
mod input;
mod store;
mod surface;

pub use animator::{PinHooks, SlideTransition, TransitionAnimator, TransitionCause};
pub use carousel::{Carousel, Navigation, Response, TimerKind};
pub use config::{CarouselConfig, ConfigError};
pub use error::CarouselError;
pub use input::{HostEvent, HostEventKind, InputSource, ScriptedInput, SectionLayout};
pub use store::{Direction, SlideIndexStore};
pub use surface::ScrollSurface;

pub use slideway_gesture::{Action, GestureKind};
pub use slideway_pin::{AmbientScroll, NoAmbientScroll, PinState, ScrollRegion};
