// Copyright 2026 the Slideway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=slideway_pin --heading-base-level=0

//! Slideway Pin: pin a section to the viewport while scroll drives it.
//!
//! A scroll-driven section reserves a span of document scroll offsets, a
//! [`ScrollRegion`]. While the page is scrolled inside that span the section is
//! held at the top of the viewport ("pinned") and the offset within the span
//! encodes progress. This crate models:
//!
//! - [`ScrollRegion`]: the reserved span, progress math, and the mapping
//!   between slide indices and scroll offsets.
//! - [`PinState`] and [`PinTransition`]: the strict
//!   `Unpinned → Entering → Pinned → Leaving → Unpinned` cycle.
//! - [`PinController`]: derives the state from scroll offsets and owns the
//!   [`AmbientScroll`] handle, pausing it exactly once per pinned session.
//!
//! The crate does not read the DOM or any other layout system. Hosts measure
//! the section and pass offsets in; the controller answers with transitions.
//!
//! ## Minimal example
//!
//! ```rust
//! use slideway_pin::{NoAmbientScroll, PinController, PinState, ScrollRegion};
//!
//! let mut pin = PinController::new(NoAmbientScroll);
//!
//! // A section at 1200px holding 5 slides on an 800px viewport.
//! pin.bind(ScrollRegion::for_slides(1_200.0, 800.0, 5));
//!
//! assert!(pin.update(600.0).is_empty());
//! let transitions = pin.update(1_200.0);
//! assert_eq!(transitions.len(), 2); // Unpinned → Entering → Pinned
//! assert_eq!(pin.state(), PinState::Pinned);
//!
//! // Halfway through the region.
//! pin.update(3_200.0);
//! assert_eq!(pin.progress(), Some(0.5));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod controller;
mod region;
mod state;

pub use controller::{AmbientScroll, BindOutcome, NoAmbientScroll, PinController, PinDebugInfo};
pub use region::{ScrollRegion, Side, Zone, index_for_progress, progress_for_index};
pub use state::{PinState, PinTransition, PinTransitions};
