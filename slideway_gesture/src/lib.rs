// Copyright 2026 the Slideway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=slideway_gesture --heading-base-level=0

//! Slideway Gesture: classify wheel and touch input into discrete navigation.
//!
//! A pinned slide carousel turns continuous scroll input into single steps:
//! one wheel notch or one swipe moves exactly one slide, and further input is
//! ignored until a cooldown elapses. This crate holds the pieces that make
//! that decision:
//!
//! - [`InputEvent`]: one normalized wheel or touch sample.
//! - [`classify`]: the pure decision table mapping `(delta, locked, index, count)`
//!   to an [`Action`].
//! - [`AnimationLock`]: a cooldown that expires on its own at a fixed deadline.
//! - [`TouchGesture`]: accumulates a touch drag from its start point and
//!   produces [`InputEvent`]s, allowing at most one step per gesture.
//! - [`InputArbiter`]: combines the above with an [`ArbiterConfig`], taking the
//!   lock whenever it accepts a step.
//!
//! The crate does not know about scroll positions, slides, or rendering, and
//! it does not know whether the section is pinned. Callers consult the arbiter
//! only while pinned and pass everything else through themselves. They pass
//! the current index and slide count with each event and act on the returned
//! [`Action`].
//!
//! Outward motion on the first or last slide is [`Action::Passthrough`] as soon
//! as it starts, for touch as well as wheel input. The touch threshold only
//! delays steps between slides.
//!
//! ## Minimal example
//!
//! ```rust
//! use slideway_gesture::{Action, ArbiterConfig, InputArbiter, InputEvent};
//!
//! let mut arbiter = InputArbiter::new(ArbiterConfig::default());
//!
//! // A downward wheel notch on slide 0 of 7 advances.
//! let action = arbiter.arbitrate(&InputEvent::wheel(120.0, 0), 0, 7);
//! assert_eq!(action, Action::Next);
//!
//! // A second notch inside the cooldown is dropped.
//! let action = arbiter.arbitrate(&InputEvent::wheel(120.0, 50), 1, 7);
//! assert_eq!(action, Action::Ignore);
//!
//! // Past the cooldown, the last slide lets native scrolling resume.
//! let action = arbiter.arbitrate(&InputEvent::wheel(120.0, 1_000), 6, 7);
//! assert_eq!(action, Action::Passthrough);
//! ```
//!
//! ## Touch
//!
//! ```rust
//! use kurbo::Point;
//! use slideway_gesture::{Action, ArbiterConfig, InputArbiter, TouchGesture};
//!
//! let mut arbiter = InputArbiter::new(ArbiterConfig::default());
//! let mut touch = TouchGesture::default();
//!
//! touch.begin(Point::new(0.0, 400.0));
//!
//! // 25px of upward finger motion is below the threshold.
//! let ev = touch.update(Point::new(0.0, 375.0), 10).unwrap();
//! assert_eq!(arbiter.arbitrate(&ev, 2, 7), Action::Ignore);
//!
//! // The same gesture keeps accumulating and crosses it.
//! let ev = touch.update(Point::new(0.0, 350.0), 20).unwrap();
//! assert_eq!(arbiter.arbitrate(&ev, 2, 7), Action::Next);
//! touch.consume();
//!
//! // The gesture is spent until the finger lifts.
//! assert!(touch.update(Point::new(0.0, 200.0), 30).is_none());
//! touch.end();
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod action;
mod arbiter;
mod event;
mod lock;
mod touch;

pub use action::{Action, classify};
pub use arbiter::{ArbiterConfig, InputArbiter};
pub use event::{GestureKind, InputEvent};
pub use lock::AnimationLock;
pub use touch::TouchGesture;
