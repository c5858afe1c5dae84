// Copyright 2026 the Slideway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch gesture accumulator: turn finger positions into [`InputEvent`]s.
//!
//! ## Usage
//!
//! 1) Begin a gesture with [`TouchGesture::begin`] on touch start.
//! 2) On each touch move, call [`TouchGesture::update`]; it reports the net
//!    vertical displacement since the start, so small moves keep accumulating.
//! 3) Once a step has been accepted for this gesture, call
//!    [`TouchGesture::consume`]; later moves in the same gesture yield `None`.
//! 4) End the gesture with [`TouchGesture::end`] on touch end or cancel.
//!
//! Vertical axis only: a finger moving up the screen (decreasing `y`) is a
//! forward, positive delta, matching wheel semantics.

use kurbo::Point;

use crate::event::InputEvent;

/// Tracks one touch gesture from start to end.
#[derive(Debug, Clone, Default, Copy)]
pub struct TouchGesture {
    /// Where the finger first touched down.
    pub start_pos: Option<Point>,
    /// Last recorded finger position.
    pub last_pos: Option<Point>,
    consumed: bool,
}

impl TouchGesture {
    /// Begins a new gesture at `pos`, discarding any previous one.
    pub fn begin(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.consumed = false;
    }

    /// Records a move to `pos` and returns the accumulated sample.
    ///
    /// Returns `None` when no gesture is active or the gesture is already
    /// consumed. The position is recorded either way.
    pub fn update(&mut self, pos: Point, timestamp: u64) -> Option<InputEvent> {
        let start = self.start_pos?;
        self.last_pos = Some(pos);
        if self.consumed {
            return None;
        }
        let net = start.y - pos.y;
        Some(InputEvent::touch(net, net.abs(), timestamp))
    }

    /// Net forward displacement from the start position to `pos`.
    #[must_use]
    pub fn displacement(&self, pos: Point) -> Option<f64> {
        self.start_pos.map(|start| start.y - pos.y)
    }

    /// Marks the gesture as spent: it has produced its one step.
    pub fn consume(&mut self) {
        if self.start_pos.is_some() {
            self.consumed = true;
        }
    }

    /// Ends the gesture and resets state.
    pub fn end(&mut self) {
        self.start_pos = None;
        self.last_pos = None;
        self.consumed = false;
    }

    /// Returns `true` while a gesture is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.start_pos.is_some()
    }

    /// Returns `true` if the active gesture has already produced a step.
    #[must_use]
    pub fn is_consumed(&self) -> bool {
        self.consumed
    }
}
