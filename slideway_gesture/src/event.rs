// Copyright 2026 the Slideway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Where an input sample came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GestureKind {
    /// Mouse wheel or trackpad scroll.
    Wheel,
    /// Touch drag.
    Touch,
}

/// One normalized input sample.
///
/// Positive `delta` means "forward" (content moves up, toward later slides).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InputEvent {
    /// Signed scroll amount. For touch this is the net displacement since
    /// the gesture started.
    pub delta: f64,
    /// Source of the sample.
    pub source: GestureKind,
    /// Absolute distance travelled since the gesture started (touch only; `0.0` for wheel).
    pub cumulative_distance: f64,
    /// Host time in milliseconds.
    pub timestamp: u64,
}

impl InputEvent {
    /// A wheel sample.
    #[must_use]
    pub fn wheel(delta: f64, timestamp: u64) -> Self {
        Self {
            delta,
            source: GestureKind::Wheel,
            cumulative_distance: 0.0,
            timestamp,
        }
    }

    /// A touch sample with its accumulated distance.
    #[must_use]
    pub fn touch(delta: f64, cumulative_distance: f64, timestamp: u64) -> Self {
        Self {
            delta,
            source: GestureKind::Touch,
            cumulative_distance,
            timestamp,
        }
    }
}
