// Copyright 2026 the Slideway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use tracing::debug;

use crate::region::{ScrollRegion, Zone};
use crate::state::{PinState, PinTransition, PinTransitions};

/// An ambient smooth/inertial scrolling engine that must be paused while a
/// section is pinned.
///
/// [`PinController`] owns the handle and is the only caller of these methods.
/// It issues exactly one `stop()` when a pinned session begins and one
/// `start()` when it ends.
pub trait AmbientScroll {
    /// Resume ambient scrolling.
    fn start(&mut self);
    /// Pause ambient scrolling.
    fn stop(&mut self);
}

impl<T: AmbientScroll + ?Sized> AmbientScroll for &mut T {
    fn start(&mut self) {
        (**self).start();
    }

    fn stop(&mut self) {
        (**self).stop();
    }
}

/// An [`AmbientScroll`] for pages without a smooth-scroll engine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NoAmbientScroll;

impl AmbientScroll for NoAmbientScroll {
    fn start(&mut self) {}
    fn stop(&mut self) {}
}

/// Result of [`PinController::bind`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BindOutcome {
    /// The new region is in effect.
    Bound,
    /// The region equals the current one.
    Unchanged,
    /// The measurement was degenerate; the previous region (if any) stays in
    /// effect and pinning waits for a valid measurement.
    Deferred,
}

/// Derives [`PinState`] from the document scroll offset and a bound
/// [`ScrollRegion`], pausing and resuming the ambient scroll engine in step.
///
/// Until a valid region is bound (or while disabled), the controller stays
/// [`PinState::Unpinned`] and never touches the ambient engine.
pub struct PinController<A: AmbientScroll> {
    ambient: A,
    region: Option<ScrollRegion>,
    state: PinState,
    offset: Option<f64>,
    enabled: bool,
    ambient_paused: bool,
}

impl<A: AmbientScroll> fmt::Debug for PinController<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PinController")
            .field("region", &self.region)
            .field("state", &self.state)
            .field("offset", &self.offset)
            .field("enabled", &self.enabled)
            .field("ambient_paused", &self.ambient_paused)
            .finish_non_exhaustive()
    }
}

impl<A: AmbientScroll> PinController<A> {
    /// Creates an enabled, unpinned controller with no region bound.
    #[must_use]
    pub fn new(ambient: A) -> Self {
        Self {
            ambient,
            region: None,
            state: PinState::Unpinned,
            offset: None,
            enabled: true,
            ambient_paused: false,
        }
    }

    /// Current pin state. Never [`PinState::Entering`] between updates.
    #[must_use]
    pub fn state(&self) -> PinState {
        self.state
    }

    /// Returns `true` while [`PinState::Pinned`].
    #[must_use]
    pub fn is_pinned(&self) -> bool {
        self.state == PinState::Pinned
    }

    /// The region currently in effect.
    #[must_use]
    pub fn region(&self) -> Option<ScrollRegion> {
        self.region
    }

    /// The last scroll offset passed to [`PinController::update`].
    #[must_use]
    pub fn offset(&self) -> Option<f64> {
        self.offset
    }

    /// Progress of the last offset through the region, clamped to `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> Option<f64> {
        let region = self.region?;
        Some(region.progress_at(self.offset?))
    }

    /// Returns `true` if the controller may pin.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns `true` while the ambient engine is paused by this controller.
    #[must_use]
    pub fn is_ambient_paused(&self) -> bool {
        self.ambient_paused
    }

    /// Shared access to the ambient engine handle, for inspection.
    #[must_use]
    pub fn ambient(&self) -> &A {
        &self.ambient
    }

    /// Enables or disables pinning. Disabling while pinned unpins.
    pub fn set_enabled(&mut self, enabled: bool) -> PinTransitions {
        if self.enabled == enabled {
            return PinTransitions::new();
        }
        self.enabled = enabled;
        if enabled {
            self.refresh()
        } else {
            self.force_unpin()
        }
    }

    /// Records a new region measurement.
    ///
    /// Degenerate measurements (zero/negative height, non-finite bounds) are
    /// not applied. Call [`PinController::update`] or
    /// [`PinController::refresh`] afterwards to re-derive the pin state.
    pub fn bind(&mut self, region: ScrollRegion) -> BindOutcome {
        if !region.is_valid() {
            debug!(
                start = region.start,
                end = region.end,
                "deferring pin: degenerate region"
            );
            return BindOutcome::Deferred;
        }
        if self.region == Some(region) {
            return BindOutcome::Unchanged;
        }
        debug!(start = region.start, end = region.end, "pin region bound");
        self.region = Some(region);
        BindOutcome::Bound
    }

    /// Re-derives the pin state from the last known offset.
    pub fn refresh(&mut self) -> PinTransitions {
        match self.offset {
            Some(offset) => self.update(offset),
            None => PinTransitions::new(),
        }
    }

    /// Feeds a new document scroll offset and returns the resulting transitions.
    ///
    /// Repeated updates inside the same zone produce nothing, so boundary
    /// callbacks that fire more than once are harmless.
    pub fn update(&mut self, offset: f64) -> PinTransitions {
        let mut out = PinTransitions::new();
        if offset.is_nan() {
            return out;
        }
        self.offset = Some(offset);
        if !self.enabled {
            return out;
        }
        let Some(region) = self.region else {
            return out;
        };

        match (self.state, region.zone(offset)) {
            (PinState::Unpinned, Zone::Inside) => {
                self.advance(&mut out);
                self.advance(&mut out);
            }
            (PinState::Pinned, Zone::Fringe(_)) => {
                self.advance(&mut out);
            }
            (PinState::Pinned, Zone::Outside(_)) => {
                self.advance(&mut out);
                self.advance(&mut out);
            }
            (PinState::Leaving, Zone::Inside) => {
                self.advance(&mut out);
                self.advance(&mut out);
                self.advance(&mut out);
            }
            (PinState::Leaving, Zone::Outside(_)) => {
                self.advance(&mut out);
            }
            _ => {}
        }
        out
    }

    /// Walks the cycle back to [`PinState::Unpinned`] without looking at the
    /// scroll offset, resuming the ambient engine if it was paused.
    pub fn force_unpin(&mut self) -> PinTransitions {
        let mut out = PinTransitions::new();
        while self.state != PinState::Unpinned {
            self.advance(&mut out);
        }
        self.resume_ambient();
        out
    }

    /// Snapshot of the controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> PinDebugInfo {
        PinDebugInfo {
            state: self.state,
            region: self.region,
            offset: self.offset,
            progress: self.progress(),
            enabled: self.enabled,
            ambient_paused: self.ambient_paused,
        }
    }

    fn advance(&mut self, out: &mut PinTransitions) {
        let from = self.state;
        let to = from.successor();
        self.state = to;
        debug!(?from, ?to, "pin transition");
        if to == PinState::Pinned {
            self.pause_ambient();
        } else if from == PinState::Pinned {
            self.resume_ambient();
        }
        out.push(PinTransition { from, to });
    }

    fn pause_ambient(&mut self) {
        if !self.ambient_paused {
            self.ambient.stop();
            self.ambient_paused = true;
        }
    }

    fn resume_ambient(&mut self) {
        if self.ambient_paused {
            self.ambient.start();
            self.ambient_paused = false;
        }
    }
}

impl<A: AmbientScroll> Drop for PinController<A> {
    fn drop(&mut self) {
        self.resume_ambient();
    }
}

/// Debug snapshot of a [`PinController`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PinDebugInfo {
    /// Current pin state.
    pub state: PinState,
    /// Region in effect, if any.
    pub region: Option<ScrollRegion>,
    /// Last scroll offset.
    pub offset: Option<f64>,
    /// Clamped progress of the last offset.
    pub progress: Option<f64>,
    /// Whether pinning is enabled.
    pub enabled: bool,
    /// Whether the ambient engine is paused.
    pub ambient_paused: bool,
}
