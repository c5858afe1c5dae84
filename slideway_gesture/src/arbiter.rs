// Copyright 2026 the Slideway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use tracing::{debug, trace};

use crate::action::{Action, classify};
use crate::event::{GestureKind, InputEvent};
use crate::lock::AnimationLock;

/// Tunables for [`InputArbiter`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArbiterConfig {
    /// Cooldown after an accepted wheel step.
    pub wheel_cooldown_ms: u64,
    /// Cooldown after an accepted touch step.
    pub touch_cooldown_ms: u64,
    /// Net touch travel that must be exceeded before a drag counts.
    pub touch_threshold_px: f64,
}

impl ArbiterConfig {
    /// Default wheel cooldown.
    pub const WHEEL_COOLDOWN_MS: u64 = 700;
    /// Default touch cooldown.
    pub const TOUCH_COOLDOWN_MS: u64 = 600;
    /// Default touch threshold.
    pub const TOUCH_THRESHOLD_PX: f64 = 40.0;

    /// Cooldown applied after accepting a step from `kind`.
    #[must_use]
    pub fn cooldown_for(&self, kind: GestureKind) -> u64 {
        match kind {
            GestureKind::Wheel => self.wheel_cooldown_ms,
            GestureKind::Touch => self.touch_cooldown_ms,
        }
    }
}

impl Default for ArbiterConfig {
    fn default() -> Self {
        Self {
            wheel_cooldown_ms: Self::WHEEL_COOLDOWN_MS,
            touch_cooldown_ms: Self::TOUCH_COOLDOWN_MS,
            touch_threshold_px: Self::TOUCH_THRESHOLD_PX,
        }
    }
}

/// Classifies input events and owns the cooldown lock.
///
/// [`InputArbiter::classify`] is a pure query. [`InputArbiter::arbitrate`]
/// additionally takes the lock when it returns [`Action::Next`] or
/// [`Action::Prev`], so at most one step is accepted per cooldown window.
/// Direct navigation shares the same lock through
/// [`InputArbiter::try_acquire`].
#[derive(Clone, Debug, Default)]
pub struct InputArbiter {
    config: ArbiterConfig,
    lock: AnimationLock,
}

impl InputArbiter {
    /// Creates an arbiter with the given configuration and a free lock.
    #[must_use]
    pub fn new(config: ArbiterConfig) -> Self {
        Self {
            config,
            lock: AnimationLock::new(),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ArbiterConfig {
        &self.config
    }

    /// Replaces the configuration. An in-flight cooldown keeps its deadline.
    pub fn set_config(&mut self, config: ArbiterConfig) {
        self.config = config;
    }

    /// Returns the lock state.
    #[must_use]
    pub fn lock(&self) -> &AnimationLock {
        &self.lock
    }

    /// Returns `true` while a cooldown is running at `now`.
    #[must_use]
    pub fn is_locked(&self, now: u64) -> bool {
        self.lock.is_held(now)
    }

    /// Decides what `event` means at `index` of `count` without side effects.
    ///
    /// The touch threshold only gates steps. Outward motion at the first or
    /// last slide passes through from the first sample, so a short drag can
    /// still scroll the page out of the carousel.
    #[must_use]
    pub fn classify(&self, event: &InputEvent, index: usize, count: usize) -> Action {
        let action = classify(event.delta, self.lock.is_held(event.timestamp), index, count);
        if action.is_navigation()
            && event.source == GestureKind::Touch
            && !self.exceeds_threshold(event.cumulative_distance)
        {
            return Action::Ignore;
        }
        action
    }

    fn exceeds_threshold(&self, distance: f64) -> bool {
        distance.is_finite() && distance > self.config.touch_threshold_px
    }

    /// Classifies `event` and takes the lock if it navigates.
    pub fn arbitrate(&mut self, event: &InputEvent, index: usize, count: usize) -> Action {
        let action = self.classify(event, index, count);
        trace!(
            delta = event.delta,
            source = ?event.source,
            index,
            count,
            ?action,
            "classified input"
        );
        if action.is_navigation() {
            let cooldown = self.config.cooldown_for(event.source);
            self.lock.acquire(event.timestamp, cooldown);
            debug!(
                timestamp = event.timestamp,
                cooldown, "animation lock taken by gesture"
            );
        }
        action
    }

    /// Takes the lock for `cooldown_ms` at `now` on behalf of a direct request.
    ///
    /// Returns `false` if a cooldown is still running; the request should be
    /// dropped, not queued.
    pub fn try_acquire(&mut self, now: u64, cooldown_ms: u64) -> bool {
        let taken = self.lock.acquire(now, cooldown_ms);
        if taken {
            debug!(timestamp = now, cooldown = cooldown_ms, "animation lock taken");
        }
        taken
    }

    /// Clears an expired lock. Returns `true` if one was cleared.
    pub fn release_expired(&mut self, now: u64) -> bool {
        let released = self.lock.release_expired(now);
        if released {
            debug!(timestamp = now, "animation lock expired");
        }
        released
    }

    /// Drops the lock immediately. Only for unpinning and teardown.
    pub fn cancel_lock(&mut self) {
        if self.lock.expires_at().is_some() {
            debug!("animation lock cancelled");
        }
        self.lock.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_step_takes_wheel_cooldown() {
        let mut arbiter = InputArbiter::default();
        assert_eq!(arbiter.arbitrate(&InputEvent::wheel(1.0, 1_000), 0, 7), Action::Next);
        assert_eq!(arbiter.lock().expires_at(), Some(1_700));
    }

    #[test]
    fn touch_step_takes_touch_cooldown() {
        let mut arbiter = InputArbiter::default();
        let ev = InputEvent::touch(-50.0, 50.0, 1_000);
        assert_eq!(arbiter.arbitrate(&ev, 3, 7), Action::Prev);
        assert_eq!(arbiter.lock().expires_at(), Some(1_600));
    }

    #[test]
    fn passthrough_and_ignore_do_not_lock() {
        let mut arbiter = InputArbiter::default();
        assert_eq!(
            arbiter.arbitrate(&InputEvent::wheel(1.0, 0), 6, 7),
            Action::Passthrough
        );
        assert_eq!(arbiter.arbitrate(&InputEvent::wheel(0.0, 0), 3, 7), Action::Ignore);
        assert!(!arbiter.is_locked(0));
    }

    #[test]
    fn touch_below_or_at_threshold_is_ignored() {
        let arbiter = InputArbiter::default();
        assert_eq!(
            arbiter.classify(&InputEvent::touch(39.0, 39.0, 0), 3, 7),
            Action::Ignore
        );
        assert_eq!(
            arbiter.classify(&InputEvent::touch(40.0, 40.0, 0), 3, 7),
            Action::Ignore
        );
        assert_eq!(
            arbiter.classify(&InputEvent::touch(40.5, 40.5, 0), 3, 7),
            Action::Next
        );
    }

    #[test]
    fn short_outward_touch_at_boundaries_passes_through() {
        let arbiter = InputArbiter::default();
        // Forward drag on the last slide.
        assert_eq!(
            arbiter.classify(&InputEvent::touch(10.0, 10.0, 0), 6, 7),
            Action::Passthrough
        );
        // Backward drag on the first slide.
        assert_eq!(
            arbiter.classify(&InputEvent::touch(-10.0, 10.0, 0), 0, 7),
            Action::Passthrough
        );
        // Inward drags still wait for the threshold.
        assert_eq!(
            arbiter.classify(&InputEvent::touch(-10.0, 10.0, 0), 6, 7),
            Action::Ignore
        );
        assert_eq!(
            arbiter.classify(&InputEvent::touch(10.0, 10.0, 0), 0, 7),
            Action::Ignore
        );
    }

    #[test]
    fn locked_boundary_touch_is_ignored() {
        let mut arbiter = InputArbiter::default();
        assert!(arbiter.try_acquire(0, 600));
        assert_eq!(
            arbiter.classify(&InputEvent::touch(10.0, 10.0, 100), 6, 7),
            Action::Ignore
        );
    }

    #[test]
    fn wheel_ignores_touch_threshold() {
        let arbiter = InputArbiter::default();
        assert_eq!(arbiter.classify(&InputEvent::wheel(1.0, 0), 3, 7), Action::Next);
    }

    #[test]
    fn gap_shorter_than_cooldown_yields_one_step() {
        let mut arbiter = InputArbiter::default();
        let a = arbiter.arbitrate(&InputEvent::wheel(1.0, 0), 0, 7);
        let b = arbiter.arbitrate(&InputEvent::wheel(1.0, 699), 1, 7);
        assert_eq!((a, b), (Action::Next, Action::Ignore));
    }

    #[test]
    fn gap_longer_than_cooldown_yields_two_steps() {
        let mut arbiter = InputArbiter::default();
        let a = arbiter.arbitrate(&InputEvent::wheel(1.0, 0), 0, 7);
        let b = arbiter.arbitrate(&InputEvent::wheel(1.0, 701), 1, 7);
        assert_eq!((a, b), (Action::Next, Action::Next));
    }

    #[test]
    fn direct_acquire_respects_gesture_lock() {
        let mut arbiter = InputArbiter::default();
        arbiter.arbitrate(&InputEvent::wheel(1.0, 0), 0, 7);
        assert!(!arbiter.try_acquire(100, 700));
        assert!(arbiter.try_acquire(700, 700));
        assert_eq!(arbiter.arbitrate(&InputEvent::wheel(1.0, 800), 1, 7), Action::Ignore);
    }

    #[test]
    fn release_expired_and_cancel() {
        let mut arbiter = InputArbiter::default();
        arbiter.try_acquire(0, 700);
        assert!(!arbiter.release_expired(10));
        assert!(arbiter.release_expired(700));

        arbiter.try_acquire(1_000, 700);
        arbiter.cancel_lock();
        assert!(!arbiter.is_locked(1_001));
    }

    #[test]
    fn custom_config_is_honored() {
        let mut arbiter = InputArbiter::new(ArbiterConfig {
            wheel_cooldown_ms: 100,
            touch_cooldown_ms: 50,
            touch_threshold_px: 10.0,
        });
        assert_eq!(
            arbiter.arbitrate(&InputEvent::touch(11.0, 11.0, 0), 0, 3),
            Action::Next
        );
        assert_eq!(arbiter.lock().expires_at(), Some(50));
    }
}
