// Copyright 2026 the Slideway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cooldown lock with a fixed expiry.
//!
//! ## Usage
//!
//! 1) Call [`AnimationLock::acquire`] when a step is accepted; it fails while
//!    a previous cooldown is still running.
//! 2) Query [`AnimationLock::is_held`] with the current time.
//! 3) Optionally call [`AnimationLock::release_expired`] from a timer so the
//!    stored deadline is cleared once it passes.
//!
//! The lock never waits for anything but its own deadline. The only early
//! release is [`AnimationLock::cancel`], reserved for tearing the carousel
//! down or unpinning it.

/// A boolean lock with an expiry timestamp.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AnimationLock {
    held_until: Option<u64>,
}

impl AnimationLock {
    /// Creates an unlocked lock.
    #[must_use]
    pub const fn new() -> Self {
        Self { held_until: None }
    }

    /// Returns `true` while the cooldown has not yet expired at `now`.
    #[must_use]
    pub fn is_held(&self, now: u64) -> bool {
        self.held_until.is_some_and(|until| now < until)
    }

    /// Returns the expiry time of the current hold, if one is recorded.
    ///
    /// A recorded deadline in the past means the lock has expired but has not
    /// been cleared by [`AnimationLock::release_expired`] yet.
    #[must_use]
    pub fn expires_at(&self) -> Option<u64> {
        self.held_until
    }

    /// Takes the lock for `cooldown_ms` starting at `now`.
    ///
    /// Returns `false`, leaving the existing hold untouched, if the lock is
    /// still held.
    pub fn acquire(&mut self, now: u64, cooldown_ms: u64) -> bool {
        if self.is_held(now) {
            return false;
        }
        self.held_until = Some(now.saturating_add(cooldown_ms));
        true
    }

    /// Clears the hold if its deadline has passed at `now`.
    ///
    /// Returns `true` if a hold was cleared.
    pub fn release_expired(&mut self, now: u64) -> bool {
        match self.held_until {
            Some(until) if now >= until => {
                self.held_until = None;
                true
            }
            _ => false,
        }
    }

    /// Drops the hold immediately, whether or not it has expired.
    pub fn cancel(&mut self) {
        self.held_until = None;
    }
}
