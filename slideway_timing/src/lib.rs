// Copyright 2026 the Slideway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=slideway_timing --heading-base-level=0

//! Slideway Timing: a host-agnostic, coalescing timer queue.
//!
//! Event-driven controllers often need a handful of "call me back later"
//! timers (a cooldown expiry, a deferred re-measure) without owning a clock or
//! an executor. [`TimerQueue`] stores at most **one** pending deadline per
//! timer key: scheduling a key that is already pending replaces its deadline
//! instead of stacking a second timer.
//!
//! The queue never reads a clock. Callers pass the current time (any monotonic
//! millisecond counter) to [`TimerQueue::drain_due`] and receive the keys whose
//! deadlines have passed, in deadline order.
//!
//! ## Minimal example
//!
//! ```rust
//! use slideway_timing::TimerQueue;
//!
//! #[derive(Copy, Clone, Debug, PartialEq, Eq)]
//! enum Kind {
//!     Cooldown,
//!     Remeasure,
//! }
//!
//! let mut timers = TimerQueue::new();
//! timers.schedule(Kind::Cooldown, 700);
//! timers.schedule(Kind::Remeasure, 100);
//!
//! // Rescheduling coalesces: there is still just one cooldown timer.
//! timers.schedule(Kind::Cooldown, 900);
//! assert_eq!(timers.len(), 2);
//!
//! assert_eq!(timers.next_deadline(), Some(100));
//! assert_eq!(timers.drain_due(500).as_slice(), &[Kind::Remeasure]);
//! assert_eq!(timers.drain_due(900).as_slice(), &[Kind::Cooldown]);
//! assert!(timers.is_empty());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use smallvec::SmallVec;

/// A pending timer: a key plus the time at which it becomes due.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Timer<K> {
    /// The timer's key; at most one timer per key is pending.
    pub key: K,
    /// Deadline in host milliseconds.
    pub deadline: u64,
}

/// Keys returned by [`TimerQueue::drain_due`], in deadline order.
pub type DueTimers<K> = SmallVec<[K; 4]>;

/// A small queue of pending timers with one slot per key.
///
/// The queue is expected to hold only a few entries (one per timer kind), so
/// it is a linear scan over inline storage rather than a heap.
#[derive(Clone, Debug)]
pub struct TimerQueue<K> {
    timers: SmallVec<[Timer<K>; 4]>,
}

impl<K> Default for TimerQueue<K> {
    fn default() -> Self {
        Self {
            timers: SmallVec::new(),
        }
    }
}

impl<K: Copy + Eq> TimerQueue<K> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    /// Returns `true` if no timer is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Schedules `key` to fire at `deadline`.
    ///
    /// If `key` is already pending its deadline is replaced and the previous
    /// deadline is returned.
    pub fn schedule(&mut self, key: K, deadline: u64) -> Option<u64> {
        if let Some(timer) = self.timers.iter_mut().find(|t| t.key == key) {
            let previous = timer.deadline;
            timer.deadline = deadline;
            return Some(previous);
        }
        self.timers.push(Timer { key, deadline });
        None
    }

    /// Cancels the pending timer for `key`, returning its deadline if there was one.
    pub fn cancel(&mut self, key: K) -> Option<u64> {
        let pos = self.timers.iter().position(|t| t.key == key)?;
        Some(self.timers.swap_remove(pos).deadline)
    }

    /// Returns the pending deadline for `key`, if any.
    #[must_use]
    pub fn deadline(&self, key: K) -> Option<u64> {
        self.timers
            .iter()
            .find(|t| t.key == key)
            .map(|t| t.deadline)
    }

    /// Returns `true` if a timer for `key` is pending.
    #[must_use]
    pub fn is_pending(&self, key: K) -> bool {
        self.deadline(key).is_some()
    }

    /// Returns the earliest pending deadline.
    ///
    /// Hosts that drive the queue from a single platform timer should arm it
    /// for this instant.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.iter().map(|t| t.deadline).min()
    }

    /// Removes and returns every timer whose deadline is `<= now`.
    ///
    /// Keys are returned in deadline order; the order of equal deadlines is unspecified.
    pub fn drain_due(&mut self, now: u64) -> DueTimers<K> {
        let mut due: SmallVec<[Timer<K>; 4]> = SmallVec::new();
        self.timers.retain(|t| {
            if t.deadline <= now {
                due.push(*t);
                false
            } else {
                true
            }
        });
        due.sort_unstable_by_key(|t| t.deadline);
        due.into_iter().map(|t| t.key).collect()
    }

    /// Drops every pending timer without firing it.
    pub fn clear(&mut self) {
        self.timers.clear();
    }

    /// Iterates over pending timers in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Timer<K>> + '_ {
        self.timers.iter()
    }
}
