// Copyright 2026 the Slideway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Direction of the most recent index change.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards higher indices.
    Forward,
    /// Towards lower indices.
    Backward,
    /// No change has happened yet.
    #[default]
    None,
}

impl Direction {
    /// Direction of a move from `from` to `to`.
    #[must_use]
    pub fn between(from: usize, to: usize) -> Self {
        match to.cmp(&from) {
            core::cmp::Ordering::Greater => Self::Forward,
            core::cmp::Ordering::Less => Self::Backward,
            core::cmp::Ordering::Equal => Self::None,
        }
    }
}

/// The current slide index for a carousel of a fixed, non-zero size.
///
/// The index is always within `0..count`. Writes that would leave the range
/// are clamped. A write that does not change the index is a no-op and keeps
/// the previous [`Direction`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlideIndexStore {
    index: usize,
    count: usize,
    direction: Direction,
}

impl SlideIndexStore {
    /// Creates a store at index 0. Returns `None` if `count` is zero.
    #[must_use]
    pub fn new(count: usize) -> Option<Self> {
        (count > 0).then_some(Self {
            index: 0,
            count,
            direction: Direction::None,
        })
    }

    /// Current index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of slides.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Index of the last slide.
    #[must_use]
    pub fn last(&self) -> usize {
        self.count - 1
    }

    /// Direction of the most recent change.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Progress fraction of the current index, `index / (count - 1)`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        slideway_pin::progress_for_index(self.index, self.count)
    }

    /// Clamps `target` into `0..count`.
    #[must_use]
    pub fn clamp(&self, target: usize) -> usize {
        target.min(self.last())
    }

    /// Moves to `target` (clamped).
    ///
    /// Returns the previous index when the index changed, `None` otherwise.
    pub fn set(&mut self, target: usize) -> Option<usize> {
        let target = self.clamp(target);
        if target == self.index {
            return None;
        }
        let from = self.index;
        self.direction = Direction::between(from, target);
        self.index = target;
        Some(from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_slides_has_no_store() {
        assert!(SlideIndexStore::new(0).is_none());
    }

    #[test]
    fn starts_at_zero_without_direction() {
        let store = SlideIndexStore::new(7).unwrap();
        assert_eq!(store.index(), 0);
        assert_eq!(store.count(), 7);
        assert_eq!(store.direction(), Direction::None);
        assert_eq!(store.progress(), 0.0);
    }

    #[test]
    fn set_records_direction() {
        let mut store = SlideIndexStore::new(7).unwrap();
        assert_eq!(store.set(4), Some(0));
        assert_eq!(store.direction(), Direction::Forward);
        assert_eq!(store.set(1), Some(4));
        assert_eq!(store.direction(), Direction::Backward);
    }

    #[test]
    fn set_clamps_and_noops() {
        let mut store = SlideIndexStore::new(7).unwrap();
        assert_eq!(store.set(99), Some(0));
        assert_eq!(store.index(), 6);
        assert_eq!(store.progress(), 1.0);
        // Same index: no change, direction kept.
        assert_eq!(store.set(6), None);
        assert_eq!(store.set(100), None);
        assert_eq!(store.direction(), Direction::Forward);
    }

    #[test]
    fn single_slide_never_moves() {
        let mut store = SlideIndexStore::new(1).unwrap();
        assert_eq!(store.set(3), None);
        assert_eq!(store.index(), 0);
        assert_eq!(store.progress(), 0.0);
    }
}
