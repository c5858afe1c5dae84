// Copyright 2026 the Slideway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// The outcome of arbitrating one input event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Advance one slide.
    Next,
    /// Go back one slide.
    Prev,
    /// Decline the event so native scrolling continues past the carousel.
    Passthrough,
    /// Swallow the event without navigating.
    Ignore,
}

impl Action {
    /// Returns `true` if the host should suppress native handling of the event.
    ///
    /// Everything except [`Action::Passthrough`] keeps the page still while the
    /// carousel owns the gesture.
    #[must_use]
    pub fn suppresses_native(self) -> bool {
        !matches!(self, Self::Passthrough)
    }

    /// Returns `true` for [`Action::Next`] and [`Action::Prev`].
    #[must_use]
    pub fn is_navigation(self) -> bool {
        matches!(self, Self::Next | Self::Prev)
    }

    /// Returns the index this action leads to from `index`, if it navigates.
    #[must_use]
    pub fn target(self, index: usize, count: usize) -> Option<usize> {
        let last = count.checked_sub(1)?;
        match self {
            Self::Next => Some((index + 1).min(last)),
            Self::Prev => Some(index.saturating_sub(1).min(last)),
            Self::Passthrough | Self::Ignore => None,
        }
    }
}

/// Decides what a single scroll delta means for a carousel at `index` of `count`.
///
/// Rules, applied in order:
///
/// 1. While `locked`, everything is [`Action::Ignore`].
/// 2. With no slides, everything is [`Action::Passthrough`].
/// 3. Forward motion on the last slide, or backward motion on the first, is
///    [`Action::Passthrough`].
/// 4. Positive deltas are [`Action::Next`], negative deltas [`Action::Prev`].
///
/// A zero (or NaN) delta carries no direction and is ignored.
#[must_use]
pub fn classify(delta: f64, locked: bool, index: usize, count: usize) -> Action {
    if locked {
        return Action::Ignore;
    }
    let Some(last) = count.checked_sub(1) else {
        return Action::Passthrough;
    };
    if delta > 0.0 {
        if index >= last {
            Action::Passthrough
        } else {
            Action::Next
        }
    } else if delta < 0.0 {
        if index == 0 {
            Action::Passthrough
        } else {
            Action::Prev
        }
    } else {
        Action::Ignore
    }
}
