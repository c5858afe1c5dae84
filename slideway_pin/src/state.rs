// Copyright 2026 the Slideway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use smallvec::SmallVec;

/// Pinning state of a scroll-driven section.
///
/// States form a strict cycle: `Unpinned → Entering → Pinned → Leaving → Unpinned`.
/// No transition skips a state, whichever direction the page scrolls.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PinState {
    /// The section scrolls with the page.
    #[default]
    Unpinned,
    /// The section has reached the viewport top; becomes `Pinned` in the same update.
    Entering,
    /// The section is held in place and scroll drives the carousel.
    Pinned,
    /// The section has been released and is scrolling out of view.
    Leaving,
}

impl PinState {
    /// The only state this one may transition to.
    #[must_use]
    pub fn successor(self) -> Self {
        match self {
            Self::Unpinned => Self::Entering,
            Self::Entering => Self::Pinned,
            Self::Pinned => Self::Leaving,
            Self::Leaving => Self::Unpinned,
        }
    }
}

/// One step along the pin cycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PinTransition {
    /// State before the step.
    pub from: PinState,
    /// State after the step.
    pub to: PinState,
}

impl PinTransition {
    /// Returns `true` if this step enters [`PinState::Pinned`].
    #[must_use]
    pub fn pins(&self) -> bool {
        self.to == PinState::Pinned
    }

    /// Returns `true` if this step leaves [`PinState::Pinned`].
    #[must_use]
    pub fn unpins(&self) -> bool {
        self.from == PinState::Pinned
    }
}

/// Transitions produced by a single update, in order.
pub type PinTransitions = SmallVec<[PinTransition; 4]>;
