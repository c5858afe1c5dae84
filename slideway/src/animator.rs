// Copyright 2026 the Slideway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use slideway_gesture::GestureKind;

use crate::store::Direction;

/// What caused an index change.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TransitionCause {
    /// The initial settle after the slide count is first declared.
    Settle,
    /// A wheel or touch step accepted by the arbiter.
    Gesture(GestureKind),
    /// A direct navigation request, e.g. a dot indicator click.
    Navigation,
    /// The page was scrolled natively while pinned and unlocked.
    Scroll,
}

/// An index change handed to [`TransitionAnimator`]s.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SlideTransition {
    /// Index before the change.
    pub from: usize,
    /// Index after the change.
    pub to: usize,
    /// `Forward`, `Backward`, or `None` for the initial settle.
    pub direction: Direction,
    /// What caused the change.
    pub cause: TransitionCause,
}

/// Plays the visual transition between two slides.
///
/// Called synchronously with each index change. Implementations must not
/// block; if an earlier transition is still running it should be retargeted
/// or cancelled. Closures taking `&SlideTransition` implement this trait.
pub trait TransitionAnimator {
    /// Starts animating `transition`.
    fn animate(&mut self, transition: &SlideTransition);
}

impl<F: FnMut(&SlideTransition)> TransitionAnimator for F {
    fn animate(&mut self, transition: &SlideTransition) {
        self(transition);
    }
}

/// Observer for pin enter/leave, for host side effects such as toggling
/// native overscroll behavior.
pub trait PinHooks {
    /// The section has become pinned.
    fn on_pinned(&mut self) {}
    /// The section is no longer pinned.
    fn on_unpinned(&mut self) {}
}
