// Copyright 2026 the Slideway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Errors returned by [`Carousel`](crate::Carousel) operations that can be refused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CarouselError {
    /// The slide count was already declared with a different value.
    ///
    /// The count is fixed for the lifetime of a session; tear the carousel
    /// down to start a new one.
    SlideCountAlreadySet {
        /// The count in effect.
        current: usize,
        /// The count that was rejected.
        requested: usize,
    },
}

impl fmt::Display for CarouselError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SlideCountAlreadySet { current, requested } => write!(
                f,
                "slide count is already {current}; cannot change it to {requested}"
            ),
        }
    }
}

impl core::error::Error for CarouselError {}
