// Copyright 2026 the Slideway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Which side of a region a scroll position lies on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Above the region (smaller scroll offsets).
    Before,
    /// Below the region (larger scroll offsets).
    After,
}

/// Where a scroll position lies relative to a [`ScrollRegion`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Zone {
    /// Within `start..=end`; the section is pinned to the viewport top.
    Inside,
    /// Outside the region, but the section is still partly on screen.
    Fringe(Side),
    /// Fully past the region on one side.
    Outside(Side),
}

/// The span of document scroll offsets reserved for a pinned section.
///
/// While the document scroll offset is within `start..=end` the section is
/// held in place and the offset encodes carousel progress. `release_margin`
/// is how far past either bound the section remains visible as it scrolls
/// away (typically the viewport height).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollRegion {
    /// Scroll offset at which the section's top reaches the viewport top.
    pub start: f64,
    /// Scroll offset at which pinning ends.
    pub end: f64,
    /// Distance past `start`/`end` over which the section is still visible.
    pub release_margin: f64,
}

impl ScrollRegion {
    /// Creates a region with no release margin.
    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            release_margin: 0.0,
        }
    }

    /// Region for `count` slides of one viewport each, whose section starts at `top`.
    ///
    /// `end - start == count * viewport_height`; the release margin is one viewport.
    #[must_use]
    pub fn for_slides(top: f64, viewport_height: f64, count: usize) -> Self {
        let span = count as f64 * viewport_height;
        Self {
            start: top,
            end: top + span,
            release_margin: viewport_height.max(0.0),
        }
    }

    /// Returns a copy with the given release margin.
    #[must_use]
    pub fn with_release_margin(mut self, margin: f64) -> Self {
        self.release_margin = margin.max(0.0);
        self
    }

    /// Height of the region, `end - start`.
    #[must_use]
    pub fn len(&self) -> f64 {
        self.end - self.start
    }

    /// Returns `true` if the bounds are finite and `end > start`.
    ///
    /// Zero or negative heights show up while layout is still settling; such
    /// a region must not be pinned.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.start.is_finite() && self.end.is_finite() && self.end > self.start
    }

    /// Progress of `offset` through the region, clamped to `[0, 1]`.
    ///
    /// Degenerate regions report `0.0` instead of dividing by zero.
    #[must_use]
    pub fn progress_at(&self, offset: f64) -> f64 {
        if !self.is_valid() || offset.is_nan() {
            return 0.0;
        }
        ((offset - self.start) / self.len()).clamp(0.0, 1.0)
    }

    /// Scroll offset for a progress value; the progress is clamped first.
    #[must_use]
    pub fn offset_at(&self, progress: f64) -> f64 {
        let progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        self.start + progress * self.len().max(0.0)
    }

    /// Scroll offset at which slide `index` of `count` is shown.
    ///
    /// Slide `i` sits at progress `i / (count - 1)`; a single slide sits at `start`.
    #[must_use]
    pub fn offset_for_index(&self, index: usize, count: usize) -> f64 {
        self.offset_at(progress_for_index(index, count))
    }

    /// The slide nearest to `offset`, for a carousel of `count` slides.
    #[must_use]
    pub fn index_at(&self, offset: f64, count: usize) -> usize {
        index_for_progress(self.progress_at(offset), count)
    }

    /// Classifies `offset` relative to this region.
    #[must_use]
    pub fn zone(&self, offset: f64) -> Zone {
        if offset < self.start {
            if self.start - offset < self.release_margin {
                Zone::Fringe(Side::Before)
            } else {
                Zone::Outside(Side::Before)
            }
        } else if offset > self.end {
            if offset - self.end < self.release_margin {
                Zone::Fringe(Side::After)
            } else {
                Zone::Outside(Side::After)
            }
        } else {
            Zone::Inside
        }
    }
}

/// Progress fraction at which slide `index` of `count` is shown.
#[must_use]
pub fn progress_for_index(index: usize, count: usize) -> f64 {
    let Some(last) = count.checked_sub(1) else {
        return 0.0;
    };
    if last == 0 {
        return 0.0;
    }
    index.min(last) as f64 / last as f64
}

/// The slide index nearest to `progress` for a carousel of `count` slides.
///
/// Always within `0..count` (or `0` when `count == 0`).
#[must_use]
pub fn index_for_progress(progress: f64, count: usize) -> usize {
    let Some(last) = count.checked_sub(1) else {
        return 0;
    };
    let progress = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };
    #[expect(
        clippy::cast_possible_truncation,
        reason = "progress is clamped to [0, 1], so the value is within 0..=last"
    )]
    let nearest = (progress * last as f64 + 0.5) as usize;
    nearest.min(last)
}
