// Copyright 2026 the Slideway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::collections::VecDeque;

use kurbo::Point;

/// Measured geometry of the carousel section.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SectionLayout {
    /// Document scroll offset at which the section's top meets the viewport top.
    pub top: f64,
    /// Viewport height; each slide occupies one viewport of scroll.
    pub viewport_height: f64,
}

impl SectionLayout {
    /// Creates a layout.
    #[must_use]
    pub const fn new(top: f64, viewport_height: f64) -> Self {
        Self {
            top,
            viewport_height,
        }
    }
}

/// Payload of a [`HostEvent`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum HostEventKind {
    /// A wheel event; positive `delta_y` scrolls down.
    Wheel {
        /// Vertical wheel delta.
        delta_y: f64,
    },
    /// A touch began at `position`.
    TouchStart {
        /// Touch position in viewport coordinates.
        position: Point,
    },
    /// A touch moved to `position`.
    TouchMove {
        /// Touch position in viewport coordinates.
        position: Point,
    },
    /// The touch was lifted or cancelled.
    TouchEnd,
    /// The document scroll offset changed.
    Scroll {
        /// New document scroll offset.
        offset: f64,
    },
    /// The section was measured, e.g. after a resize.
    Layout {
        /// New section geometry.
        layout: SectionLayout,
        /// Document scroll offset at measurement time.
        offset: f64,
    },
    /// A direct request to show slide `index`.
    Navigate {
        /// Requested slide.
        index: usize,
    },
    /// Time passed; only fires due timers.
    Tick,
}

/// A timestamped input from the host.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HostEvent {
    /// What happened.
    pub kind: HostEventKind,
    /// Milliseconds on the host's monotonic clock.
    pub timestamp: u64,
}

impl HostEvent {
    /// Creates an event.
    #[must_use]
    pub const fn new(kind: HostEventKind, timestamp: u64) -> Self {
        Self { kind, timestamp }
    }

    /// A wheel event.
    #[must_use]
    pub const fn wheel(delta_y: f64, timestamp: u64) -> Self {
        Self::new(HostEventKind::Wheel { delta_y }, timestamp)
    }

    /// A touch start.
    #[must_use]
    pub const fn touch_start(position: Point, timestamp: u64) -> Self {
        Self::new(HostEventKind::TouchStart { position }, timestamp)
    }

    /// A touch move.
    #[must_use]
    pub const fn touch_move(position: Point, timestamp: u64) -> Self {
        Self::new(HostEventKind::TouchMove { position }, timestamp)
    }

    /// A touch end.
    #[must_use]
    pub const fn touch_end(timestamp: u64) -> Self {
        Self::new(HostEventKind::TouchEnd, timestamp)
    }

    /// A scroll offset report.
    #[must_use]
    pub const fn scroll(offset: f64, timestamp: u64) -> Self {
        Self::new(HostEventKind::Scroll { offset }, timestamp)
    }

    /// A layout report.
    #[must_use]
    pub const fn layout(layout: SectionLayout, offset: f64, timestamp: u64) -> Self {
        Self::new(HostEventKind::Layout { layout, offset }, timestamp)
    }

    /// A direct navigation request.
    #[must_use]
    pub const fn navigate(index: usize, timestamp: u64) -> Self {
        Self::new(HostEventKind::Navigate { index }, timestamp)
    }

    /// A clock tick.
    #[must_use]
    pub const fn tick(timestamp: u64) -> Self {
        Self::new(HostEventKind::Tick, timestamp)
    }
}

/// A source of host events, drained by [`Carousel::pump`](crate::Carousel::pump).
pub trait InputSource {
    /// Returns the next pending event, or `None` when drained.
    fn next_event(&mut self) -> Option<HostEvent>;
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn next_event(&mut self) -> Option<HostEvent> {
        (**self).next_event()
    }
}

/// An [`InputSource`] replaying a fixed list of events, for tests and demos.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    events: VecDeque<HostEvent>,
}

impl ScriptedInput {
    /// Creates an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event.
    pub fn push(&mut self, event: HostEvent) -> &mut Self {
        self.events.push_back(event);
        self
    }

    /// Number of events not yet delivered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if every event has been delivered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl FromIterator<HostEvent> for ScriptedInput {
    fn from_iter<I: IntoIterator<Item = HostEvent>>(iter: I) -> Self {
        Self {
            events: iter.into_iter().collect(),
        }
    }
}

impl Extend<HostEvent> for ScriptedInput {
    fn extend<I: IntoIterator<Item = HostEvent>>(&mut self, iter: I) {
        self.events.extend(iter);
    }
}

impl InputSource for ScriptedInput {
    fn next_event(&mut self) -> Option<HostEvent> {
        self.events.pop_front()
    }
}
