// Copyright 2026 the Slideway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// The host's document scroll position, as seen by the carousel.
///
/// The carousel only ever writes to it; current offsets arrive through
/// [`Carousel::handle_scroll`](crate::Carousel::handle_scroll).
pub trait ScrollSurface {
    /// Sets the document scroll offset immediately, without smoothing.
    fn jump_to(&mut self, offset: f64);

    /// Asks the host to measure the section again and report it through
    /// [`Carousel::relayout`](crate::Carousel::relayout).
    fn request_measure(&mut self) {}
}

impl<T: ScrollSurface + ?Sized> ScrollSurface for &mut T {
    fn jump_to(&mut self, offset: f64) {
        (**self).jump_to(offset);
    }

    fn request_measure(&mut self) {
        (**self).request_measure();
    }
}
