// Copyright 2026 the Slideway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Point;
use slideway_gesture::{Action, GestureKind, InputArbiter, InputEvent, TouchGesture};
use slideway_pin::{
    AmbientScroll, BindOutcome, PinController, PinDebugInfo, PinState, PinTransitions,
    ScrollRegion,
};
use slideway_timing::TimerQueue;
use tracing::{debug, trace, warn};

use crate::animator::{PinHooks, SlideTransition, TransitionAnimator, TransitionCause};
use crate::config::{CarouselConfig, ConfigError};
use crate::error::CarouselError;
use crate::input::{HostEvent, HostEventKind, InputSource, SectionLayout};
use crate::store::{Direction, SlideIndexStore};
use crate::surface::ScrollSurface;

/// Timers a [`Carousel`] keeps pending.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// The animation lock's cooldown runs out.
    LockExpiry,
    /// Ask the host to measure again after a degenerate layout.
    Remeasure,
}

/// Outcome of [`Carousel::go_to_index`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Navigation {
    /// The index changed; the lock is held for the navigation cooldown.
    Moved(SlideTransition),
    /// The clamped target is the current index. Nothing happened.
    Unchanged,
    /// A transition is in flight. The request was dropped.
    Locked,
    /// No slides are loaded or the section has not been measured yet.
    Unavailable,
}

/// What a dispatched [`HostEvent`] resolved to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Response {
    /// A wheel or touch move was arbitrated.
    Input(Action),
    /// A scroll or layout report left the section in this state.
    Pin(PinState),
    /// A navigation request was handled.
    Navigation(Navigation),
    /// The event was consumed without a result.
    Handled,
}

impl Response {
    /// Returns `true` if the host should suppress native handling of the event.
    #[must_use]
    pub fn suppresses_native(&self) -> bool {
        match self {
            Self::Input(action) => action.suppresses_native(),
            Self::Pin(_) | Self::Navigation(_) | Self::Handled => false,
        }
    }
}

/// A scroll-synchronized slide carousel.
///
/// Keeps three signals consistent: the document scroll offset, the discrete
/// slide index, and wheel/touch gestures. While the section is pinned, each
/// accepted gesture moves exactly one slide and jumps the scroll offset to
/// match; at the first and last slide, input passes through so the page can
/// scroll past the carousel.
///
/// The carousel never reads a clock. Every entry point takes the host's
/// current time in milliseconds and fires any timers due by then before
/// handling its own work.
///
/// Collaborators are injected: the ambient scroll engine `A` (paused while
/// pinned), the scroll surface `S` (receives offset jumps), any number of
/// [`TransitionAnimator`]s and [`PinHooks`].
pub struct Carousel<A: AmbientScroll, S: ScrollSurface> {
    config: CarouselConfig,
    pin: PinController<A>,
    arbiter: InputArbiter,
    touch: TouchGesture,
    timers: TimerQueue<TimerKind>,
    store: Option<SlideIndexStore>,
    layout: Option<SectionLayout>,
    surface: S,
    animators: Vec<Box<dyn TransitionAnimator>>,
    hooks: Vec<Box<dyn PinHooks>>,
}

impl<A: AmbientScroll, S: ScrollSurface> fmt::Debug for Carousel<A, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Carousel")
            .field("config", &self.config)
            .field("pin", &self.pin)
            .field("arbiter", &self.arbiter)
            .field("touch", &self.touch)
            .field("timers", &self.timers)
            .field("store", &self.store)
            .field("layout", &self.layout)
            .field("animators", &self.animators.len())
            .field("hooks", &self.hooks.len())
            .finish_non_exhaustive()
    }
}

impl<A: AmbientScroll, S: ScrollSurface> Carousel<A, S> {
    /// Creates a carousel with the default configuration.
    ///
    /// It stays unpinned until [`Carousel::load_slides`] declares a non-zero
    /// slide count and [`Carousel::relayout`] reports a valid measurement.
    #[must_use]
    pub fn new(ambient: A, surface: S) -> Self {
        Self::build(CarouselConfig::default(), ambient, surface)
    }

    /// Creates a carousel with a validated configuration.
    pub fn with_config(
        config: CarouselConfig,
        ambient: A,
        surface: S,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, ambient, surface))
    }

    fn build(config: CarouselConfig, ambient: A, surface: S) -> Self {
        let mut pin = PinController::new(ambient);
        pin.set_enabled(false);
        Self {
            config,
            pin,
            arbiter: InputArbiter::new(config.arbiter()),
            touch: TouchGesture::default(),
            timers: TimerQueue::new(),
            store: None,
            layout: None,
            surface,
            animators: Vec::new(),
            hooks: Vec::new(),
        }
    }

    /// Registers an animator. Animators are called in registration order.
    pub fn add_animator(&mut self, animator: impl TransitionAnimator + 'static) {
        self.animators.push(Box::new(animator));
    }

    /// Registers pin enter/leave hooks.
    pub fn add_pin_hooks(&mut self, hooks: impl PinHooks + 'static) {
        self.hooks.push(Box::new(hooks));
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Replaces the configuration. A running cooldown keeps its deadline.
    pub fn set_config(&mut self, config: CarouselConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        self.arbiter.set_config(config.arbiter());
        Ok(())
    }

    /// Current slide index, or `None` before slides are loaded.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.store.as_ref().map(SlideIndexStore::index)
    }

    /// Number of slides; zero before slides are loaded.
    #[must_use]
    pub fn count(&self) -> usize {
        self.store.as_ref().map_or(0, SlideIndexStore::count)
    }

    /// Direction of the most recent index change.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.store
            .as_ref()
            .map_or(Direction::None, SlideIndexStore::direction)
    }

    /// The index store, once slides are loaded.
    #[must_use]
    pub fn store(&self) -> Option<&SlideIndexStore> {
        self.store.as_ref()
    }

    /// Current pin state.
    #[must_use]
    pub fn pin_state(&self) -> PinState {
        self.pin.state()
    }

    /// Returns `true` while the section is pinned.
    #[must_use]
    pub fn is_pinned(&self) -> bool {
        self.pin.is_pinned()
    }

    /// Scroll region in effect, if the section has been measured.
    #[must_use]
    pub fn region(&self) -> Option<ScrollRegion> {
        self.pin.region()
    }

    /// Progress of the last reported scroll offset through the region.
    #[must_use]
    pub fn progress(&self) -> Option<f64> {
        self.pin.progress()
    }

    /// Returns `true` while a transition cooldown is running at `now`.
    #[must_use]
    pub fn is_locked(&self, now: u64) -> bool {
        self.arbiter.is_locked(now)
    }

    /// When the current cooldown ends, if one is held.
    #[must_use]
    pub fn lock_expires_at(&self) -> Option<u64> {
        self.arbiter.lock().expires_at()
    }

    /// Earliest pending timer deadline; hosts can arm a single timer for it
    /// and call [`Carousel::tick`].
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    /// Returns `true` if a timer of `kind` is pending.
    #[must_use]
    pub fn is_timer_pending(&self, kind: TimerKind) -> bool {
        self.timers.is_pending(kind)
    }

    /// Shared access to the ambient scroll engine.
    #[must_use]
    pub fn ambient(&self) -> &A {
        self.pin.ambient()
    }

    /// Shared access to the scroll surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Snapshot of the pin controller.
    #[must_use]
    pub fn pin_debug_info(&self) -> PinDebugInfo {
        self.pin.debug_info()
    }

    /// Declares the slide count once slide data resolves.
    ///
    /// The first non-zero count creates the index store at slide 0, plays the
    /// initial settle `(0, 0, None)` and enables pinning. The count cannot
    /// change afterwards; declaring the same count again is a no-op. A count
    /// of zero leaves the carousel unpinned and passes all input through.
    pub fn load_slides(&mut self, count: usize, now: u64) -> Result<(), CarouselError> {
        self.tick(now);
        if let Some(store) = &self.store {
            if store.count() == count {
                return Ok(());
            }
            warn!(
                current = store.count(),
                requested = count,
                "slide count re-declared"
            );
            return Err(CarouselError::SlideCountAlreadySet {
                current: store.count(),
                requested: count,
            });
        }
        let Some(store) = SlideIndexStore::new(count) else {
            debug!("no slides loaded; staying unpinned");
            return Ok(());
        };
        self.store = Some(store);
        debug!(count, "slides loaded");
        self.emit(&SlideTransition {
            from: 0,
            to: 0,
            direction: Direction::None,
            cause: TransitionCause::Settle,
        });

        self.rebind(now);
        let transitions = self.pin.set_enabled(true);
        self.apply_pin_transitions(&transitions);
        if let Some(offset) = self.pin.offset() {
            self.follow_scroll(offset, now);
        }
        Ok(())
    }

    /// Reports a new measurement of the section and the scroll offset at that time.
    ///
    /// The region is rebuilt from the layout. A degenerate layout keeps the
    /// previous region and schedules a re-measure. If the section stays pinned
    /// across the relayout, the scroll offset is moved to the current slide's
    /// new position; the index does not change.
    pub fn relayout(&mut self, layout: SectionLayout, offset: f64, now: u64) -> PinState {
        self.tick(now);
        self.layout = Some(layout);
        let was_pinned = self.pin.is_pinned();
        self.rebind(now);
        let transitions = self.pin.update(offset);
        self.apply_pin_transitions(&transitions);
        if was_pinned {
            self.realign();
        } else {
            self.follow_scroll(offset, now);
        }
        self.pin.state()
    }

    /// Reports the document scroll offset.
    ///
    /// Drives the pin state machine. While pinned and unlocked, a scroll that
    /// lands nearer another slide (scrollbar drag, keyboard) moves the index
    /// there without jumping the scroll.
    pub fn handle_scroll(&mut self, offset: f64, now: u64) -> PinState {
        self.tick(now);
        let transitions = self.pin.update(offset);
        self.apply_pin_transitions(&transitions);
        self.follow_scroll(offset, now);
        self.pin.state()
    }

    /// Arbitrates a wheel event; positive `delta_y` scrolls down.
    pub fn handle_wheel(&mut self, delta_y: f64, now: u64) -> Action {
        self.tick(now);
        self.handle_input(InputEvent::wheel(delta_y, now))
    }

    /// Starts a touch gesture. Gestures only begin while pinned.
    pub fn handle_touch_start(&mut self, position: Point, now: u64) {
        self.tick(now);
        if self.pin.is_pinned() {
            self.touch.begin(position);
        } else {
            self.touch.end();
        }
    }

    /// Arbitrates a touch move.
    ///
    /// Displacement accumulates from the gesture's start; at most one step is
    /// taken per gesture. A gesture that began before the section pinned
    /// starts counting from here.
    pub fn handle_touch_move(&mut self, position: Point, now: u64) -> Action {
        self.tick(now);
        if !self.pin.is_pinned() {
            return Action::Passthrough;
        }
        if !self.touch.is_active() {
            self.touch.begin(position);
        }
        match self.touch.update(position, now) {
            Some(event) => self.handle_input(event),
            None => Action::Ignore,
        }
    }

    /// Ends the current touch gesture.
    pub fn handle_touch_end(&mut self, now: u64) {
        self.tick(now);
        self.touch.end();
    }

    /// Moves directly to slide `target` (clamped), e.g. for a dot indicator.
    ///
    /// Shares the animation lock with gesture input: while a transition is in
    /// flight the request is dropped, not queued. Works whether or not the
    /// section is pinned; the scroll jump brings it into place.
    pub fn go_to_index(&mut self, target: usize, now: u64) -> Navigation {
        self.tick(now);
        let Some(store) = &self.store else {
            return Navigation::Unavailable;
        };
        if self.pin.region().is_none() {
            return Navigation::Unavailable;
        }
        let target = store.clamp(target);
        if target == store.index() {
            return Navigation::Unchanged;
        }
        if !self.arbiter.try_acquire(now, self.config.navigation_cooldown_ms) {
            debug!(target, "navigation dropped: transition in flight");
            return Navigation::Locked;
        }
        self.schedule_lock_expiry();
        self.move_to(target, TransitionCause::Navigation)
            .map_or(Navigation::Unchanged, Navigation::Moved)
    }

    /// Fires every timer due at `now`.
    pub fn tick(&mut self, now: u64) {
        for kind in self.timers.drain_due(now) {
            match kind {
                TimerKind::LockExpiry => {
                    self.arbiter.release_expired(now);
                    if let Some(offset) = self.pin.offset() {
                        self.follow_scroll(offset, now);
                    }
                }
                TimerKind::Remeasure => {
                    debug!(timestamp = now, "requesting section re-measure");
                    self.surface.request_measure();
                }
            }
        }
    }

    /// Routes one host event to its handler.
    pub fn dispatch(&mut self, event: HostEvent) -> Response {
        let now = event.timestamp;
        match event.kind {
            HostEventKind::Wheel { delta_y } => Response::Input(self.handle_wheel(delta_y, now)),
            HostEventKind::TouchStart { position } => {
                self.handle_touch_start(position, now);
                Response::Handled
            }
            HostEventKind::TouchMove { position } => {
                Response::Input(self.handle_touch_move(position, now))
            }
            HostEventKind::TouchEnd => {
                self.handle_touch_end(now);
                Response::Handled
            }
            HostEventKind::Scroll { offset } => Response::Pin(self.handle_scroll(offset, now)),
            HostEventKind::Layout { layout, offset } => {
                Response::Pin(self.relayout(layout, offset, now))
            }
            HostEventKind::Navigate { index } => Response::Navigation(self.go_to_index(index, now)),
            HostEventKind::Tick => {
                self.tick(now);
                Response::Handled
            }
        }
    }

    /// Dispatches every event from `source` in order.
    pub fn pump<I: InputSource + ?Sized>(&mut self, source: &mut I) -> Vec<Response> {
        let mut responses = Vec::new();
        while let Some(event) = source.next_event() {
            responses.push(self.dispatch(event));
        }
        responses
    }

    /// Ends the session.
    ///
    /// Unpins (resuming the ambient engine if paused), releases the lock,
    /// drops pending timers and the touch gesture, and forgets the slide
    /// count. Also runs on drop.
    pub fn teardown(&mut self) {
        let transitions = self.pin.force_unpin();
        self.apply_pin_transitions(&transitions);
        self.pin.set_enabled(false);
        self.arbiter.cancel_lock();
        self.timers.clear();
        self.touch.end();
        if self.store.take().is_some() {
            debug!("carousel torn down");
        }
    }

    fn handle_input(&mut self, event: InputEvent) -> Action {
        if !self.pin.is_pinned() {
            return Action::Passthrough;
        }
        let Some(store) = &self.store else {
            return Action::Passthrough;
        };
        let (index, count) = (store.index(), store.count());
        let action = self.arbiter.arbitrate(&event, index, count);
        if let Some(target) = action.target(index, count) {
            self.schedule_lock_expiry();
            if event.source == GestureKind::Touch {
                self.touch.consume();
            }
            self.move_to(target, TransitionCause::Gesture(event.source));
        }
        action
    }

    fn move_to(&mut self, target: usize, cause: TransitionCause) -> Option<SlideTransition> {
        let store = self.store.as_mut()?;
        let from = store.set(target)?;
        let transition = SlideTransition {
            from,
            to: store.index(),
            direction: store.direction(),
            cause,
        };
        let count = store.count();
        debug!(
            from,
            to = transition.to,
            direction = ?transition.direction,
            ?cause,
            "slide transition"
        );
        if let Some(region) = self.pin.region() {
            let offset = region.offset_for_index(transition.to, count);
            self.surface.jump_to(offset);
            let transitions = self.pin.update(offset);
            self.apply_pin_transitions(&transitions);
        }
        self.emit(&transition);
        Some(transition)
    }

    fn follow_scroll(&mut self, offset: f64, now: u64) {
        if offset.is_nan() || !self.pin.is_pinned() || self.arbiter.is_locked(now) {
            return;
        }
        let Some(region) = self.pin.region() else {
            return;
        };
        let Some(store) = self.store.as_mut() else {
            return;
        };
        let target = region.index_at(offset, store.count());
        let Some(from) = store.set(target) else {
            return;
        };
        let transition = SlideTransition {
            from,
            to: target,
            direction: store.direction(),
            cause: TransitionCause::Scroll,
        };
        trace!(from, to = target, offset, "index follows scroll");
        self.emit(&transition);
    }

    fn realign(&mut self) {
        if !self.pin.is_pinned() {
            return;
        }
        let (Some(region), Some(store), Some(current)) =
            (self.pin.region(), &self.store, self.pin.offset())
        else {
            return;
        };
        let target = region.offset_for_index(store.index(), store.count());
        if (current - target).abs() <= self.config.scroll_epsilon_px {
            return;
        }
        debug!(from = current, to = target, "realigning scroll after relayout");
        self.surface.jump_to(target);
        let transitions = self.pin.update(target);
        self.apply_pin_transitions(&transitions);
    }

    fn rebind(&mut self, now: u64) {
        let (Some(layout), Some(store)) = (self.layout, &self.store) else {
            return;
        };
        let region = ScrollRegion::for_slides(layout.top, layout.viewport_height, store.count());
        match self.pin.bind(region) {
            BindOutcome::Deferred => {
                let deadline = now.saturating_add(self.config.remeasure_delay_ms);
                self.timers.schedule(TimerKind::Remeasure, deadline);
            }
            BindOutcome::Bound | BindOutcome::Unchanged => {
                self.timers.cancel(TimerKind::Remeasure);
            }
        }
    }

    fn schedule_lock_expiry(&mut self) {
        if let Some(deadline) = self.arbiter.lock().expires_at() {
            self.timers.schedule(TimerKind::LockExpiry, deadline);
        }
    }

    fn apply_pin_transitions(&mut self, transitions: &PinTransitions) {
        for transition in transitions {
            if transition.pins() {
                for hooks in &mut self.hooks {
                    hooks.on_pinned();
                }
            } else if transition.unpins() {
                self.arbiter.cancel_lock();
                self.timers.cancel(TimerKind::LockExpiry);
                self.touch.end();
                for hooks in &mut self.hooks {
                    hooks.on_unpinned();
                }
            }
        }
    }

    fn emit(&mut self, transition: &SlideTransition) {
        for animator in &mut self.animators {
            animator.animate(transition);
        }
    }
}

impl<A: AmbientScroll, S: ScrollSurface> Drop for Carousel<A, S> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slideway_pin::NoAmbientScroll;

    #[derive(Debug, Default)]
    struct Page {
        jumps: Vec<f64>,
        measures: u32,
    }

    impl ScrollSurface for Page {
        fn jump_to(&mut self, offset: f64) {
            self.jumps.push(offset);
        }

        fn request_measure(&mut self) {
            self.measures += 1;
        }
    }

    fn pinned(page: &mut Page) -> Carousel<NoAmbientScroll, &mut Page> {
        let mut carousel = Carousel::new(NoAmbientScroll, page);
        carousel.load_slides(7, 0).unwrap();
        carousel.relayout(SectionLayout::new(1_000.0, 800.0), 1_000.0, 0);
        assert!(carousel.is_pinned());
        carousel
    }

    #[test]
    fn lock_expiry_timer_follows_the_lock() {
        let mut page = Page::default();
        let mut carousel = pinned(&mut page);
        assert_eq!(carousel.handle_wheel(1.0, 100), Action::Next);
        assert_eq!(carousel.next_deadline(), Some(800));
        assert!(carousel.is_timer_pending(TimerKind::LockExpiry));
        carousel.tick(800);
        assert!(!carousel.is_timer_pending(TimerKind::LockExpiry));
        assert_eq!(carousel.lock_expires_at(), None);
    }

    #[test]
    fn degenerate_layout_schedules_one_remeasure() {
        let mut page = Page::default();
        {
            let mut carousel = Carousel::new(NoAmbientScroll, &mut page);
            carousel.load_slides(3, 0).unwrap();
            carousel.relayout(SectionLayout::new(0.0, 0.0), 0.0, 0);
            carousel.relayout(SectionLayout::new(0.0, 0.0), 0.0, 50);
            // Coalesced: the second report pushes the deadline out.
            assert_eq!(carousel.next_deadline(), Some(150));
            carousel.tick(149);
            carousel.tick(150);
            assert_eq!(carousel.pin_state(), PinState::Unpinned);
        }
        assert_eq!(page.measures, 1);
    }

    #[test]
    fn valid_layout_cancels_remeasure() {
        let mut page = Page::default();
        {
            let mut carousel = Carousel::new(NoAmbientScroll, &mut page);
            carousel.load_slides(3, 0).unwrap();
            carousel.relayout(SectionLayout::new(0.0, 0.0), 0.0, 0);
            carousel.relayout(SectionLayout::new(0.0, 800.0), 0.0, 10);
            assert_eq!(carousel.next_deadline(), None);
            carousel.tick(1_000);
        }
        assert_eq!(page.measures, 0);
    }

    #[test]
    fn input_before_slides_passes_through() {
        let mut page = Page::default();
        let mut carousel = Carousel::new(NoAmbientScroll, &mut page);
        carousel.relayout(SectionLayout::new(0.0, 800.0), 0.0, 0);
        assert_eq!(carousel.handle_wheel(1.0, 0), Action::Passthrough);
        assert_eq!(carousel.go_to_index(2, 0), Navigation::Unavailable);
        assert_eq!(carousel.index(), None);
        assert_eq!(carousel.count(), 0);
    }

    #[test]
    fn zero_slides_never_pin() {
        let mut page = Page::default();
        let mut carousel = Carousel::new(NoAmbientScroll, &mut page);
        carousel.load_slides(0, 0).unwrap();
        carousel.relayout(SectionLayout::new(0.0, 800.0), 0.0, 0);
        assert_eq!(carousel.handle_scroll(10.0, 1), PinState::Unpinned);
        assert_eq!(carousel.handle_wheel(1.0, 2), Action::Passthrough);
    }

    #[test]
    fn response_disposition() {
        assert!(Response::Input(Action::Ignore).suppresses_native());
        assert!(Response::Input(Action::Next).suppresses_native());
        assert!(!Response::Input(Action::Passthrough).suppresses_native());
        assert!(!Response::Handled.suppresses_native());
        assert!(!Response::Pin(PinState::Pinned).suppresses_native());
    }
}
