// Copyright 2026 the Slideway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for `InputArbiter` and `TouchGesture`.

use kurbo::Point;
use proptest::prelude::*;
use slideway_gesture::{Action, InputArbiter, InputEvent, TouchGesture};

proptest! {
    #[test]
    fn spaced_forward_wheel_never_overshoots(
        count in 1_usize..20,
        gaps in prop::collection::vec(701_u64..5_000, 1..40),
    ) {
        let mut arbiter = InputArbiter::default();
        let mut index = 0_usize;
        let mut now = 0_u64;
        for gap in gaps {
            now += gap;
            let before = index;
            let action = arbiter.arbitrate(&InputEvent::wheel(1.0, now), index, count);
            if let Some(next) = action.target(index, count) {
                index = next;
            }
            if before == count - 1 {
                prop_assert_eq!(action, Action::Passthrough);
                prop_assert_eq!(index, before);
            } else {
                prop_assert_eq!(action, Action::Next);
                prop_assert_eq!(index, before + 1);
            }
            prop_assert!(index < count);
        }
    }

    #[test]
    fn locked_always_ignores(
        delta in -500.0_f64..500.0,
        index in 0_usize..10,
        offset in 0_u64..700,
    ) {
        let mut arbiter = InputArbiter::default();
        prop_assert!(arbiter.try_acquire(0, 700));
        let action = arbiter.arbitrate(&InputEvent::wheel(delta, offset), index, 10);
        prop_assert_eq!(action, Action::Ignore);
    }

    #[test]
    fn boundaries_always_pass_through_when_unlocked(
        magnitude in 0.001_f64..1_000.0,
        count in 1_usize..30,
    ) {
        let arbiter = InputArbiter::default();
        let forward = arbiter.classify(&InputEvent::wheel(magnitude, 0), count - 1, count);
        let backward = arbiter.classify(&InputEvent::wheel(-magnitude, 0), 0, count);
        prop_assert_eq!(forward, Action::Passthrough);
        prop_assert_eq!(backward, Action::Passthrough);
    }

    #[test]
    fn one_swipe_yields_at_most_one_step(
        moves in prop::collection::vec(1_u32..15, 1..60),
    ) {
        let mut arbiter = InputArbiter::default();
        let mut touch = TouchGesture::default();
        let mut y = 800.0;
        touch.begin(Point::new(0.0, y));

        let mut steps = 0;
        let mut travelled = 0.0;
        for (i, step) in moves.iter().enumerate() {
            let step = f64::from(*step);
            y -= step;
            travelled += step;
            if let Some(ev) = touch.update(Point::new(0.0, y), i as u64) {
                let action = arbiter.arbitrate(&ev, 2, 7);
                if travelled <= 40.0 {
                    prop_assert_eq!(action, Action::Ignore);
                }
                if action.is_navigation() {
                    steps += 1;
                    touch.consume();
                }
            }
        }
        prop_assert!(steps <= 1);
        prop_assert_eq!(steps == 1, travelled > 40.0);
    }
}
