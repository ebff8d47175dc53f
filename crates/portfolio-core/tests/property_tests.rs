//! Property-based tests for the carousel and lightbox index machines
//!
//! Uses proptest to verify the wrap-around laws over the full integer
//! range and across arbitrary navigation sequences.

use proptest::prelude::*;

use portfolio_core::{Carousel, Lightbox, SwipeDirection, SwipeTracker};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Slide lists of 1 to 12 images.
fn slides_strategy() -> impl Strategy<Value = Vec<String>> {
    (1usize..=12).prop_map(|n| (0..n).map(|i| format!("slide-{i}.webp")).collect())
}

/// Navigation actions a user can take on a carousel.
#[derive(Debug, Clone)]
enum NavOp {
    Next,
    Previous,
    GoTo(i64),
}

fn nav_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<NavOp>> {
    prop::collection::vec(
        prop_oneof![
            2 => Just(NavOp::Next),
            2 => Just(NavOp::Previous),
            1 => any::<i64>().prop_map(NavOp::GoTo),
        ],
        0..max_ops,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// goToSlide(i) always lands on ((i % N) + N) % N, for any i64.
    #[test]
    fn go_to_obeys_euclidean_wrap(slides in slides_strategy(), index in any::<i64>()) {
        let n = slides.len() as i64;
        let mut carousel = Carousel::new(slides).unwrap();
        carousel.go_to(index);
        prop_assert_eq!(carousel.current_index() as i64, ((index % n) + n) % n);
    }

    /// The index invariant 0 <= current < N survives any action sequence.
    #[test]
    fn index_stays_in_bounds(slides in slides_strategy(), ops in nav_ops_strategy(50)) {
        let n = slides.len();
        let mut carousel = Carousel::new(slides).unwrap();
        for op in ops {
            match op {
                NavOp::Next => carousel.next(),
                NavOp::Previous => carousel.previous(),
                NavOp::GoTo(i) => carousel.go_to(i),
            }
            prop_assert!(carousel.current_index() < n);
        }
    }

    /// next then previous is the identity, from any reachable state.
    #[test]
    fn next_previous_round_trip(slides in slides_strategy(), start in any::<i64>()) {
        let mut carousel = Carousel::new(slides).unwrap();
        carousel.go_to(start);
        let before = carousel.current_index();

        carousel.next();
        carousel.previous();
        prop_assert_eq!(carousel.current_index(), before);

        carousel.previous();
        carousel.next();
        prop_assert_eq!(carousel.current_index(), before);
    }

    /// The rendered offset always corresponds to the current index, so the
    /// expand affordance and the transform can never disagree.
    #[test]
    fn offset_tracks_index(slides in slides_strategy(), ops in nav_ops_strategy(30)) {
        let mut carousel = Carousel::new(slides).unwrap();
        for op in ops {
            match op {
                NavOp::Next => carousel.next(),
                NavOp::Previous => carousel.previous(),
                NavOp::GoTo(i) => carousel.go_to(i),
            }
            prop_assert_eq!(
                carousel.offset_percent(),
                -(carousel.current_index() as f64) * 100.0
            );
        }
    }

    /// Exactly one indicator dot is active after any navigation.
    #[test]
    fn one_dot_active(slides in slides_strategy(), index in any::<i64>()) {
        let mut carousel = Carousel::new(slides).unwrap();
        carousel.go_to(index);
        let active = (0..carousel.len()).filter(|&i| carousel.dot_active(i)).count();
        prop_assert_eq!(active, 1);
        prop_assert!(carousel.dot_active(carousel.current_index()));
    }

    /// Swipes strictly beyond the threshold navigate; everything else is
    /// inert, regardless of direction or magnitude.
    #[test]
    fn swipe_classification(start in -2000.0..2000.0f64, end in -2000.0..2000.0f64) {
        let mut swipe = SwipeTracker::new();
        swipe.begin(start);
        let outcome = swipe.end(end);
        let diff = start - end;

        if diff.abs() <= 50.0 {
            prop_assert_eq!(outcome, None);
        } else if diff > 0.0 {
            prop_assert_eq!(outcome, Some(SwipeDirection::Left));
        } else {
            prop_assert_eq!(outcome, Some(SwipeDirection::Right));
        }
    }

    /// Lightbox navigation obeys the same wrap law as the carousel and its
    /// counter always reads "current + 1 / total".
    #[test]
    fn lightbox_wrap_and_counter(slides in slides_strategy(), start in 0usize..12, index in any::<i64>()) {
        let n = slides.len();
        let mut lightbox = Lightbox::new();
        lightbox.open_with(slides, start).unwrap();

        prop_assert!(lightbox.current_index() < n);

        lightbox.show(index);
        let expected = ((index % n as i64) + n as i64) % n as i64;
        prop_assert_eq!(lightbox.current_index() as i64, expected);
        prop_assert_eq!(
            lightbox.counter_text(),
            format!("{} / {}", lightbox.current_index() + 1, n)
        );
    }
}
