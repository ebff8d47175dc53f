//! Edge-case tests across the interaction state machines
//!
//! The scenario walks from the spec-level behaviors: timer handoff during
//! manual navigation, the carousel-to-lightbox expand handoff, and the
//! one-shot visibility effects.

use portfolio_core::{
    Carousel, CountUp, Lightbox, SwipeDirection, SwipeTracker, TypingAnimation, VisibilityGate,
};

fn shots(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("project/shot-{i}.webp")).collect()
}

#[test]
fn manual_navigation_resets_the_auto_advance_period() {
    let mut carousel = Carousel::new(shots(5)).unwrap();
    let boot_token = carousel.start_auto_advance().unwrap();

    // User clicks "next": the handler advances, then restarts the timer.
    carousel.next();
    let click_token = carousel.restart_auto_advance();

    // The boot loop must see its token die so only the new loop advances.
    assert!(!carousel.token_is_live(boot_token));
    assert!(carousel.token_is_live(click_token));
    assert!(carousel.auto_advance_active());
}

#[test]
fn hover_pauses_and_leave_resumes() {
    let mut carousel = Carousel::new(shots(3)).unwrap();
    let token = carousel.start_auto_advance().unwrap();

    // mouseenter
    carousel.stop_auto_advance();
    assert!(!carousel.auto_advance_active());
    assert!(!carousel.token_is_live(token));

    // mouseleave
    let resumed = carousel.start_auto_advance().unwrap();
    assert!(carousel.token_is_live(resumed));
}

#[test]
fn swipe_drives_the_carousel() {
    let mut carousel = Carousel::new(shots(3)).unwrap();
    let mut swipe = SwipeTracker::new();

    // Leftward drag of 80px: next slide.
    swipe.begin(300.0);
    match swipe.end(220.0) {
        Some(SwipeDirection::Left) => carousel.next(),
        Some(SwipeDirection::Right) => carousel.previous(),
        None => {}
    }
    assert_eq!(carousel.current_index(), 1);

    // A 30px wiggle does nothing.
    swipe.begin(300.0);
    assert_eq!(swipe.end(270.0), None);
    assert_eq!(carousel.current_index(), 1);
}

#[test]
fn expand_hands_the_lightbox_the_rendered_slide() {
    let mut carousel = Carousel::new(shots(4)).unwrap();
    carousel.go_to(2);

    // Expand: snapshot the sources, open on the carousel's public index.
    let mut lightbox = Lightbox::new();
    lightbox
        .open_with(carousel.slides().to_vec(), carousel.current_index())
        .unwrap();
    assert_eq!(lightbox.current_index(), 2);
    assert_eq!(lightbox.counter_text(), "3 / 4");

    // Afterwards the two navigate independently.
    lightbox.next();
    lightbox.next();
    assert_eq!(lightbox.current_index(), 0);
    assert_eq!(carousel.current_index(), 2);
}

#[test]
fn lightbox_keyboard_is_inert_while_closed() {
    // The component layer gates arrow keys on is_open; closing mid-view
    // leaves the state intact but unreachable until the next open.
    let mut lightbox = Lightbox::new();
    lightbox.open_with(shots(4), 1).unwrap();
    lightbox.close();
    assert!(!lightbox.is_open());

    lightbox.open_with(shots(2), 0).unwrap();
    assert_eq!(lightbox.counter_text(), "1 / 2");
}

#[test]
fn three_slide_wrap_scenario() {
    let mut carousel = Carousel::new(shots(3)).unwrap();

    carousel.previous();
    assert_eq!(carousel.current_index(), 2);
    assert_eq!(carousel.offset_percent(), -200.0);

    carousel.next();
    carousel.next();
    assert_eq!(carousel.current_index(), 1);
}

#[test]
fn counter_runs_once_per_page_visit() {
    let mut gate = VisibilityGate::new();
    let mut counter = CountUp::new(25);

    // First time the stats section scrolls into view.
    assert!(gate.trigger());
    let mut last = 0;
    while !counter.done() {
        last = counter.tick();
    }
    assert_eq!(last, 25);

    // Scrolling past again must not restart the animation.
    assert!(!gate.trigger());
}

#[test]
fn typing_animation_full_cycle() {
    let mut typing = TypingAnimation::new(vec!["Backend Developer".to_string()]);
    let mut longest = String::new();

    // Drive two full type/delete cycles; the full phrase must appear and
    // the text must always be a prefix of the word.
    for _ in 0..80 {
        let frame = typing.tick();
        assert!("Backend Developer".starts_with(&frame.text));
        if frame.text.len() > longest.len() {
            longest = frame.text;
        }
    }
    assert_eq!(longest, "Backend Developer");
}
