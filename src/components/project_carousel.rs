//! Project Carousel
//!
//! One image carousel per project card: previous/next buttons, indicator
//! dots, hover pause, swipe, arrow keys while focused, a 4-second auto
//! advance, and the expand button that hands the current slide off to the
//! page lightbox.
//!
//! The auto-advance loop is a spawned task holding an [`AutoAdvanceToken`];
//! the state machine invalidates stale tokens on every stop, so spawning a
//! fresh loop per restart can never double the advance rate.

use dioxus::prelude::*;
use portfolio_core::carousel::AUTO_ADVANCE_INTERVAL;
use portfolio_core::{AutoAdvanceToken, Carousel, SwipeDirection, SwipeTracker};

use crate::components::lightbox::set_page_scroll_locked;
use crate::context::use_lightbox;

/// Run the auto-advance schedule until its token goes stale.
fn spawn_auto_advance(mut carousel: Signal<Option<Carousel>>, token: AutoAdvanceToken) {
    spawn(async move {
        loop {
            tokio::time::sleep(AUTO_ADVANCE_INTERVAL).await;
            let mut guard = carousel.write();
            let Some(state) = guard.as_mut() else { break };
            if !state.token_is_live(token) {
                break;
            }
            state.next();
        }
    });
}

#[component]
pub fn ProjectCarousel(title: String, slides: Vec<String>) -> Element {
    let mut lightbox = use_lightbox();
    let mut carousel: Signal<Option<Carousel>> =
        use_signal(|| Carousel::new(slides.clone()).ok());
    let mut swipe = use_signal(SwipeTracker::new);

    // Kick off the auto advance once on mount
    use_effect(move || {
        let token = carousel.write().as_mut().and_then(Carousel::start_auto_advance);
        if let Some(token) = token {
            spawn_auto_advance(carousel, token);
        }
    });

    // Manual navigation: every path resets the 4-second period.
    let mut jump = move |index: i64| {
        let token = {
            let mut guard = carousel.write();
            let Some(state) = guard.as_mut() else { return };
            state.go_to(index);
            state.restart_auto_advance()
        };
        spawn_auto_advance(carousel, token);
    };
    let mut step = move |delta: i64| {
        let current = carousel.read().as_ref().map(|s| s.current_index() as i64);
        if let Some(current) = current {
            jump(current + delta);
        }
    };

    let pause = move |_| {
        if let Some(state) = carousel.write().as_mut() {
            state.stop_auto_advance();
        }
    };
    let resume = move |_| {
        let token = carousel.write().as_mut().and_then(Carousel::start_auto_advance);
        if let Some(token) = token {
            spawn_auto_advance(carousel, token);
        }
    };

    let touch_start = move |evt: TouchEvent| {
        if let Some(touch) = evt.data().touches_changed().first() {
            swipe.write().begin(touch.screen_coordinates().x);
        }
        if let Some(state) = carousel.write().as_mut() {
            state.stop_auto_advance();
        }
    };
    let touch_end = move |evt: TouchEvent| {
        let direction = evt
            .data()
            .touches_changed()
            .first()
            .and_then(|touch| swipe.write().end(touch.screen_coordinates().x));
        let token = {
            let mut guard = carousel.write();
            let Some(state) = guard.as_mut() else { return };
            match direction {
                Some(SwipeDirection::Left) => state.next(),
                Some(SwipeDirection::Right) => state.previous(),
                None => {}
            }
            state.restart_auto_advance()
        };
        spawn_auto_advance(carousel, token);
    };

    let key_nav = move |evt: KeyboardEvent| match evt.key() {
        Key::ArrowLeft => step(-1),
        Key::ArrowRight => step(1),
        _ => {}
    };

    let expand = move |evt: MouseEvent| {
        evt.stop_propagation();
        let (images, index) = {
            let guard = carousel.read();
            let Some(state) = guard.as_ref() else { return };
            (state.slides().to_vec(), state.current_index())
        };
        match lightbox.write().open_with(images, index) {
            Ok(()) => set_page_scroll_locked(true),
            Err(e) => tracing::warn!("expand ignored: {}", e),
        }
    };

    let guard = carousel.read();
    let Some(state) = guard.as_ref() else {
        // A project with no screenshots gets no carousel widget at all.
        return rsx! {};
    };

    rsx! {
        div {
            class: "project-carousel",
            tabindex: "0",
            onmouseenter: pause,
            onmouseleave: resume,
            onkeydown: key_nav,

            div { class: "carousel-container",
                div {
                    class: "carousel-slides",
                    style: "transform: translateX({state.offset_percent()}%);",
                    ontouchstart: touch_start,
                    ontouchend: touch_end,

                    for (i, src) in state.slides().iter().enumerate() {
                        img {
                            key: "{src}",
                            src: "{src}",
                            alt: "{title} screenshot {i + 1}",
                            loading: "lazy",
                            draggable: "false",
                        }
                    }
                }

                button {
                    r#type: "button",
                    class: "carousel-btn prev",
                    "aria-label": "Previous slide",
                    onclick: move |e: MouseEvent| {
                        e.stop_propagation();
                        step(-1);
                    },
                    "‹"
                }
                button {
                    r#type: "button",
                    class: "carousel-btn next",
                    "aria-label": "Next slide",
                    onclick: move |e: MouseEvent| {
                        e.stop_propagation();
                        step(1);
                    },
                    "›"
                }

                button {
                    r#type: "button",
                    class: "expand-btn",
                    "aria-label": "View full size",
                    onclick: expand,
                    "⤢"
                }
            }

            div { class: "carousel-dots",
                for i in 0..state.len() {
                    button {
                        key: "{i}",
                        r#type: "button",
                        class: if state.dot_active(i) { "carousel-dot active" } else { "carousel-dot" },
                        "aria-label": "Go to slide {i + 1}",
                        onclick: move |e: MouseEvent| {
                            e.stop_propagation();
                            jump(i as i64);
                        },
                    }
                }
            }
        }
    }
}
