//! Lightbox Overlay
//!
//! Page-wide enlarged-image overlay. Carousels open it through the shared
//! [`Lightbox`] context; from then on it navigates its own snapshot of the
//! image list. Closes on the close button, a click on the backdrop (but
//! not on the image), or Escape.

use dioxus::document;
use dioxus::prelude::*;

use crate::context::use_lightbox;

/// Freeze or release the page's background scrolling while the overlay is
/// up.
pub fn set_page_scroll_locked(locked: bool) {
    let js = if locked {
        r#"const page = document.getElementById("page"); if (page) page.style.overflowY = "hidden";"#
    } else {
        r#"const page = document.getElementById("page"); if (page) page.style.overflowY = "auto";"#
    };
    document::eval(js);
}

#[component]
pub fn LightboxOverlay() -> Element {
    let mut lightbox = use_lightbox();

    let mut close = move || {
        lightbox.write().close();
        set_page_scroll_locked(false);
    };

    // Arrow keys and Escape are routed here only while the overlay is
    // mounted, so they are inert whenever it is closed.
    let key_nav = move |evt: KeyboardEvent| match evt.key() {
        Key::Escape => close(),
        Key::ArrowLeft => lightbox.write().previous(),
        Key::ArrowRight => lightbox.write().next(),
        _ => {}
    };

    let state = lightbox.read();
    if !state.is_open() {
        return rsx! {};
    }
    let src = state.current_image().unwrap_or_default().to_string();
    let counter = state.counter_text();

    rsx! {
        div {
            class: "lightbox active",
            tabindex: "0",
            autofocus: true,
            onclick: move |_| close(),
            onkeydown: key_nav,

            button {
                r#type: "button",
                class: "lightbox-close",
                "aria-label": "Close",
                onclick: move |e: MouseEvent| {
                    e.stop_propagation();
                    close();
                },
                "✕"
            }

            button {
                r#type: "button",
                class: "lightbox-btn prev",
                "aria-label": "Previous image",
                onclick: move |e: MouseEvent| {
                    e.stop_propagation();
                    lightbox.write().previous();
                },
                "‹"
            }

            // Clicks on the image itself must not dismiss the overlay.
            img {
                class: "lightbox-img",
                src: "{src}",
                alt: "Enlarged project screenshot",
                onclick: move |e: MouseEvent| e.stop_propagation(),
            }

            button {
                r#type: "button",
                class: "lightbox-btn next",
                "aria-label": "Next image",
                onclick: move |e: MouseEvent| {
                    e.stop_propagation();
                    lightbox.write().next();
                },
                "›"
            }

            div { class: "lightbox-counter", "{counter}" }
        }
    }
}
