//! Back To Top Button
//!
//! Appears once the page is scrolled past 500px; clicking smooth-scrolls
//! back to the top.

use dioxus::document;
use dioxus::prelude::*;
use portfolio_core::scroll::back_to_top_visible;

use crate::context::use_scroll;

#[component]
pub fn BackToTop() -> Element {
    let scroll = use_scroll();
    let visible = back_to_top_visible(scroll().y);

    rsx! {
        button {
            r#type: "button",
            class: if visible { "back-to-top visible" } else { "back-to-top" },
            "aria-label": "Back to top",
            onclick: move |_| {
                document::eval(
                    r#"
                    const page = document.getElementById("page");
                    if (page) page.scrollTo({ top: 0, behavior: "smooth" });
                    "#,
                );
            },
            "↑"
        }
    }
}
