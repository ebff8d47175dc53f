//! Scroll Progress Bar
//!
//! Thin bar along the top edge whose width tracks how far down the page
//! the user has scrolled.

use dioxus::prelude::*;
use portfolio_core::scroll::progress_percent;

use crate::context::use_scroll;

#[component]
pub fn ScrollProgress() -> Element {
    let scroll = use_scroll();

    let snapshot = scroll();
    let percent = progress_percent(snapshot.y, snapshot.scroll_height, snapshot.client_height);

    rsx! {
        div {
            class: "scroll-progress",
            style: "width: {percent:.2}%;",
        }
    }
}
