//! Preloader Overlay
//!
//! Full-page spinner shown while the page settles, hidden half a second
//! after mount.

use std::time::Duration;

use dioxus::prelude::*;

/// Delay before the preloader fades out.
const PRELOADER_HOLD: Duration = Duration::from_millis(500);

#[component]
pub fn Preloader() -> Element {
    let mut hidden = use_signal(|| false);

    use_effect(move || {
        spawn(async move {
            tokio::time::sleep(PRELOADER_HOLD).await;
            hidden.set(true);
        });
    });

    rsx! {
        div {
            class: if hidden() { "preloader hidden" } else { "preloader" },
            div { class: "preloader-spinner" }
        }
    }
}
