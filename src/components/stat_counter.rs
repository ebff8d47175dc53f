//! Stat Counter
//!
//! About-section stat that counts up from zero the first time it scrolls
//! into view. The [`VisibilityGate`] guarantees the animation runs once
//! per page visit no matter how often the section re-enters the viewport.

use dioxus::prelude::*;
use portfolio_core::counter::{CountUp, COUNT_FRAME};
use portfolio_core::VisibilityGate;

#[component]
pub fn StatCounter(target: u64, label: String) -> Element {
    let mut gate = use_signal(VisibilityGate::new);
    let mut shown = use_signal(|| 0u64);

    let on_visible = move |evt: Event<VisibleData>| {
        let intersecting = evt.data().is_intersecting().unwrap_or(false);
        if !intersecting || !gate.write().trigger() {
            return;
        }
        spawn(async move {
            let mut counter = CountUp::new(target);
            while !counter.done() {
                shown.set(counter.tick());
                tokio::time::sleep(COUNT_FRAME).await;
            }
        });
    };

    rsx! {
        div { class: "stat", onvisible: on_visible,
            span { class: "stat-number", "{shown}" }
            span { class: "stat-label", "{label}" }
        }
    }
}
