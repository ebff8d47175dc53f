//! Scroll Reveal
//!
//! Fades a block in the first time it scrolls into view. Same one-shot
//! gate as the stat counters, so re-entering the viewport never replays
//! the animation.

use dioxus::prelude::*;
use portfolio_core::VisibilityGate;

/// Wrapper class before and after the reveal fires.
fn reveal_class(shown: bool) -> &'static str {
    if shown {
        "reveal revealed"
    } else {
        "reveal"
    }
}

#[component]
pub fn Reveal(children: Element) -> Element {
    let mut gate = use_signal(VisibilityGate::new);
    let mut shown = use_signal(|| false);

    let on_visible = move |evt: Event<VisibleData>| {
        let intersecting = evt.data().is_intersecting().unwrap_or(false);
        if intersecting && gate.write().trigger() {
            shown.set(true);
        }
    };

    rsx! {
        div { class: reveal_class(shown()), onvisible: on_visible, {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_class_flips_once_shown() {
        assert_eq!(reveal_class(false), "reveal");
        assert_eq!(reveal_class(true), "reveal revealed");
    }
}
