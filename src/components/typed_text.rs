//! Typed Text
//!
//! Hero headline that types and deletes role names on a loop, driven by
//! the [`TypingAnimation`] state machine and a single spawned task.

use dioxus::prelude::*;
use portfolio_core::TypingAnimation;

#[component]
pub fn TypedText(words: Vec<String>) -> Element {
    let mut text = use_signal(String::new);

    use_effect(move || {
        let words = words.clone();
        spawn(async move {
            let mut animation = TypingAnimation::new(words);
            loop {
                let frame = animation.tick();
                text.set(frame.text);
                tokio::time::sleep(frame.delay).await;
            }
        });
    });

    rsx! {
        span { class: "typed-text",
            "{text}"
            span { class: "typed-cursor", "|" }
        }
    }
}
