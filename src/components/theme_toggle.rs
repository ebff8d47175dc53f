//! Theme Toggle Button
//!
//! Flips between light and dark, persists the choice, and swaps the
//! sun/moon icon.

use dioxus::prelude::*;
use portfolio_core::ThemeStore;

use crate::context::{get_data_dir, use_theme};

#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_theme();

    let toggle = move |_| {
        let next = theme().toggle();
        theme.set(next);

        let store = ThemeStore::new(&get_data_dir());
        if let Err(e) = store.save(next) {
            tracing::error!("failed to persist theme preference: {}", e);
        }
    };

    rsx! {
        button {
            r#type: "button",
            class: "theme-toggle",
            onclick: toggle,
            "aria-label": "Toggle color theme",

            if theme() == portfolio_core::Theme::Dark {
                // Lucide sun icon
                svg {
                    xmlns: "http://www.w3.org/2000/svg",
                    width: "18",
                    height: "18",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    circle { cx: "12", cy: "12", r: "4" }
                    path { d: "M12 2v2" }
                    path { d: "M12 20v2" }
                    path { d: "m4.93 4.93 1.41 1.41" }
                    path { d: "m17.66 17.66 1.41 1.41" }
                    path { d: "M2 12h2" }
                    path { d: "M20 12h2" }
                    path { d: "m6.34 17.66-1.41 1.41" }
                    path { d: "m19.07 4.93-1.41 1.41" }
                }
            } else {
                // Lucide moon icon
                svg {
                    xmlns: "http://www.w3.org/2000/svg",
                    width: "18",
                    height: "18",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    path { d: "M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" }
                }
            }
        }
    }
}
