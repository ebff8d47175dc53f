//! Navigation Bar
//!
//! Fixed top bar: brand, section links with a scroll spy, the theme
//! toggle, and a hamburger menu on narrow windows. Picks up a "scrolled"
//! style once the page moves past the top.

use dioxus::document;
use dioxus::prelude::*;
use portfolio_core::scroll::{active_section, navbar_scrolled};

use crate::components::ThemeToggle;
use crate::context::use_scroll;

/// `(section id, link label)` pairs, in page order.
const NAV_SECTIONS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

/// Height of the fixed bar, subtracted when smooth-scrolling to a section.
const HEADER_OFFSET: f64 = 80.0;

/// Smooth-scroll the page container to a section, stopping short of the
/// fixed header.
pub fn scroll_to_section(id: &str) {
    let js = format!(
        r#"
        const target = document.getElementById("{id}");
        const page = document.getElementById("page");
        if (target && page) {{
            page.scrollTo({{ top: target.offsetTop - {HEADER_OFFSET}, behavior: "smooth" }});
        }}
        "#
    );
    document::eval(&js);
}

#[component]
pub fn NavHeader() -> Element {
    let scroll = use_scroll();
    let mut menu_open = use_signal(|| false);

    let snapshot = scroll();
    let scrolled = navbar_scrolled(snapshot.y);
    let spans = snapshot.section_spans();
    let active = active_section(snapshot.y, &spans).unwrap_or("home").to_string();

    rsx! {
        header {
            class: if scrolled { "navbar scrolled" } else { "navbar" },

            div { class: "navbar-inner",
                a {
                    class: "nav-brand",
                    href: "#",
                    onclick: move |e: MouseEvent| {
                        e.prevent_default();
                        scroll_to_section("home");
                    },
                    "Portfolio"
                }

                nav {
                    class: if menu_open() { "nav-menu active" } else { "nav-menu" },
                    for (id, label) in NAV_SECTIONS {
                        a {
                            class: if active == id { "nav-link active" } else { "nav-link" },
                            href: "#{id}",
                            onclick: move |e: MouseEvent| {
                                e.prevent_default();
                                scroll_to_section(id);
                                menu_open.set(false);
                            },
                            "{label}"
                        }
                    }
                }

                div { class: "nav-actions",
                    ThemeToggle {}

                    button {
                        r#type: "button",
                        class: if menu_open() { "nav-toggle active" } else { "nav-toggle" },
                        onclick: move |_| menu_open.set(!menu_open()),
                        "aria-label": "Toggle navigation menu",
                        "aria-expanded": "{menu_open()}",
                        span { class: "nav-toggle-bar" }
                        span { class: "nav-toggle-bar" }
                        span { class: "nav-toggle-bar" }
                    }
                }
            }
        }
    }
}
