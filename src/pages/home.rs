//! Home page - the whole portfolio.
//!
//! Single scrollable page: hero with the typing headline and particle
//! background, about section with animated stat counters, tabbed skills,
//! filterable project grid with carousels, contact form, footer. The
//! scroll container samples its metrics on every scroll event and feeds
//! the shared snapshot every scroll-driven widget reads from.

use chrono::Datelike;
use dioxus::document;
use dioxus::prelude::*;

use crate::components::{
    BackToTop, ContactForm, LightboxOverlay, NavHeader, ParticleField, Preloader, Project,
    ProjectsSection, Reveal, ScrollProgress, SkillGroup, SkillTabs, StatCounter, TypedText,
};
use crate::context::{use_scroll, use_theme, ScrollSnapshot};

/// Roles cycled by the hero's typing animation.
fn typed_roles() -> Vec<String> {
    vec!["Backend Developer".to_string(), "Rust Enthusiast".to_string()]
}

fn skill_groups() -> Vec<SkillGroup> {
    vec![
        SkillGroup {
            id: "languages".to_string(),
            title: "Languages".to_string(),
            skills: ["Rust", "Python", "SQL", "TypeScript"]
                .map(String::from)
                .to_vec(),
        },
        SkillGroup {
            id: "backend".to_string(),
            title: "Backend".to_string(),
            skills: ["Axum", "Tokio", "PostgreSQL", "Redis", "gRPC"]
                .map(String::from)
                .to_vec(),
        },
        SkillGroup {
            id: "tools".to_string(),
            title: "Tools".to_string(),
            skills: ["Docker", "Kubernetes", "GitHub Actions", "Grafana"]
                .map(String::from)
                .to_vec(),
        },
    ]
}

fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "Flowboard".to_string(),
            description: "Realtime collaborative kanban board with conflict-free offline edits."
                .to_string(),
            categories: "web backend".to_string(),
            images: vec![
                "assets/projects/flowboard-1.webp".to_string(),
                "assets/projects/flowboard-2.webp".to_string(),
                "assets/projects/flowboard-3.webp".to_string(),
                "assets/projects/flowboard-4.webp".to_string(),
            ],
            link: Some("https://github.com/example/flowboard".to_string()),
        },
        Project {
            title: "Queuectl".to_string(),
            description: "CLI for inspecting and replaying dead-lettered jobs across brokers."
                .to_string(),
            categories: "cli backend".to_string(),
            images: vec![
                "assets/projects/queuectl-1.webp".to_string(),
                "assets/projects/queuectl-2.webp".to_string(),
                "assets/projects/queuectl-3.webp".to_string(),
            ],
            link: Some("https://github.com/example/queuectl".to_string()),
        },
        Project {
            title: "Shelfscan".to_string(),
            description: "Mobile-first barcode inventory tracker for small libraries."
                .to_string(),
            categories: "web".to_string(),
            images: vec![
                "assets/projects/shelfscan-1.webp".to_string(),
                "assets/projects/shelfscan-2.webp".to_string(),
                "assets/projects/shelfscan-3.webp".to_string(),
            ],
            link: None,
        },
    ]
}

#[component]
pub fn Home() -> Element {
    let theme = use_theme();
    let mut scroll = use_scroll();

    // Sample the scroll container and the section extents on every scroll
    // event; all threshold logic runs on this snapshot.
    let on_scroll = move |_| {
        spawn(async move {
            let mut eval = document::eval(
                r#"
                const page = document.getElementById("page");
                if (!page) return;
                const sections = Array.from(page.querySelectorAll("section[id]")).map(
                    (s) => [s.id, s.offsetTop, s.offsetHeight]
                );
                dioxus.send({
                    y: page.scrollTop,
                    scroll_height: page.scrollHeight,
                    client_height: page.clientHeight,
                    sections: sections,
                });
                "#,
            );
            match eval.recv::<ScrollSnapshot>().await {
                Ok(snapshot) => scroll.set(snapshot),
                Err(e) => tracing::warn!("scroll sample failed: {:?}", e),
            }
        });
    };

    let year = chrono::Utc::now().year();

    rsx! {
        div {
            class: "portfolio-root",
            "data-theme": theme().as_str(),

            Preloader {}
            ScrollProgress {}
            NavHeader {}

            main {
                id: "page",
                class: "page",
                onscroll: on_scroll,

                section { id: "home", class: "hero",
                    ParticleField {}
                    div { class: "hero-inner",
                        h1 { class: "hero-title", "Hi, I'm Alex Carver" }
                        p { class: "hero-subtitle",
                            "I'm a "
                            TypedText { words: typed_roles() }
                        }
                        div { class: "hero-actions",
                            button {
                                r#type: "button",
                                class: "btn-primary",
                                onclick: move |_| crate::components::scroll_to_section("projects"),
                                "See my work"
                            }
                            button {
                                r#type: "button",
                                class: "btn-secondary",
                                onclick: move |_| crate::components::scroll_to_section("contact"),
                                "Get in touch"
                            }
                        }
                    }
                }

                section { id: "about", class: "about",
                    Reveal {
                        h2 { class: "section-title", "About" }
                        p { class: "about-text",
                            "Backend developer focused on reliable services and honest "
                            "dashboards. I like small binaries, boring deployments, and "
                            "systems that fail loudly instead of quietly."
                        }
                        div { class: "stats-row",
                            StatCounter { target: 6, label: "Years of experience" }
                            StatCounter { target: 24, label: "Projects shipped" }
                            StatCounter { target: 130, label: "Pull requests merged" }
                        }
                    }
                }

                section { id: "skills", class: "skills",
                    Reveal {
                        h2 { class: "section-title", "Skills" }
                        SkillTabs { groups: skill_groups() }
                    }
                }

                section { id: "projects", class: "projects",
                    Reveal {
                        h2 { class: "section-title", "Projects" }
                        ProjectsSection { projects: projects() }
                    }
                }

                section { id: "contact", class: "contact",
                    Reveal {
                        h2 { class: "section-title", "Contact" }
                        p { class: "contact-blurb",
                            "Have a project in mind? Drop me a line."
                        }
                        ContactForm {}
                    }
                }

                footer { class: "footer",
                    p { "© {year} Alex Carver. Built with Rust." }
                }
            }

            BackToTop {}
            LightboxOverlay {}
        }
    }
}
