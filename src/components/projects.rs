//! Projects Section
//!
//! Category filter bar plus the project card grid. Filtered-out cards are
//! hidden rather than unmounted so each carousel keeps its slide position
//! across filter changes.

use dioxus::prelude::*;
use portfolio_core::filter::FILTER_ALL;
use portfolio_core::FilterState;

use crate::components::ProjectCarousel;

/// One portfolio project.
#[derive(Clone, PartialEq)]
pub struct Project {
    pub title: String,
    pub description: String,
    /// Space-separated category tags, e.g. `"web backend"`.
    pub categories: String,
    /// Screenshot paths, in carousel order.
    pub images: Vec<String>,
    pub link: Option<String>,
}

/// Distinct filter values: "all" first, then every tag in first-seen
/// order.
fn filter_values(projects: &[Project]) -> Vec<String> {
    let mut values = vec![FILTER_ALL.to_string()];
    for project in projects {
        for tag in project.categories.split_whitespace() {
            if !values.iter().any(|v| v == tag) {
                values.push(tag.to_string());
            }
        }
    }
    values
}

#[component]
pub fn ProjectsSection(projects: Vec<Project>) -> Element {
    let mut filter = use_signal(FilterState::new);
    let values = filter_values(&projects);

    rsx! {
        div { class: "filter-bar",
            for value in values {
                {
                    let select_value = value.clone();
                    rsx! {
                        button {
                            key: "{value}",
                            r#type: "button",
                            class: if filter.read().is_active(&value) { "filter-btn active" } else { "filter-btn" },
                            onclick: move |_| filter.write().select(&select_value),
                            "{value}"
                        }
                    }
                }
            }
        }

        div { class: "project-grid",
            for project in projects.iter() {
                div {
                    key: "{project.title}",
                    class: if filter.read().shows(&project.categories) { "project-card" } else { "project-card hidden" },

                    ProjectCarousel {
                        title: project.title.clone(),
                        slides: project.images.clone(),
                    }

                    div { class: "project-body",
                        h3 { class: "project-title", "{project.title}" }
                        p { class: "project-description", "{project.description}" }

                        div { class: "project-tags",
                            for tag in project.categories.split_whitespace() {
                                span { key: "{tag}", class: "project-tag", "{tag}" }
                            }
                        }

                        if let Some(link) = &project.link {
                            a {
                                class: "project-link",
                                href: "{link}",
                                target: "_blank",
                                "View project →"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(title: &str, categories: &str) -> Project {
        Project {
            title: title.to_string(),
            description: String::new(),
            categories: categories.to_string(),
            images: vec!["a.webp".to_string()],
            link: None,
        }
    }

    #[test]
    fn test_filter_values_are_deduplicated() {
        let projects = vec![
            project("One", "web backend"),
            project("Two", "backend cli"),
        ];
        assert_eq!(filter_values(&projects), vec!["all", "web", "backend", "cli"]);
    }

    #[test]
    fn test_filter_values_with_no_projects() {
        assert_eq!(filter_values(&[]), vec!["all"]);
    }
}
