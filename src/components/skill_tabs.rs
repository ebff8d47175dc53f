//! Skill Tabs
//!
//! Tab strip for the skills section; one tab and its panel are active at
//! a time.

use dioxus::prelude::*;
use portfolio_core::TabState;

/// One tab with its panel's skill entries.
#[derive(Clone, PartialEq)]
pub struct SkillGroup {
    pub id: String,
    pub title: String,
    pub skills: Vec<String>,
}

#[component]
pub fn SkillTabs(groups: Vec<SkillGroup>) -> Element {
    let initial = groups.first().map(|g| g.id.clone()).unwrap_or_default();
    let mut tabs = use_signal(|| TabState::new(initial));

    rsx! {
        div { class: "skill-tabs",
            div { class: "skill-tab-bar", role: "tablist",
                for group in groups.iter() {
                    {
                        let id = group.id.clone();
                        rsx! {
                            button {
                                key: "{group.id}",
                                r#type: "button",
                                role: "tab",
                                class: if tabs.read().is_active(&group.id) { "skill-tab active" } else { "skill-tab" },
                                onclick: move |_| tabs.write().select(&id),
                                "{group.title}"
                            }
                        }
                    }
                }
            }

            for group in groups.iter() {
                div {
                    key: "{group.id}",
                    role: "tabpanel",
                    class: if tabs.read().is_active(&group.id) { "skill-panel active" } else { "skill-panel" },
                    for skill in group.skills.iter() {
                        span { class: "skill-chip", "{skill}" }
                    }
                }
            }
        }
    }
}
