//! Skill Tabs
//!
//! Tab strip for the skills section: selecting a tab activates it and its
//! matching panel, deactivating all others.

/// Select-one tab state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabState {
    active: String,
}

impl TabState {
    /// Start with `initial` selected.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            active: initial.into(),
        }
    }

    pub fn select(&mut self, tab: &str) {
        self.active = tab.to_string();
    }

    pub fn is_active(&self, tab: &str) -> bool {
        self.active == tab
    }

    pub fn active(&self) -> &str {
        &self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_moves_between_tabs() {
        let mut tabs = TabState::new("languages");
        assert!(tabs.is_active("languages"));

        tabs.select("tools");
        assert!(tabs.is_active("tools"));
        assert!(!tabs.is_active("languages"));
    }
}
