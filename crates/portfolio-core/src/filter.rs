//! Project Filter
//!
//! Category filter bar above the project grid. Exactly one filter button
//! is active; cards whose category list matches the active filter stay
//! visible, the rest hide.

/// Filter value matching every card.
pub const FILTER_ALL: &str = "all";

/// Whether a card with the given space-separated `categories` passes the
/// `filter`. `"all"` passes everything.
pub fn filter_matches(filter: &str, categories: &str) -> bool {
    filter == FILTER_ALL || categories.split_whitespace().any(|c| c == filter)
}

/// Active-filter state for the button bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    active: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            active: FILTER_ALL.to_string(),
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `filter` the single active filter.
    pub fn select(&mut self, filter: &str) {
        self.active = filter.to_string();
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn is_active(&self, filter: &str) -> bool {
        self.active == filter
    }

    /// Whether a card with these categories is visible under the current
    /// selection.
    pub fn shows(&self, categories: &str) -> bool {
        filter_matches(&self.active, categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_matches_everything() {
        assert!(filter_matches("all", "web backend"));
        assert!(filter_matches("all", ""));
    }

    #[test]
    fn test_category_must_be_listed() {
        assert!(filter_matches("backend", "web backend"));
        assert!(!filter_matches("mobile", "web backend"));
    }

    #[test]
    fn test_whole_word_match_only() {
        // "web" must not match a card tagged only "webgl".
        assert!(!filter_matches("web", "webgl"));
        assert!(filter_matches("web", "webgl web"));
    }

    #[test]
    fn test_exactly_one_filter_active() {
        let mut state = FilterState::new();
        assert!(state.is_active("all"));

        state.select("backend");
        assert!(state.is_active("backend"));
        assert!(!state.is_active("all"));
        assert!(state.shows("backend cli"));
        assert!(!state.shows("web"));
    }
}
