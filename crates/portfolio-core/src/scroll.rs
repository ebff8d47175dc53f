//! Scroll-Derived State
//!
//! Pure threshold and ratio functions over the page's scroll metrics. The
//! component layer samples `window.scrollY` on scroll events and feeds the
//! numbers through these.

/// Scroll depth past which the navbar picks up its "scrolled" styling.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

/// Scroll depth past which the back-to-top button appears.
pub const BACK_TO_TOP_THRESHOLD: f64 = 500.0;

/// Offset subtracted from each section's top for the nav link spy, so a
/// section counts as active slightly before it reaches the viewport top
/// (the fixed header covers that band).
pub const SECTION_SPY_OFFSET: f64 = 100.0;

pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLL_THRESHOLD
}

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD
}

/// Percentage of the scrollable range covered, clamped to `[0, 100]`.
/// A page that does not scroll (content fits the viewport) reports 0.
pub fn progress_percent(scroll_y: f64, scroll_height: f64, client_height: f64) -> f64 {
    let range = scroll_height - client_height;
    if range <= 0.0 {
        return 0.0;
    }
    (scroll_y / range * 100.0).clamp(0.0, 100.0)
}

/// Vertical extent of one page section, for the nav link scroll spy.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// The section the viewport currently sits in, if any. Later sections win
/// when spans overlap, matching top-to-bottom document order.
pub fn active_section(scroll_y: f64, sections: &[SectionSpan]) -> Option<&str> {
    let mut active = None;
    for section in sections {
        let top = section.top - SECTION_SPY_OFFSET;
        if scroll_y > top && scroll_y <= top + section.height {
            active = Some(section.id.as_str());
        }
    }
    active
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navbar_threshold_is_exclusive() {
        assert!(!navbar_scrolled(50.0));
        assert!(navbar_scrolled(50.1));
        assert!(!navbar_scrolled(0.0));
    }

    #[test]
    fn test_back_to_top_threshold() {
        assert!(!back_to_top_visible(500.0));
        assert!(back_to_top_visible(501.0));
    }

    #[test]
    fn test_progress_percent_range() {
        assert_eq!(progress_percent(0.0, 2000.0, 1000.0), 0.0);
        assert_eq!(progress_percent(500.0, 2000.0, 1000.0), 50.0);
        assert_eq!(progress_percent(1000.0, 2000.0, 1000.0), 100.0);
        // Overscroll (rubber-banding) stays clamped.
        assert_eq!(progress_percent(1200.0, 2000.0, 1000.0), 100.0);
    }

    #[test]
    fn test_progress_percent_unscrollable_page() {
        assert_eq!(progress_percent(0.0, 800.0, 800.0), 0.0);
        assert_eq!(progress_percent(10.0, 700.0, 800.0), 0.0);
    }

    fn sections() -> Vec<SectionSpan> {
        vec![
            SectionSpan { id: "home".into(), top: 0.0, height: 600.0 },
            SectionSpan { id: "projects".into(), top: 600.0, height: 800.0 },
            SectionSpan { id: "contact".into(), top: 1400.0, height: 500.0 },
        ]
    }

    #[test]
    fn test_active_section_tracks_scroll() {
        let s = sections();
        assert_eq!(active_section(10.0, &s), Some("home"));
        assert_eq!(active_section(550.0, &s), Some("projects"));
        assert_eq!(active_section(1350.0, &s), Some("contact"));
    }

    #[test]
    fn test_no_active_section_past_the_end() {
        let s = sections();
        assert_eq!(active_section(5000.0, &s), None);
    }
}
