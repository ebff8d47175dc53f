//! Shared page context for the portfolio app.
//!
//! Provides the theme preference, the single lightbox overlay, and the
//! latest scroll snapshot to all components via use_context. Each widget
//! holds direct handles to its own state; only these three pieces are
//! genuinely page-wide.
//!
//! ## Usage
//!
//! ```ignore
//! // In a child component
//! let theme = use_theme();
//! let lightbox = use_lightbox();
//! let scroll = use_scroll();
//! ```

use std::path::PathBuf;

use dioxus::prelude::*;
use portfolio_core::{Lightbox, Theme};
use serde::Deserialize;

/// Get the data directory for the application.
/// Uses the global data dir set from command line args.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

/// Hook to access the current theme from context.
///
/// Writing to the signal re-renders everything that styles itself off the
/// page's `data-theme` attribute; persisting the flag is the toggle
/// button's job.
pub fn use_theme() -> Signal<Theme> {
    use_context::<Signal<Theme>>()
}

/// Hook to access the page-wide lightbox overlay from context.
///
/// There is exactly one overlay; every carousel's expand button writes
/// into it.
pub fn use_lightbox() -> Signal<Lightbox> {
    use_context::<Signal<Lightbox>>()
}

/// Scroll metrics sampled from the page's scroll container on every
/// scroll event, plus the measured section extents for the nav spy.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ScrollSnapshot {
    /// Scroll offset from the top.
    pub y: f64,
    /// Total scrollable content height.
    pub scroll_height: f64,
    /// Visible viewport height.
    pub client_height: f64,
    /// `(id, offset_top, offset_height)` per `section[id]`, in document
    /// order.
    pub sections: Vec<(String, f64, f64)>,
}

impl ScrollSnapshot {
    /// Section spans in the form the core scroll spy expects.
    pub fn section_spans(&self) -> Vec<portfolio_core::scroll::SectionSpan> {
        self.sections
            .iter()
            .map(|(id, top, height)| portfolio_core::scroll::SectionSpan {
                id: id.clone(),
                top: *top,
                height: *height,
            })
            .collect()
    }
}

/// Hook to access the latest scroll snapshot from context.
pub fn use_scroll() -> Signal<ScrollSnapshot> {
    use_context::<Signal<ScrollSnapshot>>()
}
