//! Carousel Controller
//!
//! One instance per project carousel widget. Owns the current slide index,
//! the auto-advance schedule, and the swipe gesture tracker. The Dioxus
//! layer renders `offset_percent()` as a translateX transform and drives
//! the actual 4-second timer; the timer loop holds an [`AutoAdvanceToken`]
//! and only advances while that token is still live, which is what makes
//! "at most one timer per carousel" hold even though start/stop are called
//! from several input paths.

use std::time::Duration;

use crate::error::PortfolioError;

/// Interval between automatic slide advances.
pub const AUTO_ADVANCE_INTERVAL: Duration = Duration::from_millis(4000);

/// Minimum horizontal travel (in CSS pixels) before a gesture counts as a
/// swipe. Travel of exactly this distance is not a swipe.
pub const SWIPE_THRESHOLD: f64 = 50.0;

/// Auto-advance bookkeeping.
///
/// `generation` increments on every stop, invalidating any token handed out
/// before it. A fired timer checks its token against the current generation
/// and exits quietly when stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AutoAdvance {
    active: bool,
    generation: u64,
}

/// Handle held by a spawned auto-advance loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoAdvanceToken(u64);

/// Carousel state for one widget.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    slides: Vec<String>,
    current: usize,
    auto: AutoAdvance,
}

impl Carousel {
    /// Create a carousel over a fixed, non-empty slide list.
    pub fn new(slides: Vec<String>) -> Result<Self, PortfolioError> {
        if slides.is_empty() {
            return Err(PortfolioError::EmptyImageList);
        }
        Ok(Self {
            slides,
            current: 0,
            auto: AutoAdvance {
                active: false,
                generation: 0,
            },
        })
    }

    /// Number of slides. Always at least 1.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Index of the slide currently shown, in `[0, len)`.
    ///
    /// This is the carousel's public contract for the expand affordance:
    /// the lightbox opens on this index rather than re-parsing the rendered
    /// transform.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The full slide source list, in order.
    pub fn slides(&self) -> &[String] {
        &self.slides
    }

    /// Jump to a slide. Any integer is accepted and normalized by
    /// wrap-around, so `go_to(-1)` lands on the last slide and
    /// `go_to(len)` on the first.
    pub fn go_to(&mut self, index: i64) {
        let n = self.slides.len() as i64;
        self.current = index.rem_euclid(n) as usize;
    }

    /// Advance one slide, wrapping to the first after the last.
    pub fn next(&mut self) {
        self.go_to(self.current as i64 + 1);
    }

    /// Step back one slide, wrapping to the last before the first.
    pub fn previous(&mut self) {
        self.go_to(self.current as i64 - 1);
    }

    /// translateX offset (in percent) that renders the current slide.
    pub fn offset_percent(&self) -> f64 {
        -(self.current as f64 * 100.0)
    }

    /// Whether the indicator dot at `index` should be marked active.
    pub fn dot_active(&self, index: usize) -> bool {
        index == self.current
    }

    /// Begin auto-advancing. Returns a token for the timer loop, or `None`
    /// when a loop is already running (the caller must not spawn another).
    pub fn start_auto_advance(&mut self) -> Option<AutoAdvanceToken> {
        if self.auto.active {
            return None;
        }
        self.auto.active = true;
        Some(AutoAdvanceToken(self.auto.generation))
    }

    /// Cancel auto-advancing. Idempotent; any outstanding token goes stale.
    pub fn stop_auto_advance(&mut self) {
        self.auto.active = false;
        self.auto.generation += 1;
    }

    /// Stop and immediately restart the schedule. Every manual navigation
    /// path calls this so the 4-second period restarts from the action.
    pub fn restart_auto_advance(&mut self) -> AutoAdvanceToken {
        self.stop_auto_advance();
        self.auto.active = true;
        AutoAdvanceToken(self.auto.generation)
    }

    /// True while `token` belongs to the currently scheduled loop.
    pub fn token_is_live(&self, token: AutoAdvanceToken) -> bool {
        self.auto.active && token.0 == self.auto.generation
    }

    /// Whether an auto-advance loop is currently scheduled.
    pub fn auto_advance_active(&self) -> bool {
        self.auto.active
    }
}

/// Direction of a completed swipe gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved left (start > end): show the next slide.
    Left,
    /// Finger moved right: show the previous slide.
    Right,
}

/// Tracks one horizontal touch gesture from start to end.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeTracker {
    start_x: Option<f64>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the horizontal position where the gesture started.
    pub fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Record the end position and classify the gesture. Returns `None`
    /// when no gesture was in progress or the travel stayed within
    /// [`SWIPE_THRESHOLD`].
    pub fn end(&mut self, x: f64) -> Option<SwipeDirection> {
        let start = self.start_x.take()?;
        let diff = start - x;
        if diff.abs() <= SWIPE_THRESHOLD {
            return None;
        }
        if diff > 0.0 {
            Some(SwipeDirection::Left)
        } else {
            Some(SwipeDirection::Right)
        }
    }
}
