//! Animated Stat Counters
//!
//! Counts a stat number up from zero to its target over a fixed duration
//! when the element first scrolls into view. The one-shot visibility
//! trigger is an explicit consumed flag so a counter can never re-run.

use std::time::Duration;

/// Total count-up duration.
const COUNT_DURATION: Duration = Duration::from_millis(2000);
/// Frame interval the step size is derived from (~60 fps).
pub const COUNT_FRAME: Duration = Duration::from_millis(16);

/// Count-up animation toward a fixed integer target.
#[derive(Debug, Clone, PartialEq)]
pub struct CountUp {
    target: u64,
    current: f64,
    step: f64,
}

impl CountUp {
    pub fn new(target: u64) -> Self {
        let frames = COUNT_DURATION.as_millis() as f64 / COUNT_FRAME.as_millis() as f64;
        Self {
            target,
            current: 0.0,
            step: target as f64 / frames,
        }
    }

    /// Advance one frame and return the value to display, floored while
    /// counting and exact once the target is reached.
    pub fn tick(&mut self) -> u64 {
        self.current += self.step;
        if self.current >= self.target as f64 {
            self.target
        } else {
            self.current as u64
        }
    }

    pub fn done(&self) -> bool {
        self.current >= self.target as f64
    }

    pub fn target(&self) -> u64 {
        self.target
    }
}

/// One-time trigger for scroll-into-view effects (counters, image
/// fade-ins). The first `trigger` fires; every later one is inert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityGate {
    consumed: bool,
}

impl VisibilityGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true exactly once.
    pub fn trigger(&mut self) -> bool {
        if self.consumed {
            return false;
        }
        self.consumed = true;
        true
    }

    pub fn consumed(&self) -> bool {
        self.consumed
    }
}
