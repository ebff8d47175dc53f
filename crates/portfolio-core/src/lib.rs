//! Portfolio Core Library
//!
//! Interaction state machines for the portfolio page, kept free of any UI
//! framework dependency so every behavior is unit-testable.
//!
//! ## Overview
//!
//! The page is a set of independent, event-driven widgets. Each widget's
//! state lives here as a plain struct with synchronous transitions; the
//! Dioxus layer owns the actual timers and event wiring and calls into
//! these types.
//!
//! The most stateful pair is the carousel and the lightbox overlay:
//!
//! ```
//! use portfolio_core::{Carousel, Lightbox};
//!
//! let mut carousel = Carousel::new(vec![
//!     "shot-1.webp".into(),
//!     "shot-2.webp".into(),
//!     "shot-3.webp".into(),
//! ]).unwrap();
//!
//! carousel.previous();
//! assert_eq!(carousel.current_index(), 2);
//!
//! // Expand: the lightbox snapshots the carousel's images and opens on
//! // the slide the carousel is currently showing.
//! let mut lightbox = Lightbox::new();
//! lightbox.open_with(carousel.slides().to_vec(), carousel.current_index()).unwrap();
//! assert_eq!(lightbox.counter_text(), "3 / 3");
//! ```

pub mod carousel;
pub mod contact;
pub mod counter;
pub mod error;
pub mod filter;
pub mod lightbox;
pub mod particles;
pub mod scroll;
pub mod tabs;
pub mod theme;
pub mod typing;

// Re-exports
pub use carousel::{AutoAdvanceToken, Carousel, SwipeDirection, SwipeTracker};
pub use contact::{ContactMessage, FormStatus, StatusBanner};
pub use counter::{CountUp, VisibilityGate};
pub use error::PortfolioError;
pub use filter::FilterState;
pub use lightbox::Lightbox;
pub use particles::Particle;
pub use tabs::TabState;
pub use theme::{Theme, ThemeStore};
pub use typing::{TypingAnimation, TypingFrame};
