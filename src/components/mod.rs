//! UI Components for the portfolio page.
//!
//! One component per interactive behavior; each owns its own state and
//! sub-element handles directly.

mod back_to_top;
mod contact_form;
pub mod lightbox;
mod nav_header;
mod particles;
mod preloader;
mod project_carousel;
mod projects;
mod reveal;
mod scroll_progress;
mod skill_tabs;
mod stat_counter;
mod theme_toggle;
mod typed_text;

pub use back_to_top::BackToTop;
pub use contact_form::ContactForm;
pub use lightbox::LightboxOverlay;
pub use nav_header::{scroll_to_section, NavHeader};
pub use particles::ParticleField;
pub use preloader::Preloader;
pub use project_carousel::ProjectCarousel;
pub use projects::{Project, ProjectsSection};
pub use reveal::Reveal;
pub use scroll_progress::ScrollProgress;
pub use skill_tabs::{SkillGroup, SkillTabs};
pub use stat_counter::StatCounter;
pub use theme_toggle::ThemeToggle;
pub use typed_text::TypedText;
