//! Particle Field
//!
//! Decorative floating dots behind the hero section, generated once at
//! mount. Movement comes from the `particle-float` keyframes in the
//! global stylesheet.

use dioxus::prelude::*;
use portfolio_core::particles::{Particle, PARTICLE_COUNT};

#[component]
pub fn ParticleField() -> Element {
    let particles =
        use_hook(|| Particle::generate(PARTICLE_COUNT, &mut rand::rng()));

    rsx! {
        div { class: "particles", "aria-hidden": "true",
            for (i, particle) in particles.iter().enumerate() {
                div {
                    key: "{i}",
                    class: "particle",
                    style: "{particle.inline_style()}",
                }
            }
        }
    }
}
