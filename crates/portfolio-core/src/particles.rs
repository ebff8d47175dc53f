//! Particle Background
//!
//! Decorative floating dots behind the hero section. Particles are
//! generated once at startup with randomized size, position, and animation
//! timing; the CSS keyframe animation does the actual movement.

use rand::Rng;

/// How many particles the hero background renders.
pub const PARTICLE_COUNT: usize = 20;

/// One decorative particle, all units ready for inline CSS.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Diameter in pixels, 2..6.
    pub size: f64,
    /// Horizontal position in percent, 0..100.
    pub x: f64,
    /// Vertical position in percent, 0..100.
    pub y: f64,
    /// Animation delay in seconds, 0..5.
    pub delay: f64,
    /// Animation duration in seconds, 15..30.
    pub duration: f64,
    /// Opacity, 0.1..0.4.
    pub opacity: f64,
}

impl Particle {
    /// Generate a batch of randomized particles.
    pub fn generate<R: Rng>(count: usize, rng: &mut R) -> Vec<Particle> {
        (0..count)
            .map(|_| Particle {
                size: rng.random::<f64>() * 4.0 + 2.0,
                x: rng.random::<f64>() * 100.0,
                y: rng.random::<f64>() * 100.0,
                delay: rng.random::<f64>() * 5.0,
                duration: rng.random::<f64>() * 15.0 + 15.0,
                opacity: rng.random::<f64>() * 0.3 + 0.1,
            })
            .collect()
    }

    /// Inline style string positioning and animating this particle.
    pub fn inline_style(&self) -> String {
        format!(
            "position: absolute; width: {size:.1}px; height: {size:.1}px; \
             background: var(--primary); border-radius: 50%; \
             left: {x:.1}%; top: {y:.1}%; opacity: {opacity:.2}; \
             animation: particle-float {duration:.1}s ease-in-out {delay:.1}s infinite; \
             will-change: transform;",
            size = self.size,
            x = self.x,
            y = self.y,
            opacity = self.opacity,
            duration = self.duration,
            delay = self.delay,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generated_values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for p in Particle::generate(200, &mut rng) {
            assert!((2.0..6.0).contains(&p.size));
            assert!((0.0..100.0).contains(&p.x));
            assert!((0.0..100.0).contains(&p.y));
            assert!((0.0..5.0).contains(&p.delay));
            assert!((15.0..30.0).contains(&p.duration));
            assert!((0.1..0.4).contains(&p.opacity));
        }
    }

    #[test]
    fn test_generate_respects_count() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(Particle::generate(PARTICLE_COUNT, &mut rng).len(), 20);
        assert!(Particle::generate(0, &mut rng).is_empty());
    }

    #[test]
    fn test_inline_style_mentions_every_knob() {
        let p = Particle {
            size: 3.0,
            x: 40.0,
            y: 60.0,
            delay: 1.5,
            duration: 20.0,
            opacity: 0.2,
        };
        let style = p.inline_style();
        assert!(style.contains("width: 3.0px"));
        assert!(style.contains("left: 40.0%"));
        assert!(style.contains("top: 60.0%"));
        assert!(style.contains("particle-float 20.0s"));
        assert!(style.contains("opacity: 0.20"));
    }
}
