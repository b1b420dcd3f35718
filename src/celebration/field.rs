// celebration/field.rs - Live confetti and its animation clock
//
// The field is the visual-effects collaborator. A burst is dropped in,
// the app ticks the field while anything is alive, and the canvas layer
// draws whatever is left. Nothing here feeds back into the counter.

use iced::{Color, Point, Size};
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::{Burst, Particle};
use crate::constants::CONFETTI_COLORS;

pub struct ConfettiField {
    particles: Vec<Particle>,
    rng: StdRng,
}

impl Default for ConfettiField {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfettiField {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic field for reproducible animations
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            particles: Vec::new(),
            rng,
        }
    }

    /// Launch a burst inside a viewport of the given size
    pub fn burst(&mut self, burst: &Burst, viewport: Size) {
        let origin = Point::new(
            viewport.width * burst.origin.0,
            viewport.height * burst.origin.1,
        );

        self.particles.reserve(burst.particle_count);
        for i in 0..burst.particle_count {
            let [r, g, b] = CONFETTI_COLORS[i % CONFETTI_COLORS.len()];
            let color = Color::from_rgb8(r, g, b);
            self.particles
                .push(Particle::spawn(burst, origin, color, &mut self.rng));
        }

        debug!(
            "Confetti burst: {} particles from ({:.0}, {:.0})",
            burst.particle_count, origin.x, origin.y
        );
    }

    /// Advance every particle one frame and drop the ones that expired
    pub fn tick(&mut self) {
        let rng = &mut self.rng;
        for particle in &mut self.particles {
            particle.step(rng);
        }

        let before = self.particles.len();
        self.particles.retain(Particle::is_alive);

        if before > 0 && self.particles.is_empty() {
            debug!("Confetti finished");
        }
    }

    pub fn is_animating(&self) -> bool {
        !self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Size {
        Size::new(800.0, 600.0)
    }

    #[test]
    fn starts_idle() {
        let field = ConfettiField::seeded(1);
        assert!(!field.is_animating());
        assert!(field.is_empty());
    }

    #[test]
    fn burst_spawns_at_origin_fraction_of_viewport() {
        let mut field = ConfettiField::seeded(1);
        let burst = Burst::celebration();
        field.burst(&burst, viewport());

        assert_eq!(field.len(), burst.particle_count);
        for particle in field.particles() {
            let origin = particle.position();
            assert!((origin.x - 400.0).abs() < 1e-3);
            assert!((origin.y - 360.0).abs() < 1e-3);
        }
    }

    #[test]
    fn uses_every_palette_colour() {
        let mut field = ConfettiField::seeded(2);
        field.burst(&Burst::celebration(), viewport());

        for [r, g, b] in CONFETTI_COLORS {
            let expected = Color::from_rgb8(r, g, b);
            assert!(field.particles().iter().any(|p| p.color() == expected));
        }
    }

    #[test]
    fn empties_after_lifetime() {
        let mut field = ConfettiField::seeded(3);
        let burst = Burst::celebration();
        field.burst(&burst, viewport());

        for _ in 0..burst.lifetime_ticks - 1 {
            field.tick();
        }
        assert!(field.is_animating());

        field.tick();
        assert!(!field.is_animating());
    }

    #[test]
    fn ticking_an_empty_field_is_harmless() {
        let mut field = ConfettiField::seeded(4);
        field.tick();
        assert!(field.is_empty());
    }
}
