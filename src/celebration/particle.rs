// celebration/particle.rs - A single piece of confetti
//
// Each piece flies along its heading, slows down, falls under gravity,
// and flutters (wobble + tilt) while it fades out over its lifetime.

use std::f32::consts::PI;

use iced::{Color, Point};
use rand::Rng;

use super::Burst;

/// Amount the tilt angle advances every tick (radians)
const TILT_STEP: f32 = 0.1;

/// Radius of the wobble circle before scaling
const WOBBLE_RADIUS: f32 = 10.0;

#[derive(Debug, Clone)]
pub struct Particle {
    position: Point,
    /// Direction of travel in radians, screen space (y grows downward)
    heading: f32,
    speed: f32,
    decay: f32,
    gravity: f32,
    drift: f32,
    wobble: f32,
    wobble_speed: f32,
    tilt: f32,
    /// Per-frame size jitter, re-rolled every tick
    jitter: f32,
    scalar: f32,
    color: Color,
    tick: u32,
    lifetime: u32,
}

impl Particle {
    /// Launch a new piece at `origin` using the burst's parameters
    pub fn spawn<R: Rng>(burst: &Burst, origin: Point, color: Color, rng: &mut R) -> Self {
        let angle = burst.angle.to_radians();
        let spread = burst.spread.to_radians();

        Self {
            position: origin,
            heading: -angle + (0.5 * spread - rng.gen::<f32>() * spread),
            speed: burst.start_velocity * 0.5 + rng.gen::<f32>() * burst.start_velocity,
            decay: burst.decay,
            gravity: burst.gravity * 3.0,
            drift: burst.drift,
            wobble: rng.gen::<f32>() * 10.0,
            wobble_speed: (rng.gen::<f32>() * 0.1 + 0.05).min(0.11),
            tilt: (rng.gen::<f32>() * 0.5 + 0.25) * PI,
            jitter: rng.gen::<f32>() + 2.0,
            scalar: burst.scalar,
            color,
            tick: 0,
            lifetime: burst.lifetime_ticks,
        }
    }

    /// Advance one animation frame
    pub fn step<R: Rng>(&mut self, rng: &mut R) {
        self.position.x += self.heading.cos() * self.speed + self.drift;
        self.position.y += self.heading.sin() * self.speed + self.gravity;
        self.speed *= self.decay;

        self.wobble += self.wobble_speed;
        self.tilt += TILT_STEP;
        self.jitter = rng.gen::<f32>() + 2.0;

        self.tick = self.tick.saturating_add(1);
    }

    pub fn is_alive(&self) -> bool {
        self.tick < self.lifetime
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Linear fade from 1.0 at spawn to 0.0 at end of life
    pub fn opacity(&self) -> f32 {
        if self.lifetime == 0 {
            return 0.0;
        }
        (1.0 - self.tick as f32 / self.lifetime as f32).clamp(0.0, 1.0)
    }

    /// Colour with the current fade applied
    pub fn color(&self) -> Color {
        Color {
            a: self.color.a * self.opacity(),
            ..self.color
        }
    }

    /// The four corners of the fluttering quad, in drawing order
    pub fn corners(&self) -> [Point; 4] {
        let Point { x, y } = self.position;
        let wobble_x = x + WOBBLE_RADIUS * self.scalar * self.wobble.cos();
        let wobble_y = y + WOBBLE_RADIUS * self.scalar * self.wobble.sin();

        let (tilt_sin, tilt_cos) = self.tilt.sin_cos();
        let x1 = x + self.jitter * tilt_cos;
        let y1 = y + self.jitter * tilt_sin;
        let x2 = wobble_x + self.jitter * tilt_cos;
        let y2 = wobble_y + self.jitter * tilt_sin;

        [
            Point::new(x, y),
            Point::new(wobble_x, y1),
            Point::new(x2, y2),
            Point::new(x1, wobble_y),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn spawn_one(seed: u64) -> (Particle, StdRng) {
        let mut rng = StdRng::seed_from_u64(seed);
        let particle = Particle::spawn(
            &Burst::celebration(),
            Point::new(400.0, 300.0),
            Color::WHITE,
            &mut rng,
        );
        (particle, rng)
    }

    #[test]
    fn launches_upward_inside_the_cone() {
        for seed in 0..50 {
            let (mut particle, mut rng) = spawn_one(seed);
            let burst = Burst::celebration();
            let half_spread = (burst.spread / 2.0).to_radians();

            let up = -burst.angle.to_radians();
            assert!((particle.heading - up).abs() <= half_spread + 1e-5);

            particle.step(&mut rng);
            assert!(particle.position().y < 300.0, "seed {seed} did not rise");
        }
    }

    #[test]
    fn speed_decays_every_tick() {
        let (mut particle, mut rng) = spawn_one(7);
        let mut last = particle.speed();
        for _ in 0..10 {
            particle.step(&mut rng);
            assert!(particle.speed() < last);
            last = particle.speed();
        }
    }

    #[test]
    fn fades_out_and_dies_after_lifetime() {
        let (mut particle, mut rng) = spawn_one(3);
        assert_eq!(particle.opacity(), 1.0);

        let lifetime = Burst::celebration().lifetime_ticks;
        for _ in 0..lifetime / 2 {
            particle.step(&mut rng);
        }
        assert!((particle.opacity() - 0.5).abs() < 1e-4);
        assert!(particle.is_alive());

        for _ in 0..lifetime / 2 {
            particle.step(&mut rng);
        }
        assert!(!particle.is_alive());
        assert_eq!(particle.color().a, 0.0);
    }

    #[test]
    fn quad_starts_at_the_position_and_crosses_to_the_wobble_point() {
        let (particle, _) = spawn_one(5);
        let Point { x, y } = particle.position();
        let wobble_x = x + WOBBLE_RADIUS * particle.scalar * particle.wobble.cos();
        let wobble_y = y + WOBBLE_RADIUS * particle.scalar * particle.wobble.sin();
        let (tilt_sin, tilt_cos) = particle.tilt.sin_cos();

        let [a, b, c, d] = particle.corners();
        assert_eq!(a, Point::new(x, y));
        assert_eq!(b, Point::new(wobble_x, y + particle.jitter * tilt_sin));
        assert_eq!(
            c,
            Point::new(
                wobble_x + particle.jitter * tilt_cos,
                wobble_y + particle.jitter * tilt_sin
            )
        );
        assert_eq!(d, Point::new(x + particle.jitter * tilt_cos, wobble_y));
    }

    #[test]
    fn corners_stay_near_the_position() {
        let (particle, _) = spawn_one(11);
        let center = particle.position();
        for corner in particle.corners() {
            let dx = corner.x - center.x;
            let dy = corner.y - center.y;
            // wobble radius plus the largest jitter
            assert!((dx * dx + dy * dy).sqrt() <= WOBBLE_RADIUS + 3.0 * 2.0);
        }
    }
}
