// celebration/mod.rs - Confetti Burst
//
// The decorative effect fired when the counter reaches its cap. It lives
// entirely outside the counter state: the counter hands out a `Burst`
// description and never looks at what happens to it.

mod field;
mod particle;

pub use field::ConfettiField;
pub use particle::Particle;

use crate::constants::*;

/// Launch parameters for one burst of confetti
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Burst {
    pub particle_count: usize,
    /// Launch direction in degrees, 90 is straight up
    pub angle: f32,
    /// Width of the launch cone in degrees
    pub spread: f32,
    /// Origin as fractions of the viewport width and height
    pub origin: (f32, f32),
    pub start_velocity: f32,
    pub decay: f32,
    pub gravity: f32,
    pub drift: f32,
    pub lifetime_ticks: u32,
    pub scalar: f32,
}

impl Burst {
    /// The fixed burst fired when the cap is reached
    pub fn celebration() -> Self {
        Self {
            particle_count: BURST_PARTICLE_COUNT,
            angle: BURST_ANGLE_DEGREES,
            spread: BURST_SPREAD_DEGREES,
            origin: BURST_ORIGIN,
            start_velocity: BURST_START_VELOCITY,
            decay: BURST_DECAY,
            gravity: BURST_GRAVITY,
            drift: BURST_DRIFT,
            lifetime_ticks: BURST_LIFETIME_TICKS,
            scalar: BURST_SCALAR,
        }
    }
}
