//! A single burst particle.
//!
//! Particles are spawned once per run and never added or removed mid-run.
//! A spent particle (life at or below the visibility threshold) keeps
//! simulating - it is only skipped at draw time.

use crate::color::Color;
use crate::config::BurstConfig;
use crate::math::Vec2;
use crate::rng::BurstRng;

/// A single particle, owned exclusively by one simulation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Position in surface pixel coordinates.
    pub position: Vec2,
    /// Velocity in pixels per frame.
    pub velocity: Vec2,
    /// Color sampled from the configured palette.
    pub color: Color,
    /// Remaining life in (0, 1]. Doubles as draw opacity.
    pub life: f32,
    /// Radius of the drawn circle, in pixels.
    pub size: f32,
}

impl Particle {
    /// Life at or below this is invisible (still simulated, never drawn).
    pub const VISIBILITY_THRESHOLD: f32 = 0.1;

    /// Spawns one particle from the config's sampling rules.
    ///
    /// Launch angle is jittered uniformly within `spread` degrees centered on
    /// the configured direction; speed is uniform in 0.75-1.25x the start
    /// velocity; size is the scalar times a uniform 5-10 pixel jitter.
    ///
    /// The palette must be non-empty; configs are validated at launch.
    #[must_use]
    pub fn spawn(config: &BurstConfig, bounds: Vec2, rng: &mut BurstRng) -> Self {
        let angle = config.angle.to_radians() + config.spread.to_radians() * rng.jitter();
        let speed = config.start_velocity * rng.range(0.75, 1.25);

        Self {
            position: config.origin.scale_by(bounds),
            velocity: Vec2::new(speed * angle.cos(), speed * angle.sin()),
            color: config.colors[rng.pick_index(config.colors.len())],
            life: 1.0,
            size: config.scalar * rng.range(5.0, 10.0),
        }
    }

    /// Advances the particle by one frame: integrate position by velocity,
    /// velocity by gravity, and decay life.
    pub fn step(&mut self, gravity: f32, decay: f32) {
        self.position += self.velocity;
        self.velocity.y += gravity;
        self.life *= decay;
    }

    /// Is this particle drawn this frame?
    #[inline]
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.life > Self::VISIBILITY_THRESHOLD
    }
}
