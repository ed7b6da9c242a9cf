//! One run's particle set and frame counter.
//!
//! A [`Simulation`] is spawned at launch with a fixed particle count and
//! advances one frame per call until its tick budget is spent. It never
//! allocates after spawn and never touches a draw target - rendering is the
//! caller's concern.

use crate::config::BurstConfig;
use crate::error::EngineResult;
use crate::math::Vec2;
use crate::particle::Particle;
use crate::rng::BurstRng;

/// The particle simulation behind one run.
#[derive(Debug, Clone)]
pub struct Simulation {
    /// The fixed particle set. Length never changes after spawn.
    particles: Vec<Particle>,
    /// Frames advanced so far.
    frame: u32,
    /// Frame budget from the config.
    ticks: u32,
    /// Downward acceleration per frame.
    gravity: f32,
    /// Per-frame multiplicative life decay.
    decay: f32,
}

impl Simulation {
    /// Spawns `particle_count` particles and a zeroed frame counter.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EngineError::EmptyPalette`] when the config's palette
    /// has nothing to sample from.
    pub fn spawn(config: &BurstConfig, bounds: Vec2, rng: &mut BurstRng) -> EngineResult<Self> {
        config.validate()?;

        let particles = (0..config.particle_count)
            .map(|_| Particle::spawn(config, bounds, rng))
            .collect();

        Ok(Self {
            particles,
            frame: 0,
            ticks: config.ticks,
            gravity: config.gravity,
            decay: config.decay,
        })
    }

    /// Frames advanced so far.
    #[must_use]
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// The frame budget.
    #[must_use]
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Has the tick budget been consumed?
    #[inline]
    #[must_use]
    pub fn is_spent(&self) -> bool {
        self.frame >= self.ticks
    }

    /// Advances every particle by one frame and increments the counter.
    ///
    /// A no-op once the budget is spent: the simulation has a single forward
    /// path and never rewinds.
    pub fn advance(&mut self) {
        if self.is_spent() {
            return;
        }

        for particle in &mut self.particles {
            particle.step(self.gravity, self.decay);
        }
        self.frame += 1;
    }

    /// The particle set, post-integration.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Particles that would be drawn this frame.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.particles.iter().filter(|p| p.is_visible()).count()
    }
}
