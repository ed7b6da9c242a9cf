//! One burst's lifecycle, from launch to teardown.

use std::sync::Arc;

use fanfare_core::{Particle, Simulation};
use fanfare_render::{DrawTarget, FrameScheduler, OverlayId, OverlayTree};

/// Lifecycle state of a run. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    /// Launched, no frame simulated yet.
    Idle,
    /// Frames are being simulated and drawn.
    Running,
    /// Overlay detached. Terminal - no further frames.
    Terminated,
}

/// Counters accumulated over one run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunStats {
    /// Frames simulated and drawn.
    pub frames: u32,
    /// Circles drawn across all frames.
    pub circles_drawn: u64,
    /// Draw calls skipped because the particle's life was spent.
    pub circles_skipped: u64,
    /// Particle count, fixed at spawn.
    pub particle_count: u32,
}

/// An independent, in-flight burst.
///
/// A run exclusively owns its surface, particles, and RNG-derived state;
/// concurrent runs share nothing but the overlay tree. Dropping a run detaches
/// its overlay (idempotently), so an abandoned handle never leaks a node.
pub struct Run {
    /// Run id, unique per launcher.
    id: u64,
    /// The particle simulation.
    sim: Simulation,
    /// The run's exclusive draw target.
    surface: Box<dyn DrawTarget>,
    /// The overlay node attached for this run.
    overlay: OverlayId,
    /// The shared display tree.
    tree: Arc<OverlayTree>,
    /// Current lifecycle state.
    phase: RunPhase,
    /// Accumulated counters.
    stats: RunStats,
}

impl Run {
    /// Assembles a launched run. Only the launcher builds these.
    pub(crate) fn new(
        id: u64,
        sim: Simulation,
        surface: Box<dyn DrawTarget>,
        overlay: OverlayId,
        tree: Arc<OverlayTree>,
    ) -> Self {
        let particle_count = sim.particles().len() as u32;
        Self {
            id,
            sim,
            surface,
            overlay,
            tree,
            phase: RunPhase::Idle,
            stats: RunStats {
                particle_count,
                ..RunStats::default()
            },
        }
    }

    /// The run id.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    /// Accumulated counters.
    #[must_use]
    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// The particle set, post-integration.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        self.sim.particles()
    }

    /// Frames simulated so far.
    #[must_use]
    pub fn frame_count(&self) -> u32 {
        self.sim.frame()
    }

    /// The overlay node this run attached at launch.
    #[must_use]
    pub fn overlay(&self) -> OverlayId {
        self.overlay
    }

    /// Is this run's overlay still in the display tree?
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.tree.is_attached(self.overlay)
    }

    /// Executes one scheduling callback.
    ///
    /// With the tick budget spent, this detaches the overlay and becomes a
    /// no-op forever. Otherwise it clears the surface, advances every
    /// particle, draws the ones whose life is above the visibility threshold
    /// (opacity = life), and returns [`RunPhase::Running`].
    pub fn frame(&mut self) -> RunPhase {
        if self.phase == RunPhase::Terminated {
            return RunPhase::Terminated;
        }
        if self.sim.is_spent() {
            self.teardown();
            return RunPhase::Terminated;
        }

        self.phase = RunPhase::Running;
        self.surface.begin_frame();
        self.sim.advance();

        for particle in self.sim.particles() {
            if particle.is_visible() {
                self.surface.fill_circle(
                    particle.position,
                    particle.size,
                    particle.color,
                    particle.life,
                );
                self.stats.circles_drawn += 1;
            } else {
                self.stats.circles_skipped += 1;
            }
        }

        self.stats.frames += 1;
        RunPhase::Running
    }

    /// Drives the run to completion, yielding to the scheduler between
    /// frames. Returns the final counters.
    pub fn drive(&mut self, scheduler: &mut dyn FrameScheduler) -> RunStats {
        while self.frame() == RunPhase::Running {
            scheduler.next_frame();
        }
        self.stats
    }

    /// Forces the terminal teardown transition immediately.
    ///
    /// Early cancellation beyond the tick budget. A run that is only driven
    /// still always consumes its full budget.
    pub fn stop(&mut self) {
        if self.phase != RunPhase::Terminated {
            self.teardown();
        }
    }

    /// Detaches the overlay and enters the terminal state. Detaching an
    /// overlay the host already removed is a silent no-op.
    fn teardown(&mut self) {
        if self.tree.detach(self.overlay) {
            tracing::debug!(
                "burst {} terminated after {} frames",
                self.id,
                self.stats.frames
            );
        } else {
            tracing::trace!("burst {} overlay was already detached", self.id);
        }
        self.phase = RunPhase::Terminated;
    }
}

impl Drop for Run {
    fn drop(&mut self) {
        // Idempotent - a completed run already detached itself
        self.tree.detach(self.overlay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launcher::Launcher;
    use fanfare_core::{BurstConfig, Vec2};
    use fanfare_render::{HeadlessCompositor, ManualScheduler};

    const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

    fn launcher() -> Launcher<HeadlessCompositor> {
        Launcher::new(HeadlessCompositor::new(VIEWPORT))
    }

    #[test]
    fn test_phase_progression() {
        let launcher = launcher();
        let mut run = launcher
            .launch_seeded(
                BurstConfig {
                    ticks: 2,
                    ..BurstConfig::default()
                },
                1,
            )
            .unwrap();

        assert_eq!(run.phase(), RunPhase::Idle);
        assert_eq!(run.frame(), RunPhase::Running);
        assert_eq!(run.frame(), RunPhase::Running);
        // Budget spent: next callback tears down
        assert_eq!(run.frame(), RunPhase::Terminated);
        assert_eq!(run.frame(), RunPhase::Terminated);
        assert_eq!(run.frame_count(), 2);
    }

    #[test]
    fn test_drive_consumes_full_budget() {
        let launcher = launcher();
        let mut run = launcher.launch_seeded(BurstConfig::default(), 2).unwrap();
        let mut scheduler = ManualScheduler::default();

        let stats = run.drive(&mut scheduler);
        assert_eq!(stats.frames, 200);
        assert_eq!(scheduler.yields, 200);
        assert!(!run.is_attached());
    }

    #[test]
    fn test_stop_detaches_immediately() {
        let launcher = launcher();
        let mut run = launcher.launch_seeded(BurstConfig::default(), 3).unwrap();

        run.frame();
        assert!(run.is_attached());
        run.stop();
        assert_eq!(run.phase(), RunPhase::Terminated);
        assert!(!run.is_attached());

        // Stopped runs simulate nothing further
        let frames = run.stats().frames;
        run.frame();
        assert_eq!(run.stats().frames, frames);
    }

    #[test]
    fn test_drop_detaches_overlay() {
        let launcher = launcher();
        let run = launcher.launch_seeded(BurstConfig::default(), 4).unwrap();
        assert_eq!(launcher.tree().len(), 1);
        drop(run);
        assert!(launcher.tree().is_empty());
    }
}
