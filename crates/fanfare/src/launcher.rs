//! The launch factory.
//!
//! A [`Launcher`] owns the compositor and the overlay tree, and nothing else.
//! Every launch produces an independent [`Run`]; there is no module-level
//! trigger state shared across invocations.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use fanfare_core::{BurstConfig, BurstRng, EngineError, EngineResult, Simulation};
use fanfare_render::{Compositor, ManualScheduler, OverlayTree};

use crate::run::Run;

/// Factory for burst runs.
pub struct Launcher<C> {
    /// Provides draw targets and viewport queries.
    compositor: C,
    /// The display tree all of this launcher's runs attach to.
    tree: Arc<OverlayTree>,
    /// Next run id.
    next_run_id: AtomicU64,
}

impl<C: Compositor> Launcher<C> {
    /// Creates a launcher with its own overlay tree.
    #[must_use]
    pub fn new(compositor: C) -> Self {
        Self::with_tree(compositor, Arc::new(OverlayTree::new()))
    }

    /// Creates a launcher attached to an existing overlay tree.
    #[must_use]
    pub fn with_tree(compositor: C, tree: Arc<OverlayTree>) -> Self {
        Self {
            compositor,
            tree,
            next_run_id: AtomicU64::new(0),
        }
    }

    /// The compositor this launcher acquires surfaces from.
    #[must_use]
    pub fn compositor(&self) -> &C {
        &self.compositor
    }

    /// The overlay tree this launcher's runs attach to.
    #[must_use]
    pub fn tree(&self) -> &OverlayTree {
        &self.tree
    }

    /// Launches a run seeded from OS entropy.
    ///
    /// # Errors
    ///
    /// [`EngineError::EmptyPalette`] for a config with no colors (checked
    /// before anything touches the display tree) and
    /// [`EngineError::SurfaceUnavailable`] when the compositor cannot provide
    /// a 2D draw target. Either way, no partial state is left behind.
    pub fn launch(&self, config: BurstConfig) -> EngineResult<Run> {
        self.launch_with_rng(config, BurstRng::from_entropy())
    }

    /// Launches a reproducible run from a fixed seed.
    ///
    /// # Errors
    ///
    /// Same as [`Launcher::launch`].
    pub fn launch_seeded(&self, config: BurstConfig, seed: u64) -> EngineResult<Run> {
        self.launch_with_rng(config, BurstRng::from_seed(seed))
    }

    /// Fire-and-forget: launches and drives the run to completion, unpaced.
    ///
    /// Preserves the original trigger contract - side effect only, silent
    /// no-op on failure. Callers wanting pacing or early cancellation use
    /// [`Launcher::launch`] and drive the run themselves.
    pub fn trigger(&self, config: BurstConfig) {
        match self.launch(config) {
            Ok(mut run) => {
                run.drive(&mut ManualScheduler::default());
            }
            Err(error) => {
                tracing::debug!("burst trigger ignored: {}", error);
            }
        }
    }

    fn launch_with_rng(&self, config: BurstConfig, mut rng: BurstRng) -> EngineResult<Run> {
        // Caller errors surface before any display-tree mutation
        config.validate()?;

        let Some(mut surface) = self.compositor.acquire() else {
            tracing::warn!("no 2d draw target available, burst aborted");
            return Err(EngineError::SurfaceUnavailable);
        };

        let viewport = self.compositor.viewport();
        surface.resize(viewport);

        let sim = Simulation::spawn(&config, viewport, &mut rng)?;
        let overlay = self.tree.attach(viewport);
        let id = self.next_run_id.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(
            "burst {} launched: {} particles, {} ticks",
            id,
            config.particle_count,
            config.ticks
        );

        Ok(Run::new(id, sim, surface, overlay, Arc::clone(&self.tree)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fanfare_core::Vec2;
    use fanfare_render::{HeadlessCompositor, UnavailableCompositor};

    const VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);

    #[test]
    fn test_launch_attaches_sized_overlay() {
        let launcher = Launcher::new(HeadlessCompositor::new(VIEWPORT));
        let run = launcher.launch_seeded(BurstConfig::default(), 1).unwrap();

        assert!(run.is_attached());
        assert_eq!(launcher.tree().len(), 1);
        assert_eq!(run.particles().len(), 100);
    }

    #[test]
    fn test_unavailable_surface_mutates_nothing() {
        let launcher = Launcher::new(UnavailableCompositor { viewport: VIEWPORT });

        let result = launcher.launch(BurstConfig::default());
        assert_eq!(result.err(), Some(EngineError::SurfaceUnavailable));
        assert!(launcher.tree().is_empty());

        // The silent path must not panic either
        launcher.trigger(BurstConfig::default());
        assert!(launcher.tree().is_empty());
    }

    #[test]
    fn test_empty_palette_fails_before_acquisition() {
        let launcher = Launcher::new(HeadlessCompositor::new(VIEWPORT));
        let config = BurstConfig {
            colors: Vec::new(),
            ..BurstConfig::default()
        };

        let result = launcher.launch(config);
        assert_eq!(result.err(), Some(EngineError::EmptyPalette));
        assert!(launcher.tree().is_empty());
        // No surface was handed out at all
        assert!(launcher.compositor().logs().is_empty());
    }

    #[test]
    fn test_run_ids_are_unique() {
        let launcher = Launcher::new(HeadlessCompositor::new(VIEWPORT));
        let a = launcher.launch_seeded(BurstConfig::default(), 1).unwrap();
        let b = launcher.launch_seeded(BurstConfig::default(), 1).unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_trigger_completes_the_burst() {
        let launcher = Launcher::new(HeadlessCompositor::new(VIEWPORT));
        launcher.trigger(BurstConfig {
            particle_count: 5,
            ticks: 10,
            ..BurstConfig::default()
        });

        assert!(launcher.tree().is_empty());
        let logs = launcher.compositor().logs();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].frames_cleared(), 10);
    }
}
