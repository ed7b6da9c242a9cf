//! # FANFARE
//!
//! A transient burst-overlay particle engine: one launch spawns a
//! full-viewport overlay, simulates a fixed set of particles under simple
//! physics across discrete frames, renders each frame, and tears the overlay
//! down when the tick budget is spent.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       RUN LIFECYCLE                          │
//! ├──────────────────────────────────────────────────────────────┤
//! │  launch ├── validate config (empty palette fails fast)       │
//! │         ├── acquire 2D draw target (None = silent abort)     │
//! │         ├── size surface to viewport                         │
//! │         ├── attach topmost input-transparent overlay         │
//! │         └── spawn N particles (seeded RNG)                   │
//! │                                                              │
//! │  frame  ├── budget spent? detach overlay, stop               │
//! │         ├── clear surface                                    │
//! │         ├── integrate: pos += vel, vel.y += g, life *= decay │
//! │         ├── draw circles where life > 0.1 (opacity = life)   │
//! │         └── yield to the frame scheduler                     │
//! │                                                              │
//! │  end    └── overlay detached, run terminated                 │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## ARCHITECT'S MANDATE
//!
//! - No hidden shared state: each launch yields an independent [`Run`]
//! - Particle count is fixed at spawn
//! - Teardown is unconditional and idempotent
//! - Same seed = same burst, ALWAYS
//!
//! ## Quick start
//!
//! ```
//! use fanfare::{BurstConfig, HeadlessCompositor, Launcher, ManualScheduler, Vec2};
//!
//! let launcher = Launcher::new(HeadlessCompositor::new(Vec2::new(1280.0, 720.0)));
//! let mut run = launcher
//!     .launch_seeded(BurstConfig { particle_count: 50, ..BurstConfig::default() }, 42)
//!     .expect("valid config and available surface");
//! let stats = run.drive(&mut ManualScheduler::default());
//! assert_eq!(stats.frames, 200);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod launcher;
pub mod presets;
pub mod run;

pub use launcher::Launcher;
pub use run::{Run, RunPhase, RunStats};

// The full public surface in one import
pub use fanfare_core::{
    BurstConfig, BurstRng, Color, EngineError, EngineResult, Particle, Simulation, Vec2,
    DEFAULT_PALETTE,
};
pub use fanfare_render::{
    CircleInstance, CommandLog, Compositor, DrawTarget, FrameScheduler, HeadlessCompositor,
    ManualScheduler, OverlayId, OverlayTree, PacedScheduler, RecordingSurface, RenderCommand,
    UnavailableCompositor, TARGET_FRAME_TIME,
};
