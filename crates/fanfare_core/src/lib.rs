//! # FANFARE Core
//!
//! Pure simulation mathematics for the burst-overlay engine.
//!
//! ## CRITICAL RULE
//!
//! This crate must NEVER depend on:
//! - Any draw-target or compositor type
//! - Any window or GPU crate
//!
//! If you need host seams, put them in `fanfare_render`.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod color;
pub mod config;
pub mod error;
pub mod math;
pub mod particle;
pub mod rng;
pub mod simulation;

pub use color::{Color, DEFAULT_PALETTE};
pub use config::BurstConfig;
pub use error::{EngineError, EngineResult};
pub use math::Vec2;
pub use particle::Particle;
pub use rng::BurstRng;
pub use simulation::Simulation;
