//! # FANFARE Render
//!
//! Host collaborator seams for the burst engine:
//!
//! - [`DrawTarget`] - clear + filled-circle drawing with global opacity
//! - [`OverlayTree`] - the display tree runs attach overlays to
//! - [`Compositor`] - fallible 2D surface acquisition + viewport queries
//! - [`FrameScheduler`] - "invoke this callback before the next refresh"
//!
//! The engine only ever talks to these traits; swapping the recording backend
//! for a GPU backend touches nothing in `fanfare_core` or `fanfare`.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod command;
pub mod compositor;
pub mod overlay;
pub mod scheduler;
pub mod surface;

pub use command::{CircleInstance, CommandLog, RenderCommand};
pub use compositor::{Compositor, HeadlessCompositor, UnavailableCompositor};
pub use overlay::{OverlayId, OverlayNode, OverlayTree};
pub use scheduler::{FrameScheduler, ManualScheduler, PacedScheduler, TARGET_FRAME_TIME};
pub use surface::{DrawTarget, RecordingSurface};
