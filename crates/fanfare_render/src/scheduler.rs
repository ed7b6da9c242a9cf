//! Per-frame scheduling.
//!
//! The host contract is "invoke this callback before the next display
//! refresh". In this engine the run pulls instead: after each frame it yields
//! to a [`FrameScheduler`], which decides how long until the next one.

use std::time::{Duration, Instant};

/// Target frame time for 60 FPS.
pub const TARGET_FRAME_TIME: Duration = Duration::from_micros(16_666);

/// Yield point between frames.
pub trait FrameScheduler {
    /// Called after every simulated frame, before the next one begins.
    fn next_frame(&mut self);
}

/// Paces frames to a fixed budget by sleeping the remainder of each frame.
#[derive(Debug)]
pub struct PacedScheduler {
    /// Per-frame budget.
    budget: Duration,
    /// When the current frame started.
    frame_start: Instant,
}

impl PacedScheduler {
    /// Creates a scheduler targeting the given frame rate.
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let budget = if target_fps == 0 {
            TARGET_FRAME_TIME
        } else {
            Duration::from_secs(1) / target_fps
        };
        Self {
            budget,
            frame_start: Instant::now(),
        }
    }
}

impl Default for PacedScheduler {
    fn default() -> Self {
        Self::new(60)
    }
}

impl FrameScheduler for PacedScheduler {
    fn next_frame(&mut self) {
        let elapsed = self.frame_start.elapsed();
        if elapsed < self.budget {
            std::thread::sleep(self.budget - elapsed);
        }
        self.frame_start = Instant::now();
    }
}

/// A scheduler that never waits. Used by tests and fire-and-forget runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualScheduler {
    /// Number of times the run yielded between frames.
    pub yields: u64,
}

impl FrameScheduler for ManualScheduler {
    fn next_frame(&mut self) {
        self.yields += 1;
    }
}
