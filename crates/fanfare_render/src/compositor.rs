//! Surface acquisition and viewport queries.
//!
//! The compositor is the one place a launch can fail: a host without 2D
//! drawing support returns `None` from [`Compositor::acquire`] and the engine
//! aborts before anything touches the display tree.

use parking_lot::Mutex;

use fanfare_core::Vec2;

use crate::command::CommandLog;
use crate::surface::{DrawTarget, RecordingSurface};

/// Hands out draw targets and answers viewport queries.
pub trait Compositor {
    /// Current viewport size in pixels.
    fn viewport(&self) -> Vec2;

    /// Acquires a fresh 2D draw target, or `None` when the host cannot
    /// provide one.
    fn acquire(&self) -> Option<Box<dyn DrawTarget>>;
}

/// A compositor backed by recording surfaces.
///
/// Every acquired surface gets its own command log; the compositor keeps a
/// handle to each so callers can inspect what a run drew after the fact.
#[derive(Debug)]
pub struct HeadlessCompositor {
    /// Reported viewport size.
    viewport: Vec2,
    /// Log handles for every surface handed out, in acquisition order.
    logs: Mutex<Vec<CommandLog>>,
}

impl HeadlessCompositor {
    /// Creates a compositor reporting the given viewport.
    #[must_use]
    pub fn new(viewport: Vec2) -> Self {
        Self {
            viewport,
            logs: Mutex::new(Vec::new()),
        }
    }

    /// Command logs of all surfaces handed out so far.
    #[must_use]
    pub fn logs(&self) -> Vec<CommandLog> {
        self.logs.lock().clone()
    }
}

impl Compositor for HeadlessCompositor {
    fn viewport(&self) -> Vec2 {
        self.viewport
    }

    fn acquire(&self) -> Option<Box<dyn DrawTarget>> {
        let surface = RecordingSurface::new(self.viewport);
        self.logs.lock().push(surface.log());
        Some(Box::new(surface))
    }
}

/// A compositor with no 2D drawing support. Every acquisition fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableCompositor {
    /// Reported viewport size (queries still work without a draw target).
    pub viewport: Vec2,
}

impl Compositor for UnavailableCompositor {
    fn viewport(&self) -> Vec2 {
        self.viewport
    }

    fn acquire(&self) -> Option<Box<dyn DrawTarget>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_hands_out_logged_surfaces() {
        let compositor = HeadlessCompositor::new(Vec2::new(1024.0, 768.0));

        let mut surface = compositor.acquire().unwrap();
        surface.begin_frame();

        let logs = compositor.logs();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].frames_cleared(), 1);
    }

    #[test]
    fn test_each_acquisition_gets_its_own_log() {
        let compositor = HeadlessCompositor::new(Vec2::new(100.0, 100.0));
        let mut a = compositor.acquire().unwrap();
        let _b = compositor.acquire().unwrap();

        a.begin_frame();

        let logs = compositor.logs();
        assert_eq!(logs[0].frames_cleared(), 1);
        assert_eq!(logs[1].frames_cleared(), 0);
    }

    #[test]
    fn test_unavailable_refuses() {
        let compositor = UnavailableCompositor::default();
        assert!(compositor.acquire().is_none());
    }
}
