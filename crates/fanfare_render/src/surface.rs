//! The 2D draw-target seam.

use fanfare_core::{Color, Vec2};

use crate::command::{CommandLog, RenderCommand};

/// A surface capable of 2D drawing for one run's overlay.
///
/// The engine needs exactly three capabilities from its host: a clear, a
/// filled circle with adjustable fill color and global opacity, and size
/// control. Anything richer belongs to the backend.
pub trait DrawTarget {
    /// Current surface size in pixels.
    fn size(&self) -> Vec2;

    /// Resizes the surface (to the viewport, at launch).
    fn resize(&mut self, size: Vec2);

    /// Clears the whole surface. Called once at the start of every frame.
    fn begin_frame(&mut self);

    /// Draws a filled circle with the given global opacity.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color, opacity: f32);
}

/// A draw target that records commands instead of rasterizing.
///
/// The backend used by tests and headless runs. Its [`CommandLog`] is shared:
/// the compositor keeps a clone, so the history stays inspectable after the
/// surface itself is consumed by a run.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    /// Current size in pixels.
    size: Vec2,
    /// Shared command history.
    log: CommandLog,
}

impl RecordingSurface {
    /// Creates a surface of the given size with a fresh log.
    #[must_use]
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            log: CommandLog::new(),
        }
    }

    /// A handle to this surface's command history.
    #[must_use]
    pub fn log(&self) -> CommandLog {
        self.log.clone()
    }
}

impl DrawTarget for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn resize(&mut self, size: Vec2) {
        self.size = size;
    }

    fn begin_frame(&mut self) {
        self.log.push(RenderCommand::Clear);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color, opacity: f32) {
        self.log.push(RenderCommand::Circle {
            center,
            radius,
            color,
            opacity,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_surface_frame() {
        let mut surface = RecordingSurface::new(Vec2::new(640.0, 480.0));
        let log = surface.log();

        surface.begin_frame();
        surface.fill_circle(Vec2::new(10.0, 20.0), 6.0, Color::WHITE, 0.8);

        assert_eq!(log.frames_cleared(), 1);
        assert_eq!(log.circles_drawn(), 1);
    }

    #[test]
    fn test_resize_tracks_viewport() {
        let mut surface = RecordingSurface::new(Vec2::ZERO);
        surface.resize(Vec2::new(1920.0, 1080.0));
        assert_eq!(surface.size(), Vec2::new(1920.0, 1080.0));
    }
}
