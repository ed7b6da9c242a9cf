//! Batched render commands.
//!
//! The recording backend collects one [`RenderCommand`] per draw call. Tests
//! read the log directly; GPU backends convert the circles of a frame into a
//! packed [`CircleInstance`] buffer for a single instanced submission.

use std::sync::Arc;

use bytemuck::{Pod, Zeroable};
use parking_lot::Mutex;

use fanfare_core::{Color, Vec2};

/// A render command for one burst frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderCommand {
    /// Clear the whole surface. Emitted once at the start of every frame.
    Clear,
    /// Filled circle.
    Circle {
        /// Center in surface pixels.
        center: Vec2,
        /// Radius in pixels.
        radius: f32,
        /// Fill color.
        color: Color,
        /// Global opacity (the particle's remaining life).
        opacity: f32,
    },
}

/// Per-instance data for GPU-batched circle rendering.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct CircleInstance {
    /// Center (x, y) in surface pixels.
    pub center: [f32; 2],
    /// Radius in pixels.
    pub radius: f32,
    /// Global opacity.
    pub opacity: f32,
    /// Fill color (RGBA).
    pub color: [f32; 4],
}

impl CircleInstance {
    /// Size of an instance in bytes.
    pub const SIZE: usize = std::mem::size_of::<Self>();

    /// Converts a command into instance data. `Clear` has no instance form.
    #[must_use]
    pub fn from_command(command: &RenderCommand) -> Option<Self> {
        match *command {
            RenderCommand::Clear => None,
            RenderCommand::Circle {
                center,
                radius,
                color,
                opacity,
            } => Some(Self {
                center: center.to_array(),
                radius,
                opacity,
                color: color.to_array(),
            }),
        }
    }
}

/// Shared, inspectable history of everything a recording surface was told to
/// draw. Cloning the log clones the handle, not the history.
#[derive(Debug, Clone, Default)]
pub struct CommandLog {
    /// Full command history, across all frames of the run.
    history: Arc<Mutex<Vec<RenderCommand>>>,
}

impl CommandLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one command.
    pub fn push(&self, command: RenderCommand) {
        self.history.lock().push(command);
    }

    /// A snapshot of the full history.
    #[must_use]
    pub fn commands(&self) -> Vec<RenderCommand> {
        self.history.lock().clone()
    }

    /// Number of frames started (one `Clear` per frame).
    #[must_use]
    pub fn frames_cleared(&self) -> usize {
        self.history
            .lock()
            .iter()
            .filter(|c| matches!(c, RenderCommand::Clear))
            .count()
    }

    /// Number of circles drawn across all frames.
    #[must_use]
    pub fn circles_drawn(&self) -> usize {
        self.history
            .lock()
            .iter()
            .filter(|c| matches!(c, RenderCommand::Circle { .. }))
            .count()
    }

    /// Circle commands of the most recent frame (since the last `Clear`).
    #[must_use]
    pub fn last_frame(&self) -> Vec<RenderCommand> {
        let history = self.history.lock();
        let start = history
            .iter()
            .rposition(|c| matches!(c, RenderCommand::Clear))
            .map_or(0, |i| i + 1);
        history[start..].to_vec()
    }

    /// The most recent frame as a GPU instance buffer.
    #[must_use]
    pub fn instance_buffer(&self) -> Vec<CircleInstance> {
        self.last_frame()
            .iter()
            .filter_map(CircleInstance::from_command)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(1.0, 0.0, 0.0);

    fn circle(x: f32, opacity: f32) -> RenderCommand {
        RenderCommand::Circle {
            center: Vec2::new(x, 0.0),
            radius: 5.0,
            color: RED,
            opacity,
        }
    }

    #[test]
    fn test_instance_size_is_gpu_aligned() {
        assert_eq!(CircleInstance::SIZE, 32);
        assert_eq!(CircleInstance::SIZE % 16, 0);
    }

    #[test]
    fn test_clear_has_no_instance_form() {
        assert!(CircleInstance::from_command(&RenderCommand::Clear).is_none());
        assert!(CircleInstance::from_command(&circle(1.0, 0.5)).is_some());
    }

    #[test]
    fn test_log_counts_frames_and_circles() {
        let log = CommandLog::new();
        log.push(RenderCommand::Clear);
        log.push(circle(1.0, 1.0));
        log.push(circle(2.0, 0.9));
        log.push(RenderCommand::Clear);
        log.push(circle(3.0, 0.8));

        assert_eq!(log.frames_cleared(), 2);
        assert_eq!(log.circles_drawn(), 3);
        assert_eq!(log.last_frame(), vec![circle(3.0, 0.8)]);
    }

    #[test]
    fn test_instance_buffer_is_last_frame_only() {
        let log = CommandLog::new();
        log.push(RenderCommand::Clear);
        log.push(circle(1.0, 1.0));
        log.push(RenderCommand::Clear);
        log.push(circle(7.0, 0.5));

        let instances = log.instance_buffer();
        assert_eq!(instances.len(), 1);
        assert_eq!(instances[0].center, [7.0, 0.0]);
        assert_eq!(instances[0].opacity, 0.5);
    }
}
