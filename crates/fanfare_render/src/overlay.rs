//! The overlay display tree.
//!
//! Each run attaches one full-viewport overlay node for its lifetime and
//! detaches it at teardown. The tree is the single structure shared between
//! concurrent runs, so it uses interior mutability and hands out opaque ids.

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use fanfare_core::Vec2;

/// Opaque handle to an attached overlay node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlayId(u64);

/// An overlay node in the display tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayNode {
    /// The node's id.
    pub id: OverlayId,
    /// Node size in pixels (the viewport at attach time).
    pub bounds: Vec2,
    /// Overlays render above all other content.
    pub topmost: bool,
    /// Overlays never intercept input.
    pub input_transparent: bool,
}

/// The display tree runs attach their overlays to.
///
/// Detach is idempotent: tearing down an overlay that was already removed
/// (externally or by a prior teardown) is a silent no-op.
#[derive(Debug, Default)]
pub struct OverlayTree {
    /// Attached nodes.
    nodes: Mutex<Vec<OverlayNode>>,
    /// Next id to hand out.
    next_id: AtomicU64,
}

impl OverlayTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a full-viewport, topmost, input-transparent overlay.
    pub fn attach(&self, bounds: Vec2) -> OverlayId {
        let id = OverlayId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.nodes.lock().push(OverlayNode {
            id,
            bounds,
            topmost: true,
            input_transparent: true,
        });
        id
    }

    /// Detaches a node. Returns false when it was already gone.
    pub fn detach(&self, id: OverlayId) -> bool {
        let mut nodes = self.nodes.lock();
        let before = nodes.len();
        nodes.retain(|n| n.id != id);
        nodes.len() < before
    }

    /// Is the node currently attached?
    #[must_use]
    pub fn is_attached(&self, id: OverlayId) -> bool {
        self.nodes.lock().iter().any(|n| n.id == id)
    }

    /// Number of attached overlays.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.lock().len()
    }

    /// Is the tree empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.lock().is_empty()
    }
}
