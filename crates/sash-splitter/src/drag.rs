//! Drag session state for divider resizing.
//!
//! Tracks whether the user is dragging a divider, which divider it is, and
//! the geometry snapshotted when the drag began. The splitter calls into
//! this module on pointer-down, pointer-move and pointer-up.

use sash_common::Rect;
use serde::{Deserialize, Serialize};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DragState {
    #[default]
    Idle,
    Resizing,
}

/// State spanning one pointer-down to pointer-up gesture.
#[derive(Debug, Clone, Default)]
pub struct DragSession {
    state: DragState,
    /// Divider grabbed most recently. Kept after the drag ends; inert
    /// until the next `begin`.
    active_divider: Option<usize>,
    /// Divider bounds at drag start.
    divider_bounds: Option<Rect>,
    /// Container extent along the split axis at drag start.
    container_extent: f64,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start resizing with `divider`. Ignored while another drag is in
    /// progress; returns whether the session was started.
    pub fn begin(&mut self, divider: usize, divider_bounds: Rect, container_extent: f64) -> bool {
        if self.is_resizing() {
            return false;
        }
        self.active_divider = Some(divider);
        self.divider_bounds = Some(divider_bounds);
        self.container_extent = container_extent;
        self.state = DragState::Resizing;
        true
    }

    /// Stop resizing. Safe to call when idle. Returns the divider that was
    /// being dragged, if any.
    pub fn end(&mut self) -> Option<usize> {
        let was_resizing = self.is_resizing();
        self.state = DragState::Idle;
        if was_resizing {
            self.active_divider
        } else {
            None
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_resizing(&self) -> bool {
        self.state == DragState::Resizing
    }

    pub fn active_divider(&self) -> Option<usize> {
        self.active_divider
    }

    pub fn divider_bounds(&self) -> Option<Rect> {
        self.divider_bounds
    }

    pub fn container_extent(&self) -> f64 {
        self.container_extent
    }
}

// =============================================================================
// TESTS
// =============================================================================
