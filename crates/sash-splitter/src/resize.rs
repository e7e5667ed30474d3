//! Pointer-driven resize of the two panes around a divider.
//!
//! [`resize_pair`] turns a pointer position and the live geometry of the
//! panes either side of a divider into new lengths for those two panes.
//! [`apply_pair`] re-expresses them as percentages of the container extent
//! captured at drag start and splices them into the published sequence.

use sash_common::{Orientation, PaneSize, Point, Rect};

/// Smallest length the pane before a divider may shrink to.
pub const MIN_PRIMARY_SIZE: f64 = 0.0;
/// Smallest length the pane after a divider may shrink to.
pub const MIN_SECONDARY_SIZE: f64 = 0.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeLimits {
    pub min_primary: f64,
    pub min_secondary: f64,
}

impl Default for SizeLimits {
    fn default() -> Self {
        Self {
            min_primary: MIN_PRIMARY_SIZE,
            min_secondary: MIN_SECONDARY_SIZE,
        }
    }
}

/// New lengths for the panes either side of a divider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairResize {
    pub primary: f64,
    pub secondary: f64,
    /// Primary + secondary + divider, measured from live geometry.
    pub container_size: f64,
}

/// Compute the primary/secondary lengths for a pointer at `pointer`.
///
/// Returns `None` when the inputs cannot produce a finite, non-negative
/// pair (non-finite pointer or geometry, or negative pane extents).
pub fn resize_pair(
    orientation: Orientation,
    pointer: Point,
    primary: Rect,
    secondary: Rect,
    divider_extent: f64,
    limits: SizeLimits,
) -> Option<PairResize> {
    let container_size =
        primary.extent(orientation) + secondary.extent(orientation) + divider_extent;
    if !container_size.is_finite() || container_size < divider_extent {
        return None;
    }

    let raw = pointer.along(orientation) - primary.leading_edge(orientation);
    if !raw.is_finite() {
        return None;
    }
    let mut primary_size = raw.max(limits.min_primary);

    // Keep the divider (and the secondary minimum) inside the pair's span.
    if primary_size + divider_extent > container_size - limits.min_secondary {
        primary_size = container_size - divider_extent - limits.min_secondary;
    }
    let primary_size = primary_size.max(0.0);
    let secondary_size = (container_size - primary_size - divider_extent).max(0.0);

    if !primary_size.is_finite() || !secondary_size.is_finite() {
        return None;
    }

    Some(PairResize {
        primary: primary_size,
        secondary: secondary_size,
        container_size,
    })
}

/// Write `pair` into a copy of `current` at `divider`'s two panes, as
/// percentages of `reference_extent`. All other entries are copied as is.
pub fn apply_pair(
    current: &[PaneSize],
    divider: usize,
    pair: PairResize,
    reference_extent: f64,
) -> Option<Vec<PaneSize>> {
    let (primary_idx, secondary_idx) = (divider, divider + 1);
    if secondary_idx >= current.len() || !reference_extent.is_finite() || reference_extent <= 0.0 {
        return None;
    }

    let primary = PaneSize::Percent(pair.primary / reference_extent * 100.0);
    let secondary = PaneSize::Percent(pair.secondary / reference_extent * 100.0);
    if !primary.is_valid() || !secondary.is_valid() {
        return None;
    }

    let mut next = current.to_vec();
    next[primary_idx] = primary;
    next[secondary_idx] = secondary;
    Some(next)
}
