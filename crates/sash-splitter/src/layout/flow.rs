//! Flow geometry: lays panes and dividers end to end along the split axis.
//!
//! This is what a flex row/column host does with the published sizes. The
//! headless host and the tests use it as the [`GeometryProvider`], and to
//! find which divider sits under the pointer on pointer-down.

use sash_common::{ElementRef, Orientation, PaneSize, Point, Rect};

use crate::host::GeometryProvider;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct FlowGeometry {
    orientation: Orientation,
    container: Rect,
    divider_extent: f64,
    panes: Vec<Rect>,
    dividers: Vec<Rect>,
}

impl FlowGeometry {
    /// Half-width of the grab zone around a divider's centre line.
    const HIT_HALF_WIDTH: f64 = 6.0;

    pub fn new(orientation: Orientation, container: Rect, divider_extent: f64) -> Self {
        Self {
            orientation,
            container,
            divider_extent,
            panes: Vec::new(),
            dividers: Vec::new(),
        }
    }

    pub fn container(&self) -> Rect {
        self.container
    }

    /// Move or resize the container. Call [`reflow`](Self::reflow) afterwards.
    pub fn set_container(&mut self, container: Rect) {
        self.container = container;
    }

    pub fn pane_count(&self) -> usize {
        self.panes.len()
    }

    /// Lay out one pane per entry in `sizes`, with a divider between each
    /// consecutive pair.
    pub fn reflow(&mut self, sizes: &[PaneSize]) {
        let extent = self.container.extent(self.orientation);
        let mut cursor = self.container.leading_edge(self.orientation);

        self.panes.clear();
        self.dividers.clear();

        for (i, size) in sizes.iter().enumerate() {
            let length = size.to_length(extent).max(0.0);
            self.panes.push(self.band(cursor, length));
            cursor += length;

            if i + 1 < sizes.len() {
                self.dividers.push(self.band(cursor, self.divider_extent));
                cursor += self.divider_extent;
            }
        }
    }

    /// Index of the divider whose grab zone contains `point`.
    pub fn divider_at(&self, point: Point) -> Option<usize> {
        let along = point.along(self.orientation);
        let (across, start, end) = match self.orientation {
            Orientation::Horizontal => (point.x, self.container.x, self.container.x + self.container.width),
            Orientation::Vertical => (point.y, self.container.y, self.container.y + self.container.height),
        };
        if across < start || across > end {
            return None;
        }

        self.dividers.iter().position(|d| {
            let half = d.extent(self.orientation) / 2.0;
            let centre = d.leading_edge(self.orientation) + half;
            (along - centre).abs() <= half.max(Self::HIT_HALF_WIDTH)
        })
    }

    /// A full-width (or full-height) slice of the container starting at
    /// `offset` along the split axis.
    fn band(&self, offset: f64, length: f64) -> Rect {
        let c = self.container;
        match self.orientation {
            Orientation::Horizontal => Rect::new(c.x, offset, c.width, length),
            Orientation::Vertical => Rect::new(offset, c.y, length, c.height),
        }
    }
}

impl GeometryProvider for FlowGeometry {
    fn bounds(&self, element: ElementRef) -> Option<Rect> {
        match element {
            ElementRef::Container => Some(self.container),
            ElementRef::Pane(i) => self.panes.get(i).copied(),
            ElementRef::Divider(i) => self.dividers.get(i).copied(),
        }
    }
}
