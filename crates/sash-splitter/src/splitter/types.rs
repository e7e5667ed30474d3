//! Core types and constructors for Splitter.

use sash_common::{Orientation, PaneSize, SplitterError};
use serde::{Deserialize, Serialize};

use crate::drag::DragSession;
use crate::host::{ListenerToken, SizeChangeSink};
use crate::layout::{DEFAULT_DIVIDER_SIZE, DEFAULT_PANE_SIZE};

/// Construction options for a [`Splitter`].
#[derive(Debug, Clone, PartialEq)]
pub struct SplitterOptions {
    /// Required. `None` is rejected by [`Splitter::new`].
    pub orientation: Option<Orientation>,
    /// Divider thickness along the split axis.
    pub divider_size: f64,
    /// Per-pane minimum lengths; missing entries mean no minimum.
    pub min_sizes: Vec<f64>,
    /// Starting sizes used at mount instead of an even split.
    pub initial_sizes: Option<Vec<PaneSize>>,
}

impl SplitterOptions {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation: Some(orientation),
            divider_size: DEFAULT_DIVIDER_SIZE,
            min_sizes: Vec::new(),
            initial_sizes: None,
        }
    }

    pub fn with_divider_size(mut self, divider_size: f64) -> Self {
        self.divider_size = divider_size;
        self
    }

    pub fn with_min_sizes(mut self, min_sizes: Vec<f64>) -> Self {
        self.min_sizes = min_sizes;
        self
    }

    pub fn with_initial_sizes(mut self, initial_sizes: Vec<PaneSize>) -> Self {
        self.initial_sizes = Some(initial_sizes);
        self
    }
}

/// One resizable region.
#[derive(Debug, Clone, PartialEq)]
pub struct Pane {
    pub index: usize,
    pub size: PaneSize,
}

/// Boundary between `primary_pane` and `secondary_pane = primary_pane + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Divider {
    pub index: usize,
    pub primary_pane: usize,
    pub secondary_pane: usize,
}

impl Divider {
    pub(super) fn between(index: usize) -> Self {
        Self {
            index,
            primary_pane: index,
            secondary_pane: index + 1,
        }
    }
}

/// Cursor shown over a divider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeCursor {
    /// Horizontal bar, drag up/down (`ns-resize`).
    RowResize,
    /// Vertical bar, drag left/right (`ew-resize`).
    ColResize,
}

impl From<Orientation> for ResizeCursor {
    fn from(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Horizontal => ResizeCursor::RowResize,
            Orientation::Vertical => ResizeCursor::ColResize,
        }
    }
}

/// What the rendering host draws for one render pass, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "item", rename_all = "snake_case")]
pub enum RenderItem {
    Pane {
        index: usize,
        size: PaneSize,
    },
    Divider {
        index: usize,
        orientation: Orientation,
        thickness: f64,
        cursor: ResizeCursor,
    },
}

/// Listener tokens held while attached to an event scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attachment {
    pub resize: ListenerToken,
    pub pointer_move: ListenerToken,
    pub pointer_up: ListenerToken,
}

/// The resize engine behind a multi-pane splitter: pane and divider
/// arenas, the drag session, and the published size sequence.
pub struct Splitter {
    pub(super) orientation: Orientation,
    pub(super) divider_size: f64,
    pub(super) min_sizes: Vec<f64>,
    pub(super) initial_sizes: Option<Vec<PaneSize>>,
    /// Indexed by pane index.
    pub(super) panes: Vec<Pane>,
    /// Indexed by divider index; always `panes.len() - 1` entries.
    pub(super) dividers: Vec<Divider>,
    pub(super) session: DragSession,
    /// Pane count the current sizes were seeded for at mount.
    pub(super) seeded_for: Option<usize>,
    pub(super) attachment: Option<Attachment>,
    pub(super) on_size_change: Option<Box<dyn SizeChangeSink>>,
}

impl Splitter {
    /// Validate `options` and create a splitter with no panes.
    pub fn new(options: SplitterOptions) -> Result<Self, SplitterError> {
        let orientation = options
            .orientation
            .ok_or_else(|| SplitterError::InvalidConfig("orientation is required".into()))?;

        if !options.divider_size.is_finite() || options.divider_size < 0.0 {
            return Err(SplitterError::InvalidConfig(format!(
                "divider size must be a non-negative length, got {}",
                options.divider_size
            )));
        }
        if let Some((i, min)) = options
            .min_sizes
            .iter()
            .enumerate()
            .find(|(_, m)| !m.is_finite() || **m < 0.0)
        {
            return Err(SplitterError::InvalidConfig(format!(
                "min size for pane {i} must be a non-negative length, got {min}"
            )));
        }
        if let Some(sizes) = &options.initial_sizes {
            if let Some(bad) = sizes.iter().find(|s| !s.is_valid()) {
                return Err(SplitterError::InvalidConfig(format!(
                    "invalid initial size {bad}"
                )));
            }
        }

        Ok(Self {
            orientation,
            divider_size: options.divider_size,
            min_sizes: options.min_sizes,
            initial_sizes: options.initial_sizes,
            panes: Vec::new(),
            dividers: Vec::new(),
            session: DragSession::new(),
            seeded_for: None,
            attachment: None,
            on_size_change: None,
        })
    }

    /// Install the listener notified on every published size change.
    pub fn with_size_listener(mut self, sink: impl SizeChangeSink + 'static) -> Self {
        self.on_size_change = Some(Box::new(sink));
        self
    }

    pub fn set_size_listener(&mut self, sink: Option<Box<dyn SizeChangeSink>>) {
        self.on_size_change = sink;
    }

    // -- Accessors --

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn divider_size(&self) -> f64 {
        self.divider_size
    }

    pub fn pane_count(&self) -> usize {
        self.panes.len()
    }

    pub fn panes(&self) -> &[Pane] {
        &self.panes
    }

    pub fn dividers(&self) -> &[Divider] {
        &self.dividers
    }

    pub fn pane_sizes(&self) -> Vec<PaneSize> {
        self.panes.iter().map(|p| p.size).collect()
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    pub fn is_resizing(&self) -> bool {
        self.session.is_resizing()
    }

    pub fn is_mounted(&self) -> bool {
        self.seeded_for.is_some()
    }

    pub fn attachment(&self) -> Option<Attachment> {
        self.attachment
    }

    // -- Render pass --

    /// Rebuild the pane and divider arenas for `count` children. Existing
    /// panes keep their sizes; new panes start at the default size.
    pub fn sync_children(&mut self, count: usize) {
        if count == self.panes.len() {
            return;
        }

        self.panes.truncate(count);
        for index in self.panes.len()..count {
            self.panes.push(Pane {
                index,
                size: DEFAULT_PANE_SIZE,
            });
        }
        self.dividers = (0..count.saturating_sub(1)).map(Divider::between).collect();

        if let Some(active) = self.session.active_divider() {
            if self.session.is_resizing() && active >= self.dividers.len() {
                tracing::debug!(divider = active, "active divider removed, ending drag");
                self.session.end();
            }
        }
    }

    /// Interleave panes and dividers for the rendering host.
    pub fn render(&self) -> Vec<RenderItem> {
        let mut items = Vec::with_capacity(self.panes.len() + self.dividers.len());
        for pane in &self.panes {
            items.push(RenderItem::Pane {
                index: pane.index,
                size: pane.size,
            });
            if let Some(divider) = self.dividers.get(pane.index) {
                items.push(RenderItem::Divider {
                    index: divider.index,
                    orientation: self.orientation,
                    thickness: self.divider_size,
                    cursor: self.orientation.into(),
                });
            }
        }
        items
    }
}
