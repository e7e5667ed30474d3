//! Splitter operations: mount, drag handling, container resize, and
//! listener attachment.

use sash_common::{ElementRef, PaneSize, Point, SplitterError};
use tracing::{debug, info, warn};

use super::{Attachment, Splitter};
use crate::host::{EventScope, GeometryProvider, HostEvent, ListenerKind, SelectionClearer};
use crate::layout::resolve_initial_sizes;
use crate::resize::{apply_pair, resize_pair, SizeLimits};

impl Splitter {
    /// Measure the container and seed every pane with its initial size.
    pub fn mount(&mut self, geometry: &impl GeometryProvider) -> Result<(), SplitterError> {
        let container = geometry
            .bounds(ElementRef::Container)
            .ok_or(SplitterError::MissingGeometry(ElementRef::Container))?;
        let extent = container.extent(self.orientation);

        let sizes = resolve_initial_sizes(
            self.initial_sizes.as_deref(),
            extent,
            self.panes.len(),
            self.divider_size,
        )?;

        info!(
            orientation = %self.orientation,
            panes = self.panes.len(),
            extent,
            "splitter mounted"
        );
        self.seeded_for = Some(self.panes.len());
        self.publish(sizes);
        Ok(())
    }

    /// Pointer-down on divider `index`: start a drag session.
    ///
    /// Returns `Ok(false)` when a drag is already in progress; that press
    /// is ignored.
    pub fn grab_divider(
        &mut self,
        index: usize,
        geometry: &impl GeometryProvider,
        selection: &impl SelectionClearer,
    ) -> Result<bool, SplitterError> {
        if index >= self.dividers.len() {
            return Err(SplitterError::UnknownDivider(index));
        }
        if self.session.is_resizing() {
            debug!(
                divider = index,
                active = ?self.session.active_divider(),
                "drag already in progress, ignoring grab"
            );
            return Ok(false);
        }

        let divider_bounds = geometry
            .bounds(ElementRef::Divider(index))
            .ok_or(SplitterError::MissingGeometry(ElementRef::Divider(index)))?;
        let container = geometry
            .bounds(ElementRef::Container)
            .ok_or(SplitterError::MissingGeometry(ElementRef::Container))?;

        selection.clear_selection();
        let started = self
            .session
            .begin(index, divider_bounds, container.extent(self.orientation));
        debug!(divider = index, "drag started");
        Ok(started)
    }

    /// Sizes that a pointer at `pointer` would produce while dragging
    /// `divider`. Reads live pane geometry; does not publish.
    ///
    /// `None` when no drag is active on `divider`, geometry is missing, or
    /// the arithmetic does not yield finite non-negative sizes.
    pub fn recompute_sizes(
        &self,
        divider: usize,
        pointer: Point,
        geometry: &impl GeometryProvider,
    ) -> Option<Vec<PaneSize>> {
        if !self.session.is_resizing() || self.session.active_divider() != Some(divider) {
            return None;
        }
        let d = self.dividers.get(divider)?;
        let divider_bounds = self.session.divider_bounds()?;

        let Some(primary) = geometry.bounds(ElementRef::Pane(d.primary_pane)) else {
            debug!(pane = d.primary_pane, "pane not measurable, skipping move");
            return None;
        };
        let Some(secondary) = geometry.bounds(ElementRef::Pane(d.secondary_pane)) else {
            debug!(pane = d.secondary_pane, "pane not measurable, skipping move");
            return None;
        };

        let pair = resize_pair(
            self.orientation,
            pointer,
            primary,
            secondary,
            divider_bounds.extent(self.orientation),
            self.limits_for(d.primary_pane, d.secondary_pane),
        )?;

        let current = self.pane_sizes();
        apply_pair(&current, divider, pair, self.session.container_extent())
    }

    /// Pointer-move anywhere in the document. Returns whether new sizes
    /// were published.
    pub fn handle_pointer_move(
        &mut self,
        pointer: Point,
        geometry: &impl GeometryProvider,
        selection: &impl SelectionClearer,
    ) -> bool {
        let Some(divider) = self.session.active_divider().filter(|_| self.is_resizing()) else {
            return false;
        };

        let published = match self.recompute_sizes(divider, pointer, geometry) {
            Some(sizes) => {
                self.publish(sizes);
                true
            }
            None => {
                debug!(divider, x = pointer.x, y = pointer.y, "resize skipped");
                false
            }
        };
        selection.clear_selection();
        published
    }

    /// Pointer-up anywhere in the document ends the drag.
    pub fn handle_pointer_up(&mut self) {
        if let Some(divider) = self.session.end() {
            debug!(divider, "drag ended");
        }
    }

    /// The container changed size. Published sizes are percentages and
    /// follow the container on their own; they are only re-seeded when the
    /// splitter was never mounted or the pane count changed since.
    pub fn handle_container_resize(
        &mut self,
        geometry: &impl GeometryProvider,
    ) -> Result<bool, SplitterError> {
        if self.seeded_for == Some(self.panes.len()) {
            debug!("container resized, sizes follow as percentages");
            return Ok(false);
        }
        self.mount(geometry)?;
        Ok(true)
    }

    /// Route one host event. Failures are logged and swallowed so the host
    /// event loop never sees them. Returns whether sizes were published.
    pub fn handle_event(
        &mut self,
        event: HostEvent,
        geometry: &impl GeometryProvider,
        selection: &impl SelectionClearer,
    ) -> bool {
        match event {
            HostEvent::PointerDown { divider } => {
                if let Err(e) = self.grab_divider(divider, geometry, selection) {
                    warn!("cannot start drag: {e}");
                }
                false
            }
            HostEvent::PointerMove { x, y } => {
                self.handle_pointer_move(Point::new(x, y), geometry, selection)
            }
            HostEvent::PointerUp => {
                self.handle_pointer_up();
                false
            }
            HostEvent::ContainerResized => match self.handle_container_resize(geometry) {
                Ok(published) => published,
                Err(e) => {
                    warn!("cannot re-seed after container resize: {e}");
                    false
                }
            },
        }
    }

    // -- Listener attachment --

    /// Register the resize, pointer-move and pointer-up listeners.
    pub fn attach(&mut self, scope: &mut impl EventScope) -> Result<Attachment, SplitterError> {
        if self.attachment.is_some() {
            return Err(SplitterError::AlreadyAttached);
        }
        let attachment = Attachment {
            resize: scope.listen(ListenerKind::Resize),
            pointer_move: scope.listen(ListenerKind::PointerMove),
            pointer_up: scope.listen(ListenerKind::PointerUp),
        };
        self.attachment = Some(attachment);
        info!("splitter attached");
        Ok(attachment)
    }

    /// Release exactly the listeners acquired by [`attach`](Self::attach).
    /// Any drag in progress ends.
    pub fn detach(&mut self, scope: &mut impl EventScope) -> Result<(), SplitterError> {
        let attachment = self.attachment.take().ok_or(SplitterError::NotAttached)?;
        for token in [attachment.resize, attachment.pointer_move, attachment.pointer_up] {
            if !scope.unlisten(token) {
                warn!(?token, "listener was already released");
            }
        }
        self.session.end();
        info!("splitter detached");
        Ok(())
    }

    // -- Internals --

    fn limits_for(&self, primary: usize, secondary: usize) -> SizeLimits {
        let defaults = SizeLimits::default();
        SizeLimits {
            min_primary: self.min_sizes.get(primary).copied().unwrap_or(defaults.min_primary),
            min_secondary: self
                .min_sizes
                .get(secondary)
                .copied()
                .unwrap_or(defaults.min_secondary),
        }
    }

    fn publish(&mut self, sizes: Vec<PaneSize>) {
        if sizes.len() != self.panes.len() || sizes.iter().any(|s| !s.is_valid()) {
            warn!(?sizes, "refusing to publish unusable pane sizes");
            return;
        }
        for (pane, size) in self.panes.iter_mut().zip(&sizes) {
            pane.size = *size;
        }
        if let Some(sink) = &self.on_size_change {
            sink.sizes_changed(&sizes);
        }
    }
}
