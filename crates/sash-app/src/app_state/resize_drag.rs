//! Scripted divider drags.
//!
//! Replays a grab, a series of evenly spaced pointer moves along the
//! split axis, and a release through the regular host event path.

use sash_common::{ElementRef, Event, Orientation, Point, SashError, SplitterError};
use sash_splitter::{GeometryProvider, HostEvent};

use super::core::SashApp;
use super::reports::DragReport;

impl SashApp {
    /// Drag `divider` from its current centre to `to` in `steps` moves.
    pub fn drag_divider(
        &mut self,
        divider: usize,
        to: f64,
        steps: u32,
    ) -> Result<DragReport, SashError> {
        let orientation = self.splitter.orientation();
        let bounds = self
            .geometry
            .bounds(ElementRef::Divider(divider))
            .ok_or(SplitterError::UnknownDivider(divider))?;
        let container = self.geometry.container();

        let from = bounds.leading_edge(orientation) + bounds.extent(orientation) / 2.0;
        // Keep the pointer on the container's centre line across the axis.
        let across = match orientation {
            Orientation::Horizontal => container.x + container.width / 2.0,
            Orientation::Vertical => container.y + container.height / 2.0,
        };
        let point_at = |along: f64| match orientation {
            Orientation::Horizontal => Point::new(across, along),
            Orientation::Vertical => Point::new(along, across),
        };

        self.take_published();

        self.handle_host_event(HostEvent::PointerDown { divider });
        if !self.splitter.is_resizing() {
            return Err(SashError::Other(format!("divider {divider} could not be grabbed")));
        }
        self.event_bus.publish(Event::DragStarted { divider });

        let steps = steps.max(1);
        for step in 1..=steps {
            let along = from + (to - from) * f64::from(step) / f64::from(steps);
            self.handle_host_event(HostEvent::pointer_move(point_at(along)));
        }

        self.handle_host_event(HostEvent::PointerUp);
        self.event_bus.publish(Event::DragEnded { divider });

        let frames = self.take_published();
        tracing::info!(divider, from, to, moves = frames.len(), "drag complete");
        Ok(DragReport {
            divider,
            from,
            to,
            frames,
            sizes: self.pane_sizes(),
        })
    }
}
