//! Host event routing.

use sash_common::Rect;
use sash_splitter::{HostEvent, NoSelection};

use super::core::SashApp;

impl SashApp {
    /// Deliver one host event to the splitter. Events nobody is listening
    /// for are dropped. Returns whether new sizes were published.
    pub fn handle_host_event(&mut self, event: HostEvent) -> bool {
        if !self.listeners.wants(&event) {
            tracing::debug!(?event, "no listener, dropping event");
            return false;
        }

        let published = self
            .splitter
            .handle_event(event, &self.geometry, &NoSelection);
        if published {
            self.reflow();
        }
        published
    }

    /// Resize the container and notify the splitter.
    pub fn resize_container(&mut self, width: f64, height: f64) -> bool {
        let current = self.geometry.container();
        self.geometry
            .set_container(Rect::new(current.x, current.y, width, height));
        self.reflow();
        let published = self.handle_host_event(HostEvent::ContainerResized);
        tracing::info!(width, height, "container resized");
        published
    }
}
