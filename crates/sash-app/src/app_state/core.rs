//! SashApp struct definition and constructor.

use std::cell::RefCell;
use std::rc::Rc;

use sash_common::{Event, EventBus, PaneSize, Rect, SashError};
use sash_config::SashConfig;
use sash_explorer::CardStore;
use sash_splitter::{FlowGeometry, ListenerRegistry, Splitter, SplitterOptions};

use super::reports::LayoutReport;

/// Top-level application state.
pub struct SashApp {
    pub(super) config: SashConfig,
    pub(super) event_bus: Rc<EventBus>,

    // Splitter and the geometry it is laid out in
    pub(super) splitter: Splitter,
    pub(super) geometry: FlowGeometry,
    pub(super) listeners: ListenerRegistry,

    // Every size sequence the splitter published, oldest first
    pub(super) published: Rc<RefCell<Vec<Vec<PaneSize>>>>,

    // Card explorer state
    pub(super) cards: CardStore,
}

impl SashApp {
    /// Build the splitter described by `config`, attach it to the document
    /// listener table and mount it in the configured container.
    pub fn new(config: SashConfig, event_bus: Rc<EventBus>) -> Result<Self, SashError> {
        let orientation = config.splitter.orientation()?;

        let mut options = SplitterOptions::new(orientation)
            .with_divider_size(config.splitter.divider_size)
            .with_min_sizes(config.splitter.min_sizes.clone());
        if let Some(sizes) = config.splitter.initial_sizes() {
            options = options.with_initial_sizes(sizes.to_vec());
        }

        let published = Rc::new(RefCell::new(Vec::new()));
        let sink_log = Rc::clone(&published);
        let sink_bus = Rc::clone(&event_bus);
        let mut splitter = Splitter::new(options)?.with_size_listener(move |sizes: &[PaneSize]| {
            sink_log.borrow_mut().push(sizes.to_vec());
            sink_bus.publish(Event::PaneSizesChanged(sizes.to_vec()));
        });
        splitter.sync_children(config.splitter.panes as usize);

        let container = Rect::new(0.0, 0.0, config.container.width, config.container.height);
        let geometry = FlowGeometry::new(orientation, container, config.splitter.divider_size);

        let mut app = Self {
            config,
            event_bus,
            splitter,
            geometry,
            listeners: ListenerRegistry::new(),
            published,
            cards: CardStore::new(),
        };

        app.splitter.attach(&mut app.listeners)?;
        app.reflow();
        app.splitter.mount(&app.geometry)?;
        app.reflow();

        tracing::info!(
            panes = app.splitter.pane_count(),
            orientation = %orientation,
            "app ready"
        );
        Ok(app)
    }

    #[cfg(test)]
    pub fn splitter(&self) -> &Splitter {
        &self.splitter
    }

    pub fn geometry(&self) -> &FlowGeometry {
        &self.geometry
    }

    pub fn pane_sizes(&self) -> Vec<PaneSize> {
        self.splitter.pane_sizes()
    }

    /// Current sizes and render pass.
    pub fn layout(&self) -> LayoutReport {
        let orientation = self.splitter.orientation();
        LayoutReport {
            orientation,
            container_extent: self.geometry.container().extent(orientation),
            sizes: self.pane_sizes(),
            items: self.splitter.render(),
        }
    }

    /// Size sequences published since the last call.
    pub fn take_published(&self) -> Vec<Vec<PaneSize>> {
        std::mem::take(&mut *self.published.borrow_mut())
    }

    /// Release the document listeners. Ends any drag in progress.
    pub fn shutdown(&mut self) {
        if let Err(e) = self.splitter.detach(&mut self.listeners) {
            tracing::warn!("detach failed: {e}");
        }
        self.event_bus.publish(Event::Shutdown);
    }

    /// Lay the panes out again from the splitter's current sizes.
    pub(super) fn reflow(&mut self) {
        self.geometry.reflow(&self.splitter.pane_sizes());
    }
}
