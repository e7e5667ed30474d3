//! Seams between the splitter and the UI host that embeds it.
//!
//! The host owns real elements, pointer events and text selection; the
//! splitter only sees them through these traits, so tests can drive it
//! with fake geometry.

use std::collections::HashMap;

use sash_common::{ElementRef, PaneSize, Point, Rect};
use serde::{Deserialize, Serialize};

/// Reads the current bounding box of a host element, in the same
/// coordinate space as pointer events. `None` when the element is not
/// mounted or cannot be measured.
pub trait GeometryProvider {
    fn bounds(&self, element: ElementRef) -> Option<Rect>;
}

/// Clears any text selection made as a side effect of dragging.
/// Best effort: implementations must not fail.
pub trait SelectionClearer {
    fn clear_selection(&self);
}

/// For hosts without text selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSelection;

impl SelectionClearer for NoSelection {
    fn clear_selection(&self) {}
}

/// Receives the full pane-size sequence every time the splitter publishes.
pub trait SizeChangeSink {
    fn sizes_changed(&self, sizes: &[PaneSize]);
}

impl<F> SizeChangeSink for F
where
    F: Fn(&[PaneSize]),
{
    fn sizes_changed(&self, sizes: &[PaneSize]) {
        self(sizes)
    }
}

// =============================================================================
// EVENTS
// =============================================================================

/// Input delivered by the host at document scope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HostEvent {
    /// Pointer pressed on a divider.
    PointerDown { divider: usize },
    PointerMove { x: f64, y: f64 },
    /// Pointer released anywhere in the document.
    PointerUp,
    /// The window (and so the container) changed size.
    ContainerResized,
}

impl HostEvent {
    pub fn pointer_move(point: Point) -> Self {
        HostEvent::PointerMove {
            x: point.x,
            y: point.y,
        }
    }
}

/// Document-scope listeners the splitter registers while attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListenerKind {
    Resize,
    PointerMove,
    PointerUp,
}

/// Handle for one registered listener. Releasing uses the same token that
/// registration returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenerToken(pub u64);

pub trait EventScope {
    fn listen(&mut self, kind: ListenerKind) -> ListenerToken;
    /// Release a listener. Returns `false` if the token was not registered.
    fn unlisten(&mut self, token: ListenerToken) -> bool;
}

/// In-process listener table used by the headless host.
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    listeners: HashMap<ListenerToken, ListenerKind>,
    next_token: u64,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Number of live listeners of `kind`.
    pub fn count(&self, kind: ListenerKind) -> usize {
        self.listeners.values().filter(|k| **k == kind).count()
    }

    /// Whether an event of this kind currently has a listener to reach.
    pub fn wants(&self, event: &HostEvent) -> bool {
        let kind = match event {
            HostEvent::PointerMove { .. } => ListenerKind::PointerMove,
            HostEvent::PointerUp => ListenerKind::PointerUp,
            HostEvent::ContainerResized => ListenerKind::Resize,
            // Divider presses are bound on the divider elements themselves.
            HostEvent::PointerDown { .. } => return true,
        };
        self.count(kind) > 0
    }
}

impl EventScope for ListenerRegistry {
    fn listen(&mut self, kind: ListenerKind) -> ListenerToken {
        self.next_token += 1;
        let token = ListenerToken(self.next_token);
        self.listeners.insert(token, kind);
        token
    }

    fn unlisten(&mut self, token: ListenerToken) -> bool {
        self.listeners.remove(&token).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn registry_tokens_are_distinct() {
        let mut reg = ListenerRegistry::new();
        let a = reg.listen(ListenerKind::PointerMove);
        let b = reg.listen(ListenerKind::PointerMove);
        assert_ne!(a, b);
        assert_eq!(reg.count(ListenerKind::PointerMove), 2);
    }

    #[test]
    fn unlisten_releases_exact_token() {
        let mut reg = ListenerRegistry::new();
        let up = reg.listen(ListenerKind::PointerUp);
        let resize = reg.listen(ListenerKind::Resize);

        assert!(reg.unlisten(up));
        assert!(!reg.unlisten(up));
        assert_eq!(reg.count(ListenerKind::PointerUp), 0);
        assert_eq!(reg.count(ListenerKind::Resize), 1);

        assert!(reg.unlisten(resize));
        assert!(reg.is_empty());
    }

    #[test]
    fn wants_follows_registered_kinds() {
        let mut reg = ListenerRegistry::new();
        assert!(!reg.wants(&HostEvent::PointerUp));
        assert!(reg.wants(&HostEvent::PointerDown { divider: 0 }));

        reg.listen(ListenerKind::PointerUp);
        assert!(reg.wants(&HostEvent::PointerUp));
        assert!(!reg.wants(&HostEvent::pointer_move(Point::new(1.0, 1.0))));
    }

    #[test]
    fn closure_sink_receives_sizes() {
        let seen = RefCell::new(Vec::new());
        let sink = |sizes: &[PaneSize]| seen.borrow_mut().push(sizes.to_vec());
        sink.sizes_changed(&[PaneSize::Percent(50.0), PaneSize::Percent(50.0)]);
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(seen.borrow()[0][1], PaneSize::Percent(50.0));
    }

    #[test]
    fn closure_can_forward_to_event_bus() {
        use sash_common::{Event, EventBus};

        let bus = EventBus::new(4);
        let mut rx = bus.subscribe();
        let sink = |sizes: &[PaneSize]| {
            bus.publish(Event::PaneSizesChanged(sizes.to_vec()));
        };
        sink.sizes_changed(&[PaneSize::Percent(100.0)]);
        let event = rx.try_recv().unwrap();
        assert!(matches!(event, Event::PaneSizesChanged(ref s) if s.len() == 1));
    }

    #[test]
    fn host_event_json_shape() {
        let json = serde_json::to_string(&HostEvent::PointerDown { divider: 1 }).unwrap();
        assert_eq!(json, r#"{"kind":"pointer_down","divider":1}"#);
        let back: HostEvent = serde_json::from_str(r#"{"kind":"pointer_move","x":3.0,"y":4.5}"#).unwrap();
        assert_eq!(back, HostEvent::PointerMove { x: 3.0, y: 4.5 });
    }
}
