pub mod drag;
pub mod host;
pub mod layout;
pub mod resize;
pub mod splitter;

pub use drag::{DragSession, DragState};
pub use host::{
    EventScope, GeometryProvider, HostEvent, ListenerKind, ListenerRegistry, ListenerToken,
    NoSelection, SelectionClearer, SizeChangeSink,
};
pub use layout::{compute_initial_sizes, resolve_initial_sizes, FlowGeometry};
pub use resize::{PairResize, SizeLimits};
pub use splitter::{
    Attachment, Divider, Pane, RenderItem, ResizeCursor, Splitter, SplitterOptions,
};
