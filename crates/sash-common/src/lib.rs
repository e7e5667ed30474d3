pub mod actions;
pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use actions::{Action, ActionLog, CardContent, ContentType, Dispatch};
pub use errors::{ConfigError, ExplorerError, LayoutError, SashError, SplitterError};
pub use events::{Event, EventBus};
pub use id::new_id;
pub use types::{ElementRef, Orientation, PaneSize, ParsePaneSizeError, Point, Rect};

pub type Result<T> = std::result::Result<T, SashError>;
