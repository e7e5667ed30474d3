use serde::{Deserialize, Serialize};

mod action_enum;
mod dispatch;

pub use action_enum::*;
pub use dispatch::*;

/// Kind of document an editor tab hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    Card,
}
