mod core;
mod size;

pub use self::core::*;
pub use size::*;
