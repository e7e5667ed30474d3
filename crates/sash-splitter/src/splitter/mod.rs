mod operations;
mod types;


pub use types::*;
