mod calculation;
mod flow;

pub use calculation::*;
pub use flow::FlowGeometry;
