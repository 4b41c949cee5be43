//! Domain types shared across the lemscope workspace.

mod marker;
mod report;
mod result;

pub use marker::*;
pub use report::*;
pub use result::*;
