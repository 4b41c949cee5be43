//! Error types for the lemscope analysis pipeline.

mod field;
mod pipeline;
mod provider;
mod screenshot;

pub use field::*;
pub use pipeline::*;
pub use provider::*;
pub use screenshot::*;
