//! # lemscope Provider - Gemini
//!
//! Google Gemini implementation of [`lemscope_protocols::SliceAnalyzer`].

mod analyzer;
mod client;
pub mod prompts;
mod types;

pub use analyzer::GeminiAnalyzer;
pub use client::GeminiClient;
pub use types::*;
