//! Recoverable marker field errors.

use thiserror::Error;

/// A raw marker field that could not be used as delivered.
///
/// Never fatal: the sanitizer either defaults the field or drops the
/// marker and logs the reason.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyzerFieldError {
    #[error("Marker placed on the horizontal edge (x = {x})")]
    EdgePlacement { x: f64 },
}
