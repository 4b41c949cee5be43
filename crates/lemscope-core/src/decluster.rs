//! Pairwise relaxation of markers placed too close together.

use std::f64::consts::TAU;

use tracing::debug;
use uuid::Uuid;

use lemscope_config::AnalysisConfig;
use lemscope_protocols::Marker;

/// Pairs closer than this have no usable push direction of their own.
pub const COINCIDENT_DISTANCE: f64 = 0.01;

const X_RANGE: (f64, f64) = (2.0, 98.0);
const Y_RANGE: (f64, f64) = (0.5, 99.5);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeclusterConfig {
    /// Minimum desired distance between two markers in 0-100 space.
    pub spread_threshold: f64,
    /// Fixed number of relaxation passes.
    pub iterations: u32,
    /// Relaxation is skipped for marker sets of this size or smaller.
    pub min_markers: usize,
}

impl Default for DeclusterConfig {
    fn default() -> Self {
        Self {
            spread_threshold: 3.0,
            iterations: 5,
            min_markers: 5,
        }
    }
}

impl From<&AnalysisConfig> for DeclusterConfig {
    fn from(config: &AnalysisConfig) -> Self {
        Self {
            spread_threshold: config.spread_threshold,
            iterations: config.decluster_iterations,
            min_markers: config.decluster_min_markers,
        }
    }
}

/// Symmetric pairwise repulsion with a fixed pass budget.
///
/// Deterministic for a given input order, positions and ids.
#[derive(Debug, Clone, Default)]
pub struct DeclusterEngine {
    config: DeclusterConfig,
}

impl DeclusterEngine {
    pub fn new(config: DeclusterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DeclusterConfig {
        &self.config
    }

    /// Small marker sets are left at their sanitized coordinates.
    pub fn should_apply(&self, count: usize) -> bool {
        count > self.config.min_markers
    }

    /// Relax `markers` if there are enough of them. Returns whether it ran.
    pub fn apply(&self, markers: &mut [Marker]) -> bool {
        if !self.should_apply(markers.len()) {
            return false;
        }
        self.relax(markers);
        true
    }

    /// Push close pairs apart, then clamp everything onto the canvas.
    pub fn relax(&self, markers: &mut [Marker]) {
        let threshold = self.config.spread_threshold;
        let mut moves = 0usize;

        for _ in 0..self.config.iterations {
            for j in 0..markers.len() {
                let (head, tail) = markers.split_at_mut(j + 1);
                let first = &mut head[j];
                for second in tail.iter_mut() {
                    let dx = first.x - second.x;
                    let dy = first.y - second.y;
                    let distance = first.distance_to(second);
                    if distance >= threshold {
                        continue;
                    }

                    let (ux, uy) = if distance > COINCIDENT_DISTANCE {
                        (dx / distance, dy / distance)
                    } else {
                        tie_break_direction(&first.id, &second.id)
                    };
                    let push = (threshold - distance) * 0.5;

                    first.x += ux * push;
                    first.y += uy * push;
                    second.x -= ux * push;
                    second.y -= uy * push;
                    moves += 1;
                }
            }
        }

        for marker in markers.iter_mut() {
            marker.x = marker.x.clamp(X_RANGE.0, X_RANGE.1);
            marker.y = marker.y.clamp(Y_RANGE.0, Y_RANGE.1);
        }

        debug!(
            "Relaxed {} markers in {} passes ({} pair moves)",
            markers.len(),
            self.config.iterations,
            moves
        );
    }
}

/// Unit vector for separating two coincident markers, derived from their ids.
///
/// The angle comes from a name-based UUID of the id pair, so it is the same
/// on every platform and toolchain.
fn tie_break_direction(first_id: &str, second_id: &str) -> (f64, f64) {
    let name = format!("{}\u{0}{}", first_id, second_id);
    let (high, _) = Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes()).as_u64_pair();
    let angle = high as f64 / u64::MAX as f64 * TAU;
    (angle.cos(), angle.sin())
}

#[cfg(test)]
#[path = "decluster_tests.rs"]
mod tests;
