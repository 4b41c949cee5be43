//! Slice-local to page-space coordinate mapping.

use lemscope_protocols::RawMarker;

use crate::slicer::Slice;

/// Local y assumed for markers that arrive without one.
const SLICE_CENTER: f64 = 50.0;

/// Slice geometry with prefix-summed offsets.
///
/// Built once from the slicer's output, so stitching any slice depends only
/// on its index and never on the order analyzer results arrive in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceLayout {
    heights: Vec<u32>,
    offsets: Vec<u64>,
    total_height: u64,
}

impl SliceLayout {
    pub fn new(heights: Vec<u32>) -> Self {
        let mut offsets = Vec::with_capacity(heights.len());
        let mut running = 0u64;
        for height in &heights {
            offsets.push(running);
            running += u64::from(*height);
        }
        Self {
            heights,
            offsets,
            total_height: running,
        }
    }

    pub fn from_slices(slices: &[Slice]) -> Self {
        Self::new(slices.iter().map(|s| s.height_pixels).collect())
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    pub fn total_height(&self) -> u64 {
        self.total_height
    }

    /// Pixel offset of a slice from the top of the page.
    pub fn offset(&self, index: usize) -> Option<u64> {
        self.offsets.get(index).copied()
    }

    pub fn height(&self, index: usize) -> Option<u32> {
        self.heights.get(index).copied()
    }

    /// Map a slice-local y percentage to a page y percentage.
    ///
    /// Not clamped: analyzer noise at slice edges may land slightly outside
    /// 0-100. Returns `None` for an unknown slice or an empty layout.
    pub fn global_y(&self, index: usize, local_y: f64) -> Option<f64> {
        let offset = self.offset(index)?;
        let height = self.height(index)?;
        if self.total_height == 0 {
            return None;
        }
        let local_px = local_y / 100.0 * f64::from(height);
        let global_px = offset as f64 + local_px;
        Some(global_px / self.total_height as f64 * 100.0)
    }

    /// Rewrite a raw marker's y into page space. x is full-width already.
    pub fn stitch(&self, index: usize, mut marker: RawMarker) -> Option<RawMarker> {
        let local_y = marker.y.unwrap_or(SLICE_CENTER);
        marker.y = Some(self.global_y(index, local_y)?);
        Some(marker)
    }
}

#[cfg(test)]
#[path = "stitcher_tests.rs"]
mod tests;
