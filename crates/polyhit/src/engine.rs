//! Drawing-session facade: contour edits, rebuilds, atomic publish.
//!
//! One logical writer appends vertices and closes contours; `rebuild`
//! produces a fresh immutable [`SlabIndex`] and swaps it in. Queries running
//! against a previously obtained `Arc` keep observing the old structure
//! until they drop it; none ever sees a partially built one.

use std::sync::Arc;

use nalgebra::Vector2;

use crate::contour::ContourSet;
use crate::slab::{build_index, QueryError, SlabIndex};

/// Mutable contour store plus the currently published query structure.
#[derive(Clone, Debug, Default)]
pub struct HitTester {
    contours: ContourSet,
    index: Arc<SlabIndex>,
}

impl HitTester {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vertex to the open contour (mouse drag).
    #[inline]
    pub fn append_vertex(&mut self, x: f64, y: f64) {
        self.contours.append(x, y);
    }

    /// Close the open contour and start the next one.
    pub fn close_contour(&mut self) {
        self.contours.close_contour();
    }

    /// Drop all contours and publish an empty index.
    pub fn clear(&mut self) {
        self.contours.clear();
        self.index = Arc::new(SlabIndex::default());
    }

    /// Read access to the stored contours.
    pub fn contours(&self) -> &ContourSet {
        &self.contours
    }

    /// Rebuild from the current contours and publish the result (mouse
    /// release). Returns the new index so callers can re-size their scratch
    /// buffer via [`SlabIndex::required_scratch_size`].
    pub fn rebuild(&mut self) -> Arc<SlabIndex> {
        let index = Arc::new(build_index(&self.contours));
        self.index = Arc::clone(&index);
        index
    }

    /// Currently published index.
    pub fn index(&self) -> Arc<SlabIndex> {
        Arc::clone(&self.index)
    }

    /// Scratch capacity queries against the current index must provide.
    pub fn required_scratch_size(&self) -> usize {
        self.index.required_scratch_size()
    }

    /// Containment against the current index (cursor move).
    pub fn contains(&self, x: f64, y: f64, scratch: &mut [f64]) -> Result<bool, QueryError> {
        self.index.contains(Vector2::new(x, y), scratch)
    }
}
