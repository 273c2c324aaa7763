//! Containment queries against a built slab index.

use nalgebra::Vector2;

use super::types::{QueryError, SlabIndex};

impl SlabIndex {
    /// Even-odd containment test using the caller's scratch buffer.
    ///
    /// `scratch` must hold at least [`required_scratch_size`] slots and is
    /// used as working space only; nothing is retained across calls. A pure
    /// read of the index: concurrent callers are fine as long as each holds
    /// its own buffer.
    ///
    /// [`required_scratch_size`]: SlabIndex::required_scratch_size
    pub fn contains(&self, p: Vector2<f64>, scratch: &mut [f64]) -> Result<bool, QueryError> {
        if scratch.len() < self.scratch {
            return Err(QueryError::ScratchTooSmall {
                required: self.scratch,
                len: scratch.len(),
            });
        }
        Ok(self.crossings_left_of(p, scratch) % 2 == 1)
    }

    /// Allocation-based convenience path for low-frequency, setup-time use:
    /// same algorithm, transient exact-sized buffer.
    pub fn contains_alloc(&self, p: Vector2<f64>) -> bool {
        let mut scratch = vec![0.0; self.scratch];
        self.crossings_left_of(p, &mut scratch) % 2 == 1
    }

    /// Count active edges whose x at `p.y` lies strictly left of `p.x`.
    /// Callers guarantee `scratch.len() >= self.scratch`.
    fn crossings_left_of(&self, p: Vector2<f64>, scratch: &mut [f64]) -> usize {
        if self.breaks.len() < 2 {
            return 0;
        }
        let y = p.y;
        if y < self.breaks[0] || y > self.breaks[self.breaks.len() - 1] {
            return 0;
        }
        // Slab holding y, half-open so y == breaks[s] lands in slab s.
        // y at the global top clamps into the last slab, where the per-edge
        // span test rejects every entry.
        let s = self
            .breaks
            .partition_point(|b| *b <= y)
            .min(self.breaks.len() - 1)
            - 1;
        let mut m = 0usize;
        for e in self.slab(s) {
            if e.spans(y) {
                scratch[m] = e.x_at(y);
                m += 1;
            }
        }
        // scratch[..m] is ascending (the slab's x-order survives the span
        // filter), so a binary search yields the crossing count.
        scratch[..m].partition_point(|&x| x < p.x)
    }
}
