//! Contour storage for interactive polygon drawing.
//!
//! Purpose
//! - Hold the flat vertex buffer and the boundary markers separating closed
//!   contours, in the order the drawing collaborator streams them in.
//! - No geometric validation: self-intersecting, degenerate, or duplicate
//!   input is legal here; containment is defined by the parity rule alone.

use nalgebra::Vector2;

/// Ordered vertex buffer with contour boundary markers.
///
/// Invariants:
/// - `ends` is strictly increasing; `ends[i]` is the exclusive end of
///   contour `i` in `verts`.
/// - Vertices past the last marker form the open (in-progress) contour.
///
/// Every contour is implicitly closed: its last vertex connects back to its
/// first. Coordinates must be finite; NaN/Inf input is the caller's bug.
#[derive(Clone, Debug, Default)]
pub struct ContourSet {
    verts: Vec<Vector2<f64>>,
    ends: Vec<usize>,
}

impl ContourSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vertex to the currently open contour.
    #[inline]
    pub fn append(&mut self, x: f64, y: f64) {
        self.verts.push(Vector2::new(x, y));
    }

    /// Append a vertex given as a point.
    #[inline]
    pub fn push(&mut self, p: Vector2<f64>) {
        self.verts.push(p);
    }

    /// Mark the current vertex count as a boundary and start a new (empty)
    /// contour. Closing an empty contour is a no-op, so markers stay
    /// strictly increasing.
    pub fn close_contour(&mut self) {
        let end = self.verts.len();
        if self.ends.last().copied().unwrap_or(0) < end {
            self.ends.push(end);
        }
    }

    /// Back to the initial empty state.
    pub fn clear(&mut self) {
        self.verts.clear();
        self.ends.clear();
    }

    /// Total vertex count across all contours.
    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    /// Number of contours, counting the open one if it has vertices.
    pub fn contour_count(&self) -> usize {
        let closed_end = self.ends.last().copied().unwrap_or(0);
        self.ends.len() + usize::from(self.verts.len() > closed_end)
    }

    /// Iterate contours as vertex slices, the open trailing run included.
    /// A rebuild between press and release thus sees the in-progress
    /// contour as implicitly closed.
    pub fn contours(&self) -> impl Iterator<Item = &[Vector2<f64>]> + '_ {
        let closed_end = self.ends.last().copied().unwrap_or(0);
        let tail = (closed_end < self.verts.len()).then_some(self.verts.len());
        self.ends
            .iter()
            .copied()
            .chain(tail)
            .scan(0usize, move |start, end| {
                let s = *start;
                *start = end;
                Some(&self.verts[s..end])
            })
    }
}
