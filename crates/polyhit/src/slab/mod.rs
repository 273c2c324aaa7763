//! Slab decomposition for even-odd point-in-polygon queries.
//!
//! Purpose
//! - Turn a `ContourSet` into an immutable query structure: the sorted
//!   y-breakpoints of all non-horizontal edge endpoints plus, per slab, the
//!   active edges in ascending x order.
//! - Answer containment in O(log S + log m) with a caller-owned scratch
//!   buffer; no allocation on the hot path.
//!
//! Why this design
//! - Strictly between two consecutive breakpoints no edge starts, ends, or
//!   crosses another, so each slab's edge list and x-order are fixed at
//!   build time and a query only interpolates and counts.
//! - The half-open rule `y_lo <= y < y_hi` on each edge's own endpoints
//!   attributes a shared vertex to exactly one of its two edges, so parity
//!   never double- or zero-counts at breakpoints.

mod build;
mod query;
mod types;

pub use build::build_index;
pub use types::{ActiveEdge, QueryError, SlabIndex};

#[cfg(test)]
mod tests;
