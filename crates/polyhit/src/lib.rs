//! Point-in-polygon hit testing over multi-contour vertex buffers.
//!
//! Preprocess-once / query-many: an interactive collaborator streams
//! vertices into a [`ContourSet`] while the mouse drags, rebuilds a
//! [`SlabIndex`] on release, and asks [`SlabIndex::contains`] on every
//! cursor move with a caller-owned scratch buffer. Containment uses the
//! even-odd rule, so winding direction, nesting, and overlapping contours
//! need no special cases.

pub mod contour;
pub mod engine;
pub mod slab;
pub mod synth;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use contour::ContourSet;
pub use engine::HitTester;
pub use nalgebra::Vector2 as Vec2;
pub use slab::{build_index, ActiveEdge, QueryError, SlabIndex};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::contour::ContourSet;
    pub use crate::engine::HitTester;
    pub use crate::slab::{build_index, ActiveEdge, QueryError, SlabIndex};
    pub use crate::synth::{synthetic_ring, warm_up, ReplayToken, RingCfg, VertexCount};
    pub use nalgebra::Vector2 as Vec2;
}
