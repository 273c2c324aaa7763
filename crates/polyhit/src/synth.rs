//! Synthetic contours and the query warm-up harness.
//!
//! Purpose
//! - Deterministic star-shaped rings for benches, property tests, and the
//!   warm-up pass that stabilizes timing (caches, branch predictors) before
//!   interactive use.
//!
//! Model
//! - `n` sorted, jittered angles on [0, 2π) with jittered radii give a
//!   simple closed contour around the origin.
//! - Determinism uses a replay token `(seed, index)` mixed into a single
//!   RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::contour::ContourSet;
use crate::slab::SlabIndex;

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter ring sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RingCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    /// Circumradius scale of the ring.
    pub base_radius: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}
impl Default for RingCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(24),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw one star-shaped closed contour around the origin.
///
/// Sorted angles keep the ring free of self-intersections; the slab order
/// tests rely on that, containment itself does not.
pub fn synthetic_ring(cfg: RingCfg, tok: ReplayToken) -> ContourSet {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.max(0.0);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    let mut angles: Vec<f64> = (0..n)
        .map(|k| {
            let base = phase + (k as f64) * delta;
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            base + jitter
        })
        .collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mut set = ContourSet::new();
    for th in angles {
        let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
        let r = (1.0 + u).max(1e-6) * r0;
        set.push(Vector2::new(th.cos() * r, th.sin() * r));
    }
    set.close_contour();
    set
}

/// Run `queries` pseudo-random containment tests against `index` with one
/// reused scratch buffer, points uniform over `[-half_extent, half_extent]²`.
///
/// Returns the inside count; warm-up callers discard it. No contract beyond
/// "run N synthetic queries against this structure".
pub fn warm_up(index: &SlabIndex, queries: usize, half_extent: f64, tok: ReplayToken) -> usize {
    let mut rng = tok.to_std_rng();
    let mut scratch = vec![0.0; index.required_scratch_size()];
    let h = half_extent.abs();
    let mut inside = 0usize;
    for _ in 0..queries {
        let p = Vector2::new(rng.gen_range(-h..=h), rng.gen_range(-h..=h));
        if index.contains(p, &mut scratch).unwrap_or(false) {
            inside += 1;
        }
    }
    inside
}
