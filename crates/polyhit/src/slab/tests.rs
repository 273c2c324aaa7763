//! Containment and structure tests for the slab index.
//!
//! The brute-force reference below applies the same half-open crossing rule
//! directly to the full edge list, so the indexed and unindexed paths must
//! agree bit-for-bit on every query point.

use super::*;
use crate::contour::ContourSet;
use crate::synth::{synthetic_ring, ReplayToken, RingCfg, VertexCount};
use nalgebra::Vector2;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn push_square(set: &mut ContourSet, x0: f64, y0: f64, x1: f64, y1: f64) {
    set.append(x0, y0);
    set.append(x1, y0);
    set.append(x1, y1);
    set.append(x0, y1);
    set.close_contour();
}

fn push_square_reversed(set: &mut ContourSet, x0: f64, y0: f64, x1: f64, y1: f64) {
    set.append(x0, y1);
    set.append(x1, y1);
    set.append(x1, y0);
    set.append(x0, y0);
    set.close_contour();
}

/// O(E) even-odd reference over the full edge list.
fn brute_force_contains(set: &ContourSet, p: Vector2<f64>) -> bool {
    let mut crossings = 0usize;
    for ring in set.contours() {
        for i in 0..ring.len() {
            let a = ring[i];
            let b = ring[(i + 1) % ring.len()];
            if a.y == b.y {
                continue;
            }
            let (lo, hi) = if a.y < b.y { (a, b) } else { (b, a) };
            if lo.y <= p.y && p.y < hi.y {
                let x = lo.x + (p.y - lo.y) * (hi.x - lo.x) / (hi.y - lo.y);
                if x < p.x {
                    crossings += 1;
                }
            }
        }
    }
    crossings % 2 == 1
}

#[test]
fn convex_square_sanity() {
    let mut set = ContourSet::new();
    push_square(&mut set, 0.0, 0.0, 10.0, 10.0);
    let index = build_index(&set);
    let mut scratch = vec![0.0; index.required_scratch_size()];

    assert_eq!(index.contains(Vector2::new(5.0, 5.0), &mut scratch), Ok(true));
    assert_eq!(index.contains(Vector2::new(15.0, 5.0), &mut scratch), Ok(false));
    assert_eq!(index.contains(Vector2::new(-1.0, -1.0), &mut scratch), Ok(false));

    // Boundary points resolve deterministically under the half-open,
    // strictly-left rules: the left/top edges count as outside, the
    // right/bottom edges as inside.
    for _ in 0..3 {
        assert_eq!(index.contains(Vector2::new(0.0, 5.0), &mut scratch), Ok(false));
        assert_eq!(index.contains(Vector2::new(10.0, 5.0), &mut scratch), Ok(true));
        assert_eq!(index.contains(Vector2::new(5.0, 0.0), &mut scratch), Ok(true));
        assert_eq!(index.contains(Vector2::new(5.0, 10.0), &mut scratch), Ok(false));
    }
}

#[test]
fn hole_via_parity_either_winding() {
    for reversed_inner in [false, true] {
        let mut set = ContourSet::new();
        push_square(&mut set, 0.0, 0.0, 10.0, 10.0);
        if reversed_inner {
            push_square_reversed(&mut set, 3.0, 3.0, 7.0, 7.0);
        } else {
            push_square(&mut set, 3.0, 3.0, 7.0, 7.0);
        }
        let index = build_index(&set);
        let mut scratch = vec![0.0; index.required_scratch_size()];

        // Strictly inside the inner square: outside (a hole).
        assert_eq!(index.contains(Vector2::new(5.0, 5.0), &mut scratch), Ok(false));
        // Between the two squares: inside.
        assert_eq!(index.contains(Vector2::new(1.0, 5.0), &mut scratch), Ok(true));
        assert_eq!(index.contains(Vector2::new(5.0, 1.5), &mut scratch), Ok(true));
        assert_eq!(index.contains(Vector2::new(8.0, 8.0), &mut scratch), Ok(true));
        // Outside the outer square.
        assert_eq!(index.contains(Vector2::new(11.0, 5.0), &mut scratch), Ok(false));
    }
}

#[test]
fn empty_set_is_all_outside() {
    let set = ContourSet::new();
    let index = build_index(&set);
    assert_eq!(index.slab_count(), 0);
    assert_eq!(index.required_scratch_size(), 0);
    assert_eq!(index.contains(Vector2::new(0.0, 0.0), &mut []), Ok(false));
    assert!(!index.contains_alloc(Vector2::new(0.0, 0.0)));
}

#[test]
fn degenerate_contours_are_all_outside() {
    // Single vertex, a two-vertex "sliver", and three collinear vertices:
    // no enclosed area anywhere.
    let mut set = ContourSet::new();
    set.append(1.0, 1.0);
    set.close_contour();
    set.append(0.0, 0.0);
    set.append(4.0, 4.0);
    set.close_contour();
    set.append(0.0, 10.0);
    set.append(5.0, 15.0);
    set.append(10.0, 20.0);
    set.close_contour();
    let index = build_index(&set);
    let mut scratch = vec![0.0; index.required_scratch_size()];

    for &(x, y) in &[
        (1.0, 1.0),
        (2.0, 2.0),
        (1.0, 2.0),
        (3.0, 2.0),
        (5.0, 15.0),
        (4.0, 15.0),
        (6.0, 15.0),
    ] {
        assert_eq!(index.contains(Vector2::new(x, y), &mut scratch), Ok(false));
    }
}

#[test]
fn undersized_scratch_fails_fast() {
    let mut set = ContourSet::new();
    push_square(&mut set, 0.0, 0.0, 10.0, 10.0);
    let index = build_index(&set);
    assert_eq!(index.required_scratch_size(), 2);

    let mut small = [0.0; 1];
    assert_eq!(
        index.contains(Vector2::new(5.0, 5.0), &mut small),
        Err(QueryError::ScratchTooSmall {
            required: 2,
            len: 1
        })
    );
}

#[test]
fn idempotent_across_fresh_and_reused_scratch() {
    let set = synthetic_ring(
        RingCfg {
            vertex_count: VertexCount::Fixed(64),
            ..Default::default()
        },
        ReplayToken { seed: 11, index: 0 },
    );
    let index = build_index(&set);
    let mut reused = vec![0.0; index.required_scratch_size()];
    let mut rng = StdRng::seed_from_u64(12);

    for _ in 0..500 {
        let p = Vector2::new(rng.gen_range(-1.5..=1.5), rng.gen_range(-1.5..=1.5));
        let mut fresh_a = vec![0.0; index.required_scratch_size()];
        let mut fresh_b = vec![0.0; index.required_scratch_size() + 7];
        let a = index.contains(p, &mut fresh_a);
        let b = index.contains(p, &mut fresh_b);
        let c = index.contains(p, &mut reused);
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(a, Ok(index.contains_alloc(p)));
    }
}

#[test]
fn overlapping_squares_match_brute_force_xor() {
    let mut set = ContourSet::new();
    push_square(&mut set, 0.0, 0.0, 10.0, 10.0);
    push_square(&mut set, 5.0, 5.0, 15.0, 15.0);
    let index = build_index(&set);
    let mut scratch = vec![0.0; index.required_scratch_size()];

    // Overlap region flips parity to even.
    assert_eq!(index.contains(Vector2::new(7.0, 7.0), &mut scratch), Ok(false));
    assert_eq!(index.contains(Vector2::new(2.0, 2.0), &mut scratch), Ok(true));
    assert_eq!(index.contains(Vector2::new(12.0, 12.0), &mut scratch), Ok(true));

    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..10_000 {
        let p = Vector2::new(rng.gen_range(-2.0..=18.0), rng.gen_range(-2.0..=18.0));
        assert_eq!(
            index.contains(p, &mut scratch),
            Ok(brute_force_contains(&set, p))
        );
    }
}

proptest! {
    // Within any slab the active edges never cross, so their x-order at the
    // lower breakpoint must equal their x-order at the upper breakpoint.
    #[test]
    fn slab_x_order_holds_at_both_breakpoints(seed in any::<u64>(), n in 3usize..48) {
        let set = synthetic_ring(
            RingCfg {
                vertex_count: VertexCount::Fixed(n),
                ..Default::default()
            },
            ReplayToken { seed, index: 0 },
        );
        let index = build_index(&set);
        prop_assert!(index.slab_count() > 0);
        for s in 0..index.slab_count() {
            let (lo, hi) = (index.breaks[s], index.breaks[s + 1]);
            for w in index.slab(s).windows(2) {
                prop_assert!(w[0].x_at(lo) <= w[1].x_at(lo) + 1e-9);
                prop_assert!(w[0].x_at(hi) <= w[1].x_at(hi) + 1e-9);
            }
        }
    }

    #[test]
    fn random_ring_matches_brute_force(seed in any::<u64>(), n in 3usize..48) {
        let set = synthetic_ring(
            RingCfg {
                vertex_count: VertexCount::Fixed(n),
                ..Default::default()
            },
            ReplayToken { seed, index: 1 },
        );
        let index = build_index(&set);
        let mut scratch = vec![0.0; index.required_scratch_size()];
        let mut rng = StdRng::seed_from_u64(seed ^ 0xa5a5);
        for _ in 0..64 {
            let p = Vector2::new(rng.gen_range(-1.5..=1.5), rng.gen_range(-1.5..=1.5));
            prop_assert_eq!(
                index.contains(p, &mut scratch),
                Ok(brute_force_contains(&set, p))
            );
        }
    }
}
