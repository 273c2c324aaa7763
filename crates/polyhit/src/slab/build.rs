//! Slab index construction.

use nalgebra::Vector2;

use crate::contour::ContourSet;

use super::types::{ActiveEdge, SlabIndex};

/// Build the slab index for the current contour set.
///
/// Pure function of the vertex buffer and boundary markers; the caller
/// decides when to rebuild and how to publish the result. O(E log E) for
/// the breakpoint sort plus output-sensitive slab fill.
pub fn build_index(set: &ContourSet) -> SlabIndex {
    let edges = collect_edges(set);
    let breaks = collect_breaks(&edges);
    let slabs = breaks.len().saturating_sub(1);

    // An edge is active in slab s iff y_lo <= breaks[s] and
    // y_hi >= breaks[s + 1]; both endpoints are breakpoints, so the spanned
    // slabs form a contiguous run starting at y_lo's position.
    let mut buckets: Vec<Vec<ActiveEdge>> = vec![Vec::new(); slabs];
    for e in &edges {
        let mut s = breaks.partition_point(|b| *b < e.y_lo);
        while s < slabs && breaks[s + 1] <= e.y_hi {
            buckets[s].push(*e);
            s += 1;
        }
    }

    // Ascending x at the slab's lower breakpoint; slope as tie-break so
    // edges sharing their lower endpoint order consistently at the upper
    // breakpoint too.
    for (s, bucket) in buckets.iter_mut().enumerate() {
        let lo = breaks[s];
        bucket.sort_by(|a, b| {
            a.x_at(lo)
                .partial_cmp(&b.x_at(lo))
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| {
                    a.dxdy
                        .partial_cmp(&b.dxdy)
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
        });
    }

    let mut offsets = Vec::with_capacity(slabs + 1);
    let mut entries = Vec::with_capacity(buckets.iter().map(Vec::len).sum());
    let mut scratch = 0usize;
    offsets.push(0);
    for bucket in buckets {
        scratch = scratch.max(bucket.len());
        entries.extend(bucket);
        offsets.push(entries.len());
    }
    SlabIndex {
        breaks,
        offsets,
        entries,
        scratch,
    }
}

fn collect_edges(set: &ContourSet) -> Vec<ActiveEdge> {
    let mut edges = Vec::with_capacity(set.len());
    for ring in set.contours() {
        for i in 0..ring.len() {
            let p = ring[i];
            let q = ring[(i + 1) % ring.len()];
            if let Some(e) = edge(p, q) {
                edges.push(e);
            }
        }
    }
    edges
}

/// Edge between consecutive vertices. Horizontal edges contribute zero
/// crossings at any query height and are dropped here.
fn edge(p: Vector2<f64>, q: Vector2<f64>) -> Option<ActiveEdge> {
    if p.y == q.y {
        return None;
    }
    let (lo, hi) = if p.y < q.y { (p, q) } else { (q, p) };
    Some(ActiveEdge {
        x0: lo.x,
        dxdy: (hi.x - lo.x) / (hi.y - lo.y),
        y_lo: lo.y,
        y_hi: hi.y,
    })
}

/// Sorted, deduplicated endpoint y-values of all non-horizontal edges.
fn collect_breaks(edges: &[ActiveEdge]) -> Vec<f64> {
    let mut ys = Vec::with_capacity(edges.len() * 2);
    for e in edges {
        ys.push(e.y_lo);
        ys.push(e.y_hi);
    }
    ys.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    ys.dedup();
    ys
}
