//! Proximity neighbor search
//!
//! For each point, gathers a bounded candidate set of nearby points for
//! the triangulator. The distance threshold is derived from the expected
//! surface density: with `n` points on a sphere of radius `r`, each point
//! owns roughly `4πr²/n` of surface, so neighbors live within a few
//! multiples of `sqrt(4π/n) · r`.
//!
//! Only indices `j > i` are recorded; the triangulator walks points in
//! increasing index order, so every unordered pair is still considered
//! exactly once. Because the spiral emits points by ascending height, the
//! scan stops as soon as the height gap alone exceeds the threshold.

use super::spiral::SpiralPoint;
use std::f32::consts::PI;

/// Multiplier on the expected point spacing when collecting candidates.
/// Empirical: 1.5 yields enough candidates for a closed triangulation at
/// every supported point count; it is not a proven bound.
const DISTANCE_FACTOR: f32 = 1.5;

/// Collect candidate neighbor indices (`j > i` only) for every point
pub(crate) fn find_neighbors(points: &[SpiralPoint], radius: f32) -> Vec<Vec<u32>> {
    let n = points.len();
    let max_dist = (4.0 * PI / n as f32).sqrt() * DISTANCE_FACTOR * radius;
    let max_dist_sq = max_dist * max_dist;

    let mut neighbor_lists = Vec::with_capacity(n);
    for i in 0..n {
        let base = &points[i];
        let mut neighbors = Vec::new();
        for (j, candidate) in points.iter().enumerate().skip(i + 1) {
            // Points are sorted by height: once the height gap alone is out
            // of range, no later point can qualify.
            if (candidate.y - base.y) * radius > max_dist {
                break;
            }
            if base.position.distance_squared(candidate.position) < max_dist_sq {
                neighbors.push(j as u32);
            }
        }
        neighbor_lists.push(neighbors);
    }

    neighbor_lists
}
