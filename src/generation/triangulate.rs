//! Local Delaunay-style triangulation
//!
//! Builds the triangle list from the candidate neighbor sets. For each
//! point `i` and each pair `(j, k)` of its forward neighbors, the triangle
//! `(i, j, k)` is accepted when no other candidate of `i` lies inside the
//! sphere through the three corners. This is the circumcircle emptiness
//! criterion of Delaunay triangulation, checked against the local
//! candidate set only rather than the whole point cloud.
//!
//! Accepted triangles are wound so their face normal points away from the
//! sphere center, then offered to the [`EdgeRegistry`]; a triangle that
//! would reuse an already claimed directed edge is silently dropped.

use glam::Vec3;

use super::edges::EdgeRegistry;
use super::spiral::SpiralPoint;

/// Relative tolerance below which a corner triple counts as collinear.
/// Compares |t × u|² against |t|²·|u|², i.e. the squared sine of the
/// spanned angle.
const COLLINEARITY_EPS: f32 = 1e-12;

/// Center of the circle through three points in 3D
///
/// Returns `None` for collinear or duplicate corners, where the closed
/// form would divide by (nearly) zero.
fn circumcenter(a: Vec3, b: Vec3, c: Vec3) -> Option<Vec3> {
    let t = b - a;
    let u = c - a;
    let v = c - b;

    let w = t.cross(u);
    let ww = w.length_squared();
    let tt = t.length_squared();
    let uu = u.length_squared();
    if ww <= COLLINEARITY_EPS * tt * uu {
        return None;
    }

    let iww = 0.5 / ww;
    Some(a + (u * (tt * u.dot(v)) - t * (uu * t.dot(v))) * iww)
}

/// Emit consistently wound triangles over the candidate neighbor sets
///
/// Walks points in increasing index order; `registry` must start empty so
/// the directed-edge claims line up with that traversal order.
pub(crate) fn triangulate(
    points: &[SpiralPoint],
    neighbor_lists: &[Vec<u32>],
    registry: &mut EdgeRegistry,
) -> Vec<u32> {
    let mut indices = Vec::new();

    for (i, neighbors) in neighbor_lists.iter().enumerate() {
        let vi = points[i].position;

        for j in 0..neighbors.len() {
            let nj = neighbors[j];
            let vj = points[nj as usize].position;

            for k in (j + 1)..neighbors.len() {
                let nk = neighbors[k];
                let vk = points[nk as usize].position;

                let center = match circumcenter(vi, vj, vk) {
                    Some(center) => center,
                    None => continue,
                };
                let radius_sq = (center - vi).length_squared();

                // Delaunay emptiness over the remaining candidates
                let valid = neighbors.iter().enumerate().all(|(l, &nl)| {
                    l == j
                        || l == k
                        || points[nl as usize].position.distance_squared(center) >= radius_sq
                });
                if !valid {
                    continue;
                }

                // The circumcenter sits out from the sphere center on the
                // face side, so its direction decides the outward winding.
                let normal = (vj - vi).cross(vk - vi);
                let (t2, t3) = if normal.dot(center) > 0.0 {
                    (nj, nk)
                } else {
                    (nk, nj)
                };

                if registry.try_claim(i as u32, t2, t3) {
                    indices.extend_from_slice(&[i as u32, t2, t3]);
                }
            }
        }
    }

    indices
}
