//! Golden-angle spiral point distribution
//!
//! Generates near-uniform point distributions on a sphere by stepping the
//! azimuthal angle by the golden angle while the height advances in even
//! increments.
//!
//! # Algorithm
//!
//! For index `i` of `n`:
//! - Height: `y = i * (2/n) - 1 + 1/n`, evenly spaced in (-1, 1)
//! - Ring radius: `r = sqrt(1 - y²)`
//! - Longitude: `phi = (i * goldenAngle) mod 2π`
//!
//! Because `y` grows with `i`, the output is ordered by ascending height;
//! the neighbor search relies on that ordering for early pruning, so each
//! point record keeps its `y` alongside the finished vertex attributes.
//!
//! Texture coordinates come from the polar form of the same point:
//! `u = phi / 2π` (wrapping at the phi = 0 meridian) and
//! `v = (π - acos y) / π`, running pole to pole.
//!
//! # References
//!
//! - [How to evenly distribute points on a sphere](https://extremelearning.com.au/how-to-evenly-distribute-points-on-a-sphere-more-effectively-than-the-canonical-fibonacci-lattice/)

use glam::{Vec2, Vec3};
use std::f32::consts::PI;

/// Golden angle in radians, π(3 − √5)
const GOLDEN_ANGLE: f32 = 2.399_963_2;

/// A surface point with finished vertex attributes plus the unit-sphere
/// height used by the neighbor search
///
/// Point records are an intermediate representation: after triangulation
/// the attributes move into [`MeshData`](crate::MeshData) and the records
/// are discarded.
#[derive(Debug, Clone, Copy)]
pub struct SpiralPoint {
    /// Position on the sphere surface (unit point scaled by radius)
    pub position: Vec3,
    /// Unit normal (direction from sphere center)
    pub normal: Vec3,
    /// Texture coordinate; u in [0, 1) with the wrap at phi = 0
    pub uv: Vec2,
    /// Unit-sphere height in (-1, 1), ascending with the point index
    pub y: f32,
}

/// Generate `count` points spiraling around a sphere of the given radius
///
/// The distribution is fully deterministic: identical arguments always
/// yield bit-identical points. The caller is expected to pass a count
/// already clamped to the supported range and a positive radius; both are
/// enforced by [`SphereConfig`](crate::SphereConfig).
///
/// # Arguments
///
/// * `count` - Number of points to generate
/// * `radius` - Sphere radius
///
/// # Returns
///
/// Points ordered by ascending height
///
/// # Example
///
/// ```rust
/// use spiral_sphere::generation::generate_spiral_points;
///
/// let points = generate_spiral_points(1000, 10.0);
/// assert_eq!(points.len(), 1000);
/// ```
pub fn generate_spiral_points(count: usize, radius: f32) -> Vec<SpiralPoint> {
    let off = 2.0 / count as f32;

    (0..count)
        .map(|i| {
            let i_f = i as f32;

            let y = i_f * off - 1.0 + off * 0.5;
            let r = (1.0 - y * y).sqrt();
            let phi = (i_f * GOLDEN_ANGLE) % (2.0 * PI);

            let unit = Vec3::new(phi.cos() * r, y, phi.sin() * r);

            SpiralPoint {
                position: unit * radius,
                normal: unit.normalize(),
                uv: Vec2::new(0.5 * phi / PI, (PI - y.acos()) / PI),
                y,
            }
        })
        .collect()
}
