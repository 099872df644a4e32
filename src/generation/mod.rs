//! Core sphere mesh generation pipeline
//!
//! Generation runs in fixed stages, each feeding the next:
//!
//! 1. Spiral point distribution (`spiral`)
//! 2. Proximity neighbor search (`neighbors`)
//! 3. Local Delaunay triangulation gated by the edge registry
//!    (`triangulate`, `edges`)
//! 4. Optional texture repair: seam zipper removal (`seam`) followed by
//!    pole fan rebuilding (`pole`)
//!
//! The whole pipeline is synchronous and deterministic; intermediate
//! state (point records, neighbor lists, the edge registry) lives only
//! for the duration of one call.

mod edges;
mod neighbors;
mod pole;
mod seam;
mod spiral;
mod triangulate;

pub use spiral::{generate_spiral_points, SpiralPoint};

use crate::config::SphereConfig;
use crate::error::Result;
use crate::mesh::MeshData;

/// Generate mesh data from a configuration
///
/// This is the lower-level pipeline entry; most callers go through
/// [`SpiralSphere::generate`](crate::SpiralSphere::generate) instead.
///
/// # Arguments
///
/// * `config` - Validated generation parameters
///
/// # Returns
///
/// The finished mesh snapshot; all intermediate structures are dropped.
pub fn generate_mesh_data(config: &SphereConfig) -> Result<MeshData> {
    let count = config.point_count();
    let radius = config.radius;

    let points = spiral::generate_spiral_points(count, radius);
    let neighbor_lists = neighbors::find_neighbors(&points, radius);

    let mut registry = edges::EdgeRegistry::with_capacity(6 * count);
    let indices = triangulate::triangulate(&points, &neighbor_lists, &mut registry);

    let mut mesh = MeshData::with_vertex_capacity(count);
    for point in &points {
        mesh.push_vertex(point.position, point.normal, point.uv);
    }
    mesh.indices = indices;

    if config.fix_seams {
        seam::remove_seam_zipper(&mut mesh);
        pole::rebuild_pole_fans(&mut mesh, radius)?;
    }

    Ok(mesh)
}
