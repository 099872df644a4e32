//! Pole fan repair
//!
//! The lowest and highest spiral points are each enclosed by one wide
//! triangle whose corners span every longitude near the pole. All u
//! values collapse into that single face, smearing the texture into a
//! pinwheel around each pole.
//!
//! The repair removes the two enclosing triangles and rebuilds each as a
//! three-triangle fan anchored on explicit pole vertices at (0, ±r, 0).
//! Every fan triangle gets its own pole vertex so each can carry the u
//! midpoint of its rim edge; the closing triangle of a fan additionally
//! duplicates its first rim vertex with u + 1, the same wrap convention
//! the seam repair uses.
//!
//! The enclosing triangles are found by centroid proximity to the poles
//! rather than by their position in the index list, so the pass does not
//! depend on the order in which the triangulator emitted them.

use glam::{Vec2, Vec3};

use crate::error::{Result, SphereError};
use crate::mesh::MeshData;

/// Replace the two pole-enclosing triangles with pole-anchored fans
pub(crate) fn rebuild_pole_fans(mesh: &mut MeshData, radius: f32) -> Result<()> {
    if mesh.indices.len() < 6 {
        return Err(SphereError::GenerationFailed(format!(
            "pole repair needs at least two triangles, found {}",
            mesh.triangle_count()
        )));
    }

    let bottom_tri = nearest_triangle_to(mesh, Vec3::new(0.0, -radius, 0.0));
    let top_tri = nearest_triangle_to(mesh, Vec3::new(0.0, radius, 0.0));
    if bottom_tri == top_tri {
        return Err(SphereError::GenerationFailed(
            "bottom and top pole searches resolved to the same triangle".into(),
        ));
    }

    let bottom_corners = sorted_by_u(mesh, bottom_tri);
    let top_corners = sorted_by_u(mesh, top_tri);

    // Remove the higher slice first so the lower one keeps its offset
    let (first, second) = if bottom_tri > top_tri {
        (bottom_tri, top_tri)
    } else {
        (top_tri, bottom_tri)
    };
    mesh.indices.drain(3 * first..3 * first + 3);
    mesh.indices.drain(3 * second..3 * second + 3);

    push_bottom_fan(mesh, bottom_corners, radius);
    push_top_fan(mesh, top_corners, radius);
    Ok(())
}

/// Index of the triangle whose centroid lies closest to `target`
fn nearest_triangle_to(mesh: &MeshData, target: Vec3) -> usize {
    let mut best = 0;
    let mut best_dist_sq = f32::INFINITY;

    for (tri, corners) in mesh.triangles().enumerate() {
        let centroid = (mesh.positions[corners[0] as usize]
            + mesh.positions[corners[1] as usize]
            + mesh.positions[corners[2] as usize])
            / 3.0;
        let dist_sq = centroid.distance_squared(target);
        if dist_sq < best_dist_sq {
            best_dist_sq = dist_sq;
            best = tri;
        }
    }

    best
}

/// Corners of a triangle sorted by ascending u, recovering angular order
/// around the pole
fn sorted_by_u(mesh: &MeshData, tri: usize) -> [u32; 3] {
    let mut corners = [
        mesh.indices[3 * tri],
        mesh.indices[3 * tri + 1],
        mesh.indices[3 * tri + 2],
    ];
    corners.sort_by(|&a, &b| {
        mesh.uvs[a as usize]
            .x
            .partial_cmp(&mesh.uvs[b as usize].x)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    corners
}

fn push_bottom_fan(mesh: &mut MeshData, corners: [u32; 3], radius: f32) {
    let [low, med, high] = corners;
    let (u_low, u_med, u_high) = corner_us(mesh, corners);
    let pole_pos = Vec3::new(0.0, -radius, 0.0);

    let pole = mesh.push_vertex(pole_pos, Vec3::NEG_Y, Vec2::new((u_low + u_med) * 0.5, 0.0));
    mesh.indices.extend_from_slice(&[low, med, pole]);

    let pole = mesh.push_vertex(pole_pos, Vec3::NEG_Y, Vec2::new((u_med + u_high) * 0.5, 0.0));
    mesh.indices.extend_from_slice(&[med, high, pole]);

    // Closing triangle: the low rim vertex reappears one wrap ahead
    let pole = mesh.push_vertex(
        pole_pos,
        Vec3::NEG_Y,
        Vec2::new((u_low + 1.0 + u_high) * 0.5, 0.0),
    );
    let wrapped_low = mesh.duplicate_vertex_with_u_offset(low, 1.0);
    mesh.indices.extend_from_slice(&[high, wrapped_low, pole]);
}

fn push_top_fan(mesh: &mut MeshData, corners: [u32; 3], radius: f32) {
    let [low, med, high] = corners;
    let (u_low, u_med, u_high) = corner_us(mesh, corners);
    let pole_pos = Vec3::new(0.0, radius, 0.0);

    let pole = mesh.push_vertex(pole_pos, Vec3::Y, Vec2::new((u_low + u_med) * 0.5, 1.0));
    mesh.indices.extend_from_slice(&[low, pole, med]);

    let pole = mesh.push_vertex(pole_pos, Vec3::Y, Vec2::new((u_med + u_high) * 0.5, 1.0));
    mesh.indices.extend_from_slice(&[med, pole, high]);

    let pole = mesh.push_vertex(
        pole_pos,
        Vec3::Y,
        Vec2::new((u_low + 1.0 + u_high) * 0.5, 1.0),
    );
    let wrapped_low = mesh.duplicate_vertex_with_u_offset(low, 1.0);
    mesh.indices.extend_from_slice(&[high, pole, wrapped_low]);
}

fn corner_us(mesh: &MeshData, corners: [u32; 3]) -> (f32, f32, f32) {
    (
        mesh.uvs[corners[0] as usize].x,
        mesh.uvs[corners[1] as usize].x,
        mesh.uvs[corners[2] as usize].x,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SphereConfigBuilder;
    use crate::generation::generate_mesh_data;

    fn unrepaired_mesh(count: usize, radius: f32) -> MeshData {
        let config = SphereConfigBuilder::new()
            .point_count(count)
            .radius(radius)
            .unwrap()
            .fix_seams(false)
            .build()
            .unwrap();
        generate_mesh_data(&config).unwrap()
    }

    #[test]
    fn test_pole_search_finds_extreme_triangles() {
        let mesh = unrepaired_mesh(1000, 1.0);

        let bottom = nearest_triangle_to(&mesh, Vec3::new(0.0, -1.0, 0.0));
        let top = nearest_triangle_to(&mesh, Vec3::new(0.0, 1.0, 0.0));
        assert_ne!(bottom, top);

        // The bottom-enclosing triangle is built from the three lowest
        // spiral points
        let mut corners = [
            mesh.indices[3 * bottom],
            mesh.indices[3 * bottom + 1],
            mesh.indices[3 * bottom + 2],
        ];
        corners.sort_unstable();
        assert_eq!(corners, [0, 1, 2]);
    }

    #[test]
    fn test_repair_adds_four_triangles_and_eight_vertices() {
        let mut mesh = unrepaired_mesh(500, 2.0);
        let triangles_before = mesh.triangle_count();
        let vertices_before = mesh.vertex_count();

        rebuild_pole_fans(&mut mesh, 2.0).unwrap();

        // Two triangles removed, two three-triangle fans added
        assert_eq!(mesh.triangle_count(), triangles_before + 4);
        // Six pole vertices plus one wrapped rim duplicate per fan
        assert_eq!(mesh.vertex_count(), vertices_before + 8);
    }

    #[test]
    fn test_pole_vertices_sit_on_axis() {
        let radius = 3.0;
        let mut mesh = unrepaired_mesh(500, radius);
        let first_new = mesh.vertex_count();

        rebuild_pole_fans(&mut mesh, radius).unwrap();

        let poles: Vec<_> = mesh.positions[first_new..]
            .iter()
            .filter(|p| p.x == 0.0 && p.z == 0.0)
            .collect();
        assert_eq!(poles.len(), 6);
        for p in poles {
            assert!((p.y.abs() - radius).abs() < 1e-6);
        }
    }

    #[test]
    fn test_fan_triangles_wound_outward() {
        let mut mesh = unrepaired_mesh(500, 1.0);
        let fans_start = mesh.triangle_count() - 2;

        rebuild_pole_fans(&mut mesh, 1.0).unwrap();

        for corners in mesh.triangles().skip(fans_start) {
            let a = mesh.positions[corners[0] as usize];
            let b = mesh.positions[corners[1] as usize];
            let c = mesh.positions[corners[2] as usize];
            let normal = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;
            assert!(normal.dot(centroid) > 0.0, "fan triangle wound inward");
        }
    }

    #[test]
    fn test_repair_rejects_empty_mesh() {
        let mut mesh = MeshData::default();
        assert!(rebuild_pole_fans(&mut mesh, 1.0).is_err());
    }
}
