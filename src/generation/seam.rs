//! Texture seam repair
//!
//! The u coordinate wraps from ~1 back to 0 where phi crosses the zero
//! meridian. A triangle with corners on both sides of that wrap
//! interpolates u across almost the whole texture, which renders as a
//! zipper of squeezed texture bands along the meridian.
//!
//! The fix: for every triangle straddling the wrap, append a duplicate of
//! the corner that sits alone on its side of the z = 0 plane, with u
//! shifted by ±1 so all three u values are numerically contiguous, and
//! point the rebuilt triangle at the duplicate. Vertex storage only grows;
//! a fresh index list is produced so triangles still referencing the
//! original vertex are unaffected.

use crate::mesh::MeshData;

/// Rewrite seam-crossing triangles onto duplicated, u-shifted vertices
pub(crate) fn remove_seam_zipper(mesh: &mut MeshData) {
    let mut rebuilt = Vec::with_capacity(mesh.indices.len());

    let triangle_count = mesh.triangle_count();
    for tri in 0..triangle_count {
        let mut corners = [
            mesh.indices[3 * tri],
            mesh.indices[3 * tri + 1],
            mesh.indices[3 * tri + 2],
        ];
        let positions = corners.map(|c| mesh.positions[c as usize]);

        // The wrap meridian lies at phi = 0, in the x >= 0 half-space;
        // triangles with any corner at negative x cannot straddle it.
        let side = positions.map(|p| p.z >= 0.0);
        let crosses_seam =
            !positions.iter().any(|p| p.x < 0.0) && side != [true; 3] && side != [false; 3];

        if crosses_seam {
            // 2-1 split: the corner alone on its side of z = 0 gets
            // duplicated. From the non-negative side it reads one wrap
            // ahead (u + 1), from the negative side one wrap behind (u - 1).
            let minority = if side[0] != side[1] {
                if side[0] != side[2] {
                    0
                } else {
                    1
                }
            } else {
                2
            };
            let u_offset = if side[minority] { 1.0 } else { -1.0 };

            corners[minority] =
                mesh.duplicate_vertex_with_u_offset(corners[minority], u_offset);
        }

        rebuilt.extend_from_slice(&corners);
    }

    mesh.indices = rebuilt;
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec2, Vec3};

    fn seam_test_mesh() -> MeshData {
        let mut mesh = MeshData::default();
        // Two corners just below the wrap (z > 0, u ~ 0.98), one just past
        // it (z < 0, u ~ 0.01), all at x > 0.
        mesh.push_vertex(Vec3::new(1.0, 0.0, 0.1), Vec3::X, Vec2::new(0.98, 0.5));
        mesh.push_vertex(Vec3::new(1.0, 0.1, 0.1), Vec3::X, Vec2::new(0.97, 0.52));
        mesh.push_vertex(Vec3::new(1.0, 0.05, -0.1), Vec3::X, Vec2::new(0.01, 0.51));
        mesh.indices = vec![0, 1, 2];
        mesh
    }

    #[test]
    fn test_minority_negative_z_shifts_down() {
        let mut mesh = seam_test_mesh();
        remove_seam_zipper(&mut mesh);

        // Corner 2 was alone on the negative-z side
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.indices, vec![0, 1, 3]);
        assert!((mesh.uvs[3].x - (0.01 - 1.0)).abs() < 1e-6);
        assert_eq!(mesh.positions[3], mesh.positions[2]);
        assert_eq!(mesh.normals[3], mesh.normals[2]);
        // Original vertex untouched
        assert!((mesh.uvs[2].x - 0.01).abs() < 1e-6);
    }

    #[test]
    fn test_minority_nonnegative_z_shifts_up() {
        let mut mesh = MeshData::default();
        mesh.push_vertex(Vec3::new(1.0, 0.0, 0.1), Vec3::X, Vec2::new(0.02, 0.5));
        mesh.push_vertex(Vec3::new(1.0, 0.1, -0.1), Vec3::X, Vec2::new(0.99, 0.52));
        mesh.push_vertex(Vec3::new(1.0, 0.05, -0.2), Vec3::X, Vec2::new(0.97, 0.51));
        mesh.indices = vec![0, 1, 2];

        remove_seam_zipper(&mut mesh);

        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.indices, vec![3, 1, 2]);
        assert!((mesh.uvs[3].x - 1.02).abs() < 1e-6);
    }

    #[test]
    fn test_negative_x_triangles_skipped() {
        let mut mesh = MeshData::default();
        // Mixed z signs but on the far side of the sphere from the seam
        mesh.push_vertex(Vec3::new(-1.0, 0.0, 0.1), Vec3::NEG_X, Vec2::new(0.45, 0.5));
        mesh.push_vertex(Vec3::new(-1.0, 0.1, -0.1), Vec3::NEG_X, Vec2::new(0.55, 0.52));
        mesh.push_vertex(Vec3::new(-1.0, 0.05, 0.2), Vec3::NEG_X, Vec2::new(0.48, 0.51));
        mesh.indices = vec![0, 1, 2];

        remove_seam_zipper(&mut mesh);

        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_same_side_triangles_skipped() {
        let mut mesh = MeshData::default();
        mesh.push_vertex(Vec3::new(1.0, 0.0, 0.1), Vec3::X, Vec2::new(0.01, 0.5));
        mesh.push_vertex(Vec3::new(1.0, 0.1, 0.2), Vec3::X, Vec2::new(0.02, 0.52));
        mesh.push_vertex(Vec3::new(1.0, 0.05, 0.3), Vec3::X, Vec2::new(0.03, 0.51));
        mesh.indices = vec![0, 1, 2];

        remove_seam_zipper(&mut mesh);

        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_triangle_count_preserved() {
        let mut mesh = seam_test_mesh();
        let before = mesh.triangle_count();
        remove_seam_zipper(&mut mesh);
        assert_eq!(mesh.triangle_count(), before);
    }
}
