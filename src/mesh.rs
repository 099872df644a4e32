//! Engine-agnostic mesh output
//!
//! The final product of generation: raw vertex data suitable for any
//! rendering engine (Bevy, Godot, wgpu, ...).

use glam::{Vec2, Vec3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Engine-agnostic triangle mesh data
///
/// Vertex attributes are parallel vectors addressed by the indices in
/// `indices` (three per triangle, outward winding). Vertex storage is
/// append-only during generation: repair passes add duplicate vertices
/// with shifted texture coordinates but never mutate existing entries.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    /// Vertex positions on the sphere surface
    pub positions: Vec<Vec3>,
    /// Vertex normals (unit direction from sphere center)
    pub normals: Vec<Vec3>,
    /// Texture coordinates; u wraps at the seam meridian, so duplicated
    /// seam vertices carry u slightly outside [0, 1]
    pub uvs: Vec<Vec2>,
    /// Triangle indices, length always a multiple of 3
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Get the number of vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of triangles
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check if the mesh is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterate over triangles as index triples
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    pub(crate) fn with_vertex_capacity(count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(count),
            normals: Vec::with_capacity(count),
            uvs: Vec::with_capacity(count),
            indices: Vec::new(),
        }
    }

    /// Append a vertex and return its index
    pub(crate) fn push_vertex(&mut self, position: Vec3, normal: Vec3, uv: Vec2) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        self.normals.push(normal);
        self.uvs.push(uv);
        index
    }

    /// Append a copy of an existing vertex with its u texture coordinate
    /// shifted by `u_offset`, returning the new index
    pub(crate) fn duplicate_vertex_with_u_offset(&mut self, index: u32, u_offset: f32) -> u32 {
        let i = index as usize;
        let uv = self.uvs[i];
        self.push_vertex(
            self.positions[i],
            self.normals[i],
            Vec2::new(uv.x + u_offset, uv.y),
        )
    }
}
