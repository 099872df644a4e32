//! Spiral-sphere triangle mesh generation
//!
//! A standalone library for generating closed, seamlessly UV-mapped
//! sphere meshes from a golden-angle spiral point distribution, suitable
//! for use with any game engine (Bevy, Godot, wgpu, ...).
//!
//! Points are spread over the sphere along a golden-angle spiral, then
//! triangulated with a purely local Delaunay-style test; two repair
//! passes duplicate a handful of vertices to remove the texture zipper at
//! the u-wrap meridian and the smeared fans at the poles.
//!
//! # Quick Start
//!
//! ```rust
//! use spiral_sphere::*;
//!
//! // Configure a sphere
//! let config = SphereConfigBuilder::new()
//!     .point_count(2_000)
//!     .radius(1.0)
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! // Generate the mesh
//! let sphere = SpiralSphere::generate(config).unwrap();
//! println!("Generated {} triangles", sphere.triangle_count());
//!
//! // Hand the raw data to a renderer
//! let mesh = sphere.into_mesh();
//! assert_eq!(mesh.indices.len() % 3, 0);
//! ```
//!
//! # Features
//!
//! - `serde`: Enables serialization support for configuration and mesh data

// Modules
pub mod config;
pub mod error;
pub mod generation;
pub mod mesh;
pub mod sphere;

// Re-export core types for convenience
pub use config::{SphereConfig, SphereConfigBuilder, MAX_POINT_COUNT, MIN_POINT_COUNT};
pub use error::{Result, SphereError};
pub use generation::{generate_mesh_data, generate_spiral_points, SpiralPoint};
pub use mesh::MeshData;
pub use sphere::SpiralSphere;

// Re-export glam vector types for convenience
pub use glam::{Vec2, Vec3};
