//! SpiralSphere main structure

use crate::config::SphereConfig;
use crate::error::Result;
use crate::generation::generate_mesh_data;
use crate::mesh::MeshData;

/// A generated sphere mesh together with the configuration that produced it
///
/// Generation is a pure function of the configuration: the same
/// [`SphereConfig`] always yields a bit-identical mesh.
///
/// # Examples
///
/// ```
/// use spiral_sphere::*;
///
/// let config = SphereConfigBuilder::new()
///     .point_count(1_000)
///     .radius(2.0)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// let sphere = SpiralSphere::generate(config).unwrap();
/// println!(
///     "Generated {} vertices, {} triangles",
///     sphere.vertex_count(),
///     sphere.triangle_count()
/// );
/// ```
#[derive(Debug, Clone)]
pub struct SpiralSphere {
    /// Configuration used to generate this sphere
    config: SphereConfig,

    /// The generated mesh
    mesh: MeshData,
}

impl SpiralSphere {
    /// Generate a sphere mesh from a configuration
    ///
    /// # Arguments
    ///
    /// * `config` - Generation parameters (point count, radius, repair flag)
    ///
    /// # Returns
    ///
    /// `Result<SpiralSphere>` - Generated sphere or error
    ///
    /// # Example
    ///
    /// ```
    /// use spiral_sphere::*;
    ///
    /// let sphere = SpiralSphere::generate(SphereConfig::default()).unwrap();
    /// assert!(sphere.triangle_count() > 0);
    /// ```
    pub fn generate(config: SphereConfig) -> Result<Self> {
        let mesh = generate_mesh_data(&config)?;
        Ok(Self { config, mesh })
    }

    /// Get the configuration used to generate this sphere
    #[inline]
    pub fn config(&self) -> &SphereConfig {
        &self.config
    }

    /// Get the sphere radius
    #[inline]
    pub fn radius(&self) -> f32 {
        self.config.radius
    }

    /// Get the generated mesh
    #[inline]
    pub fn mesh(&self) -> &MeshData {
        &self.mesh
    }

    /// Consume the sphere and take ownership of the mesh
    #[inline]
    pub fn into_mesh(self) -> MeshData {
        self.mesh
    }

    /// Get the number of vertices in the mesh
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.mesh.vertex_count()
    }

    /// Get the number of triangles in the mesh
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.mesh.triangle_count()
    }
}
