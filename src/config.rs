//! Sphere generation configuration and builder
//!
//! This module provides configuration types for deterministic sphere mesh
//! generation. The same configuration always produces the identical mesh.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, SphereError};

/// Smallest usable point count (a closed triangulation needs a tetrahedron)
pub const MIN_POINT_COUNT: usize = 4;

/// Largest supported point count
pub const MAX_POINT_COUNT: usize = 60_000;

/// Default point count for a reasonably detailed sphere
pub const DEFAULT_POINT_COUNT: usize = 5_000;

/// Configuration for deterministic sphere mesh generation
///
/// The configuration is plain data and (with the `serde` feature) can be
/// serialized instead of the generated mesh: regenerating from the same
/// configuration reproduces the mesh exactly.
///
/// # Point count clamping
///
/// `point_count` stores the *requested* count. Counts outside
/// [`MIN_POINT_COUNT`, `MAX_POINT_COUNT`] are silently clamped at
/// generation time rather than rejected; use [`SphereConfig::point_count`]
/// to see the effective value.
///
/// # Example
///
/// ```rust
/// use spiral_sphere::*;
///
/// let config = SphereConfigBuilder::new()
///     .point_count(2_000)
///     .radius(10.0)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// assert_eq!(config.point_count(), 2_000);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereConfig {
    /// Requested number of surface points (clamped at generation time)
    pub point_count: usize,

    /// Sphere radius in world units (always > 0, enforced by the builder)
    pub radius: f32,

    /// Whether to run the seam and pole repair passes after triangulation
    ///
    /// With repair disabled the mesh is still closed and consistently
    /// wound, but texture sampling shows a zipper artifact along the
    /// u-wrap meridian and smearing at the two poles.
    pub fix_seams: bool,
}

impl SphereConfig {
    /// Effective point count after clamping to the supported range
    #[inline]
    pub fn point_count(&self) -> usize {
        self.point_count.clamp(MIN_POINT_COUNT, MAX_POINT_COUNT)
    }
}

impl Default for SphereConfig {
    fn default() -> Self {
        SphereConfigBuilder::new().build().unwrap()
    }
}

/// Builder for creating [`SphereConfig`] with validation
///
/// # Example
///
/// ```rust
/// use spiral_sphere::*;
///
/// // Use defaults
/// let config = SphereConfigBuilder::new().build().unwrap();
///
/// // Customize
/// let config = SphereConfigBuilder::new()
///     .point_count(500)
///     .radius(2.5)
///     .unwrap()
///     .fix_seams(false)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct SphereConfigBuilder {
    point_count: usize,
    radius: f32,
    fix_seams: bool,
}

impl SphereConfigBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - point_count: 5,000
    /// - radius: 1.0
    /// - fix_seams: true
    pub fn new() -> Self {
        Self {
            point_count: DEFAULT_POINT_COUNT,
            radius: 1.0,
            fix_seams: true,
        }
    }

    /// Set the requested number of surface points
    ///
    /// Values outside [`MIN_POINT_COUNT`, `MAX_POINT_COUNT`] are accepted
    /// here and silently clamped when the mesh is generated.
    pub fn point_count(mut self, count: usize) -> Self {
        self.point_count = count;
        self
    }

    /// Set the sphere radius
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the radius is not a finite positive number.
    pub fn radius(mut self, radius: f32) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(SphereError::InvalidConfig(format!(
                "radius must be a finite positive number (got {})",
                radius
            )));
        }
        self.radius = radius;
        Ok(self)
    }

    /// Enable or disable the seam and pole repair passes
    pub fn fix_seams(mut self, fix_seams: bool) -> Self {
        self.fix_seams = fix_seams;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<SphereConfig> {
        Ok(SphereConfig {
            point_count: self.point_count,
            radius: self.radius,
            fix_seams: self.fix_seams,
        })
    }
}

impl Default for SphereConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = SphereConfigBuilder::new().build().unwrap();
        assert_eq!(config.point_count, DEFAULT_POINT_COUNT);
        assert_eq!(config.radius, 1.0);
        assert!(config.fix_seams);
    }

    #[test]
    fn test_builder_custom() {
        let config = SphereConfigBuilder::new()
            .point_count(123)
            .radius(4.5)
            .unwrap()
            .fix_seams(false)
            .build()
            .unwrap();

        assert_eq!(config.point_count, 123);
        assert_eq!(config.radius, 4.5);
        assert!(!config.fix_seams);
    }

    #[test]
    fn test_point_count_clamped_low() {
        let config = SphereConfigBuilder::new().point_count(3).build().unwrap();
        assert_eq!(config.point_count, 3);
        assert_eq!(config.point_count(), MIN_POINT_COUNT);
    }

    #[test]
    fn test_point_count_clamped_high() {
        let config = SphereConfigBuilder::new()
            .point_count(1_000_000)
            .build()
            .unwrap();
        assert_eq!(config.point_count(), MAX_POINT_COUNT);
    }

    #[test]
    fn test_point_count_in_range_untouched() {
        for count in [MIN_POINT_COUNT, 100, MAX_POINT_COUNT] {
            let config = SphereConfigBuilder::new().point_count(count).build().unwrap();
            assert_eq!(config.point_count(), count);
        }
    }

    #[test]
    fn test_builder_invalid_radius() {
        assert!(SphereConfigBuilder::new().radius(0.0).is_err());
        assert!(SphereConfigBuilder::new().radius(-5.0).is_err());
        assert!(SphereConfigBuilder::new().radius(f32::NAN).is_err());
        assert!(SphereConfigBuilder::new().radius(f32::INFINITY).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_serialization() {
        let config = SphereConfigBuilder::new()
            .point_count(777)
            .radius(3.0)
            .unwrap()
            .build()
            .unwrap();

        let json = serde_json::to_string(&config).unwrap();
        let restored: SphereConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, restored);
    }
}
