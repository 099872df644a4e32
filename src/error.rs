//! Error types for sphere mesh generation

use std::fmt;

/// Errors that can occur during configuration or mesh generation
#[derive(Debug, Clone)]
pub enum SphereError {
    /// Configuration validation failed
    InvalidConfig(String),
    /// Generation failed due to geometry issues
    GenerationFailed(String),
}

impl fmt::Display for SphereError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SphereError::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
            SphereError::GenerationFailed(msg) => write!(f, "generation failed: {}", msg),
        }
    }
}

impl std::error::Error for SphereError {}

/// Result type alias for sphere generation operations
pub type Result<T> = std::result::Result<T, SphereError>;
