//! # Geometry Errors
//!
//! Error types shared by the mesh generation and deformation crates.

use thiserror::Error;

/// Errors that can occur while configuring or building geometry.
///
/// The taxonomy is deliberately small: missing required inputs and
/// out-of-range configuration are rejected up front; geometric
/// degeneracies at tick time (too few samples, empty selection radius)
/// are handled by skipping work, never by returning an error.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// A required source mesh or buffer is absent or empty
    #[error("Missing source: {message}")]
    MissingSource { message: String },

    /// A configuration value is out of its valid range
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Degenerate geometry where an empty result is not the defined outcome
    #[error("Degenerate geometry: {message}")]
    Degenerate { message: String },
}

impl GeometryError {
    /// Creates a missing source error.
    pub fn missing_source(message: impl Into<String>) -> Self {
        Self::MissingSource {
            message: message.into(),
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::Degenerate {
            message: message.into(),
        }
    }
}
