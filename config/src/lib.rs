//! # Config Crate
//!
//! Centralized configuration constants for the meshforge pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, MAX_HEIGHTFIELD_DIM};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//!
//! // Height-field dimensions are clamped to the supported maximum
//! let requested = 512usize;
//! assert_eq!(requested.min(MAX_HEIGHTFIELD_DIM), MAX_HEIGHTFIELD_DIM);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Tick-Rate Safe**: Defaults chosen for interactive per-frame use
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
