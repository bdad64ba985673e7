//! # Meshforge Terrain
//!
//! Converts a 2D scalar height field into a grid mesh with UVs and
//! per-vertex tangents. Runs once at initialization; the resulting mesh
//! is handed to the rendering collaborator and optionally deformed by
//! the per-tick components afterwards.
//!
//! ## Algorithm
//!
//! 1. Clamp the field to the supported grid size
//! 2. Emit one vertex, UV, and tangent per sample
//! 3. Emit two triangles per grid cell with upward-facing winding
//! 4. Recompute normals from triangle geometry, then assign tangents
//!    (tangents are reconstructed from neighboring samples, not from the
//!    recomputed normals)

pub mod builder;
pub mod field;


pub use builder::{build_terrain, Material, TerrainBuilder, TerrainParams};
pub use field::HeightField;
