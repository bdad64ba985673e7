//! # Meshforge Mesh
//!
//! Core mesh container and adjacency analysis for the meshforge pipeline.
//!
//! ## Architecture
//!
//! ```text
//! meshforge-terrain ─┐
//! meshforge-deform ──┼─> meshforge-mesh (Mesh, EdgeAdjacency, Pose)
//! meshforge-trail  ──┘
//! ```
//!
//! The mesh is a passive container: vertex positions, normals, UVs,
//! tangents, and a triangle index list, plus the two recomputation
//! primitives every per-tick component relies on (normal recalculation
//! and bounding-volume recalculation). All geometry uses f64; export to
//! f32 only happens at the renderer boundary.

pub mod edges;
pub mod error;
pub mod mesh;
pub mod pose;

pub use edges::{Edge, EdgeAdjacency};
pub use error::GeometryError;
pub use mesh::{Bounds, Mesh};
pub use pose::{look_rotation, Pose};
