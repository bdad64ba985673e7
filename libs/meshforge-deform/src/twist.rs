//! # Twist Deformer
//!
//! Rotates every vertex about the up axis by an angle proportional to
//! its base height times a twist parameter accumulated from an external
//! input axis.

use config::constants::DEFAULT_TWIST_SENSITIVITY;
use glam::DVec3;
use meshforge_mesh::{GeometryError, Mesh};
use serde::{Deserialize, Serialize};

/// Which buffer feeds the mesh's normal channel before the final normal
/// recomputation.
///
/// The long-standing behavior of this deformer writes the rotated
/// *position* buffer into the normal channel. Because normals are
/// recomputed from the final geometry immediately afterwards, the write
/// is observably harmless, but it is kept reproducible behind this flag
/// instead of silently corrected so both variants can be compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormalSource {
    /// Write the rotated positions into the normal channel (historical
    /// behavior, the default).
    #[default]
    Positions,
    /// Write the rotated base normals into the normal channel.
    Normals,
}

/// Per-tick twist deformation component.
///
/// The base (undeformed) vertex and normal buffers are captured eagerly
/// at construction and every tick's output is derived from them, so the
/// deformation never accumulates error and `twist = 0` reproduces the
/// base pose exactly.
#[derive(Debug, Clone)]
pub struct TwistDeformer {
    twist: f64,
    sensitivity: f64,
    normal_source: NormalSource,
    base_vertices: Vec<DVec3>,
    base_normals: Vec<DVec3>,
}

impl TwistDeformer {
    /// Captures the base pose of `mesh` and creates the deformer.
    ///
    /// An empty mesh cannot be twisted and is rejected up front. A mesh
    /// without stored normals gets them computed before capture.
    pub fn new(
        mesh: &mut Mesh,
        sensitivity: f64,
        normal_source: NormalSource,
    ) -> Result<Self, GeometryError> {
        if mesh.is_empty() {
            return Err(GeometryError::missing_source(
                "twist deformer needs a non-empty reference mesh",
            ));
        }
        if mesh.normals().is_none() {
            mesh.compute_normals();
        }
        let base_vertices = mesh.vertices().to_vec();
        let base_normals = mesh.normals().unwrap_or_default().to_vec();

        Ok(Self {
            twist: 0.0,
            sensitivity,
            normal_source,
            base_vertices,
            base_normals,
        })
    }

    /// Creates the deformer with the default input sensitivity and the
    /// historical normal source.
    pub fn with_defaults(mesh: &mut Mesh) -> Result<Self, GeometryError> {
        Self::new(mesh, DEFAULT_TWIST_SENSITIVITY, NormalSource::default())
    }

    /// Current accumulated twist angle (radians per unit height).
    pub fn twist(&self) -> f64 {
        self.twist
    }

    /// Overrides the accumulated twist angle.
    pub fn set_twist(&mut self, twist: f64) {
        self.twist = twist;
    }

    /// Advances the twist by one tick.
    ///
    /// `axis` is the external directional input in −1..1; the twist
    /// parameter accumulates `axis · sensitivity · dt`, then the base
    /// pose is re-deformed from scratch and the mesh's normals and
    /// bounds are recomputed.
    pub fn tick(&mut self, mesh: &mut Mesh, axis: f64, dt: f64) {
        self.twist += axis * self.sensitivity * dt;

        let mut vertices = Vec::with_capacity(self.base_vertices.len());
        let mut normals = Vec::with_capacity(self.base_normals.len());
        for (vertex, normal) in self.base_vertices.iter().zip(&self.base_normals) {
            let angle = vertex.y * self.twist;
            vertices.push(rotate_about_y(*vertex, angle));
            normals.push(rotate_about_y(*normal, angle));
        }

        match self.normal_source {
            NormalSource::Positions => mesh.set_normals(vertices.clone()),
            NormalSource::Normals => mesh.set_normals(normals),
        }
        mesh.set_vertices(vertices);

        mesh.compute_normals();
        mesh.recompute_bounds();
    }
}

/// Rotates `p` about the +Y axis by `angle` radians.
fn rotate_about_y(p: DVec3, angle: f64) -> DVec3 {
    let (sin, cos) = angle.sin_cos();
    DVec3::new(p.x * cos - p.z * sin, p.y, p.x * sin + p.z * cos)
}
