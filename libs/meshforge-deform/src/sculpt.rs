//! # Falloff Sculptor
//!
//! Radius-limited vertex displacement along an averaged local normal,
//! plus the per-component bookkeeping for deferring collision-shape
//! updates to activation-release boundaries.

use config::constants::{DEFAULT_SCULPT_PULL, DEFAULT_SCULPT_RADIUS};
use glam::DVec3;
use meshforge_mesh::{GeometryError, Mesh};
use serde::{Deserialize, Serialize};

use crate::falloff::Falloff;

/// Identifier of a sculptable target mesh, assigned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeshId(pub u32);

/// Brush configuration, validated at construction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SculptParams {
    radius: f64,
    pull: f64,
    falloff: Falloff,
}

impl Default for SculptParams {
    fn default() -> Self {
        Self {
            radius: DEFAULT_SCULPT_RADIUS,
            pull: DEFAULT_SCULPT_PULL,
            falloff: Falloff::default(),
        }
    }
}

impl SculptParams {
    /// Creates brush parameters, rejecting a non-positive radius.
    ///
    /// `pull` is the displacement strength per second; negative values
    /// carve instead of lifting.
    pub fn new(radius: f64, pull: f64, falloff: Falloff) -> Result<Self, GeometryError> {
        if !(radius > 0.0) {
            return Err(GeometryError::invalid_config(format!(
                "sculpt radius must be positive, got {radius}"
            )));
        }
        Ok(Self {
            radius,
            pull,
            falloff,
        })
    }

    /// Brush radius in mesh-local units.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Displacement strength per second.
    pub fn pull(&self) -> f64 {
        self.pull
    }

    /// Selected falloff kernel.
    pub fn falloff(&self) -> Falloff {
        self.falloff
    }
}

/// Applies one sculpt stroke to a mesh.
///
/// Two passes over the vertices, both limited to `radius` around
/// `point` by a single squared-distance check per vertex:
///
/// 1. Accumulate an averaged normal from the stored normals of the
///    vertices in range. The weighting here is always the **linear**
///    kernel, independent of the selected one; averaging with the
///    selected kernel would let the needle kernel's negative boundary
///    weights flip the average, so the fixed linear choice is kept.
/// 2. Displace each vertex in range along that averaged normal by the
///    **selected** kernel's weight times `power`.
///
/// Normals and bounds are recomputed afterwards. A mesh without stored
/// normals gets them computed before the first pass.
pub fn deform(mesh: &mut Mesh, point: DVec3, power: f64, radius: f64, falloff: Falloff) {
    if mesh.is_empty() {
        return;
    }
    if mesh.normals().is_none() {
        mesh.compute_normals();
    }

    let sqr_radius = radius * radius;

    // Pass 1: averaged normal of all surrounding vertices
    let mut average = DVec3::ZERO;
    if let Some(normals) = mesh.normals() {
        for (vertex, normal) in mesh.vertices().iter().zip(normals) {
            let sqr_magnitude = (*vertex - point).length_squared();
            if sqr_magnitude > sqr_radius {
                continue;
            }
            let distance = sqr_magnitude.sqrt();
            average += Falloff::Linear.weight(distance, radius) * *normal;
        }
    }
    let average = average.normalize_or_zero();

    // Pass 2: displace along the averaged normal
    let mut vertices = mesh.vertices().to_vec();
    for vertex in &mut vertices {
        let sqr_magnitude = (*vertex - point).length_squared();
        if sqr_magnitude > sqr_radius {
            continue;
        }
        let distance = sqr_magnitude.sqrt();
        *vertex += average * falloff.weight(distance, radius) * power;
    }

    mesh.set_vertices(vertices);
    mesh.compute_normals();
    mesh.recompute_bounds();
}

/// One tick's worth of sculpt input: the target mesh, its id, and the
/// activation point already resolved into the mesh's local space by the
/// host's ray query.
pub struct SculptStroke<'a> {
    /// Host-assigned id of the target mesh
    pub target: MeshId,
    /// Exclusive access to the target's geometry
    pub mesh: &'a mut Mesh,
    /// Influence point in the target's local space
    pub point: DVec3,
}

/// Instruction to the host to resynchronize a target's collision shape
/// with its deformed geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColliderRefresh {
    /// The target whose collision shape is stale
    pub target: MeshId,
}

/// Interactive sculpting component.
///
/// Collision shapes are expensive to rebuild, so deformation never
/// refreshes them per tick; instead the sculptor remembers which target
/// it deformed and emits a [`ColliderRefresh`] when the activation
/// signal is released or when a stroke switches to a different target.
///
/// Call `tick` with `Some` stroke while the activation signal is held
/// and the ray query hit a surface, and with `None` on the tick the
/// signal is released. A held signal whose ray misses every surface is
/// simply not a stroke; skip the call for that tick.
#[derive(Debug, Default)]
pub struct Sculptor {
    params: SculptParams,
    stale: Option<MeshId>,
}

impl Sculptor {
    /// Creates a sculptor with the given brush parameters.
    pub fn new(params: SculptParams) -> Self {
        Self {
            params,
            stale: None,
        }
    }

    /// Brush parameters.
    pub fn params(&self) -> &SculptParams {
        &self.params
    }

    /// The target whose collision shape has pending deformations, if
    /// any.
    pub fn stale_target(&self) -> Option<MeshId> {
        self.stale
    }

    /// Advances the sculptor by one tick.
    ///
    /// Returns the collision refresh the host must perform this tick, if
    /// any: on release, for the memoized target; on a target switch, for
    /// the previously deformed target before the new one is touched.
    pub fn tick(&mut self, stroke: Option<SculptStroke<'_>>, dt: f64) -> Option<ColliderRefresh> {
        let Some(stroke) = stroke else {
            return self.flush();
        };

        let refresh = if self.stale.is_some_and(|target| target != stroke.target) {
            self.flush()
        } else {
            None
        };
        self.stale = Some(stroke.target);

        deform(
            stroke.mesh,
            stroke.point,
            self.params.pull * dt,
            self.params.radius,
            self.params.falloff,
        );

        refresh
    }

    fn flush(&mut self) -> Option<ColliderRefresh> {
        self.stale.take().map(|target| {
            log::debug!("flushing collision shape for mesh {}", target.0);
            ColliderRefresh { target }
        })
    }
}
