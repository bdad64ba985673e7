//! # Pose Math
//!
//! World-space pose of a scene object plus the orientation helpers the
//! trail extruder needs to place cross-sections along a path.

use config::constants::DEGENERATE_DIRECTION_SQ;
use glam::{DMat3, DMat4, DQuat, DVec3};

/// Position and orientation of a scene object.
///
/// Both derived matrices are exposed because extrusion frames are
/// captured in world space and later re-expressed in the moving object's
/// local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// World-space position
    pub position: DVec3,
    /// World-space rotation
    pub rotation: DQuat,
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Pose {
    /// The identity pose at the world origin.
    pub const IDENTITY: Self = Self {
        position: DVec3::ZERO,
        rotation: DQuat::IDENTITY,
    };

    /// Creates a pose from position and rotation.
    pub fn new(position: DVec3, rotation: DQuat) -> Self {
        Self { position, rotation }
    }

    /// Local-to-world transform of this pose.
    pub fn local_to_world(&self) -> DMat4 {
        DMat4::from_rotation_translation(self.rotation, self.position)
    }

    /// World-to-local transform of this pose.
    pub fn world_to_local(&self) -> DMat4 {
        self.local_to_world().inverse()
    }
}

/// Builds the rotation whose +Z axis points along `forward`, using `up`
/// as the vertical hint.
///
/// Degenerate input (zero-length forward, or forward parallel to up)
/// yields the identity rotation rather than a NaN orientation, so a
/// stationary or vertically-moving object never poisons downstream math.
pub fn look_rotation(forward: DVec3, up: DVec3) -> DQuat {
    if forward.length_squared() < DEGENERATE_DIRECTION_SQ {
        return DQuat::IDENTITY;
    }
    let f = forward.normalize();

    let right = up.cross(f);
    if right.length_squared() < DEGENERATE_DIRECTION_SQ {
        return DQuat::IDENTITY;
    }
    let r = right.normalize();
    let u = f.cross(r);

    DQuat::from_mat3(&DMat3::from_cols(r, u, f))
}
