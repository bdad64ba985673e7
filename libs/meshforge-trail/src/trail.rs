//! # Trail Extruder
//!
//! Per-tick component that samples a moving object's pose into a frame
//! history and extrudes a reference cross-section along it.

use config::constants::{
    DEFAULT_TRAIL_LIFETIME, DEFAULT_TRAIL_MIN_DISTANCE, ORIENTATION_BLEND_FACTOR,
    ORIENTATION_BLEND_THRESHOLD_DEG,
};
use glam::{DMat4, DQuat, DVec3};
use meshforge_mesh::{look_rotation, EdgeAdjacency, GeometryError, Mesh, Pose};
use serde::{Deserialize, Serialize};

use crate::extrude::extrude_sections;
use crate::history::FrameHistory;

/// Trail behavior configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrailConfig {
    /// Seconds a frame sample stays alive
    pub lifetime: f64,
    /// Minimum movement before a new frame sample is recorded
    pub min_distance: f64,
    /// Derive section orientations from the motion direction instead of
    /// the recorded transforms
    pub auto_orient: bool,
    /// Reverse the winding of the extruded output
    pub invert_faces: bool,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            lifetime: DEFAULT_TRAIL_LIFETIME,
            min_distance: DEFAULT_TRAIL_MIN_DISTANCE,
            auto_orient: true,
            invert_faces: false,
        }
    }
}

/// Extrudes a reference mesh along the tracked object's recent path.
///
/// The reference mesh's edge adjacency is computed once here and reused
/// read-only for every tick's rebuild. The extruded output lives in a
/// separate mesh owned by the caller and is expressed in the object's
/// current local space, ready to be parented under it.
#[derive(Debug, Clone)]
pub struct TrailExtruder {
    config: TrailConfig,
    source: Mesh,
    adjacency: EdgeAdjacency,
    history: FrameHistory,
}

impl TrailExtruder {
    /// Creates a trail extruder for the given reference cross-section.
    ///
    /// An empty reference mesh is accepted and simply yields an empty
    /// trail; invalid lifetime or distance configuration is rejected.
    pub fn new(source: Mesh, config: TrailConfig) -> Result<Self, GeometryError> {
        let history = FrameHistory::new(config.lifetime, config.min_distance)?;
        let adjacency = EdgeAdjacency::build(&source);
        if adjacency.boundary_count() == 0 && !source.is_empty() {
            log::debug!("trail reference mesh is closed, extrusion will produce caps only");
        }
        Ok(Self {
            config,
            source,
            adjacency,
            history,
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    /// The retained frame history.
    pub fn history(&self) -> &FrameHistory {
        &self.history
    }

    /// The precomputed adjacency of the reference mesh.
    pub fn adjacency(&self) -> &EdgeAdjacency {
        &self.adjacency
    }

    /// Advances the trail by one tick.
    ///
    /// Updates the history from the object's current pose and clock,
    /// then rebuilds `out` in place. With fewer than two retained
    /// samples there is nothing to connect and `out` is left untouched;
    /// an empty reference mesh clears it.
    pub fn tick(&mut self, pose: &Pose, now: f64, out: &mut Mesh) {
        self.history.update(pose, now);

        if self.history.len() < 2 {
            return;
        }
        if self.source.is_empty() {
            out.clear();
            return;
        }

        let sections = self.section_transforms(pose);
        extrude_sections(
            &self.source,
            &self.adjacency,
            &sections,
            self.config.invert_faces,
            out,
        );
    }

    /// Computes one transform per history sample, newest first, in the
    /// object's current local space.
    fn section_transforms(&self, pose: &Pose) -> Vec<DMat4> {
        let count = self.history.len();
        let world_to_local = pose.world_to_local();
        let threshold = ORIENTATION_BLEND_THRESHOLD_DEG.to_radians();

        let mut sections: Vec<DMat4> = Vec::with_capacity(count);
        let mut previous_rotation = DQuat::IDENTITY;

        for i in 0..count {
            if self.config.auto_orient {
                if i == 0 {
                    let direction =
                        self.history.get(0).position - self.history.get(1).position;
                    let rotation = look_rotation(direction, DVec3::Y);
                    previous_rotation = rotation;
                    sections.push(
                        world_to_local
                            * DMat4::from_rotation_translation(rotation, pose.position),
                    );
                } else if i != count - 1 {
                    let direction =
                        self.history.get(i).position - self.history.get(i + 1).position;
                    let mut rotation = look_rotation(direction, DVec3::Y);

                    // Blend instead of snapping on sharp turns
                    if previous_rotation.angle_between(rotation) > threshold {
                        rotation =
                            previous_rotation.slerp(rotation, ORIENTATION_BLEND_FACTOR);
                    }

                    previous_rotation = rotation;
                    sections.push(
                        world_to_local
                            * DMat4::from_rotation_translation(
                                rotation,
                                self.history.get(i).position,
                            ),
                    );
                } else {
                    // The oldest sample has no outgoing direction
                    sections.push(sections[i - 1]);
                }
            } else if i == 0 {
                // The newest section sits in the object's own frame
                sections.push(DMat4::IDENTITY);
            } else {
                sections.push(world_to_local * self.history.get(i).local_to_world);
            }
        }

        sections
    }
}
