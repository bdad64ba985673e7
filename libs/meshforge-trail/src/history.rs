//! # Frame History
//!
//! Newest-first record of a moving object's poses, pruned by age every
//! tick and extended only when the object has moved far enough to be
//! worth a new cross-section.

use std::collections::VecDeque;

use glam::{DMat4, DVec3};
use meshforge_mesh::{GeometryError, Pose};

/// One historical pose of the tracked object.
#[derive(Debug, Clone, Copy)]
pub struct FrameSample {
    /// World-space position at capture time
    pub position: DVec3,
    /// Full local-to-world transform at capture time
    pub local_to_world: DMat4,
    /// Absolute capture time in seconds
    pub timestamp: f64,
}

/// Time-windowed, distance-gated pose history, newest first.
#[derive(Debug, Clone)]
pub struct FrameHistory {
    samples: VecDeque<FrameSample>,
    lifetime: f64,
    min_distance: f64,
}

impl FrameHistory {
    /// Creates a history with the given sample lifetime and minimum
    /// movement between samples. Both must be positive.
    pub fn new(lifetime: f64, min_distance: f64) -> Result<Self, GeometryError> {
        if !(lifetime > 0.0) {
            return Err(GeometryError::invalid_config(format!(
                "trail lifetime must be positive, got {lifetime}"
            )));
        }
        if !(min_distance > 0.0) {
            return Err(GeometryError::invalid_config(format!(
                "trail min distance must be positive, got {min_distance}"
            )));
        }
        Ok(Self {
            samples: VecDeque::new(),
            lifetime,
            min_distance,
        })
    }

    /// Number of retained samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when no samples are retained.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The sample at `index`, 0 being the newest.
    #[inline]
    pub fn get(&self, index: usize) -> &FrameSample {
        &self.samples[index]
    }

    /// Newest-first iteration over the retained samples.
    pub fn iter(&self) -> impl Iterator<Item = &FrameSample> {
        self.samples.iter()
    }

    /// Advances the history by one tick: evicts expired samples, then
    /// records the current pose if the object moved at least the
    /// configured minimum distance since the newest sample.
    pub fn update(&mut self, pose: &Pose, now: f64) {
        self.evict_expired(now);

        let min_sq = self.min_distance * self.min_distance;
        let moved = self
            .samples
            .front()
            .map_or(true, |newest| {
                (newest.position - pose.position).length_squared() > min_sq
            });
        if moved {
            self.samples.push_front(FrameSample {
                position: pose.position,
                local_to_world: pose.local_to_world(),
                timestamp: now,
            });
        }
    }

    /// Drops every sample whose age exceeds the configured lifetime.
    pub fn evict_expired(&mut self, now: f64) {
        while self
            .samples
            .back()
            .is_some_and(|oldest| now > oldest.timestamp + self.lifetime)
        {
            self.samples.pop_back();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DQuat;

    fn pose_at(x: f64) -> Pose {
        Pose::new(DVec3::new(x, 0.0, 0.0), DQuat::IDENTITY)
    }

    #[test]
    fn test_new_validates_config() {
        assert!(FrameHistory::new(2.0, 0.1).is_ok());
        assert!(FrameHistory::new(0.0, 0.1).is_err());
        assert!(FrameHistory::new(2.0, -1.0).is_err());
        assert!(FrameHistory::new(f64::NAN, 0.1).is_err());
    }

    #[test]
    fn test_first_update_always_samples() {
        let mut history = FrameHistory::new(2.0, 0.1).unwrap();
        history.update(&pose_at(0.0), 0.0);
        assert_eq!(history.len(), 1);
        assert_eq!(history.get(0).timestamp, 0.0);
    }

    #[test]
    fn test_small_movement_is_not_sampled() {
        let mut history = FrameHistory::new(2.0, 0.5).unwrap();
        history.update(&pose_at(0.0), 0.0);
        history.update(&pose_at(0.3), 0.1);
        assert_eq!(history.len(), 1);
        history.update(&pose_at(0.6), 0.2);
        assert_eq!(history.len(), 2);
        // Newest first
        assert_eq!(history.get(0).position.x, 0.6);
        assert_eq!(history.get(1).position.x, 0.0);
    }

    #[test]
    fn test_expired_samples_are_gone_next_tick() {
        let mut history = FrameHistory::new(1.0, 0.1).unwrap();
        history.update(&pose_at(0.0), 0.0);
        history.update(&pose_at(1.0), 0.5);
        assert_eq!(history.len(), 2);

        // At t = 1.2 the t = 0 sample is past its lifetime
        history.update(&pose_at(2.0), 1.2);
        assert_eq!(history.len(), 2);
        assert!(history.iter().all(|s| s.timestamp > 0.0));

        // At t = 2.6 everything old is gone, only the fresh sample stays
        history.update(&pose_at(3.0), 2.6);
        assert_eq!(history.len(), 1);
        assert_eq!(history.get(0).timestamp, 2.6);
    }

    #[test]
    fn test_sample_records_full_transform() {
        let mut history = FrameHistory::new(2.0, 0.1).unwrap();
        let pose = Pose::new(DVec3::new(1.0, 2.0, 3.0), DQuat::from_rotation_y(0.5));
        history.update(&pose, 0.0);

        let sample = history.get(0);
        assert_eq!(sample.position, pose.position);
        let expected = pose.local_to_world();
        assert!((sample.local_to_world.transform_point3(DVec3::X)
            - expected.transform_point3(DVec3::X))
        .length()
            < 1e-12);
    }
}
