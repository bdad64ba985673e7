//! # Wave Deformer
//!
//! Time-driven sine displacement: every vertex bobs vertically with a
//! phase taken from its base position, producing a rolling surface
//! swell.

use config::constants::{DEFAULT_WAVE_SCALE, DEFAULT_WAVE_SPEED};
use glam::DVec3;
use meshforge_mesh::{GeometryError, Mesh};

/// Per-tick wave deformation component.
///
/// Like the twist deformer, the base vertex buffer is captured eagerly
/// at construction; each tick evaluates the wave on the base positions
/// so the motion is a pure function of the clock.
#[derive(Debug, Clone)]
pub struct WaveDeformer {
    scale: f64,
    speed: f64,
    base_vertices: Vec<DVec3>,
}

impl WaveDeformer {
    /// Captures the base pose of `mesh` and creates the deformer.
    pub fn new(mesh: &Mesh, scale: f64, speed: f64) -> Result<Self, GeometryError> {
        if mesh.is_empty() {
            return Err(GeometryError::missing_source(
                "wave deformer needs a non-empty reference mesh",
            ));
        }
        Ok(Self {
            scale,
            speed,
            base_vertices: mesh.vertices().to_vec(),
        })
    }

    /// Creates the deformer with the default amplitude and frequency.
    pub fn with_defaults(mesh: &Mesh) -> Result<Self, GeometryError> {
        Self::new(mesh, DEFAULT_WAVE_SCALE, DEFAULT_WAVE_SPEED)
    }

    /// Advances the wave to the given absolute time.
    pub fn tick(&mut self, mesh: &mut Mesh, time: f64) {
        let mut vertices = Vec::with_capacity(self.base_vertices.len());
        for base in &self.base_vertices {
            let mut vertex = *base;
            vertex.y += (time * self.speed + base.x + base.y + base.z).sin() * self.scale;
            vertices.push(vertex);
        }
        mesh.set_vertices(vertices);
        mesh.compute_normals();
        mesh.recompute_bounds();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip() -> Mesh {
        let mut mesh = Mesh::new();
        for x in 0..4 {
            mesh.add_vertex(DVec3::new(x as f64, 0.0, 0.0));
            mesh.add_vertex(DVec3::new(x as f64, 0.0, 1.0));
        }
        for x in 0..3u32 {
            let i = x * 2;
            mesh.add_triangle(i, i + 1, i + 2);
            mesh.add_triangle(i + 1, i + 3, i + 2);
        }
        mesh
    }

    #[test]
    fn test_rejects_empty_mesh() {
        assert!(WaveDeformer::with_defaults(&Mesh::new()).is_err());
    }

    #[test]
    fn test_zero_scale_keeps_base_pose() {
        let mut mesh = strip();
        let base = mesh.vertices().to_vec();
        let mut wave = WaveDeformer::new(&mesh, 0.0, 1.0).unwrap();
        wave.tick(&mut mesh, 12.34);
        for (a, b) in base.iter().zip(mesh.vertices()) {
            assert_eq!(*a, *b);
        }
    }

    #[test]
    fn test_displacement_is_vertical_with_positional_phase() {
        let mut mesh = strip();
        let mut wave = WaveDeformer::new(&mesh, 2.0, 1.0).unwrap();
        wave.tick(&mut mesh, 0.5);

        for (base, v) in wave.base_vertices.clone().iter().zip(mesh.vertices()) {
            assert_eq!(v.x, base.x);
            assert_eq!(v.z, base.z);
            let expected = (0.5 + base.x + base.y + base.z).sin() * 2.0;
            assert!((v.y - (base.y + expected)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_same_time_is_deterministic() {
        let mut mesh_a = strip();
        let mut mesh_b = strip();
        let mut wave_a = WaveDeformer::with_defaults(&mesh_a).unwrap();
        let mut wave_b = WaveDeformer::with_defaults(&mesh_b).unwrap();

        wave_a.tick(&mut mesh_a, 3.0);
        wave_b.tick(&mut mesh_b, 3.0);
        assert_eq!(mesh_a.vertices(), mesh_b.vertices());
    }
}
