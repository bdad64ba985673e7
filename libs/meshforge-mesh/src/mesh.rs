//! # Mesh Data Structure
//!
//! Core mesh representation with vertices, triangles, and optional
//! normal/uv/tangent channels.

use config::constants::EPSILON;
use glam::{DVec2, DVec3, DVec4};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding volume of a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Minimum corner
    pub min: DVec3,
    /// Maximum corner
    pub max: DVec3,
}

impl Bounds {
    /// Center point of the bounding volume.
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Extents along each axis.
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }
}

/// A triangle mesh with vertices, indices, and optional per-vertex
/// channels.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the renderer boundary.
///
/// Invariants: every triangle index is `< vertex_count()`, and every
/// present channel has exactly one entry per vertex. `validate()` checks
/// both.
///
/// # Example
///
/// ```rust
/// use meshforge_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// mesh.compute_normals();
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
    /// Optional vertex normals
    normals: Option<Vec<DVec3>>,
    /// Optional texture coordinates
    uvs: Option<Vec<DVec2>>,
    /// Optional tangents: xyz direction plus w handedness sign
    tangents: Option<Vec<DVec4>>,
    /// Cached bounding volume, refreshed by `recompute_bounds`
    bounds: Option<Bounds>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            ..Self::default()
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Replaces the vertex buffer. Stale derived data (normals, bounds)
    /// is the caller's responsibility to refresh.
    pub fn set_vertices(&mut self, vertices: Vec<DVec3>) {
        self.vertices = vertices;
    }

    /// Replaces the triangle index buffer.
    pub fn set_triangles(&mut self, triangles: Vec<[u32; 3]>) {
        self.triangles = triangles;
    }

    /// Sets vertex normals.
    pub fn set_normals(&mut self, normals: Vec<DVec3>) {
        self.normals = Some(normals);
    }

    /// Returns the vertex normals.
    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Sets texture coordinates.
    pub fn set_uvs(&mut self, uvs: Vec<DVec2>) {
        self.uvs = Some(uvs);
    }

    /// Returns the texture coordinates.
    pub fn uvs(&self) -> Option<&[DVec2]> {
        self.uvs.as_deref()
    }

    /// Sets tangents (xyz direction, w handedness sign).
    pub fn set_tangents(&mut self, tangents: Vec<DVec4>) {
        self.tangents = Some(tangents);
    }

    /// Returns the tangents.
    pub fn tangents(&self) -> Option<&[DVec4]> {
        self.tangents.as_deref()
    }

    /// Returns the cached bounding volume, if `recompute_bounds` has run.
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// Removes all geometry and derived channels.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.triangles.clear();
        self.normals = None;
        self.uvs = None;
        self.tangents = None;
        self.bounds = None;
    }

    /// Computes and sets smooth per-vertex normals from triangle geometry.
    ///
    /// Each face normal is accumulated unnormalized onto its three
    /// vertices, which weights the result by triangle area, then the sums
    /// are normalized. Zero-length sums are left at zero.
    pub fn compute_normals(&mut self) {
        let mut normals = vec![DVec3::ZERO; self.vertices.len()];

        for tri in &self.triangles {
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];

            let edge1 = v1 - v0;
            let edge2 = v2 - v0;
            let normal = edge1.cross(edge2);

            normals[tri[0] as usize] += normal;
            normals[tri[1] as usize] += normal;
            normals[tri[2] as usize] += normal;
        }

        // Normalize
        for normal in &mut normals {
            let len = normal.length();
            if len > 0.0 {
                *normal /= len;
            }
        }

        self.normals = Some(normals);
    }

    /// Recomputes and caches the axis-aligned bounding volume.
    ///
    /// An empty mesh clears the cached bounds instead.
    pub fn recompute_bounds(&mut self) {
        if self.vertices.is_empty() {
            self.bounds = None;
            return;
        }
        let (min, max) = self.bounding_box();
        self.bounds = Some(Bounds { min, max });
    }

    /// Computes the axis-aligned bounding box on demand.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Reverses the winding of every triangle and negates the tangent
    /// handedness sign, flipping which side is the front face.
    pub fn invert_winding(&mut self) {
        for tri in &mut self.triangles {
            tri.swap(0, 1);
        }
        if let Some(tangents) = &mut self.tangents {
            for tangent in tangents {
                tangent.w = -tangent.w;
            }
        }
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All triangle indices are within the vertex buffer
    /// - All present channels have one entry per vertex
    /// - No degenerate triangles (repeated index or zero area)
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        if let Some(normals) = &self.normals {
            if normals.len() != self.vertices.len() {
                return false;
            }
        }
        if let Some(uvs) = &self.uvs {
            if uvs.len() != self.vertices.len() {
                return false;
            }
        }
        if let Some(tangents) = &self.tangents {
            if tangents.len() != self.vertices.len() {
                return false;
            }
        }

        for tri in &self.triangles {
            // Check indices are valid
            if tri[0] >= vertex_count || tri[1] >= vertex_count || tri[2] >= vertex_count {
                return false;
            }

            // Check for degenerate triangles
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return false;
            }

            // Check for zero-area triangles
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];
            let area = (v1 - v0).cross(v2 - v0).length();
            if area < EPSILON {
                return false;
            }
        }

        true
    }

    /// Exports vertices as f32 array for the renderer.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.vertices.len() * 3);
        for v in &self.vertices {
            result.push(v.x as f32);
            result.push(v.y as f32);
            result.push(v.z as f32);
        }
        result
    }

    /// Exports triangle indices as u32 array for the renderer.
    pub fn indices_u32(&self) -> Vec<u32> {
        let mut result = Vec::with_capacity(self.triangles.len() * 3);
        for tri in &self.triangles {
            result.push(tri[0]);
            result.push(tri[1]);
            result.push(tri[2]);
        }
        result
    }

    /// Exports normals as f32 array for the renderer.
    pub fn normals_f32(&self) -> Option<Vec<f32>> {
        self.normals.as_ref().map(|normals| {
            let mut result = Vec::with_capacity(normals.len() * 3);
            for n in normals {
                result.push(n.x as f32);
                result.push(n.y as f32);
                result.push(n.z as f32);
            }
            result
        })
    }

    /// Exports texture coordinates as f32 array for the renderer.
    pub fn uvs_f32(&self) -> Option<Vec<f32>> {
        self.uvs.as_ref().map(|uvs| {
            let mut result = Vec::with_capacity(uvs.len() * 2);
            for uv in uvs {
                result.push(uv.x as f32);
                result.push(uv.y as f32);
            }
            result
        })
    }

    /// Exports tangents as f32 array for the renderer.
    pub fn tangents_f32(&self) -> Option<Vec<f32>> {
        self.tangents.as_ref().map(|tangents| {
            let mut result = Vec::with_capacity(tangents.len() * 4);
            for t in tangents {
                result.push(t.x as f32);
                result.push(t.y as f32);
                result.push(t.z as f32);
                result.push(t.w as f32);
            }
            result
        })
    }
}
