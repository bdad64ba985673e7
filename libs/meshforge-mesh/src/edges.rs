//! # Edge Adjacency
//!
//! Computes, once per reference mesh, which edges are shared between two
//! triangles (interior) and which are referenced by exactly one
//! (boundary). The trail extruder sweeps the boundary edges into side
//! quads and leaves the interior ones to the caps.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::mesh::Mesh;

/// One edge of a reference mesh together with the triangles that
/// reference it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// The two vertex indices, in the winding order of the first triangle
    /// that referenced this edge.
    vertices: [u32; 2],
    /// The one or two referencing triangle indices. Both entries hold the
    /// same triangle for a boundary edge.
    faces: [u32; 2],
    /// True when exactly one triangle references this edge.
    boundary: bool,
}

impl Edge {
    /// Vertex indices in first-triangle winding order.
    #[inline]
    pub fn vertices(&self) -> [u32; 2] {
        self.vertices
    }

    /// Referencing triangle indices (equal entries for a boundary edge).
    #[inline]
    pub fn faces(&self) -> [u32; 2] {
        self.faces
    }

    /// True when exactly one triangle references this edge.
    #[inline]
    pub fn is_boundary(&self) -> bool {
        self.boundary
    }
}

/// The immutable edge set of a fixed reference mesh.
///
/// Computed once and shared read-only across every extrusion tick. The
/// computed *set* does not depend on triangle traversal order; only the
/// stored order of the records does.
///
/// # Example
///
/// ```rust,ignore
/// let adjacency = EdgeAdjacency::build(&reference_mesh);
/// let open = adjacency.boundary().count();
/// ```
#[derive(Debug, Clone, Default)]
pub struct EdgeAdjacency {
    edges: Vec<Edge>,
}

impl EdgeAdjacency {
    /// Builds the edge set of a mesh.
    ///
    /// Every undirected vertex pair referenced by a triangle yields one
    /// record. The first referencing triangle fixes the record's vertex
    /// orientation and marks it boundary; a second referencing triangle
    /// clears the flag. An edge that never finds a second triangle simply
    /// stays boundary; that is the expected state for an open mesh, not
    /// an error. Further references beyond two leave the record as
    /// interior.
    pub fn build(mesh: &Mesh) -> Self {
        let mut by_pair: HashMap<(u32, u32), usize> = HashMap::new();
        let mut edges: Vec<Edge> = Vec::new();

        for (face, tri) in mesh.triangles().iter().enumerate() {
            let face = face as u32;
            for k in 0..3 {
                let a = tri[k];
                let b = tri[(k + 1) % 3];
                let key = (a.min(b), a.max(b));

                match by_pair.entry(key) {
                    Entry::Vacant(slot) => {
                        slot.insert(edges.len());
                        edges.push(Edge {
                            vertices: [a, b],
                            faces: [face, face],
                            boundary: true,
                        });
                    }
                    Entry::Occupied(slot) => {
                        let edge = &mut edges[*slot.get()];
                        if edge.boundary {
                            edge.faces[1] = face;
                            edge.boundary = false;
                        }
                    }
                }
            }
        }

        Self { edges }
    }

    /// All edge records.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of edge records.
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// True when the source mesh had no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Edges referenced by exactly one triangle.
    pub fn boundary(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(|e| e.boundary)
    }

    /// Edges shared by two triangles.
    pub fn interior(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(|e| !e.boundary)
    }

    /// Number of boundary edges.
    pub fn boundary_count(&self) -> usize {
        self.boundary().count()
    }
}
