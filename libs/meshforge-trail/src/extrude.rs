//! # Cross-Section Extrusion
//!
//! Sweeps a reference mesh through a sequence of section transforms.
//! The reference's boundary edges become the swept side surface, welded
//! between consecutive sections by sharing their vertices; the full
//! reference triangle list, placed at the first and last sections,
//! closes the two ends.

use glam::{DMat4, DVec2};
use meshforge_mesh::{EdgeAdjacency, Mesh};

/// Rebuilds `out` as the extrusion of `source` through `sections`.
///
/// Vertex layout: for every section, two vertices per boundary edge (in
/// the edge's first-triangle orientation), followed by two full copies
/// of the source vertices for the caps. Side UVs take `u` from the
/// source UV and `v` from the longitudinal fraction of the section; a
/// source without UVs contributes zeros.
///
/// The first cap keeps the source winding; the last cap is reversed so
/// both face outward. `invert_faces` flips the entire result, tangent
/// handedness included.
///
/// Fewer than two sections leave `out` untouched; an empty source
/// clears it. A source with triangles but no boundary edges (a closed
/// surface) produces caps only.
pub fn extrude_sections(
    source: &Mesh,
    adjacency: &EdgeAdjacency,
    sections: &[DMat4],
    invert_faces: bool,
    out: &mut Mesh,
) {
    if sections.len() < 2 {
        return;
    }
    if source.is_empty() {
        out.clear();
        return;
    }

    let edges: Vec<[u32; 2]> = adjacency.boundary().map(|e| e.vertices()).collect();
    let src_vertices = source.vertices();
    let src_uvs = source.uvs();
    let uv_of = |i: u32| src_uvs.map_or(DVec2::ZERO, |uvs| uvs[i as usize]);

    let swept_count = edges.len() * 2 * sections.len();
    let total_vertices = swept_count + src_vertices.len() * 2;

    let mut vertices = Vec::with_capacity(total_vertices);
    let mut uvs = Vec::with_capacity(total_vertices);

    // Swept vertices, two per boundary edge per section
    for (index, matrix) in sections.iter().enumerate() {
        let vcoord = index as f64 / (sections.len() - 1) as f64;
        for &[a, b] in &edges {
            vertices.push(matrix.transform_point3(src_vertices[a as usize]));
            vertices.push(matrix.transform_point3(src_vertices[b as usize]));
            uvs.push(DVec2::new(uv_of(a).x, vcoord));
            uvs.push(DVec2::new(uv_of(b).x, vcoord));
        }
    }

    // Cap vertices: the whole source at the first and last sections
    for matrix in [&sections[0], &sections[sections.len() - 1]] {
        for (i, vertex) in src_vertices.iter().enumerate() {
            vertices.push(matrix.transform_point3(*vertex));
            uvs.push(uv_of(i as u32));
        }
    }

    let side_triangles = edges.len() * 2 * (sections.len() - 1);
    let mut triangles = Vec::with_capacity(side_triangles + source.triangle_count() * 2);

    // Side quads between consecutive sections
    let stride = (edges.len() * 2) as u32;
    for section in 0..sections.len() as u32 - 1 {
        let base = stride * section;
        let next = stride * (section + 1);
        for edge in 0..edges.len() as u32 {
            let b = base + edge * 2;
            let n = next + edge * 2;
            triangles.push([b, n, b + 1]);
            triangles.push([n + 1, b + 1, n]);
        }
    }

    // First cap keeps the source winding, last cap is reversed
    let first_cap = swept_count as u32;
    for tri in source.triangles() {
        triangles.push([
            tri[1] + first_cap,
            tri[2] + first_cap,
            tri[0] + first_cap,
        ]);
    }
    let last_cap = first_cap + src_vertices.len() as u32;
    for tri in source.triangles() {
        triangles.push([tri[0] + last_cap, tri[2] + last_cap, tri[1] + last_cap]);
    }

    out.clear();
    out.set_vertices(vertices);
    out.set_uvs(uvs);
    out.set_triangles(triangles);
    if invert_faces {
        out.invert_winding();
    }
    out.compute_normals();
    out.recompute_bounds();
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{DVec2, DVec3};

    /// Unit quad in the xy plane: 4 boundary edges, 1 interior.
    fn quad() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(1.0, 1.0, 0.0));
        mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
        mesh.add_triangle(0, 1, 2);
        mesh.add_triangle(0, 2, 3);
        mesh.set_uvs(vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(0.0, 1.0),
        ]);
        mesh
    }

    fn z_offset_sections(count: usize) -> Vec<DMat4> {
        (0..count)
            .map(|i| DMat4::from_translation(DVec3::new(0.0, 0.0, -(i as f64))))
            .collect()
    }

    #[test]
    fn test_two_sections_counts() {
        let source = quad();
        let adjacency = EdgeAdjacency::build(&source);
        assert_eq!(adjacency.boundary_count(), 4);

        let mut out = Mesh::new();
        extrude_sections(&source, &adjacency, &z_offset_sections(2), false, &mut out);

        // 4 boundary edges * 2 vertices * 2 sections, plus two caps
        assert_eq!(out.vertex_count(), 4 * 2 * 2 + 4 * 2);
        // 8 side triangles + 2 triangles per cap
        assert_eq!(out.triangle_count(), 8 + 4);
        assert!(out.validate());
        assert!(out.normals().is_some());
        assert!(out.bounds().is_some());
    }

    #[test]
    fn test_longitudinal_uv_fraction() {
        let source = quad();
        let adjacency = EdgeAdjacency::build(&source);
        let mut out = Mesh::new();
        extrude_sections(&source, &adjacency, &z_offset_sections(3), false, &mut out);

        let uvs = out.uvs().unwrap();
        let stride = 4 * 2; // vertices per section
        for section in 0..3 {
            let expected_v = section as f64 / 2.0;
            for i in 0..stride {
                assert!((uvs[section * stride + i].y - expected_v).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_single_section_leaves_output_untouched() {
        let source = quad();
        let adjacency = EdgeAdjacency::build(&source);
        let mut out = Mesh::new();
        out.add_vertex(DVec3::ZERO);

        extrude_sections(&source, &adjacency, &z_offset_sections(1), false, &mut out);
        assert_eq!(out.vertex_count(), 1);
    }

    #[test]
    fn test_empty_source_clears_output() {
        let source = Mesh::new();
        let adjacency = EdgeAdjacency::build(&source);
        let mut out = Mesh::new();
        out.add_vertex(DVec3::ZERO);

        extrude_sections(&source, &adjacency, &z_offset_sections(2), false, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_invert_faces_reverses_winding() {
        let source = quad();
        let adjacency = EdgeAdjacency::build(&source);

        let mut forward = Mesh::new();
        let mut inverted = Mesh::new();
        extrude_sections(&source, &adjacency, &z_offset_sections(2), false, &mut forward);
        extrude_sections(&source, &adjacency, &z_offset_sections(2), true, &mut inverted);

        for (f, i) in forward.triangles().iter().zip(inverted.triangles()) {
            assert_eq!([f[1], f[0], f[2]], *i);
        }
        // Opposite winding means opposite normals
        let fn0 = forward.normals().unwrap()[0];
        let in0 = inverted.normals().unwrap()[0];
        assert!((fn0 + in0).length() < 1e-9);
    }

    #[test]
    fn test_caps_face_away_from_each_other() {
        let source = quad();
        let adjacency = EdgeAdjacency::build(&source);
        let mut out = Mesh::new();
        extrude_sections(&source, &adjacency, &z_offset_sections(2), false, &mut out);

        // Cap triangles are the last four; their geometric normals along
        // z must oppose each other (first cap at z=0, last at z=-1).
        let tris = out.triangles();
        let face_normal = |tri: &[u32; 3]| {
            let v0 = out.vertex(tri[0]);
            let v1 = out.vertex(tri[1]);
            let v2 = out.vertex(tri[2]);
            (v1 - v0).cross(v2 - v0).normalize()
        };
        let first_cap = face_normal(&tris[tris.len() - 4]);
        let last_cap = face_normal(&tris[tris.len() - 1]);
        assert!((first_cap.z * last_cap.z) < 0.0);
    }
}
