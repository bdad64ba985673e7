//! # Deformation Integration Tests
//!
//! Multi-tick scenarios across the sculpt and twist components,
//! mirroring interactive use: rapid strokes, target switches, and
//! stacked deformation on one mesh.

use glam::DVec3;
use meshforge_mesh::Mesh;

use crate::{deform, Falloff, MeshId, SculptParams, SculptStroke, Sculptor, TwistDeformer};

fn dome_grid(n: usize) -> Mesh {
    let half = (n - 1) as f64 / 2.0;
    let mut mesh = Mesh::new();
    for y in 0..n {
        for x in 0..n {
            let dx = x as f64 - half;
            let dz = y as f64 - half;
            let height = (half * half - (dx * dx + dz * dz) * 0.25).max(0.0).sqrt();
            mesh.add_vertex(DVec3::new(x as f64, height, y as f64));
        }
    }
    for y in 0..(n - 1) as u32 {
        for x in 0..(n - 1) as u32 {
            let i = y * n as u32 + x;
            let w = n as u32;
            mesh.add_triangle(i, i + w, i + 1);
            mesh.add_triangle(i + w, i + w + 1, i + 1);
        }
    }
    mesh.compute_normals();
    mesh
}

#[test]
fn test_repeated_strokes_accumulate() {
    let mut mesh = dome_grid(7);
    let center = mesh.vertex(24); // middle of the 7x7 grid
    let params = SculptParams::new(2.0, 4.0, Falloff::Gauss).unwrap();
    let mut sculptor = Sculptor::new(params);

    for _ in 0..5 {
        sculptor.tick(
            Some(SculptStroke {
                target: MeshId(0),
                mesh: &mut mesh,
                point: center,
            }),
            0.02,
        );
    }

    // Five strokes of power 0.08 each, full weight at the stroke point
    let lifted = mesh.vertex(24);
    assert!((lifted - center).length() > 0.2);
    assert!(mesh.validate());
}

#[test]
fn test_stroke_then_twist_stays_stable() {
    let mut mesh = dome_grid(7);
    let params = SculptParams::new(2.5, 6.0, Falloff::Needle).unwrap();
    let mut sculptor = Sculptor::new(params);
    let mut twist = TwistDeformer::with_defaults(&mut mesh).unwrap();

    sculptor.tick(
        Some(SculptStroke {
            target: MeshId(0),
            mesh: &mut mesh,
            point: DVec3::new(3.0, 3.0, 3.0),
        }),
        0.016,
    );
    // The twist deformer rebuilds from its own base pose; interleaving
    // the two components must never produce non-finite geometry.
    for tick in 0..10 {
        twist.tick(&mut mesh, if tick % 2 == 0 { 1.0 } else { -0.5 }, 0.016);
        for v in mesh.vertices() {
            assert!(v.is_finite());
        }
    }
    assert!(mesh.normals().is_some());
    assert!(mesh.bounds().is_some());
}

#[test]
fn test_needle_kernel_negative_lift_stays_inside_radius() {
    // The needle kernel is unclamped, but the distance pre-filter keeps
    // every displaced vertex within the radius, so no vertex ever
    // receives a weight below 1 - r^2/r^2 = 0 from farther away.
    let mut mesh = dome_grid(5);
    let before = mesh.vertices().to_vec();
    let point = mesh.vertex(12);
    deform(&mut mesh, point, 1.0, 1.5, Falloff::Needle);

    for (a, b) in before.iter().zip(mesh.vertices()) {
        let distance = (*a - before[12]).length();
        if distance > 1.5 {
            assert_eq!(*a, *b);
        }
    }
}

#[test]
fn test_rapid_target_switching_flushes_each_previous_target() {
    let mut sculptor = Sculptor::new(SculptParams::default());
    let mut meshes = [dome_grid(3), dome_grid(3), dome_grid(3)];

    let mut refreshed = Vec::new();
    for round in 0..6u32 {
        let target = (round % 3) as usize;
        let point = meshes[target].vertex(4);
        if let Some(refresh) = sculptor.tick(
            Some(SculptStroke {
                target: MeshId(target as u32),
                mesh: &mut meshes[target],
                point,
            }),
            0.01,
        ) {
            refreshed.push(refresh.target.0);
        }
    }
    // Every switch flushed the previously deformed mesh
    assert_eq!(refreshed, vec![0, 1, 2, 0, 1]);
}
