// Host-side integration tests for the decoration primitives.

use app_core::geometry::{cuboid, dodecahedron, torus};
use app_core::{DecorationKind, MeshData};
use glam::Vec3;

fn face_normal(mesh: &MeshData, tri: usize) -> Vec3 {
    let i = &mesh.indices[tri * 3..tri * 3 + 3];
    let (a, b, c) = (
        mesh.positions[i[0] as usize],
        mesh.positions[i[1] as usize],
        mesh.positions[i[2] as usize],
    );
    (b - a).cross(c - a)
}

#[test]
fn torus_counts_match_segments() {
    let mesh = torus(0.2, 0.1, 32, 64);
    assert_eq!(mesh.vertex_count(), 33 * 65);
    assert_eq!(mesh.triangle_count(), 32 * 64 * 2);
    assert_eq!(mesh.normals.len(), mesh.positions.len());
}

#[test]
fn torus_stays_within_outer_radius() {
    let mesh = torus(0.2, 0.1, 32, 64);
    for p in &mesh.positions {
        let ring = (p.x * p.x + p.y * p.y).sqrt();
        assert!(ring <= 0.3 + 1e-4 && ring >= 0.1 - 1e-4);
        assert!(p.z.abs() <= 0.1 + 1e-4);
    }
}

#[test]
fn cuboid_has_24_vertices_and_12_outward_triangles() {
    let mesh = cuboid(0.3, 0.3, 0.3);
    assert_eq!(mesh.vertex_count(), 24);
    assert_eq!(mesh.triangle_count(), 12);
    let bb = mesh.bounding_box().unwrap();
    assert!((bb.size() - Vec3::splat(0.3)).length() < 1e-5);
    assert!(bb.center().length() < 1e-6);
    for t in 0..mesh.triangle_count() {
        let i = mesh.indices[t * 3] as usize;
        // centroid direction and face normal agree for a convex solid at the origin
        assert!(face_normal(&mesh, t).dot(mesh.positions[i]) > 0.0);
    }
}

#[test]
fn dodecahedron_is_twelve_pentagons_on_the_sphere() {
    let radius = 0.5;
    let mesh = dodecahedron(radius);
    assert_eq!(mesh.triangle_count(), 36);
    for p in &mesh.positions {
        assert!((p.length() - radius).abs() < 1e-4);
    }
    for t in 0..mesh.triangle_count() {
        let i = mesh.indices[t * 3] as usize;
        assert!(face_normal(&mesh, t).dot(mesh.positions[i]) > 0.0);
    }
}

#[test]
fn decoration_kinds_build_their_primitives() {
    assert_eq!(DecorationKind::Donut.build_mesh().triangle_count(), 4096);
    assert_eq!(DecorationKind::Square.build_mesh().triangle_count(), 12);
    assert_eq!(DecorationKind::Dodecahedron.build_mesh().triangle_count(), 36);
    let total: usize = DecorationKind::ALL.iter().map(|k| k.default_count()).sum();
    assert_eq!(total, 1500);
}

#[test]
fn center_moves_bounding_box_to_origin() {
    let mut mesh = cuboid(1.0, 2.0, 3.0);
    mesh.translate(Vec3::new(5.0, -2.0, 1.0));
    mesh.center();
    let bb = mesh.bounding_box().unwrap();
    assert!(bb.center().length() < 1e-5);
    assert!(MeshData::default().bounding_box().is_none());
}
