// Host-side integration tests for layout, triangulation and extrusion.

mod common;

use app_core::text::{build_text_mesh, extrude_shape, group_contours, layout_shapes, GlyphShape};
use app_core::triangulate::{signed_area, triangulate};
use app_core::{Bevel, MeshData, SceneError};
use common::*;
use glam::Vec2;

fn square(x0: f32, y0: f32, side: f32) -> Vec<Vec2> {
    vec![
        Vec2::new(x0, y0),
        Vec2::new(x0 + side, y0),
        Vec2::new(x0 + side, y0 + side),
        Vec2::new(x0, y0 + side),
    ]
}

fn triangulated_area(points: &[Vec2], tris: &[[u32; 3]]) -> f32 {
    tris.iter()
        .map(|t| {
            let (a, b, c) = (points[t[0] as usize], points[t[1] as usize], points[t[2] as usize]);
            (b - a).perp_dot(c - a) * 0.5
        })
        .sum()
}

#[test]
fn signed_area_sign_follows_winding() {
    let ccw = square(0.0, 0.0, 2.0);
    let mut cw = ccw.clone();
    cw.reverse();
    assert_eq!(signed_area(&ccw), 4.0);
    assert_eq!(signed_area(&cw), -4.0);
}

#[test]
fn triangulates_convex_and_clockwise_input() {
    let mut outer = square(0.0, 0.0, 10.0);
    outer.reverse();
    let tris = triangulate(&outer, &[]);
    assert_eq!(tris.len(), 2);
    let area = triangulated_area(&outer, &tris);
    assert!((area - 100.0).abs() < 1e-3);
}

#[test]
fn triangulates_concave_polygon() {
    // L shape, area 3
    let outer = vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(2.0, 0.0),
        Vec2::new(2.0, 1.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(1.0, 2.0),
        Vec2::new(0.0, 2.0),
    ];
    let tris = triangulate(&outer, &[]);
    assert_eq!(tris.len(), 4);
    assert!((triangulated_area(&outer, &tris) - 3.0).abs() < 1e-4);
}

#[test]
fn triangulates_around_a_hole() {
    let outer = square(0.0, 0.0, 100.0);
    let hole = square(25.0, 25.0, 50.0);
    let tris = triangulate(&outer, &[hole.clone()]);
    let mut points = outer.clone();
    points.extend_from_slice(&hole);
    assert_eq!(tris.len(), 8);
    assert!((triangulated_area(&points, &tris) - 7500.0).abs() < 1e-1);
    for t in &tris {
        for &i in t {
            assert!((i as usize) < points.len());
        }
    }
}

#[test]
fn clockwise_contours_are_solid_and_own_their_holes() {
    let mut solid = square(0.0, 0.0, 100.0);
    solid.reverse();
    let hole = square(25.0, 25.0, 50.0);
    let shapes = group_contours(vec![solid, hole]);
    assert_eq!(shapes.len(), 1);
    assert_eq!(shapes[0].holes.len(), 1);
}

#[test]
fn layout_advances_and_wraps_lines() {
    let font = test_font();
    let shapes = layout_shapes(&font, &flat_spec("A A\nA"));
    assert_eq!(shapes.len(), 3);
    let min_x = |s: &GlyphShape| s.outer.iter().map(|p| p.x).fold(f32::MAX, f32::min);
    let min_y = |s: &GlyphShape| s.outer.iter().map(|p| p.y).fold(f32::MAX, f32::min);
    assert!(min_x(&shapes[0]).abs() < 1e-6);
    // advance of "A" plus the space, at 0.01 units per font unit
    assert!((min_x(&shapes[1]) - 1.7).abs() < 1e-5);
    assert!(min_x(&shapes[2]).abs() < 1e-6);
    assert!((min_y(&shapes[2]) + 1.3).abs() < 1e-5);
}

#[test]
fn missing_glyphs_are_skipped_without_advancing() {
    let font = test_font();
    let shapes = layout_shapes(&font, &flat_spec("A?A"));
    assert_eq!(shapes.len(), 2);
    let x = shapes[1].outer.iter().map(|p| p.x).fold(f32::MAX, f32::min);
    assert!((x - 1.2).abs() < 1e-5);
}

#[test]
fn square_glyph_without_bevel_is_a_closed_prism() {
    let font = test_font();
    let mesh = build_text_mesh(&font, &flat_spec("A")).unwrap();
    // two caps of two triangles, four walls of two
    assert_eq!(mesh.triangle_count(), 12);
    let bb = mesh.bounding_box().unwrap();
    assert!(bb.center().length() < 1e-5);
    assert!((bb.size().z - 0.2).abs() < 1e-5);
    assert!((bb.size().x - 1.0).abs() < 1e-5);
}

#[test]
fn bevel_adds_layers_and_grows_the_outline() {
    let font = test_font();
    let mut spec = flat_spec("A");
    spec.bevel = Some(Bevel {
        thickness: 0.1,
        size: 0.03,
        offset: 0.0,
        segments: 5,
    });
    let mesh = build_text_mesh(&font, &spec).unwrap();
    // 12 layers -> 11 bands of 4 walls * 2, plus 4 cap triangles
    assert_eq!(mesh.triangle_count(), 92);
    let bb = mesh.bounding_box().unwrap();
    assert!((bb.size().z - (0.2 + 2.0 * 0.1)).abs() < 1e-4);
    assert!((bb.size().x - (1.0 + 2.0 * 0.03)).abs() < 1e-3);
}

#[test]
fn holes_get_inner_walls() {
    let font = test_font();
    let shapes = layout_shapes(&font, &flat_spec("O"));
    assert_eq!(shapes.len(), 1);
    assert_eq!(shapes[0].holes.len(), 1);
    let mut mesh = MeshData::default();
    extrude_shape(&shapes[0], &flat_spec("O"), &mut mesh);
    // caps: 8 triangles each; walls: (4 + 4) edges * 2
    assert_eq!(mesh.triangle_count(), 8 * 2 + 16);
}

#[test]
fn empty_or_unknown_text_is_an_error() {
    let font = test_font();
    assert!(matches!(
        build_text_mesh(&font, &flat_spec("???")),
        Err(SceneError::EmptyText)
    ));
    assert!(matches!(
        build_text_mesh(&font, &flat_spec("")),
        Err(SceneError::EmptyText)
    ));
}
