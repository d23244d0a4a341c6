//! Text layout and bevelled extrusion into a single centered mesh.

use crate::constants::*;
use crate::error::{SceneError, SceneResult};
use crate::font::{Font, PathCommand};
use crate::geometry::MeshData;
use crate::triangulate::{signed_area, triangulate};
use glam::{Vec2, Vec3};
use std::f32::consts::FRAC_PI_2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bevel {
    pub thickness: f32,
    pub size: f32,
    pub offset: f32,
    pub segments: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextSpec {
    pub content: String,
    pub size: f32,
    /// Extrusion depth along +z, not counting the bevel.
    pub depth: f32,
    pub curve_segments: u32,
    pub steps: u32,
    pub bevel: Option<Bevel>,
}

impl Default for TextSpec {
    fn default() -> Self {
        Self {
            content: TEXT_CONTENT.to_string(),
            size: TEXT_SIZE,
            depth: TEXT_DEPTH,
            curve_segments: TEXT_CURVE_SEGMENTS,
            steps: 1,
            bevel: Some(Bevel {
                thickness: TEXT_BEVEL_THICKNESS,
                size: TEXT_BEVEL_SIZE,
                offset: TEXT_BEVEL_OFFSET,
                segments: TEXT_BEVEL_SEGMENTS,
            }),
        }
    }
}

/// A filled region of a glyph: one outer contour with zero or more holes.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphShape {
    pub outer: Vec<Vec2>,
    pub holes: Vec<Vec<Vec2>>,
}

/// Lay out `spec.content` and return every glyph region in world units.
/// Newlines start a new line one line-height lower; characters the font does
/// not know are skipped without advancing.
pub fn layout_shapes(font: &Font, spec: &TextSpec) -> Vec<GlyphShape> {
    let scale = font.scale_for(spec.size);
    let line_height = font.line_height(spec.size);
    let mut offset = Vec2::ZERO;
    let mut shapes = Vec::new();
    for ch in spec.content.chars() {
        if ch == '\n' {
            offset.x = 0.0;
            offset.y -= line_height;
            continue;
        }
        let Some(glyph) = font.glyph(ch) else {
            log::warn!("[font] no glyph for {:?} in {:?}", ch, font.family_name);
            continue;
        };
        let contours = flatten(&glyph.commands, scale, offset, spec.curve_segments);
        shapes.extend(group_contours(contours));
        offset.x += glyph.advance * scale;
    }
    shapes
}

/// Turn outline commands into closed polylines.
pub fn flatten(commands: &[PathCommand], scale: f32, offset: Vec2, segments: u32) -> Vec<Vec<Vec2>> {
    let segments = segments.max(1);
    let tf = |p: Vec2| p * scale + offset;
    let mut contours = Vec::new();
    let mut current: Vec<Vec2> = Vec::new();
    for cmd in commands {
        match *cmd {
            PathCommand::MoveTo(p) => {
                close_contour(&mut contours, std::mem::take(&mut current));
                current.push(tf(p));
            }
            PathCommand::LineTo(p) => current.push(tf(p)),
            PathCommand::QuadTo { ctrl, to } => {
                let p0 = current.last().copied().unwrap_or(tf(ctrl));
                let (c, p2) = (tf(ctrl), tf(to));
                for k in 1..=segments {
                    let t = k as f32 / segments as f32;
                    let u = 1.0 - t;
                    current.push(p0 * (u * u) + c * (2.0 * u * t) + p2 * (t * t));
                }
            }
            PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                let p0 = current.last().copied().unwrap_or(tf(ctrl1));
                let (c1, c2, p3) = (tf(ctrl1), tf(ctrl2), tf(to));
                for k in 1..=segments {
                    let t = k as f32 / segments as f32;
                    let u = 1.0 - t;
                    current.push(
                        p0 * (u * u * u)
                            + c1 * (3.0 * u * u * t)
                            + c2 * (3.0 * u * t * t)
                            + p3 * (t * t * t),
                    );
                }
            }
        }
    }
    close_contour(&mut contours, current);
    contours
}

fn close_contour(contours: &mut Vec<Vec<Vec2>>, mut points: Vec<Vec2>) {
    points.dedup_by(|a, b| a.distance_squared(*b) < 1e-12);
    while points.len() > 1
        && points[0].distance_squared(points[points.len() - 1]) < 1e-12
    {
        points.pop();
    }
    if points.len() >= 3 && signed_area(&points).abs() > 1e-12 {
        contours.push(points);
    }
}

/// Clockwise contours are solid, counter-clockwise ones are holes. Each hole
/// goes to the solid that contains it.
pub fn group_contours(contours: Vec<Vec<Vec2>>) -> Vec<GlyphShape> {
    let any_solid = contours.iter().any(|c| signed_area(c) < 0.0);
    let is_solid = |c: &[Vec2]| (signed_area(c) < 0.0) == any_solid;

    let mut shapes: Vec<GlyphShape> = Vec::new();
    let mut holes: Vec<Vec<Vec2>> = Vec::new();
    for c in contours {
        if is_solid(&c) {
            shapes.push(GlyphShape {
                outer: c,
                holes: Vec::new(),
            });
        } else {
            holes.push(c);
        }
    }
    for hole in holes {
        let probe = hole[0];
        match shapes.iter_mut().find(|s| point_in_polygon(probe, &s.outer)) {
            Some(shape) => shape.holes.push(hole),
            None => log::debug!("[font] dropping hole outside every solid contour"),
        }
    }
    shapes
}

pub fn point_in_polygon(p: Vec2, poly: &[Vec2]) -> bool {
    let mut inside = false;
    let n = poly.len();
    let mut j = n - 1;
    for i in 0..n {
        let (a, b) = (poly[i], poly[j]);
        if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Offset direction per vertex; moving along it by `d` pushes both adjacent
/// edges outward (away from the filled region) by roughly `d`.
fn bevel_directions(ring: &[Vec2]) -> Vec<Vec2> {
    let n = ring.len();
    (0..n)
        .map(|i| {
            let prev = ring[(i + n - 1) % n];
            let cur = ring[i];
            let next = ring[(i + 1) % n];
            let n1 = outward_normal(cur - prev);
            let n2 = outward_normal(next - cur);
            let bisector = (n1 + n2).normalize_or_zero();
            if bisector == Vec2::ZERO {
                return n1;
            }
            bisector / bisector.dot(n1).max(0.3)
        })
        .collect()
}

#[inline]
fn outward_normal(edge: Vec2) -> Vec2 {
    Vec2::new(edge.y, -edge.x).normalize_or_zero()
}

/// (z, outward offset) for every ring layer from the front bevel to the back.
fn extrusion_layers(spec: &TextSpec) -> Vec<(f32, f32)> {
    let steps = spec.steps.max(1);
    let mut layers = Vec::new();
    let (full, bevel) = match spec.bevel {
        Some(b) => (b.size + b.offset, Some(b)),
        None => (0.0, None),
    };
    if let Some(b) = bevel {
        for k in 0..b.segments {
            let t = k as f32 / b.segments as f32;
            layers.push((
                -b.thickness * (t * FRAC_PI_2).cos(),
                b.size * (t * FRAC_PI_2).sin() + b.offset,
            ));
        }
    }
    for s in 0..=steps {
        layers.push((spec.depth * s as f32 / steps as f32, full));
    }
    if let Some(b) = bevel {
        for k in (0..b.segments).rev() {
            let t = k as f32 / b.segments as f32;
            layers.push((
                spec.depth + b.thickness * (t * FRAC_PI_2).cos(),
                b.size * (t * FRAC_PI_2).sin() + b.offset,
            ));
        }
    }
    layers
}

/// Extrude one glyph region and append its triangles to `mesh`.
pub fn extrude_shape(shape: &GlyphShape, spec: &TextSpec, mesh: &mut MeshData) {
    let mut outer = shape.outer.clone();
    if signed_area(&outer) < 0.0 {
        outer.reverse();
    }
    let holes: Vec<Vec<Vec2>> = shape
        .holes
        .iter()
        .map(|h| {
            let mut h = h.clone();
            if signed_area(&h) > 0.0 {
                h.reverse();
            }
            h
        })
        .collect();

    let mut rings: Vec<&[Vec2]> = vec![&outer];
    rings.extend(holes.iter().map(Vec::as_slice));
    let dirs: Vec<Vec<Vec2>> = rings.iter().map(|r| bevel_directions(r)).collect();
    let layers = extrusion_layers(spec);

    let at = |ring: usize, i: usize, layer: usize| -> Vec3 {
        let (z, off) = layers[layer];
        let p = rings[ring][i] + dirs[ring][i] * off;
        Vec3::new(p.x, p.y, z)
    };

    // Caps share one triangulation; indices address outer ++ holes.
    let flat: Vec<(usize, usize)> = rings
        .iter()
        .enumerate()
        .flat_map(|(r, ring)| (0..ring.len()).map(move |i| (r, i)))
        .collect();
    let caps = triangulate(&outer, &holes);
    let last = layers.len() - 1;
    for [a, b, c] in &caps {
        let (a, b, c) = (flat[*a as usize], flat[*b as usize], flat[*c as usize]);
        mesh.push_flat_triangle(at(a.0, a.1, last), at(b.0, b.1, last), at(c.0, c.1, last));
        mesh.push_flat_triangle(at(c.0, c.1, 0), at(b.0, b.1, 0), at(a.0, a.1, 0));
    }

    for (r, ring) in rings.iter().enumerate() {
        let n = ring.len();
        for layer in 0..last {
            for i in 0..n {
                let j = (i + 1) % n;
                let a = at(r, i, layer);
                let b = at(r, j, layer);
                let c = at(r, j, layer + 1);
                let d = at(r, i, layer + 1);
                mesh.push_flat_triangle(a, b, c);
                mesh.push_flat_triangle(a, c, d);
            }
        }
    }
}

/// Full text mesh, centered on its bounding box.
pub fn build_text_mesh(font: &Font, spec: &TextSpec) -> SceneResult<MeshData> {
    let shapes = layout_shapes(font, spec);
    let mut mesh = MeshData::default();
    for shape in &shapes {
        extrude_shape(shape, spec, &mut mesh);
    }
    if mesh.is_empty() {
        return Err(SceneError::EmptyText);
    }
    mesh.center();
    log::info!(
        "[scene] text mesh: {} glyph regions, {} triangles",
        shapes.len(),
        mesh.triangle_count()
    );
    Ok(mesh)
}
