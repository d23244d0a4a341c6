//! CPU-side mesh data and the primitive builders used for decorations.

use crate::constants::*;
use glam::Vec3;
use std::f32::consts::TAU;

/// Triangle mesh with per-vertex normals. `indices` is always populated;
/// flat-shaded meshes simply never share vertices between triangles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub indices: Vec<u32>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

impl MeshData {
    /// Build a flat-shaded mesh from a list of counter-clockwise triangles.
    pub fn from_triangles(triangles: &[[Vec3; 3]]) -> Self {
        let mut mesh = Self {
            positions: Vec::with_capacity(triangles.len() * 3),
            normals: Vec::with_capacity(triangles.len() * 3),
            indices: Vec::with_capacity(triangles.len() * 3),
        };
        for tri in triangles {
            mesh.push_flat_triangle(tri[0], tri[1], tri[2]);
        }
        mesh
    }

    pub fn push_flat_triangle(&mut self, a: Vec3, b: Vec3, c: Vec3) {
        let n = (b - a).cross(c - a).normalize_or_zero();
        let base = self.positions.len() as u32;
        self.positions.extend_from_slice(&[a, b, c]);
        self.normals.extend_from_slice(&[n, n, n]);
        self.indices.extend_from_slice(&[base, base + 1, base + 2]);
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn bounding_box(&self) -> Option<Aabb> {
        let first = *self.positions.first()?;
        let (min, max) = self
            .positions
            .iter()
            .fold((first, first), |(lo, hi), p| (lo.min(*p), hi.max(*p)));
        Some(Aabb { min, max })
    }

    pub fn translate(&mut self, offset: Vec3) {
        for p in &mut self.positions {
            *p += offset;
        }
    }

    /// Move the mesh so its bounding-box center sits at the origin.
    pub fn center(&mut self) {
        if let Some(bb) = self.bounding_box() {
            self.translate(-bb.center());
        }
    }
}

/// Torus lying in the XY plane, tube wrapped around the Z axis ring.
pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> MeshData {
    let radial = radial_segments.max(2);
    let tubular = tubular_segments.max(3);
    let mut mesh = MeshData::default();

    for j in 0..=radial {
        let v = j as f32 / radial as f32 * TAU;
        for i in 0..=tubular {
            let u = i as f32 / tubular as f32 * TAU;
            let p = Vec3::new(
                (radius + tube * v.cos()) * u.cos(),
                (radius + tube * v.cos()) * u.sin(),
                tube * v.sin(),
            );
            let ring_center = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
            mesh.positions.push(p);
            mesh.normals.push((p - ring_center).normalize_or_zero());
        }
    }

    let stride = tubular + 1;
    for j in 1..=radial {
        for i in 1..=tubular {
            let a = stride * j + i - 1;
            let b = stride * (j - 1) + i - 1;
            let c = stride * (j - 1) + i;
            let d = stride * j + i;
            mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    mesh
}

/// Axis-aligned box centered at the origin, four vertices per face.
pub fn cuboid(width: f32, height: f32, depth: f32) -> MeshData {
    let h = Vec3::new(width, height, depth) * 0.5;
    // (normal, u axis, v axis) with u x v == normal
    let faces = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];
    let mut mesh = MeshData::default();
    for (n, u, v) in faces {
        let base = mesh.positions.len() as u32;
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            mesh.positions.push((n + u * su + v * sv) * h);
            mesh.normals.push(n);
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}

/// Regular dodecahedron inscribed in a sphere of `radius`, flat shaded.
pub fn dodecahedron(radius: f32) -> MeshData {
    let phi = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let r = 1.0 / phi;

    let mut verts: Vec<Vec3> = Vec::with_capacity(20);
    for x in [-1.0, 1.0] {
        for y in [-1.0, 1.0] {
            for z in [-1.0, 1.0] {
                verts.push(Vec3::new(x, y, z));
            }
        }
    }
    for a in [-r, r] {
        for b in [-phi, phi] {
            verts.push(Vec3::new(0.0, a, b));
            verts.push(Vec3::new(a, b, 0.0));
            verts.push(Vec3::new(b, 0.0, a));
        }
    }
    let verts: Vec<Vec3> = verts.iter().map(|v| v.normalize() * radius).collect();

    // Face normals of a dodecahedron are the vertices of its dual icosahedron.
    let mut face_normals: Vec<Vec3> = Vec::with_capacity(12);
    for a in [-1.0, 1.0] {
        for b in [-phi, phi] {
            face_normals.push(Vec3::new(0.0, b, a).normalize());
            face_normals.push(Vec3::new(b, a, 0.0).normalize());
            face_normals.push(Vec3::new(a, 0.0, b).normalize());
        }
    }

    let mut triangles: Vec<[Vec3; 3]> = Vec::with_capacity(36);
    for n in face_normals {
        let max_dot = verts.iter().map(|v| v.dot(n)).fold(f32::MIN, f32::max);
        let mut face: Vec<Vec3> = verts
            .iter()
            .copied()
            .filter(|v| (v.dot(n) - max_dot).abs() < radius * 1e-3)
            .collect();
        let center = face.iter().copied().sum::<Vec3>() / face.len() as f32;
        let u = (face[0] - center).normalize();
        let w = n.cross(u);
        face.sort_by(|p, q| {
            let ap = (*p - center).dot(w).atan2((*p - center).dot(u));
            let aq = (*q - center).dot(w).atan2((*q - center).dot(u));
            ap.total_cmp(&aq)
        });
        for k in 1..face.len() - 1 {
            triangles.push([face[0], face[k], face[k + 1]]);
        }
    }
    MeshData::from_triangles(&triangles)
}

/// The three decoration shapes scattered around the text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecorationKind {
    Donut,
    Square,
    Dodecahedron,
}

impl DecorationKind {
    pub const ALL: [DecorationKind; 3] = [
        DecorationKind::Donut,
        DecorationKind::Square,
        DecorationKind::Dodecahedron,
    ];

    pub fn build_mesh(self) -> MeshData {
        match self {
            DecorationKind::Donut => torus(
                DONUT_RADIUS,
                DONUT_TUBE,
                DONUT_RADIAL_SEGMENTS,
                DONUT_TUBULAR_SEGMENTS,
            ),
            DecorationKind::Square => cuboid(SQUARE_SIZE, SQUARE_SIZE, SQUARE_SIZE),
            DecorationKind::Dodecahedron => dodecahedron(DODECAHEDRON_RADIUS),
        }
    }

    pub fn default_count(self) -> usize {
        match self {
            DecorationKind::Donut => DONUT_COUNT,
            DecorationKind::Square => SQUARE_COUNT,
            DecorationKind::Dodecahedron => DODECAHEDRON_COUNT,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DecorationKind::Donut => "donut",
            DecorationKind::Square => "square",
            DecorationKind::Dodecahedron => "dodecahedron",
        }
    }
}
