//! Scene graph: one text mesh and one group of decorations, both top-level.

use crate::geometry::MeshData;
use crate::transform::Transform;
use glam::{Mat4, Vec3};
use std::rc::Rc;

/// How a surface is colored by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shading {
    /// View-space normal mapped to RGB.
    Normal,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub shading: Shading,
}

impl Material {
    pub fn normal() -> Self {
        Self {
            shading: Shading::Normal,
        }
    }
}

/// A mesh that references shared, never-mutated geometry and material.
#[derive(Clone, Debug)]
pub struct MeshInstance {
    pub geometry: Rc<MeshData>,
    pub material: Rc<Material>,
    pub transform: Transform,
}

pub type DecorationInstance = MeshInstance;

/// Container that owns every decoration instance. Its own rotation is
/// composed on top of each instance transform.
#[derive(Debug, Default)]
pub struct DecorationGroup {
    instances: Vec<DecorationInstance>,
    pub rotation: Vec3,
}

impl DecorationGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
            rotation: Vec3::ZERO,
        }
    }

    pub fn add(&mut self, instance: DecorationInstance) {
        self.instances.push(instance);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn instances(&self) -> &[DecorationInstance] {
        &self.instances
    }

    #[inline]
    pub fn matrix(&self) -> Mat4 {
        Transform::from_rotation(self.rotation).matrix()
    }

    /// World matrix of every instance: group rotation applied after the
    /// instance's own transform.
    pub fn world_matrices(&self) -> impl Iterator<Item = (&DecorationInstance, Mat4)> + '_ {
        let group = self.matrix();
        self.instances
            .iter()
            .map(move |inst| (inst, group * inst.transform.matrix()))
    }
}

/// The extruded text, centered at the origin with its own rotation.
#[derive(Clone, Debug)]
pub struct TextEntity {
    pub mesh: MeshInstance,
}

impl TextEntity {
    pub fn new(geometry: Rc<MeshData>, material: Rc<Material>) -> Self {
        Self {
            mesh: MeshInstance {
                geometry,
                material,
                transform: Transform::default(),
            },
        }
    }

    #[inline]
    pub fn rotation(&self) -> Vec3 {
        self.mesh.transform.rotation
    }

    #[inline]
    pub fn set_rotation(&mut self, rotation: Vec3) {
        self.mesh.transform.rotation = rotation;
    }
}

#[derive(Debug)]
pub enum SceneNode {
    Text(TextEntity),
    Decorations(DecorationGroup),
}

/// Top-level children in insertion order. Handles returned by `add` stay
/// valid for the lifetime of the scene since nodes are never removed.
#[derive(Debug, Default)]
pub struct Scene {
    children: Vec<SceneNode>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeId(usize);

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, node: SceneNode) -> NodeId {
        self.children.push(node);
        NodeId(self.children.len() - 1)
    }

    pub fn children(&self) -> &[SceneNode] {
        &self.children
    }

    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.children.get(id.0)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.children.get_mut(id.0)
    }

    /// Every drawable mesh with its world matrix.
    pub fn draw_list(&self) -> Vec<(&MeshInstance, Mat4)> {
        let mut out = Vec::new();
        for child in &self.children {
            match child {
                SceneNode::Text(text) => out.push((&text.mesh, text.mesh.transform.matrix())),
                SceneNode::Decorations(group) => out.extend(group.world_matrices()),
            }
        }
        out
    }
}
