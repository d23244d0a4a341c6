//! Builds the whole scene once the font is available.

use crate::config::SceneConfig;
use crate::error::SceneResult;
use crate::font::Font;
use crate::populate::{populate, DecorationSpec};
use crate::sampler::TransformSampler;
use crate::scene::{DecorationGroup, Material, NodeId, Scene, SceneNode, TextEntity};
use crate::text::build_text_mesh;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::rc::Rc;

/// The scene plus handles to the two nodes the animators drive.
#[derive(Debug)]
pub struct AssembledScene {
    pub scene: Scene,
    text: NodeId,
    decorations: NodeId,
}

impl AssembledScene {
    pub fn text(&self) -> Option<&TextEntity> {
        match self.scene.node(self.text) {
            Some(SceneNode::Text(t)) => Some(t),
            _ => None,
        }
    }

    pub fn decorations(&self) -> Option<&DecorationGroup> {
        match self.scene.node(self.decorations) {
            Some(SceneNode::Decorations(g)) => Some(g),
            _ => None,
        }
    }

    pub fn set_text_rotation(&mut self, rotation: Vec3) {
        if let Some(SceneNode::Text(t)) = self.scene.node_mut(self.text) {
            t.set_rotation(rotation);
        }
    }

    pub fn set_group_rotation(&mut self, rotation: Vec3) {
        if let Some(SceneNode::Decorations(g)) = self.scene.node_mut(self.decorations) {
            g.rotation = rotation;
        }
    }
}

/// Add the text and the decoration group as top-level children. Called once.
pub fn assemble(scene: &mut Scene, text: TextEntity, group: DecorationGroup) -> (NodeId, NodeId) {
    let text_id = scene.add(SceneNode::Text(text));
    let group_id = scene.add(SceneNode::Decorations(group));
    (text_id, group_id)
}

/// Build text, decorations and scene graph from a loaded font, drawing
/// randomness from `rng`.
pub fn build_scene<R: Rng>(
    font: &Font,
    config: &SceneConfig,
    rng: &mut R,
) -> SceneResult<AssembledScene> {
    let material = Rc::new(Material::normal());
    let text_geometry = Rc::new(build_text_mesh(font, &config.text)?);
    let text = TextEntity::new(text_geometry, Rc::clone(&material));

    let mut group = DecorationGroup::with_capacity(config.total_decorations());
    let mut sampler = TransformSampler::new(rng);
    for (kind, count) in &config.decorations {
        let spec = DecorationSpec::new(*kind, *count);
        populate(&spec, config.bound, &material, &mut sampler, &mut group);
    }

    let mut scene = Scene::new();
    let (text, decorations) = assemble(&mut scene, text, group);
    log::info!(
        "[scene] assembled: {} decorations, {} top-level nodes",
        config.total_decorations(),
        scene.children().len()
    );
    Ok(AssembledScene {
        scene,
        text,
        decorations,
    })
}

/// Entry point run when the font load completes; seeds from `config.seed`.
pub fn on_font_ready(font: &Font, config: &SceneConfig) -> SceneResult<AssembledScene> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    build_scene(font, config, &mut rng)
}
