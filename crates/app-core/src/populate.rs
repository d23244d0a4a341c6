use crate::geometry::{DecorationKind, MeshData};
use crate::sampler::TransformSampler;
use crate::scene::{DecorationGroup, DecorationInstance, Material};
use rand::Rng;
use std::rc::Rc;

/// One decoration shape and how many copies of it to scatter.
#[derive(Clone, Debug)]
pub struct DecorationSpec {
    pub kind: DecorationKind,
    pub geometry: Rc<MeshData>,
    pub count: usize,
}

impl DecorationSpec {
    pub fn new(kind: DecorationKind, count: usize) -> Self {
        Self {
            kind,
            geometry: Rc::new(kind.build_mesh()),
            count,
        }
    }
}

/// Add exactly `spec.count` instances of `spec.geometry` to `group`, each with
/// a freshly sampled transform. Geometry and material are shared, not copied.
pub fn populate<R: Rng>(
    spec: &DecorationSpec,
    bound: f32,
    material: &Rc<Material>,
    sampler: &mut TransformSampler<'_, R>,
    group: &mut DecorationGroup,
) {
    for _ in 0..spec.count {
        group.add(DecorationInstance {
            geometry: Rc::clone(&spec.geometry),
            material: Rc::clone(material),
            transform: sampler.sample(bound),
        });
    }
    log::debug!(
        "[scene] populated {} x{} (group size {})",
        spec.kind.label(),
        spec.count,
        group.len()
    );
}
