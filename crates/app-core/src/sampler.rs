//! Random transforms for scattered decorations.

use crate::transform::Transform;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::PI;

/// Draws decoration transforms from an injected random source.
///
/// Positions are uniform in `[-bound, bound)` per axis, rotations about x and y
/// uniform in `[0, π)`, rotation about z fixed at zero and the uniform scale
/// uniform in `[0, 1)`.
pub struct TransformSampler<'r, R: Rng> {
    rng: &'r mut R,
}

impl<'r, R: Rng> TransformSampler<'r, R> {
    pub fn new(rng: &'r mut R) -> Self {
        Self { rng }
    }

    pub fn sample(&mut self, bound: f32) -> Transform {
        let position = Vec3::new(
            self.symmetric(bound),
            self.symmetric(bound),
            self.symmetric(bound),
        );
        let rotation = Vec3::new(self.rng.gen::<f32>() * PI, self.rng.gen::<f32>() * PI, 0.0);
        let scale = self.rng.gen::<f32>();
        Transform {
            position,
            rotation,
            scale,
        }
    }

    #[inline]
    fn symmetric(&mut self, bound: f32) -> f32 {
        (self.rng.gen::<f32>() - 0.5) * 2.0 * bound
    }
}
