//! One-shot dolly-in of the camera, stepped once per display refresh.

use crate::camera::Camera;
use crate::constants::{INTRO_STEP_Z, INTRO_THRESHOLD_Z};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroPhase {
    /// Waiting for the scene; steps are no-ops until `arm`.
    Pending,
    Animating,
    Settled,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntroParams {
    /// Camera z at or below which the intro is over.
    pub threshold_z: f32,
    /// Distance moved toward the scene per step.
    pub step_z: f32,
}

impl Default for IntroParams {
    fn default() -> Self {
        Self {
            threshold_z: INTRO_THRESHOLD_Z,
            step_z: INTRO_STEP_Z,
        }
    }
}

/// `Pending` until armed, `Animating` until camera z drops to the threshold,
/// then `Settled` for good.
#[derive(Clone, Debug)]
pub struct IntroCameraAnimator {
    params: IntroParams,
    phase: IntroPhase,
    steps: u32,
}

impl IntroCameraAnimator {
    pub fn new(initial_z: f32, params: IntroParams) -> Self {
        let phase = if initial_z > params.threshold_z {
            IntroPhase::Animating
        } else {
            IntroPhase::Settled
        };
        Self {
            params,
            phase,
            steps: 0,
        }
    }

    /// An animator that does nothing until `arm` is called.
    pub fn pending(params: IntroParams) -> Self {
        Self {
            params,
            phase: IntroPhase::Pending,
            steps: 0,
        }
    }

    /// Start the dolly from `initial_z`. Only a pending animator can be armed.
    pub fn arm(&mut self, initial_z: f32) {
        if self.phase == IntroPhase::Pending {
            *self = Self::new(initial_z, self.params);
        }
    }

    #[inline]
    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.phase == IntroPhase::Animating
    }

    /// Steps applied so far.
    #[inline]
    pub fn steps(&self) -> u32 {
        self.steps
    }

    #[inline]
    pub fn params(&self) -> IntroParams {
        self.params
    }

    /// Advance one refresh. A no-op unless animating.
    pub fn step(&mut self, camera: &mut Camera) -> IntroPhase {
        if self.phase != IntroPhase::Animating {
            return self.phase;
        }
        camera.eye.z -= self.params.step_z;
        self.steps += 1;
        if camera.eye.z <= self.params.threshold_z {
            self.phase = IntroPhase::Settled;
            log::info!(
                "[intro] settled after {} steps at z={:.3}",
                self.steps,
                camera.eye.z
            );
        }
        self.phase
    }
}
