//! Time- and pointer-driven motion recomputed from scratch every frame.

use crate::camera::Camera;
use crate::constants::{INTRO_THRESHOLD_Z, ORBIT_RADIUS};
use crate::pointer::PointerState;
use glam::Vec3;
use std::f32::consts::PI;

/// Whether the pointer also steers camera z once the intro has settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZFollow {
    /// Write z whenever the camera is at or inside the threshold.
    Live,
    /// Never write z; only the intro dolly moves it.
    Inert,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionParams {
    pub orbit_radius: f32,
    pub z_threshold: f32,
    pub z_follow: ZFollow,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            orbit_radius: ORBIT_RADIUS,
            z_threshold: INTRO_THRESHOLD_Z,
            z_follow: ZFollow::Live,
        }
    }
}

/// Everything one frame of continuous motion writes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionPose {
    pub camera_x: f32,
    pub camera_y: f32,
    /// Candidate z; applied only when z-follow is live and the gate is open.
    pub camera_z: f32,
    pub text_rotation: Vec3,
    pub group_rotation: Vec3,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ContinuousAnimator {
    pub params: MotionParams,
}

impl ContinuousAnimator {
    pub fn new(params: MotionParams) -> Self {
        Self { params }
    }

    /// Pure in `(t, pointer)`.
    pub fn pose(&self, t: f32, pointer: PointerState) -> MotionPose {
        let r = self.params.orbit_radius;
        MotionPose {
            camera_x: (pointer.x * PI).cos() * r,
            camera_y: (pointer.y * PI).cos() * r,
            camera_z: (pointer.x * PI * 0.1).cos() * r,
            text_rotation: Vec3::new(t.sin() * 0.2, t.cos() * 0.2, t.cos() * 0.2),
            group_rotation: Vec3::new(
                (t * PI * 0.1).cos(),
                (t * PI * 0.2).sin(),
                (t * 0.01).cos() * 3.0,
            ),
        }
    }

    /// Write the camera part of `pose`. Returns whether z was written.
    pub fn apply_camera(&self, pose: &MotionPose, camera: &mut Camera) -> bool {
        camera.eye.x = pose.camera_x;
        camera.eye.y = pose.camera_y;
        let follow_z =
            self.params.z_follow == ZFollow::Live && camera.eye.z <= self.params.z_threshold;
        if follow_z {
            camera.eye.z = pose.camera_z;
        }
        follow_z
    }
}
