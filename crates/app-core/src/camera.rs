//! Camera state and the orbit-controls contract.
//!
//! These types avoid platform-specific APIs and are shared by the web and
//! native frontends. The renderer consumes the matrices; the animators only
//! ever write `eye`.

use crate::constants::*;
use glam::{Mat4, Vec3};

/// Right-handed perspective camera looking at `target`.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: camera_start_vec3(),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOV_DEGREES.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }
}

/// Orbit controls as this app configures them: damping on, rotation and
/// panning off. With no drag input ever applied, `update` only keeps the
/// camera aimed at `target`; all steering comes from the animators.
#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub target: Vec3,
    pub enable_damping: bool,
    pub enable_pan: bool,
    pub enable_rotate: bool,
    pub damping_factor: f32,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            enable_damping: true,
            enable_pan: false,
            enable_rotate: false,
            damping_factor: ORBIT_DAMPING_FACTOR,
        }
    }
}

impl OrbitControls {
    pub fn update(&self, camera: &mut Camera) {
        camera.target = self.target;
    }
}
