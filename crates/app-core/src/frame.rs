//! Per-refresh driver for both animators, the controls and the renderer.

use crate::camera::Camera;
use crate::context::SceneContext;
use crate::intro::IntroPhase;
use crate::scene::Scene;

/// What the frame loop needs from a rendering backend.
pub trait Renderer {
    type Error: std::fmt::Debug;

    fn render(&mut self, scene: &Scene, camera: &Camera) -> Result<(), Self::Error>;
    /// Logical (CSS) size; the backing store is this times the pixel ratio.
    fn set_size(&mut self, width: u32, height: u32);
    fn set_pixel_ratio(&mut self, ratio: f64);
    fn set_clear_color(&mut self, rgb: [f32; 3]);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    pub intro: IntroPhase,
    pub intro_stepped: bool,
    pub animated: bool,
    pub z_followed: bool,
    pub rendered: bool,
}

/// Runs forever; nothing in here ever stops scheduling itself.
#[derive(Debug, Default)]
pub struct FrameLoop {
    frames: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// One display refresh. Order: intro step, continuous motion, controls,
    /// render. The intro only moves once the font has armed it. Render
    /// failures are logged and the loop carries on.
    pub fn tick<R: Renderer>(&mut self, ctx: &mut SceneContext, renderer: &mut R) -> FrameReport {
        self.frames += 1;

        let intro_stepped = ctx.intro.is_active();
        if intro_stepped {
            ctx.intro.step(&mut ctx.camera);
        }

        let mut animated = false;
        let mut z_followed = false;
        if let Some(assembled) = ctx.scene.as_mut() {
            let t = ctx.clock.elapsed_secs();
            let pose = ctx.motion.pose(t, ctx.pointer);
            z_followed = ctx.motion.apply_camera(&pose, &mut ctx.camera);
            assembled.set_text_rotation(pose.text_rotation);
            assembled.set_group_rotation(pose.group_rotation);
            animated = true;
        }

        ctx.controls.update(&mut ctx.camera);

        let empty = Scene::new();
        let scene = ctx.scene.as_ref().map_or(&empty, |s| &s.scene);
        let rendered = match renderer.render(scene, &ctx.camera) {
            Ok(()) => true,
            Err(e) => {
                log::error!("render error: {:?}", e);
                false
            }
        };

        FrameReport {
            intro: ctx.intro.phase(),
            intro_stepped,
            animated,
            z_followed,
            rendered,
        }
    }
}
