//! The state shared by the frame loop and the event handlers.

use crate::animate::ContinuousAnimator;
use crate::assemble::{on_font_ready, AssembledScene};
use crate::camera::{Camera, OrbitControls};
use crate::clock::Clock;
use crate::config::SceneConfig;
use crate::error::SceneResult;
use crate::font::Font;
use crate::frame::Renderer;
use crate::intro::IntroCameraAnimator;
use crate::pointer::{PointerGate, PointerOutcome, PointerState};
use crate::viewport::Viewport;

pub struct SceneContext {
    pub config: SceneConfig,
    pub camera: Camera,
    pub controls: OrbitControls,
    pub pointer: PointerState,
    pub gate: PointerGate,
    pub intro: IntroCameraAnimator,
    pub motion: ContinuousAnimator,
    pub viewport: Viewport,
    pub clock: Box<dyn Clock>,
    /// Filled once, when the font arrives.
    pub scene: Option<AssembledScene>,
}

impl SceneContext {
    pub fn new(config: SceneConfig, viewport: Viewport, clock: Box<dyn Clock>) -> Self {
        let mut camera = Camera {
            eye: config.camera_start,
            ..Camera::default()
        };
        camera.set_aspect(viewport.width, viewport.height);
        let intro = IntroCameraAnimator::pending(config.intro);
        Self {
            gate: PointerGate::new(config.intro.threshold_z),
            motion: ContinuousAnimator::new(config.motion),
            controls: OrbitControls::default(),
            pointer: PointerState::default(),
            camera,
            intro,
            viewport,
            clock,
            scene: None,
            config,
        }
    }

    /// Build the scene from a freshly loaded font and start the intro dolly.
    /// Later calls are ignored.
    pub fn on_font_ready(&mut self, font: &Font) -> SceneResult<()> {
        if self.scene.is_some() {
            log::warn!("[scene] font ready again; keeping the existing scene");
            return Ok(());
        }
        self.scene = Some(on_font_ready(font, &self.config)?);
        self.intro.arm(self.camera.eye.z);
        Ok(())
    }

    pub fn on_pointer_move(&mut self, client_x: f32, client_y: f32) -> PointerOutcome {
        self.gate.on_pointer_move(
            &mut self.pointer,
            client_x,
            client_y,
            &self.viewport,
            self.camera.eye.z,
        )
    }

    /// Propagate a viewport change to the camera aspect and the renderer.
    pub fn on_resize<R: Renderer>(&mut self, viewport: Viewport, renderer: &mut R) {
        if viewport.is_empty() {
            return;
        }
        self.viewport = viewport;
        self.camera.set_aspect(viewport.width, viewport.height);
        renderer.set_size(viewport.width, viewport.height);
        renderer.set_pixel_ratio(viewport.render_pixel_ratio());
    }
}
