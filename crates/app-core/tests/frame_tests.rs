// Host-side integration tests for the per-refresh driver, using a manual
// clock and a recording renderer.

mod common;

use app_core::{
    Camera, FrameLoop, IntroPhase, ManualClock, PointerOutcome, Renderer, Scene, SceneContext,
    Viewport,
};
use common::*;

#[derive(Default)]
struct RecordingRenderer {
    frames: usize,
    last_draws: usize,
    last_eye_z: f32,
    size: (u32, u32),
    ratio: f64,
    clear: Option<[f32; 3]>,
    fail_next: bool,
}

impl Renderer for RecordingRenderer {
    type Error = String;

    fn render(&mut self, scene: &Scene, camera: &Camera) -> Result<(), String> {
        if std::mem::take(&mut self.fail_next) {
            return Err("lost".into());
        }
        self.frames += 1;
        self.last_draws = scene.draw_list().len();
        self.last_eye_z = camera.eye.z;
        Ok(())
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }

    fn set_pixel_ratio(&mut self, ratio: f64) {
        self.ratio = ratio;
    }

    fn set_clear_color(&mut self, rgb: [f32; 3]) {
        self.clear = Some(rgb);
    }
}

fn context(clock: &ManualClock) -> SceneContext {
    SceneContext::new(
        test_config(),
        Viewport::new(800, 600, 1.0),
        Box::new(clock.clone()),
    )
}

#[test]
fn renders_an_empty_scene_while_the_font_is_pending() {
    let clock = ManualClock::new();
    let mut ctx = context(&clock);
    let mut renderer = RecordingRenderer::default();
    let mut frame_loop = FrameLoop::new();
    let report = frame_loop.tick(&mut ctx, &mut renderer);
    assert!(report.rendered);
    assert!(!report.intro_stepped);
    assert!(!report.animated);
    assert_eq!(report.intro, IntroPhase::Pending);
    assert_eq!(renderer.last_draws, 0);
    assert_eq!(ctx.camera.eye.z, 30.0);
}

#[test]
fn intro_waits_for_the_font() {
    let clock = ManualClock::new();
    let mut ctx = context(&clock);
    let mut renderer = RecordingRenderer::default();
    let mut frame_loop = FrameLoop::new();

    for _ in 0..100 {
        frame_loop.tick(&mut ctx, &mut renderer);
    }
    assert_eq!(ctx.camera.eye.z, 30.0);
    assert_eq!(ctx.intro.phase(), IntroPhase::Pending);

    ctx.on_font_ready(&test_font()).unwrap();
    let report = frame_loop.tick(&mut ctx, &mut renderer);
    assert!(report.intro_stepped);
    assert!((ctx.camera.eye.z - 29.6).abs() < 1e-5);

    let mut ticks = 1;
    while ctx.intro.is_active() {
        frame_loop.tick(&mut ctx, &mut renderer);
        ticks += 1;
        assert!(ticks < 1000);
    }
    assert_eq!(ticks, 63);
    assert_eq!(ctx.intro.steps(), 63);
}

#[test]
fn failed_font_load_leaves_the_camera_parked() {
    let clock = ManualClock::new();
    let mut ctx = context(&clock);
    ctx.config.text.content = "???".to_string();
    assert!(ctx.on_font_ready(&test_font()).is_err());
    assert!(ctx.scene.is_none());
    assert_eq!(ctx.intro.phase(), IntroPhase::Pending);

    let mut renderer = RecordingRenderer::default();
    let mut frame_loop = FrameLoop::new();
    for _ in 0..10 {
        frame_loop.tick(&mut ctx, &mut renderer);
    }
    assert_eq!(ctx.camera.eye.z, 30.0);
}

#[test]
fn intro_runs_before_continuous_motion_on_the_settling_frame() {
    let clock = ManualClock::new();
    let mut ctx = context(&clock);
    ctx.on_font_ready(&test_font()).unwrap();
    let mut renderer = RecordingRenderer::default();
    let mut frame_loop = FrameLoop::new();

    for _ in 0..62 {
        let report = frame_loop.tick(&mut ctx, &mut renderer);
        assert_eq!(report.intro, IntroPhase::Animating);
        assert!(!report.z_followed);
    }
    let report = frame_loop.tick(&mut ctx, &mut renderer);
    assert_eq!(report.intro, IntroPhase::Settled);
    // pointer still centered: cos(0) * radius
    assert!(report.z_followed);
    assert!((ctx.camera.eye.z - 5.0).abs() < 1e-5);
    assert_eq!(renderer.last_draws, 1501);
    assert_eq!(frame_loop.frames(), 63);

    let report = frame_loop.tick(&mut ctx, &mut renderer);
    assert!(!report.intro_stepped);
}

#[test]
fn rotations_follow_the_clock() {
    let clock = ManualClock::new();
    let mut ctx = context(&clock);
    ctx.on_font_ready(&test_font()).unwrap();
    let mut renderer = RecordingRenderer::default();
    let mut frame_loop = FrameLoop::new();

    clock.set(2.0);
    frame_loop.tick(&mut ctx, &mut renderer);
    let expected = ctx.motion.pose(2.0, ctx.pointer);
    let assembled = ctx.scene.as_ref().unwrap();
    assert_eq!(assembled.text().unwrap().rotation(), expected.text_rotation);
    assert_eq!(assembled.decorations().unwrap().rotation, expected.group_rotation);
}

#[test]
fn pointer_is_ignored_until_the_intro_settles() {
    let clock = ManualClock::new();
    let mut ctx = context(&clock);
    let mut renderer = RecordingRenderer::default();
    let mut frame_loop = FrameLoop::new();

    ctx.on_font_ready(&test_font()).unwrap();
    assert_eq!(ctx.on_pointer_move(0.0, 0.0), PointerOutcome::Suppressed);
    for _ in 0..63 {
        frame_loop.tick(&mut ctx, &mut renderer);
    }
    assert_eq!(ctx.on_pointer_move(0.0, 0.0), PointerOutcome::Accepted);
    assert_eq!(ctx.pointer.x, -0.5);
}

#[test]
fn render_errors_do_not_stop_the_loop() {
    let clock = ManualClock::new();
    let mut ctx = context(&clock);
    let mut renderer = RecordingRenderer {
        fail_next: true,
        ..RecordingRenderer::default()
    };
    let mut frame_loop = FrameLoop::new();
    assert!(!frame_loop.tick(&mut ctx, &mut renderer).rendered);
    assert!(frame_loop.tick(&mut ctx, &mut renderer).rendered);
    assert_eq!(renderer.frames, 1);
}

#[test]
fn resize_updates_aspect_and_capped_ratio() {
    let clock = ManualClock::new();
    let mut ctx = context(&clock);
    let mut renderer = RecordingRenderer::default();
    ctx.on_resize(Viewport::new(1000, 500, 3.0), &mut renderer);
    assert_eq!(ctx.camera.aspect, 2.0);
    assert_eq!(renderer.size, (1000, 500));
    assert_eq!(renderer.ratio, 2.0);

    ctx.on_resize(Viewport::new(0, 500, 1.0), &mut renderer);
    assert_eq!(ctx.camera.aspect, 2.0);
    assert_eq!(ctx.viewport.width, 1000);
}

#[test]
fn second_font_ready_keeps_the_first_scene() {
    let clock = ManualClock::new();
    let mut ctx = context(&clock);
    ctx.on_font_ready(&test_font()).unwrap();
    let first = ctx.scene.as_ref().unwrap().decorations().unwrap().instances()[0].transform;
    ctx.config.seed = 1234;
    ctx.on_font_ready(&test_font()).unwrap();
    let again = ctx.scene.as_ref().unwrap().decorations().unwrap().instances()[0].transform;
    assert_eq!(first, again);
}
