#![cfg(target_arch = "wasm32")]
use app_core::{
    FrameLoop, GpuRenderer, InstantClock, Renderer, SceneConfig, SceneContext, FONT_PATH,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod frame;
pub mod input;
mod loader;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("app-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, "app-canvas")?;

    let config = SceneConfig::default().with_seed_str(dom::seed_param(&window).as_deref());
    log::info!("[config] seed={}", config.seed);

    let viewport = dom::current_viewport(&window);
    dom::sync_canvas_backing_size(&canvas, &viewport);

    let instance = wgpu::Instance::default();
    let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
    let mut renderer = GpuRenderer::new(&instance, surface, viewport, config.clear_color).await?;
    renderer.set_size(viewport.width, viewport.height);
    renderer.set_pixel_ratio(viewport.render_pixel_ratio());

    let ctx = Rc::new(RefCell::new(SceneContext::new(
        config,
        viewport,
        Box::new(InstantClock::start()),
    )));
    let renderer = Rc::new(RefCell::new(renderer));

    events::wire_input_handlers(events::InputWiring {
        window: window.clone(),
        canvas,
        ctx: ctx.clone(),
        renderer: renderer.clone(),
    });

    spawn_local(loader::load_font(window, FONT_PATH, ctx.clone()));

    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext {
        ctx,
        renderer,
        frame_loop: FrameLoop::new(),
    })));
    Ok(())
}
