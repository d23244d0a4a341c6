use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

use app_core::{
    Font, FrameLoop, GpuRenderer, InstantClock, SceneConfig, SceneContext, Viewport, FONT_PATH,
};

/// Native windows hand out physical pixels directly, so the viewport is
/// tracked at ratio 1.
fn viewport_of(size: winit::dpi::PhysicalSize<u32>) -> Viewport {
    Viewport::new(size.width, size.height, 1.0)
}

fn font_path() -> PathBuf {
    std::env::var_os("SCENE_FONT")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(FONT_PATH))
}

/// Read and decode the typeface off the event-loop thread; the result is
/// picked up by the loop once it arrives.
fn spawn_font_loader(path: PathBuf) -> anyhow::Result<mpsc::Receiver<anyhow::Result<Font>>> {
    let (tx, rx) = mpsc::channel();
    thread::Builder::new()
        .name("font-loader".into())
        .spawn(move || {
            let result = std::fs::read_to_string(&path)
                .map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))
                .and_then(|json| Font::from_json(&json).map_err(anyhow::Error::from));
            let _ = tx.send(result);
        })?;
    Ok(rx)
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = SceneConfig::default().with_seed_str(std::env::var("SCENE_SEED").ok().as_deref());
    log::info!("[config] seed={}", config.seed);

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Drifting text (native)")
        .build(&event_loop)?;

    let viewport = viewport_of(window.inner_size());
    let instance = wgpu::Instance::default();
    let surface = instance.create_surface(&window)?;
    let mut renderer = pollster::block_on(GpuRenderer::new(
        &instance,
        surface,
        viewport,
        config.clear_color,
    ))?;
    let mut ctx = SceneContext::new(config, viewport, Box::new(InstantClock::start()));
    let mut frame_loop = FrameLoop::new();
    let mut font_rx = Some(spawn_font_loader(font_path())?);
    let window = &window;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => ctx.on_resize(viewport_of(size), &mut renderer),
        Event::WindowEvent {
            event: WindowEvent::CursorMoved { position, .. },
            ..
        } => {
            ctx.on_pointer_move(position.x as f32, position.y as f32);
        }
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        Event::AboutToWait => {
            if let Some(rx) = &font_rx {
                match rx.try_recv() {
                    Ok(Ok(font)) => {
                        if let Err(e) = ctx.on_font_ready(&font) {
                            log::error!("[font] scene build failed: {}", e);
                        }
                        font_rx = None;
                    }
                    Ok(Err(e)) => {
                        log::error!("[font] unavailable, scene stays empty: {:#}", e);
                        font_rx = None;
                    }
                    Err(mpsc::TryRecvError::Empty) => {}
                    Err(mpsc::TryRecvError::Disconnected) => font_rx = None,
                }
            }
            frame_loop.tick(&mut ctx, &mut renderer);
            window.request_redraw();
        }
        _ => {}
    })?;
    Ok(())
}
