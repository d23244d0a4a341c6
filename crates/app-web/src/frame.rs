use app_core::{FrameLoop, GpuRenderer, SceneContext};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-refresh state: the shared scene context, the renderer and the loop
/// bookkeeping. Lives for the life of the page.
pub struct FrameContext {
    pub ctx: Rc<RefCell<SceneContext>>,
    pub renderer: Rc<RefCell<GpuRenderer<'static>>>,
    pub frame_loop: FrameLoop,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let report = self
            .frame_loop
            .tick(&mut self.ctx.borrow_mut(), &mut *self.renderer.borrow_mut());
        if report.intro_stepped && !self.ctx.borrow().intro.is_active() {
            log::info!("[frame] intro finished at frame {}", self.frame_loop.frames());
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
