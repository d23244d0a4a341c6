use crate::dom;
use app_core::{GpuRenderer, PointerOutcome, SceneContext};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct InputWiring {
    pub window: web::Window,
    pub canvas: web::HtmlCanvasElement,
    pub ctx: Rc<RefCell<SceneContext>>,
    pub renderer: Rc<RefCell<GpuRenderer<'static>>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    // resize
    {
        let ctx = w.ctx.clone();
        let renderer = w.renderer.clone();
        let canvas = w.canvas.clone();
        let closure = Closure::wrap(Box::new(move || {
            let Some(window) = web::window() else {
                return;
            };
            let viewport = dom::current_viewport(&window);
            if viewport.is_empty() {
                return;
            }
            dom::sync_canvas_backing_size(&canvas, &viewport);
            ctx.borrow_mut()
                .on_resize(viewport, &mut *renderer.borrow_mut());
            log::debug!(
                "[resize] {}x{} @{:.2}",
                viewport.width,
                viewport.height,
                viewport.render_pixel_ratio()
            );
        }) as Box<dyn FnMut()>);
        let _ = w
            .window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointermove
    {
        let ctx = w.ctx.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let outcome = ctx
                .borrow_mut()
                .on_pointer_move(ev.client_x() as f32, ev.client_y() as f32);
            if outcome == PointerOutcome::Suppressed {
                ev.prevent_default();
                ev.stop_propagation();
            }
        }) as Box<dyn FnMut(_)>);
        let _ = w
            .window
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
