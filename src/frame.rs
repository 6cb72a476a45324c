use crate::render;
use crate::scene::SceneState;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the animation driver touches each tick. One instance, owned by
/// the requestAnimationFrame closure; there is exactly one writer and one
/// reader of all of it (the same execution context), so no locking exists.
pub struct FrameContext<'a> {
    pub scene: SceneState,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    /// Shared monotonic clock, started at the driver's first tick and never
    /// reset.
    pub started: Option<Instant>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let elapsed_sec = match self.started {
            Some(t0) => t0.elapsed().as_secs_f32(),
            None => {
                self.started = Some(Instant::now());
                0.0
            }
        };

        self.scene.tick(elapsed_sec);

        if let Some(g) = &mut self.gpu {
            let w = self.canvas.width();
            let h = self.canvas.height();
            g.resize_if_needed(w, h);
            // No recovery path for a lost surface; log and keep ticking.
            if let Err(e) = g.render(&self.scene) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    scene: &SceneState,
    pixel_ratio: f32,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, scene, pixel_ratio).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Drive `FrameContext::frame` from requestAnimationFrame for the lifetime
/// of the page. There is no stop condition; the loop ends when the host
/// destroys the document.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
