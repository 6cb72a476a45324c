#![cfg(target_arch = "wasm32")]
use crate::scene::SceneState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod constants;
mod dom;
mod form;
mod frame;
mod geocode;
mod recommend;
mod render;
mod scene;
mod starfield;

// Shaders bundled as string constants
pub(crate) static STARS_WGSL: &str = include_str!("../shaders/stars.wgsl");
pub(crate) static BODIES_WGSL: &str = include_str!("../shaders/bodies.wgsl");

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("parade-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("globe-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #globe-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    // Form flow is independent of the render loop.
    form::wire_hero_button(&document);
    form::wire_weather_form(&document);
    form::wire_back_button(&document);

    // Build the scene once: three star layers plus the celestial bodies.
    let scene = SceneState::build(&mut rand::thread_rng());
    log::info!(
        "[scene] layers={} bodies={} particles={}",
        scene.layers.len(),
        scene.bodies.len(),
        scene.layers.iter().map(|l| l.len()).sum::<usize>()
    );

    let gpu = frame::init_gpu(&canvas, &scene, dom::pixel_ratio()).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        canvas,
        gpu,
        started: None,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
