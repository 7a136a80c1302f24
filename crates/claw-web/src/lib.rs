#![cfg(target_arch = "wasm32")]
use claw_core::{ClawRig, HeldActions, Scene, Session, Variant};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

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

fn session_seed() -> u64 {
    let r = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let t = js_sys::Date::now() as u64;
    (r << 32) ^ t
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("claw-web starting");

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
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let variant = Variant::from_query(dom::query_param(constants::VARIANT_PARAM).as_deref());
    let config = variant.config();
    overlay::set_instructions(&document, &config);
    let session = Rc::new(RefCell::new(Session::new(config, session_seed())?));
    let held = Rc::new(RefCell::new(HeldActions::default()));

    overlay::hide_popup(&document);
    overlay::hide_complete(&document);

    events::wire_keyboard(session.clone(), held.clone());
    events::wire_restart_button(&document, session.clone());

    // Resolve the moving parts once; frames only use the typed handles.
    let scene = Scene::cabinet();
    let rig = ClawRig::resolve(&scene)?;

    // Without WebGPU the game still runs; only the 3D view is missing.
    let gpu = frame::init_gpu(&canvas, scene.len()).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        session.clone(),
        held.clone(),
        scene,
        rig,
        canvas,
        document,
        gpu,
    )));
    let loop_handle = frame::start_loop(frame_ctx);
    events::wire_teardown(session, held, loop_handle);
    log::info!("[session] {:?} ready", variant);
    Ok(())
}
