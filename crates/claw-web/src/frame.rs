use crate::overlay;
use crate::render;
use claw_core::{Camera, ClawRig, HeldActions, Outcome, PopupMessage, Scene, Session, SessionStats};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// What the overlays currently mirror; compared each frame so the DOM is
/// only touched on change.
#[derive(Clone, Debug, PartialEq)]
struct OverlayView {
    popup: Option<PopupMessage>,
    stats: Option<SessionStats>,
    complete: bool,
    last: Option<Outcome>,
}

pub struct FrameContext {
    pub session: Rc<RefCell<Session>>,
    pub held: Rc<RefCell<HeldActions>>,

    pub scene: Scene,
    pub rig: ClawRig,

    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub gpu: Option<render::GpuState>,

    shown: Option<OverlayView>,
}

impl FrameContext {
    pub fn new(
        session: Rc<RefCell<Session>>,
        held: Rc<RefCell<HeldActions>>,
        scene: Scene,
        rig: ClawRig,
        canvas: web::HtmlCanvasElement,
        document: web::Document,
        gpu: Option<render::GpuState>,
    ) -> Self {
        Self {
            session,
            held,
            scene,
            rig,
            canvas,
            document,
            gpu,
            shown: None,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let held = *self.held.borrow();
        let (pos, view) = {
            let mut s = self.session.borrow_mut();
            s.frame(held, now);
            let view = OverlayView {
                popup: s.popup().cloned(),
                stats: s.stats(),
                complete: s.is_complete(),
                last: s.last_outcome(),
            };
            (s.position(), view)
        }; // drop session borrow before touching the DOM

        self.rig.pose(&mut self.scene, pos);
        self.sync_overlays(view);

        if let Some(g) = &mut self.gpu {
            let w = self.canvas.width();
            let h = self.canvas.height();
            g.resize_if_needed(w, h);
            let camera = Camera::looking_at_cabinet(w.max(1) as f32 / h.max(1) as f32);
            if let Err(e) = g.render(&self.scene, &camera) {
                log::error!("[render] {:?}", e);
            }
        }
    }

    fn sync_overlays(&mut self, view: OverlayView) {
        if self.shown.as_ref() == Some(&view) {
            return;
        }
        let doc = &self.document;
        match &view.popup {
            Some(message) => overlay::show_popup(doc, message),
            None => overlay::hide_popup(doc),
        }
        overlay::update_hud(doc, view.stats);
        match (view.complete, view.stats) {
            (true, Some(stats)) => overlay::show_complete(doc, stats, view.last),
            _ => overlay::hide_complete(doc),
        }
        self.shown = Some(view);
    }
}

/// Handle to the running animation-frame loop.
#[derive(Clone, Default)]
pub struct LoopHandle {
    raf_id: Rc<Cell<Option<i32>>>,
    stopped: Rc<Cell<bool>>,
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

impl LoopHandle {
    fn request(&self, tick: &Tick) {
        if self.stopped.get() {
            return;
        }
        let Some(w) = web::window() else {
            return;
        };
        if let Some(cb) = tick.borrow().as_ref() {
            match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                Ok(id) => self.raf_id.set(Some(id)),
                Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
            }
        }
    }

    /// Cancel the pending frame; no further frames run after this.
    pub fn cancel(&self) {
        self.stopped.set(true);
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        log::info!("[frame] loop stopped");
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    max_instances: usize,
) -> Option<render::GpuState> {
    match render::GpuState::new(canvas, max_instances).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let handle = LoopHandle::default();
    let tick: Tick = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let handle_tick = handle.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if handle_tick.stopped.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        handle_tick.request(&tick_clone);
    }) as Box<dyn FnMut()>));
    handle.request(&tick);
    handle
}
