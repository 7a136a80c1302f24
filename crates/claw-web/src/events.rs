use crate::constants::RESTART_BUTTON_ID;
use crate::dom;
use crate::frame::LoopHandle;
use claw_core::{action_for_event, Action, HeldActions, Session};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_keydown(
    ev: &web::KeyboardEvent,
    session: &Rc<RefCell<Session>>,
    held: &Rc<RefCell<HeldActions>>,
) {
    let Some(action) = action_for_event(&ev.key(), &ev.code()) else {
        return;
    };
    // Keep arrows and space from scrolling the page.
    ev.prevent_default();
    match action {
        Action::Grab => {
            // Repeats and double-taps fall through to the sequencer's guard.
            if session.borrow_mut().trigger_grab(Instant::now()) {
                log::info!("[keys] grab");
            }
        }
        dir => {
            held.borrow_mut().press(dir);
        }
    }
}

pub fn handle_keyup(ev: &web::KeyboardEvent, held: &Rc<RefCell<HeldActions>>) {
    if let Some(action) = action_for_event(&ev.key(), &ev.code()) {
        held.borrow_mut().release(action);
    }
}

pub fn wire_keyboard(session: Rc<RefCell<Session>>, held: Rc<RefCell<HeldActions>>) {
    let Some(window) = web::window() else {
        return;
    };
    {
        let held = held.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            handle_keydown(&ev, &session, &held);
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let held = held.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            handle_keyup(&ev, &held);
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    // Keyups are lost while the window is unfocused; drop held directions.
    let closure = Closure::wrap(Box::new(move || {
        held.borrow_mut().clear();
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_restart_button(document: &web::Document, session: Rc<RefCell<Session>>) {
    dom::add_click_listener(document, RESTART_BUTTON_ID, move || {
        session.borrow_mut().restart();
    });
}

/// Stop the frame loop and cancel every pending session timer when the page
/// goes away for good. A page entering the back/forward cache keeps both;
/// only the held keys are dropped since their keyups will never arrive.
pub fn wire_teardown(
    session: Rc<RefCell<Session>>,
    held: Rc<RefCell<HeldActions>>,
    loop_handle: LoopHandle,
) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move |ev: web::PageTransitionEvent| {
        held.borrow_mut().clear();
        if session.borrow_mut().page_hidden(ev.persisted()) {
            loop_handle.cancel();
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    closure.forget();
}
