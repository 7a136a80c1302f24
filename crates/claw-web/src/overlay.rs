//! DOM overlays: outcome popup, instructions, HUD and the complete screen.
//!
//! The popup and the complete overlay are separate channels and never shown
//! together; callers pass the session's view and these functions only mirror
//! it into the page.

use crate::constants::*;
use crate::dom;
use claw_core::{GameConfig, Outcome, PopupMessage, SessionStats};
use web_sys as web;

#[inline]
fn show(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        let cl = el.class_list();
        _ = cl.remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
fn hide(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        let cl = el.class_list();
        _ = cl.add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

pub fn show_popup(document: &web::Document, message: &PopupMessage) {
    dom::set_text(document, POPUP_ICON_ID, &message.icon);
    dom::set_text(document, POPUP_TEXT_ID, &message.text);
    if let Some(el) = document.get_element_by_id(POPUP_ID) {
        let cl = el.class_list();
        let (add, remove) = if message.success {
            ("success", "miss")
        } else {
            ("miss", "success")
        };
        _ = cl.add_1(add);
        _ = cl.remove_1(remove);
    }
    show(document, POPUP_ID);
}

pub fn hide_popup(document: &web::Document) {
    hide(document, POPUP_ID);
}

/// Fill in the how-to-play panel for the active configuration.
pub fn set_instructions(document: &web::Document, config: &GameConfig) {
    let Some(el) = document.get_element_by_id(INSTRUCTIONS_ID) else {
        return;
    };
    let icons: String = config
        .outcomes
        .entries()
        .iter()
        .filter(|e| e.outcome.is_success())
        .map(|e| e.outcome.display().icon)
        .collect();
    let goal = match config.win {
        Some(rule) => format!("Grab {} prizes {} to clear the machine", rule.threshold, icons),
        None => format!("Win a random prize {}", icons),
    };
    let html = format!(
        "<p style='font-weight:600; margin:0 0 4px 0;'>🎮 How to play</p>\
         <ul style='margin:0; padding-left:18px;'>\
         <li>Move the claw with <b>W/A/S/D</b> or the arrow keys</li>\
         <li>Press <b>Space</b> to drop the claw</li>\
         <li>{}</li>\
         </ul>",
        goal
    );
    el.set_inner_html(&html);
}

pub fn update_hud(document: &web::Document, stats: Option<SessionStats>) {
    match stats {
        Some(s) => {
            dom::set_text(
                document,
                HUD_ID,
                &format!(
                    "Prizes: {}/{} • Attempts: {}",
                    s.successes, s.threshold, s.attempts
                ),
            );
            show(document, HUD_ID);
        }
        None => hide(document, HUD_ID),
    }
}

pub fn show_complete(document: &web::Document, stats: SessionStats, last: Option<Outcome>) {
    let icon = last.map(|o| o.display().icon).unwrap_or("🏆");
    dom::set_text(
        document,
        COMPLETE_SUMMARY_ID,
        &format!(
            "{} You grabbed {} prizes in {} attempts!",
            icon, stats.successes, stats.attempts
        ),
    );
    show(document, COMPLETE_OVERLAY_ID);
}

pub fn hide_complete(document: &web::Document) {
    hide(document, COMPLETE_OVERLAY_ID);
}
