//! Button and panel wiring: view-mode switching, the sound toggle that also
//! gates audio initialization behind a user gesture, and the debug panel.

use crate::audio::FootstepPlayer;
use crate::dom;
use haunt_core::{volume_for_distance, Config, DisplayMode, TrackingState};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct UiWiring {
    pub document: web::Document,
    pub config: Rc<Config>,
    pub state: Rc<RefCell<TrackingState>>,
    pub player: Rc<RefCell<FootstepPlayer>>,
}

pub fn wire(wiring: &UiWiring) {
    dom::set_text(&wiring.document, "version-number", env!("CARGO_PKG_VERSION"));
    dom::set_text(
        &wiring.document,
        "target-pos",
        &crate::readout::format_coordinate(wiring.config.target),
    );
    wire_mode_buttons(wiring);
    wire_sound_toggle(wiring);
    wire_debug_panel(&wiring.document);
}

fn apply_display_mode(document: &web::Document, mode: DisplayMode) {
    let map_active = mode == DisplayMode::Map;
    dom::set_class_enabled(document, "map-mode-btn", "active", map_active);
    dom::set_class_enabled(document, "radar-mode-btn", "active", !map_active);
    dom::set_class_enabled(document, "map-container", "active", map_active);
    dom::set_class_enabled(document, "radar-container", "active", !map_active);
}

fn wire_mode_buttons(wiring: &UiWiring) {
    for (button_id, mode) in [
        ("map-mode-btn", DisplayMode::Map),
        ("radar-mode-btn", DisplayMode::Radar),
    ] {
        let document = wiring.document.clone();
        let state = wiring.state.clone();
        dom::add_click_listener(&wiring.document, button_id, move || {
            state.borrow_mut().set_display_mode(mode);
            apply_display_mode(&document, mode);
        });
    }
}

fn wire_sound_toggle(wiring: &UiWiring) {
    let document = wiring.document.clone();
    let config = wiring.config.clone();
    let state = wiring.state.clone();
    let player = wiring.player.clone();
    dom::add_click_listener(&wiring.document, "sound-toggle", move || {
        let enabled = state.borrow_mut().toggle_feedback();
        dom::set_text(
            &document,
            "sound-toggle",
            if enabled { "Sound off" } else { "Sound on" },
        );
        dom::set_class_enabled(&document, "sound-toggle", "active", enabled);

        let mut player = player.borrow_mut();
        if enabled {
            // First enable happens inside the click gesture on purpose: the
            // browser will not start an AudioContext anywhere else.
            player.ensure_backend();
        }
        let volume = state
            .borrow()
            .snapshot()
            .reading
            .map(|r| volume_for_distance(r.distance_m, &config))
            .unwrap_or(0.0);
        player.update(enabled, volume);

        dom::append_debug_line(
            &document,
            if enabled {
                "audio feedback enabled"
            } else {
                "audio feedback disabled"
            },
        );
    });
}

fn wire_debug_panel(document: &web::Document) {
    let doc_toggle = document.clone();
    dom::add_click_listener(document, "debug-toggle", move || {
        let visible = dom::is_visible(&doc_toggle, "debug-panel");
        dom::set_visible(&doc_toggle, "debug-panel", !visible);
    });
    let doc_close = document.clone();
    dom::add_click_listener(document, "close-debug", move || {
        dom::set_visible(&doc_close, "debug-panel", false);
    });
}
