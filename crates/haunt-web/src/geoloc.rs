//! Geolocation wiring: the irregular, platform-clocked side of the system.
//!
//! Every successful fix is ingested atomically into the tracking state and
//! then fanned out to the readouts, the map bridge, and the audio feedback
//! path. Errors become a status line; there is no internal retry.

use crate::audio::FootstepPlayer;
use crate::constants::{DANGER_DISTANCE_M, GEOLOCATION_TIMEOUT_MS};
use crate::{dom, map, readout};
use haunt_core::geo::{Coordinate, ProximityReading};
use haunt_core::{volume_for_distance, Config, TrackingState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct GeoWiring {
    pub document: web::Document,
    pub config: Rc<Config>,
    pub state: Rc<RefCell<TrackingState>>,
    pub player: Rc<RefCell<FootstepPlayer>>,
}

/// Subscribes to `watchPosition` for the lifetime of the page.
pub fn watch_position(wiring: GeoWiring) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let geolocation = match window.navigator().geolocation() {
        Ok(g) => g,
        Err(e) => {
            dom::set_text(&wiring.document, "status", "Geolocation is not supported here");
            return Err(anyhow::anyhow!("geolocation unavailable: {e:?}"));
        }
    };

    dom::set_text(&wiring.document, "status", "Acquiring position...");

    let success = {
        let document = wiring.document.clone();
        let config = wiring.config.clone();
        let state = wiring.state.clone();
        let player = wiring.player.clone();
        Closure::wrap(Box::new(move |position: web::GeolocationPosition| {
            let coords = position.coords();
            let fix = Coordinate::new(coords.latitude(), coords.longitude());
            let reading = state.borrow_mut().ingest_fix(fix);

            map::move_player(fix);
            dom::set_text(&document, "player-pos", &readout::format_coordinate(fix));
            refresh_readouts(&document, reading);

            let snap = state.borrow().snapshot();
            let volume = volume_for_distance(reading.distance_m, &config);
            player.borrow_mut().update(snap.feedback_enabled, volume);

            dom::set_text(&document, "status", "Tracking...");
        }) as Box<dyn FnMut(_)>)
    };

    let error = {
        let document = wiring.document.clone();
        Closure::wrap(Box::new(move |err: web::GeolocationPositionError| {
            let message = err.message();
            log::error!("geolocation error {}: {message}", err.code());
            dom::set_text(&document, "status", &message);
            dom::append_debug_line(&document, &format!("geolocation error: {message}"));
        }) as Box<dyn FnMut(_)>)
    };

    let options = web::PositionOptions::new();
    options.set_enable_high_accuracy(true);
    options.set_maximum_age(wiring.config.update_interval_ms);
    options.set_timeout(GEOLOCATION_TIMEOUT_MS);

    geolocation
        .watch_position_with_error_callback_and_options(
            success.as_ref().unchecked_ref(),
            Some(error.as_ref().unchecked_ref()),
            &options,
        )
        .map_err(|e| anyhow::anyhow!("watchPosition: {e:?}"))?;
    success.forget();
    error.forget();
    Ok(())
}

fn refresh_readouts(document: &web::Document, reading: ProximityReading) {
    dom::set_text(document, "distance", &readout::format_distance(reading.distance_m));
    dom::set_text(
        document,
        "distance-info",
        &readout::format_distance_line(reading.distance_m),
    );
    dom::set_text(
        document,
        "direction-info",
        &readout::format_direction_line(reading.bearing_deg),
    );
    dom::set_class_enabled(
        document,
        "distance",
        "danger",
        reading.distance_m < DANGER_DISTANCE_M,
    );
}
