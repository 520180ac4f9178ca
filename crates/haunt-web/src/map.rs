//! Boundary to the host page's map widget.
//!
//! Tile rendering and marker drawing stay in the page (a `mapBridge` object
//! installed by the embedding HTML); the core only pushes coordinates across.
//! A missing bridge degrades to a logged warning, radar-only operation.

use haunt_core::geo::Coordinate;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = mapBridge, js_name = setTargetMarker)]
    fn bridge_set_target_marker(lat: f64, lng: f64) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = mapBridge, js_name = setPlayerMarker)]
    fn bridge_set_player_marker(lat: f64, lng: f64) -> Result<(), JsValue>;
}

/// Places the fixed target marker. Called once at startup.
pub fn place_target(target: Coordinate) {
    if let Err(e) = bridge_set_target_marker(target.lat, target.lng) {
        log::warn!("map bridge unavailable for target marker: {e:?}");
    }
}

/// Moves (or creates) the player marker for the latest fix.
pub fn move_player(fix: Coordinate) {
    if let Err(e) = bridge_set_player_marker(fix.lat, fix.lng) {
        log::warn!("map bridge unavailable for player marker: {e:?}");
    }
}
