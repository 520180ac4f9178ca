// Host-side tests for the shared tracking state and the end-to-end
// proximity scenario from the original field test (target in Nerima, Tokyo).

use haunt_core::geo::{Cardinal, Coordinate};
use haunt_core::{volume_for_distance, Config, DisplayMode, TrackingState};

fn make_state() -> TrackingState {
    TrackingState::new(Config::default().target)
}

#[test]
fn starts_with_no_position_and_no_reading() {
    let state = make_state();
    assert_eq!(state.target(), Config::default().target);
    let snap = state.snapshot();
    assert!(snap.position.is_none());
    assert!(snap.reading.is_none());
    assert!(!snap.feedback_enabled);
    assert_eq!(snap.display_mode, DisplayMode::Map);
}

#[test]
fn reading_is_present_iff_position_is_present() {
    let mut state = make_state();
    state.ingest_fix(Coordinate::new(35.7521, 139.5864));
    let snap = state.snapshot();
    assert_eq!(snap.position.is_some(), snap.reading.is_some());
    assert!(snap.position.is_some());
}

#[test]
fn snapshot_pairs_position_and_reading_coherently() {
    let mut state = make_state();
    let fixes = [
        Coordinate::new(35.7521, 139.5864),
        Coordinate::new(35.7525, 139.5870),
        Coordinate::new(35.7530, 139.5860),
    ];
    for fix in fixes {
        let returned = state.ingest_fix(fix);
        let snap = state.snapshot();
        let position = snap.position.expect("position after fix");
        let reading = snap.reading.expect("reading after fix");
        assert_eq!(position, fix);
        assert_eq!(reading.distance_m, returned.distance_m);
        assert_eq!(reading.bearing_deg, returned.bearing_deg);
    }
}

#[test]
fn toggles_are_independent_of_position() {
    let mut state = make_state();
    assert!(state.toggle_feedback());
    assert!(!state.toggle_feedback());
    state.set_feedback_enabled(true);
    state.set_display_mode(DisplayMode::Radar);

    let snap = state.snapshot();
    assert!(snap.feedback_enabled);
    assert_eq!(snap.display_mode, DisplayMode::Radar);
    assert!(snap.position.is_none(), "toggles must not fabricate a fix");
}

#[test]
fn approach_scenario_from_silent_to_full_volume() {
    let cfg = Config::default();
    let mut state = TrackingState::new(cfg.target);

    // About 111 m due south of the target: out of hearing range, silent.
    let far = state.ingest_fix(Coordinate::new(35.7521, 139.5864));
    assert!((far.distance_m - 111.0).abs() < 5.0, "far {}", far.distance_m);
    assert_eq!(volume_for_distance(far.distance_m, &cfg), 0.0);

    // About 5.5 m south: near the full-volume threshold, target due north.
    let near = state.ingest_fix(Coordinate::new(35.75305, 139.5864));
    assert!((near.distance_m - 5.5).abs() < 0.5, "near {}", near.distance_m);
    let volume = volume_for_distance(near.distance_m, &cfg);
    assert!(volume > 0.99, "volume {volume}");
    assert!(near.bearing_deg < 1.0 || near.bearing_deg > 359.0);
    assert_eq!(Cardinal::from_bearing_deg(near.bearing_deg), Cardinal::North);
}
