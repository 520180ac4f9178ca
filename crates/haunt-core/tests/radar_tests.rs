// Host-side tests for the radar scene geometry.

use haunt_core::geo::ProximityReading;
use haunt_core::radar::{
    self, RadarScene, EDGE_MARGIN_PX, RING_COUNT, SWEEP_PERIOD_SEC,
};
use haunt_core::Config;

const WIDTH: f32 = 400.0;
const HEIGHT: f32 = 300.0;

fn reading(distance_m: f64, bearing_deg: f64) -> Option<ProximityReading> {
    Some(ProximityReading {
        distance_m,
        bearing_deg,
    })
}

fn compose(elapsed: f64, r: Option<ProximityReading>) -> RadarScene {
    RadarScene::compose(WIDTH, HEIGHT, elapsed, r, &Config::default())
}

#[test]
fn grid_is_a_pure_function_of_surface_size() {
    let scene = compose(0.0, None);
    assert_eq!(scene.center.x, WIDTH / 2.0);
    assert_eq!(scene.center.y, HEIGHT / 2.0);
    assert_eq!(scene.max_radius, HEIGHT / 2.0 - EDGE_MARGIN_PX);

    // Rings are evenly spaced out to the max radius.
    assert_eq!(scene.ring_radii.len(), RING_COUNT);
    for (i, r) in scene.ring_radii.iter().enumerate() {
        let expected = scene.max_radius * (i + 1) as f32 / RING_COUNT as f32;
        assert!((r - expected).abs() < 1e-4);
    }
    assert_eq!(scene.ring_radii[RING_COUNT - 1], scene.max_radius);
}

#[test]
fn sweep_completes_a_rotation_per_period() {
    assert_eq!(compose(0.0, None).sweep_angle, 0.0);
    let half = compose(SWEEP_PERIOD_SEC / 2.0, None).sweep_angle;
    assert!((half - std::f32::consts::PI).abs() < 1e-5);
    // Wraps cleanly at the period boundary.
    let wrapped = compose(SWEEP_PERIOD_SEC * 7.0 + 0.25, None).sweep_angle;
    let fresh = compose(0.25, None).sweep_angle;
    assert!((wrapped - fresh).abs() < 1e-5);
}

#[test]
fn blob_offset_matches_the_contract_for_any_distance() {
    let cfg = Config::default();
    let max_radius = 130.0_f32;
    let mut d = 0.0;
    while d <= cfg.max_hearing_distance_m * 1.5 {
        let ratio = (d / cfg.max_hearing_distance_m).min(1.0) as f32;
        let expected = (max_radius * (1.0 - ratio)).max(0.0);
        let got = radar::blob_offset_px(d, cfg.max_hearing_distance_m, max_radius);
        assert!((got - expected).abs() < 1e-5, "offset at {d} m");
        assert!(got >= 0.0);
        d += 2.5;
    }
}

#[test]
fn blob_is_omitted_without_a_reading() {
    assert!(compose(1.0, None).blob.is_none());
}

#[test]
fn blob_is_omitted_at_and_beyond_hearing_range() {
    let cfg = Config::default();
    assert!(compose(1.0, reading(cfg.max_hearing_distance_m, 45.0))
        .blob
        .is_none());
    assert!(compose(1.0, reading(500.0, 45.0)).blob.is_none());
}

#[test]
fn blob_offset_shrinks_as_the_target_recedes() {
    let scene = compose(0.0, reading(1.0, 90.0));
    let blob = scene.blob.expect("blob for a close target");
    let offset = (blob - scene.center).length();
    assert!(offset > scene.max_radius * 0.9, "1 m target offset {offset}");

    let mid = compose(0.0, reading(50.0, 90.0));
    let mid_offset = (mid.blob.unwrap() - mid.center).length();
    assert!(
        mid_offset < offset,
        "receding target must collapse toward the center"
    );
    assert!((mid_offset - scene.max_radius * 0.5).abs() < 1e-3);
}

#[test]
fn bearing_north_maps_to_screen_up() {
    let scene = compose(0.0, reading(10.0, 0.0));
    let blob = scene.blob.expect("blob");
    assert!((blob.x - scene.center.x).abs() < 1e-3, "north is centered in x");
    assert!(blob.y < scene.center.y, "north points up");

    let east = compose(0.0, reading(10.0, 90.0)).blob.unwrap();
    assert!(east.x > scene.center.x, "east points right");
    assert!((east.y - scene.center.y).abs() < 1e-3);
}
