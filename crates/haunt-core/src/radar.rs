//! Pure geometry for the radar display.
//!
//! The web renderer asks for a [`RadarScene`] every animation frame and only
//! does the 2-D canvas calls; everything with numeric content lives here so
//! it can be tested on the host.

use crate::config::Config;
use crate::geo::ProximityReading;
use glam::Vec2;
use std::f32::consts::PI;

/// Concentric grid rings drawn per frame.
pub const RING_COUNT: usize = 3;
/// Gap between the outermost ring and the surface edge, in pixels.
pub const EDGE_MARGIN_PX: f32 = 20.0;
/// One full sweep rotation takes this long.
pub const SWEEP_PERIOD_SEC: f64 = 2.0;
/// Angular width of the sweep wedge.
pub const SWEEP_WIDTH_RAD: f32 = PI / 6.0;
/// Fixed pixel radius of the blob's glow gradient, not scaled by distance.
pub const BLOB_GLOW_RADIUS_PX: f32 = 20.0;

/// Everything a frame needs to draw, derived from surface size, wall-clock
/// time, and the latest tracking snapshot.
#[derive(Clone, Debug)]
pub struct RadarScene {
    pub center: Vec2,
    pub max_radius: f32,
    pub ring_radii: [f32; RING_COUNT],
    /// Leading edge of the sweep wedge, radians, screen convention.
    pub sweep_angle: f32,
    /// Blob center in surface pixels; absent when there is no reading or the
    /// target sits at or beyond hearing range.
    pub blob: Option<Vec2>,
}

impl RadarScene {
    pub fn compose(
        width: f32,
        height: f32,
        elapsed_sec: f64,
        reading: Option<ProximityReading>,
        config: &Config,
    ) -> Self {
        let center = Vec2::new(width / 2.0, height / 2.0);
        let max_radius = (width.min(height) / 2.0 - EDGE_MARGIN_PX).max(0.0);

        let mut ring_radii = [0.0_f32; RING_COUNT];
        for (i, r) in ring_radii.iter_mut().enumerate() {
            *r = max_radius * (i + 1) as f32 / RING_COUNT as f32;
        }

        let blob = reading.and_then(|r| {
            let offset = blob_offset_px(r.distance_m, config.max_hearing_distance_m, max_radius);
            (offset > 0.0).then(|| center + polar_px(r.bearing_deg, offset))
        });

        Self {
            center,
            max_radius,
            ring_radii,
            sweep_angle: sweep_angle(elapsed_sec),
            blob,
        }
    }
}

/// Blob distance from the radar center: `max_radius * (1 - min(1, d/max))`.
///
/// A close target sits out near the rim; as it recedes toward hearing range
/// the blob collapses into the center and disappears at exactly that range.
pub fn blob_offset_px(distance_m: f64, max_hearing_m: f64, max_radius: f32) -> f32 {
    let ratio = (distance_m / max_hearing_m).min(1.0) as f32;
    (max_radius * (1.0 - ratio)).max(0.0)
}

/// Sweep angle for a given wall-clock elapsed time, one rotation per period.
pub fn sweep_angle(elapsed_sec: f64) -> f32 {
    ((elapsed_sec % SWEEP_PERIOD_SEC) * PI as f64) as f32
}

/// Compass bearing to a screen angle: 0 deg (north) points up, increasing
/// clockwise. The display is north-up; device heading is not compensated.
pub fn screen_angle_rad(bearing_deg: f64) -> f32 {
    (bearing_deg - 90.0).to_radians() as f32
}

fn polar_px(bearing_deg: f64, offset: f32) -> Vec2 {
    let angle = screen_angle_rad(bearing_deg);
    Vec2::new(angle.cos(), angle.sin()) * offset
}
