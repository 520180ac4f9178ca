// Pure string formatting for the HUD readouts. Kept free of `web-sys` so
// it can be tested on the host.

use haunt_core::geo::{Cardinal, Coordinate};

pub fn format_coordinate(c: Coordinate) -> String {
    format!("{:.4}, {:.4}", c.lat, c.lng)
}

pub fn format_distance(distance_m: f64) -> String {
    format!("{} m", distance_m.round() as i64)
}

pub fn format_distance_line(distance_m: f64) -> String {
    format!("Distance: {}", format_distance(distance_m))
}

pub fn format_direction_line(bearing_deg: f64) -> String {
    format!(
        "Direction: {} ({}\u{b0})",
        Cardinal::from_bearing_deg(bearing_deg),
        bearing_deg.round() as i64
    )
}
