//! Geodesic helpers: great-circle distance, initial bearing, and the 8-way
//! compass labels shown in the direction readout.
//!
//! Everything here is pure and deterministic. Callers supply well-formed
//! coordinates; NaN inputs propagate through unguarded.

use std::fmt;

/// Mean Earth radius in meters, as used by the haversine formula.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS-84 position in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lng)
    }
}

/// Distance and direction from a fix toward the fixed target.
///
/// Always recomputed in full from a single fix; never patched field by field.
#[derive(Clone, Copy, Debug)]
pub struct ProximityReading {
    pub distance_m: f64,
    pub bearing_deg: f64,
}

impl ProximityReading {
    pub fn between(from: Coordinate, to: Coordinate) -> Self {
        Self {
            distance_m: distance_m(from, to),
            bearing_deg: initial_bearing_deg(from, to),
        }
    }
}

/// Great-circle distance in meters (haversine).
pub fn distance_m(a: Coordinate, b: Coordinate) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let d_phi = (b.lat - a.lat).to_radians();
    let d_lambda = (b.lng - a.lng).to_radians();

    let h = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_M * c
}

/// Initial bearing from `a` toward `b`, in degrees normalized to `[0, 360)`.
///
/// Coincident coordinates degenerate to `atan2(0, 0) == 0`, i.e. due north.
pub fn initial_bearing_deg(a: Coordinate, b: Coordinate) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let d_lambda = (b.lng - a.lng).to_radians();

    let y = d_lambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * d_lambda.cos();
    (y.atan2(x).to_degrees() + 360.0) % 360.0
}

/// One of the 8 compass directions, 45 degrees apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cardinal {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Cardinal {
    /// Nearest compass label for a bearing in degrees.
    ///
    /// Rounds `bearing / 45` half-up, so a sector boundary such as 22.5
    /// belongs to the clockwise neighbor. Wraps 337.5..360 back to north.
    pub fn from_bearing_deg(bearing: f64) -> Self {
        const ORDER: [Cardinal; 8] = [
            Cardinal::North,
            Cardinal::NorthEast,
            Cardinal::East,
            Cardinal::SouthEast,
            Cardinal::South,
            Cardinal::SouthWest,
            Cardinal::West,
            Cardinal::NorthWest,
        ];
        let idx = (bearing / 45.0).round() as usize % 8;
        ORDER[idx]
    }

    pub fn label(self) -> &'static str {
        match self {
            Cardinal::North => "North",
            Cardinal::NorthEast => "North-East",
            Cardinal::East => "East",
            Cardinal::SouthEast => "South-East",
            Cardinal::South => "South",
            Cardinal::SouthWest => "South-West",
            Cardinal::West => "West",
            Cardinal::NorthWest => "North-West",
        }
    }
}

impl fmt::Display for Cardinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
