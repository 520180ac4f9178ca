//! Shared tracking state, owned by the application core.
//!
//! Two independently-clocked callbacks feed and read this: the geolocation
//! watch (irregular) writes fixes, the animation loop (~60 Hz) reads. All
//! reads go through [`TrackingState::snapshot`], which hands out a `Copy`
//! of every field at once, so a renderer can never observe a fresh position
//! paired with a stale reading.

use crate::geo::{Coordinate, ProximityReading};

/// Which of the two views the UI currently shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    Map,
    Radar,
}

/// One coherent view of the tracking state.
///
/// Invariant: `reading` is present iff `position` is present, and is always
/// derived from that position against the fixed target.
#[derive(Clone, Copy, Debug, Default)]
pub struct TrackingSnapshot {
    pub position: Option<Coordinate>,
    pub reading: Option<ProximityReading>,
    pub feedback_enabled: bool,
    pub display_mode: DisplayMode,
}

pub struct TrackingState {
    target: Coordinate,
    snapshot: TrackingSnapshot,
}

impl TrackingState {
    pub fn new(target: Coordinate) -> Self {
        Self {
            target,
            snapshot: TrackingSnapshot::default(),
        }
    }

    pub fn target(&self) -> Coordinate {
        self.target
    }

    /// Ingests a raw fix: recomputes distance and bearing to the target and
    /// replaces position and reading together. No smoothing or filtering.
    pub fn ingest_fix(&mut self, fix: Coordinate) -> ProximityReading {
        let reading = ProximityReading::between(fix, self.target);
        log::debug!(
            "fix ({fix}) -> distance {:.1} m, bearing {:.0} deg",
            reading.distance_m,
            reading.bearing_deg
        );
        self.snapshot.position = Some(fix);
        self.snapshot.reading = Some(reading);
        reading
    }

    pub fn set_feedback_enabled(&mut self, enabled: bool) {
        self.snapshot.feedback_enabled = enabled;
    }

    /// Flips the audio-feedback switch and returns the new value.
    pub fn toggle_feedback(&mut self) -> bool {
        self.snapshot.feedback_enabled = !self.snapshot.feedback_enabled;
        self.snapshot.feedback_enabled
    }

    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.snapshot.display_mode = mode;
    }

    /// A coherent copy of all fields, taken at a single point in time.
    pub fn snapshot(&self) -> TrackingSnapshot {
        self.snapshot
    }
}
