// Front-end tuning constants.

// Distances under this get the red "danger" treatment on the readout.
pub const DANGER_DISTANCE_M: f64 = 10.0;

// Looped sample played as the entity gets close.
pub const FOOTSTEPS_URL: &str = "assets/sounds/footsteps.mp3";

// Give the platform this long to produce a fix before reporting an error.
pub const GEOLOCATION_TIMEOUT_MS: u32 = 10_000;
