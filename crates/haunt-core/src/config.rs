use crate::geo::Coordinate;
use thiserror::Error;

/// Startup configuration. Built once, never mutated afterwards.
#[derive(Clone, Debug)]
pub struct Config {
    /// Where the entity sits. Fixed for the whole session.
    pub target: Coordinate,
    /// Distance at which the footsteps become audible at all.
    pub max_hearing_distance_m: f64,
    /// Distance at or below which the footsteps are at full volume.
    pub min_hearing_distance_m: f64,
    /// Requested cadence for position updates.
    pub update_interval_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target: Coordinate::new(35.7531, 139.5864),
            max_hearing_distance_m: 100.0,
            min_hearing_distance_m: 5.0,
            update_interval_ms: 1000,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("hearing range is empty: min {min_m} m must be below max {max_m} m")]
    EmptyHearingRange { min_m: f64, max_m: f64 },
    #[error("hearing distances must be non-negative (min {min_m} m)")]
    NegativeDistance { min_m: f64 },
}

impl Config {
    /// Checks `0 <= min_hearing_distance_m < max_hearing_distance_m`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_hearing_distance_m < 0.0 {
            return Err(ConfigError::NegativeDistance {
                min_m: self.min_hearing_distance_m,
            });
        }
        if self.min_hearing_distance_m >= self.max_hearing_distance_m {
            return Err(ConfigError::EmptyHearingRange {
                min_m: self.min_hearing_distance_m,
                max_m: self.max_hearing_distance_m,
            });
        }
        Ok(())
    }
}
