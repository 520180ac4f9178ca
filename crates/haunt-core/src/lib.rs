pub mod audio;
pub mod config;
pub mod geo;
pub mod radar;
pub mod state;
pub mod volume;

pub use audio::{AudioCommand, AudioFeedbackController, PlaybackPhase, NEAR_SILENCE_THRESHOLD};
pub use config::{Config, ConfigError};
pub use geo::{Cardinal, Coordinate, ProximityReading};
pub use radar::RadarScene;
pub use state::{DisplayMode, TrackingSnapshot, TrackingState};
pub use volume::volume_for_distance;
