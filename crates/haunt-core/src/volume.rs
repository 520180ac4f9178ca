use crate::config::Config;

/// Maps a distance to a normalized loudness in `[0, 1]`.
///
/// Silent at or beyond `max_hearing_distance_m`, full volume at or below
/// `min_hearing_distance_m`, linear in between.
pub fn volume_for_distance(distance_m: f64, config: &Config) -> f64 {
    if distance_m >= config.max_hearing_distance_m {
        return 0.0;
    }
    let ratio = (distance_m - config.min_hearing_distance_m)
        / (config.max_hearing_distance_m - config.min_hearing_distance_m);
    (1.0 - ratio).clamp(0.0, 1.0)
}
