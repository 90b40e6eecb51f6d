//! Externally supplied configuration for the engagement chain.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Tuning parameters for both radars. Supplied by the embedding application;
/// the defaults describe a mid-size battery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarConfig {
    /// Antenna mount height above ground (kilometres).
    pub radar_height_km: f64,
    /// Lower edge of the elevation gate (radians).
    pub min_elevation: f64,
    /// Upper edge of the elevation gate (radians).
    pub max_elevation: f64,
    /// Maximum detection range (kilometres).
    pub max_distance_km: f64,
    /// Designation/correlation accuracy half-window, azimuth (radians).
    pub accuracy_azimuth: f64,
    /// Designation/correlation accuracy half-window, elevation (radians).
    pub accuracy_elevation: f64,
    /// Designation/correlation accuracy half-window, distance (kilometres).
    pub accuracy_distance_km: f64,
    /// Tracking beam width (radians).
    pub beam_width: f64,
    /// Recognition sweep cadence (ticks).
    pub sweep_interval_ticks: u64,
    /// Wide-area plot cadence (ticks).
    pub plot_interval_ticks: u64,
    /// Interceptor speed (m/s).
    pub missile_velocity: f64,
    /// Interceptor maximum range; also bounds the range cursor (kilometres).
    pub missile_max_range_km: f64,
    /// Range-capture detection window around the cursor (kilometres).
    pub capture_distance_window_km: f64,
    /// Scale of the random spot-length jitter on the range scale.
    pub tracking_accuracy: f64,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            radar_height_km: RADAR_HEIGHT_KM,
            min_elevation: MIN_ELEVATION,
            max_elevation: MAX_ELEVATION,
            max_distance_km: MAX_DETECTION_RANGE_KM,
            accuracy_azimuth: ACCURACY_AZIMUTH,
            accuracy_elevation: ACCURACY_ELEVATION,
            accuracy_distance_km: ACCURACY_DISTANCE_KM,
            beam_width: BEAM_WIDTH,
            sweep_interval_ticks: SWEEP_INTERVAL_TICKS,
            plot_interval_ticks: PLOT_INTERVAL_TICKS,
            missile_velocity: MISSILE_VELOCITY,
            missile_max_range_km: MISSILE_MAX_RANGE_KM,
            capture_distance_window_km: CAPTURE_DISTANCE_WINDOW_KM,
            tracking_accuracy: TRACKING_ACCURACY,
        }
    }
}

/// Configuration for starting a new engagement-chain instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same jitter sequence.
    pub seed: u64,
    pub radar: RadarConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            radar: RadarConfig::default(),
        }
    }
}
