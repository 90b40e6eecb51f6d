//! Simulation constants and default tuning parameters.
//!
//! Everything tunable feeds [`RadarConfig::default`](crate::config::RadarConfig);
//! the Earth radius is the one physical constant the horizon test hard-codes.

use std::f64::consts::PI;

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Mean Earth radius in kilometres (IUGG).
pub const EARTH_RADIUS_KM: f64 = 6371.009;

// --- Search radar ---

/// Antenna mount height above ground (kilometres).
pub const RADAR_HEIGHT_KM: f64 = 0.025;

/// Lower edge of the elevation gate (radians, -5°).
pub const MIN_ELEVATION: f64 = -5.0 * PI / 180.0;

/// Upper edge of the elevation gate (radians, 50°).
pub const MAX_ELEVATION: f64 = 50.0 * PI / 180.0;

/// Maximum detection range (kilometres).
pub const MAX_DETECTION_RANGE_KM: f64 = 100.0;

/// Recognition sweep cadence (ticks). The tightest schedule in the chain.
pub const SWEEP_INTERVAL_TICKS: u64 = 1;

/// Wide-area plot cadence (ticks). ~5 seconds at 30 Hz.
pub const PLOT_INTERVAL_TICKS: u64 = 150;

// --- Designation accuracy ---

/// Half-width of the azimuth accuracy window (radians, 0.5°).
pub const ACCURACY_AZIMUTH: f64 = 0.5 * PI / 180.0;

/// Half-width of the elevation accuracy window (radians, 0.5°).
pub const ACCURACY_ELEVATION: f64 = 0.5 * PI / 180.0;

/// Half-width of the distance accuracy window (kilometres).
pub const ACCURACY_DISTANCE_KM: f64 = 0.5;

// --- Tracking radar ---

/// Default beam width (radians, 4°).
pub const BEAM_WIDTH: f64 = 4.0 * PI / 180.0;

/// Range-capture detection window around the cursor (kilometres).
pub const CAPTURE_DISTANCE_WINDOW_KM: f64 = 1.0;

/// Scale of the random spot-length jitter on the range scale.
pub const TRACKING_ACCURACY: f64 = 0.2;

// --- Interceptor performance ---

/// Interceptor speed (m/s) — ~Mach 3.5.
pub const MISSILE_VELOCITY: f64 = 1200.0;

/// Interceptor maximum range, which also bounds the range cursor
/// (kilometres).
pub const MISSILE_MAX_RANGE_KM: f64 = 50.0;

/// Proximity-fuze kill radius (kilometres).
pub const MISSILE_KILL_RADIUS_KM: f64 = 1.0;
