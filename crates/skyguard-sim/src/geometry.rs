//! Spherical geometry shared by both radars.
//!
//! The search radar and the tracking radar recompute target geometry
//! independently every tick — these helpers hold the formulas, not cached
//! results.

use skyguard_core::constants::EARTH_RADIUS_KM;
use skyguard_core::types::Position;

/// Instantaneous geometry of one airframe as seen from the radar site.
#[derive(Debug, Clone, Copy)]
pub struct TargetGeometry {
    /// Ground range (kilometres).
    pub distance: f64,
    /// Radians, normalized to [0, 2π).
    pub azimuth: f64,
    /// Radians. Small-angle approximation: (height − mount height) / range.
    pub elevation: f64,
    /// Angle off the nose (radians), folded into [−π, 0).
    pub nose_offset: f64,
    /// Range rate (m/s); negative = closing.
    pub radial_velocity: f64,
}

/// Compute the full geometry for one airframe.
///
/// The elevation formula is deliberately the linear small-angle form rather
/// than an arctangent, and an object exactly over the site reports elevation
/// 0.0 instead of dividing by zero.
pub fn target_geometry(
    position: &Position,
    heading: f64,
    velocity: f64,
    radar_height_km: f64,
) -> TargetGeometry {
    let distance = position.ground_range();
    let azimuth = position.azimuth();
    let elevation = if distance > 0.0 {
        (position.z - radar_height_km) / distance
    } else {
        0.0
    };
    let nose_offset = (azimuth - heading).abs() % std::f64::consts::PI - std::f64::consts::PI;
    let radial_velocity = velocity * nose_offset.cos();
    TargetGeometry {
        distance,
        azimuth,
        elevation,
        nose_offset,
        radial_velocity,
    }
}

/// Curvature-limited line-of-sight test.
///
/// Visible iff `sqrt(2·R·h_radar) + sqrt(2·R·h_target) > distance` with R the
/// mean Earth radius. This models the radio horizon, not a tunable gate.
pub fn horizon_visible(radar_height_km: f64, target_height_km: f64, distance_km: f64) -> bool {
    let radar_horizon = (2.0 * EARTH_RADIUS_KM * radar_height_km.max(0.0)).sqrt();
    let target_horizon = (2.0 * EARTH_RADIUS_KM * target_height_km.max(0.0)).sqrt();
    radar_horizon + target_horizon > distance_km
}

/// Apparent size in kilometres: the RCS treated as an equivalent-area disk.
pub fn apparent_size_km(rcs_m2: f64) -> f64 {
    2.0 * (rcs_m2 / std::f64::consts::PI).sqrt() / 1000.0
}

/// Fold an angle difference into (−π, π].
pub fn wrap_angle(radians: f64) -> f64 {
    let wrapped = radians.rem_euclid(std::f64::consts::TAU);
    if wrapped > std::f64::consts::PI {
        wrapped - std::f64::consts::TAU
    } else {
        wrapped
    }
}
