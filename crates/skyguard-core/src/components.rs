//! ECS components for hecs entities.
//!
//! Components are plain data structs mutated by the external flight
//! collaborator each simulation step. The radars only read them, except for
//! the `kill`/`destroy` capabilities invoked on a proximity kill.

use serde::{Deserialize, Serialize};

use crate::config::RadarConfig;

/// Radar cross section — how visible an entity is to radar.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RadarCrossSection {
    /// Base RCS in square meters. Smaller = harder to detect.
    pub base_rcs_m2: f64,
}

/// An airborne object tracked by the engagement chain.
///
/// Position lives in a separate [`Position`](crate::types::Position)
/// component. Heading, velocity, and the lifecycle flags are written by the
/// flight collaborator between ticks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Airframe {
    /// Unique identifier, assigned at registration.
    pub id: String,
    /// Course over ground in radians.
    pub heading: f64,
    /// Scalar speed in m/s.
    pub velocity: f64,
    /// Objects that have not launched yet are invisible to both radars.
    pub is_launched: bool,
    pub is_destroyed: bool,
}

impl Airframe {
    pub fn new(id: impl Into<String>, heading: f64, velocity: f64) -> Self {
        Self {
            id: id.into(),
            heading,
            velocity,
            is_launched: true,
            is_destroyed: false,
        }
    }

    /// Proximity-kill capability invoked by the missile sweep.
    /// Idempotent per object.
    pub fn kill(&mut self) {
        self.is_destroyed = true;
    }
}

/// An interceptor missile in flight.
///
/// `target_distance_km` is precomputed by the flight collaborator against the
/// assigned target; the missile sweep only compares it to the kill radius.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interceptor {
    pub id: String,
    /// Airframe id of the engaged target.
    pub target_id: String,
    /// Scalar speed in m/s.
    pub velocity: f64,
    /// Distance to the assigned target in kilometres.
    pub target_distance_km: f64,
    /// Proximity-fuze radius in kilometres.
    pub kill_radius_km: f64,
    pub is_destroyed: bool,
}

impl Interceptor {
    /// A freshly launched interceptor with performance taken from the radar
    /// configuration. The flight collaborator updates `target_distance_km`
    /// as the missile closes.
    pub fn launched_at(
        id: impl Into<String>,
        target_id: impl Into<String>,
        config: &RadarConfig,
    ) -> Self {
        Self {
            id: id.into(),
            target_id: target_id.into(),
            velocity: config.missile_velocity,
            target_distance_km: f64::INFINITY,
            kill_radius_km: crate::constants::MISSILE_KILL_RADIUS_KM,
            is_destroyed: false,
        }
    }

    /// Detonation/abort capability. Idempotent.
    pub fn destroy(&mut self) {
        self.is_destroyed = true;
    }
}
