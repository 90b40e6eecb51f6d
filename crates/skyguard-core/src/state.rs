//! Snapshot types emitted by the engagement chain.
//!
//! Everything here is an owned copy built at the emission boundary — a
//! consumer mutating a snapshot cannot corrupt engine state.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// A target the search radar currently recognizes.
///
/// An entry exists iff its airframe is launched, not destroyed,
/// horizon-visible, and inside the elevation gate; the table is rebuilt every
/// sweep and never goes stale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognizedTarget {
    pub id: String,
    /// Ground range from the radar site (kilometres).
    pub distance: f64,
    /// Radians, normalized to [0, 2π).
    pub azimuth: f64,
    /// Radians. Small-angle approximation: (height − mount height) / range.
    /// Defined as 0.0 for an object exactly over the site.
    pub elevation: f64,
    /// Range rate (m/s); negative = closing.
    pub radial_velocity: f64,
    /// Scalar speed (m/s).
    pub velocity: f64,
    /// Altitude (kilometres).
    pub height: f64,
    /// Intercept geometry parameter: range × tan(angle off the nose).
    pub intercept_param: f64,
    /// Apparent size (kilometres): the RCS as an equivalent-area disk.
    pub size: f64,
    pub x: f64,
    pub y: f64,
    /// Radians.
    pub heading: f64,
    /// Visibility coefficient, clamped to [0, 1].
    pub visibility_k: f64,
}

/// Mirror of a live interceptor, keyed by missile id.
/// Exists iff the missile is not destroyed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissileSnapshot {
    pub id: String,
    pub position: Position,
    /// Scalar speed (m/s).
    pub velocity: f64,
}

/// Low-fidelity wide-area plot entry — one per registered airframe,
/// regardless of recognition state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightView {
    pub id: String,
    pub position: Position,
    pub heading: f64,
    pub velocity: f64,
    pub is_launched: bool,
    pub is_destroyed: bool,
}

/// Noisy target-position handoff from the search radar to the tracking
/// radar.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Designation {
    pub azimuth: f64,
    pub elevation: f64,
    /// Kilometres; clamped below max detection range for out-of-range
    /// targets.
    pub distance: f64,
}

/// Orientation of the tracking beam and the slant-range cursor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BeamState {
    /// Radians (internal convention; see `TrackingRadar::set_azimuth`).
    pub azimuth: f64,
    /// Radians.
    pub vertical_angle: f64,
    /// Full cone width, radians.
    pub beam_width: f64,
    /// Kilometres.
    pub range_cursor: f64,
}
