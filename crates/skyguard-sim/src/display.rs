//! Display collaborator seam for the tracking radar.
//!
//! The tracker pushes beam-relative projections to whatever implements
//! `TrackingDisplay`. All methods default to no-ops; an unwired tracker runs
//! against `NullDisplay` and silently discards every call.

/// Per-tick sink for beam-relative projections and beam orientation.
pub trait TrackingDisplay {
    /// A target is inside the beam cone. Offsets are normalized to the beam
    /// half-width; `spot_size` is the angular share of the beam, and
    /// `spot_length` the jittered extent on the range scale (kilometres).
    fn set_target_params(
        &mut self,
        _id: &str,
        _visibility_k: f64,
        _spot_size: f64,
        _spot_length: f64,
        _offset_x: f64,
        _offset_y: f64,
    ) {
    }

    /// A target left the beam cone (or was destroyed).
    fn remove_target(&mut self, _id: &str) {}

    /// Missiles are projected unconditionally, in or out of the cone.
    fn set_missile_params(&mut self, _id: &str, _offset_x: f64, _offset_y: f64) {}

    fn remove_missile(&mut self, _id: &str) {}

    /// Range-cursor position (kilometres).
    fn set_distance(&mut self, _km: f64) {}

    /// Beam azimuth (internal radians).
    fn set_azimuth(&mut self, _radians: f64) {}

    /// Beam vertical angle (radians).
    fn set_vertical_angle(&mut self, _radians: f64) {}
}

/// Display used until a real collaborator is wired.
pub struct NullDisplay;

impl TrackingDisplay for NullDisplay {}
