//! Operator commands sent from the console to the engagement chain.
//!
//! Commands are validated and queued for processing at the next tick
//! boundary.

use serde::{Deserialize, Serialize};

/// All possible operator actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OperatorCommand {
    // --- Search radar control ---
    /// Enable or disable the search radar. Cadences keep running while
    /// disabled; only the work and event emission are gated.
    SetSearchEnabled { enabled: bool },

    // --- Beam steering (ignored on an axis while a capture holds it) ---
    /// Point the tracking beam. Input wraps into (-180°, 180°].
    SetBeamAzimuth { degrees: f64 },
    /// Elevate the tracking beam. Out-of-bounds input is silently ignored.
    SetBeamVerticalAngle { degrees: f64 },
    /// Widen or narrow the tracking beam.
    SetBeamWidth { degrees: f64 },
    /// Move the slant-range cursor. Accepted only strictly inside
    /// (0, max range).
    SetRangeCursor { km: f64 },

    // --- Engagement handoff ---
    /// Slew the beam to a noisy designation from the search radar.
    DesignateTarget { id: String },

    // --- Capture state machines ---
    /// Attempt a direction lock on whatever sits in the beam.
    CaptureDirection,
    /// Attempt a range lock on the direction-locked target.
    CaptureDistance,
    /// Drop the direction lock (cascades into a range-lock drop).
    ResetDirectionCapture,
    /// Drop the range lock only.
    ResetDistanceCapture,
}
