//! Events emitted by the engagement chain for UI and audio collaborators.

use serde::{Deserialize, Serialize};

use crate::state::{FlightView, MissileSnapshot, RecognizedTarget};

/// Event stream drained from the engine after each tick.
///
/// Collection payloads are owned clones taken at emission time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RadarEvent {
    /// Full recognized-target and live-missile tables after a sweep.
    TrackTable {
        targets: Vec<RecognizedTarget>,
        missiles: Vec<MissileSnapshot>,
    },
    /// A target left the recognized table (destroyed or filtered out).
    /// Fired exactly once per removal.
    TargetDropped { id: String },
    /// Snapshot of the entire airframe roster for the wide-area plot.
    WideAreaPlot { flights: Vec<FlightView> },
    /// Direction lock acquired or dropped.
    DirectionCapture { captured: bool },
    /// Range lock acquired or dropped.
    DistanceCapture { captured: bool },
    /// Range cursor of the tracked target (kilometres).
    TrackedRange { km: f64 },
    /// True speed of the tracked target (m/s).
    TrackedVelocity { mps: f64 },
    /// Absolute height of the tracked target (metres, rounded).
    TrackedHeight { meters: f64 },
}
