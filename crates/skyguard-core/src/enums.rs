//! Enumeration types used throughout the engagement chain.

use serde::{Deserialize, Serialize};

/// Composite capture state of the tracking radar.
///
/// Range lock is only reachable on top of a direction lock, so the two
/// machines are folded into one tagged state — a range lock without a
/// direction lock is unrepresentable. Both locks clear together whenever the
/// tracked target is lost or destroyed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state")]
pub enum CaptureState {
    /// Searching; the beam obeys manual steering.
    #[default]
    Idle,
    /// Direction lock: beam azimuth and vertical angle slave to the target.
    Direction { target_id: String },
    /// Direction + range lock: the range cursor slaves as well.
    Full { target_id: String },
}

impl CaptureState {
    /// Id of the tracked target, if any lock is held.
    pub fn target_id(&self) -> Option<&str> {
        match self {
            CaptureState::Idle => None,
            CaptureState::Direction { target_id } | CaptureState::Full { target_id } => {
                Some(target_id)
            }
        }
    }

    pub fn is_direction_locked(&self) -> bool {
        !matches!(self, CaptureState::Idle)
    }

    pub fn is_range_locked(&self) -> bool {
        matches!(self, CaptureState::Full { .. })
    }
}
