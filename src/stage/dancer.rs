// Dancer model
// A choreography subject with a cosmetic marker color and a position track

use serde::{Deserialize, Serialize};
use std::fmt;

use super::track::{Position, PositionTrack};

/// Stable dancer identifier
///
/// Issued as ordinals starting at 1; never reused, even across many additions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DancerId(pub u32);

impl fmt::Display for DancerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A dancer on the stage
///
/// Invariant: the track always holds at least one keyframe, seeded at
/// creation time by the roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dancer {
    /// Unique, stable identifier
    pub id: DancerId,

    /// Marker color as a hex string (cosmetic, no invariant)
    pub color: String,

    /// Sparse keyframe track
    pub track: PositionTrack,
}

impl Dancer {
    pub fn new(id: DancerId, color: String, seed_time: f64, seed_pos: Position) -> Self {
        Dancer {
            id,
            color,
            track: PositionTrack::seeded(seed_time, seed_pos),
        }
    }
}
