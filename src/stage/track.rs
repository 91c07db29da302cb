// Keyframe position track
// Sparse, integer-second-keyed positions with step-function lookup

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A 2D position on the stage surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Position { x, y }
    }
}

/// Integer time-key in whole seconds, obtained by flooring a playback time
pub type TimeKey = u32;

/// Convert a continuous playback time to its time-key.
/// Times are clamped to the playable range upstream, so they are never negative.
pub fn time_key_for(t: f64) -> TimeKey {
    t.max(0.0).floor() as TimeKey
}

/// Sparse keyframe track for one dancer
///
/// Positions between keyframes are held constant (zero-order hold): a lookup
/// at time `t` resolves to the keyframe with the greatest key `<= floor(t)`.
/// No tweening happens here; visual smoothing is a presentation concern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PositionTrack {
    keyframes: BTreeMap<TimeKey, Position>,
}

impl PositionTrack {
    pub fn new() -> Self {
        PositionTrack {
            keyframes: BTreeMap::new(),
        }
    }

    /// Create a track seeded with a single keyframe
    pub fn seeded(seed_time: f64, seed_pos: Position) -> Self {
        let mut track = PositionTrack::new();
        track.upsert(seed_time, seed_pos);
        track
    }

    /// Resolve the position at time `t`: the value of the keyframe with the
    /// greatest key `<= floor(t)`, or `None` if no keyframe exists at or
    /// before `t` (the dancer is not yet visible)
    pub fn position_at(&self, t: f64) -> Option<Position> {
        let key = time_key_for(t);
        self.keyframes
            .range(..=key)
            .next_back()
            .map(|(_, pos)| *pos)
    }

    /// Insert or replace the keyframe at `floor(t)`
    ///
    /// Subsequent lookups at any `t' >= floor(t)` resolve to `pos` up to the
    /// next existing keyframe. Repeated calls with the same time and position
    /// are idempotent; at the same key, the last write wins.
    pub fn upsert(&mut self, t: f64, pos: Position) {
        self.keyframes.insert(time_key_for(t), pos);
    }

    /// Number of keyframes on this track
    pub fn keyframe_count(&self) -> usize {
        self.keyframes.len()
    }

    /// Iterate keyframes in ascending time-key order
    pub fn keyframes(&self) -> impl Iterator<Item = (TimeKey, Position)> + '_ {
        self.keyframes.iter().map(|(k, p)| (*k, *p))
    }

    /// Earliest time-key on this track, if any
    pub fn first_key(&self) -> Option<TimeKey> {
        self.keyframes.keys().next().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_key_floors() {
        assert_eq!(time_key_for(0.0), 0);
        assert_eq!(time_key_for(2.7), 2);
        assert_eq!(time_key_for(5.999), 5);
    }

    #[test]
    fn test_lookup_before_first_keyframe_is_absent() {
        let track = PositionTrack::seeded(5.2, Position::new(10.0, 20.0));

        assert_eq!(track.position_at(3.0), None);
        assert_eq!(track.position_at(4.999), None);
    }

    #[test]
    fn test_lookup_holds_last_keyframe() {
        let track = PositionTrack::seeded(5.2, Position::new(10.0, 20.0));

        // Seed landed at key 5
        assert_eq!(track.position_at(5.0), Some(Position::new(10.0, 20.0)));
        assert_eq!(track.position_at(5.9), Some(Position::new(10.0, 20.0)));
        // Held indefinitely with no later keyframe
        assert_eq!(track.position_at(100.0), Some(Position::new(10.0, 20.0)));
    }

    #[test]
    fn test_upsert_then_lookup_at_same_key() {
        let mut track = PositionTrack::new();
        track.upsert(3.4, Position::new(50.0, 60.0));

        assert_eq!(track.position_at(3.4), Some(Position::new(50.0, 60.0)));
        assert_eq!(track.position_at(3.0), Some(Position::new(50.0, 60.0)));
    }

    #[test]
    fn test_second_write_at_same_key_wins() {
        let mut track = PositionTrack::new();
        track.upsert(3.1, Position::new(1.0, 1.0));
        track.upsert(3.9, Position::new(2.0, 2.0));

        assert_eq!(track.keyframe_count(), 1);
        assert_eq!(track.position_at(3.5), Some(Position::new(2.0, 2.0)));
    }

    #[test]
    fn test_step_function_scenario() {
        // Seed at key 0, then an edit mid-second at 2.7
        let mut track = PositionTrack::seeded(0.0, Position::new(100.0, 100.0));
        track.upsert(2.7, Position::new(200.0, 150.0));

        assert_eq!(track.position_at(1.5), Some(Position::new(100.0, 100.0)));
        assert_eq!(track.position_at(2.7), Some(Position::new(200.0, 150.0)));
        assert_eq!(track.position_at(10.0), Some(Position::new(200.0, 150.0)));
    }

    #[test]
    fn test_keyframes_iterate_in_key_order() {
        let mut track = PositionTrack::new();
        track.upsert(7.0, Position::new(3.0, 3.0));
        track.upsert(0.0, Position::new(1.0, 1.0));
        track.upsert(2.0, Position::new(2.0, 2.0));

        let keys: Vec<TimeKey> = track.keyframes().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![0, 2, 7]);
        assert_eq!(track.first_key(), Some(0));
    }
}
