// Playback clock
// Current time, duration, and playing flag for an editor session

use serde::{Deserialize, Serialize};

/// Playback clock for the timeline
///
/// While playing, the frame sampler writes the transport position in via
/// `tick`; while paused, scrub edits through `seek` are authoritative.
#[derive(Debug, Clone)]
pub struct PlaybackClock {
    current_time: f64,
    duration: f64,
    playing: bool,
}

/// Point-in-time copy of the clock, for render layers and bridges
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClockSnapshot {
    pub current_time: f64,
    pub duration: f64,
    pub playing: bool,
}

impl PlaybackClock {
    pub fn new() -> Self {
        PlaybackClock {
            current_time: 0.0,
            duration: 0.0,
            playing: false,
        }
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Set the duration from a loaded clip and re-clamp the current time
    pub fn set_duration(&mut self, duration: f64) {
        self.duration = duration.max(0.0);
        self.current_time = self.current_time.clamp(0.0, self.duration);
    }

    /// Scrub to `t`, clamped to `[0, duration]`. Returns the clamped time.
    pub fn seek(&mut self, t: f64) -> f64 {
        self.current_time = t.clamp(0.0, self.duration);
        self.current_time
    }

    /// Advance to the transport position (sampler path); clamped like `seek`
    pub fn tick(&mut self, transport_pos: f64) {
        self.current_time = transport_pos.clamp(0.0, self.duration);
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    pub fn snapshot(&self) -> ClockSnapshot {
        ClockSnapshot {
            current_time: self.current_time,
            duration: self.duration,
            playing: self.playing,
        }
    }
}

impl Default for PlaybackClock {
    fn default() -> Self {
        Self::new()
    }
}
