// Editor session
// Owns the roster, the playback clock, and the attached transport

use serde::Serialize;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::audio::{AudioClip, AudioOutput, IngestError, PlaybackError};
use crate::stage::{time_key_for, DancerId, Position, Roster, Stage};
use crate::timeline::{ClockSnapshot, FrameSampler, PlaybackClock, Transport};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Unknown dancer id {0}")]
    UnknownDancer(DancerId),

    #[error("No transport attached; load a clip first")]
    NoTransport,

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Playback(#[from] PlaybackError),
}

/// A dancer marker resolved for one rendered frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub id: DancerId,
    pub color: String,
    pub position: Position,
}

/// One choreography editing session
///
/// The single owner of all mutable editor state: the dancer roster, the
/// playback clock, and a handle to the attached transport source. All
/// operations go through it by reference; dropping it tears the sampling
/// loop down.
pub struct EditorSession {
    roster: Roster,
    clock: Arc<Mutex<PlaybackClock>>,
    transport: Option<Arc<dyn Transport>>,
    sampler: Option<FrameSampler>,

    // Keeps the output device alive for the attached sink transport
    _audio_out: Option<AudioOutput>,
}

impl EditorSession {
    pub fn new() -> Self {
        EditorSession {
            roster: Roster::new(),
            clock: Arc::new(Mutex::new(PlaybackClock::new())),
            transport: None,
            sampler: None,
            _audio_out: None,
        }
    }

    // ==================== AUDIO ====================

    /// Load a clip: open the output device, decode the clip onto a paused
    /// transport, and set the clock duration from the clip metadata
    pub fn load_clip(&mut self, clip: AudioClip) -> Result<(), SessionError> {
        let output = AudioOutput::open()?;
        let transport = Arc::new(output.start_clip(&clip)?);

        let info = clip.info();
        log::info!(
            "Loaded clip: {} Hz, {} channels, {} bit, {} ms",
            info.sample_rate,
            info.channels,
            info.bit_depth,
            info.duration_ms
        );

        self._audio_out = Some(output);
        self.attach_transport(transport, info.duration_secs());
        Ok(())
    }

    /// Load a WAV clip from a file on disk
    pub fn load_wav_file(&mut self, path: impl AsRef<std::path::Path>) -> Result<(), SessionError> {
        let clip = AudioClip::from_wav_file(path)?;
        self.load_clip(clip)
    }

    /// Attach an externally owned transport directly
    ///
    /// Replaces any previous transport; a running sampling loop is cancelled
    /// first. The clock keeps its current position, re-clamped to the new
    /// duration, and the new transport is synchronized to it.
    pub fn attach_transport(&mut self, transport: Arc<dyn Transport>, duration_secs: f64) {
        self.halt_playback();

        let current = {
            let mut clock = self.clock.lock().unwrap();
            clock.set_duration(duration_secs);
            clock.current_time()
        };
        transport.seek_to(current);
        self.transport = Some(transport);
    }

    pub fn has_transport(&self) -> bool {
        self.transport.is_some()
    }

    // ==================== DANCERS ====================

    /// Add a dancer at the stage's default placement for its ordinal,
    /// seeded with one keyframe at the floor of the current playback time
    pub fn add_dancer(&mut self) -> DancerId {
        let seed_pos = Stage::default_seed_position(self.roster.next_ordinal());
        self.add_dancer_at(seed_pos)
    }

    /// Add a dancer at an explicit seed position
    pub fn add_dancer_at(&mut self, seed_pos: Position) -> DancerId {
        let seed_time = self.current_time();
        let id = self.roster.add_dancer(seed_time, seed_pos);
        log::info!(
            "Added dancer {} at key {} ({:.1}, {:.1})",
            id,
            time_key_for(seed_time),
            seed_pos.x,
            seed_pos.y
        );
        id
    }

    /// Drag a dancer's marker: upsert a keyframe at the floor of the current
    /// playback time
    pub fn drag_dancer(&mut self, id: DancerId, pos: Position) -> Result<(), SessionError> {
        let t = self.current_time();
        let dancer = self
            .roster
            .get_mut(id)
            .ok_or(SessionError::UnknownDancer(id))?;

        dancer.track.upsert(t, pos);
        log::debug!(
            "Keyframe for dancer {} at key {}: ({:.1}, {:.1})",
            id,
            time_key_for(t),
            pos.x,
            pos.y
        );
        Ok(())
    }

    /// Resolve a dancer's position at time `t`
    ///
    /// `None` means the dancer is not yet visible at `t` (no keyframe at or
    /// before it) or the id is not in the roster.
    pub fn position_at(&self, id: DancerId, t: f64) -> Option<Position> {
        self.roster.get(id)?.track.position_at(t)
    }

    /// Resolve all visible dancer markers at time `t`, in insertion order
    ///
    /// Dancers without a keyframe at or before `t` are skipped.
    pub fn frame_at(&self, t: f64) -> Vec<Marker> {
        self.roster
            .iter()
            .filter_map(|dancer| {
                dancer.track.position_at(t).map(|position| Marker {
                    id: dancer.id,
                    color: dancer.color.clone(),
                    position,
                })
            })
            .collect()
    }

    /// Markers for the current playback time
    pub fn render_frame(&self) -> Vec<Marker> {
        self.frame_at(self.current_time())
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    // ==================== TRANSPORT ====================

    /// Scrub to `t`, clamped to `[0, duration]`; the transport position is
    /// synchronized if one is attached. Returns the clamped time.
    pub fn seek(&mut self, t: f64) -> f64 {
        let clamped = self.clock.lock().unwrap().seek(t);
        if let Some(transport) = &self.transport {
            transport.seek_to(clamped);
        }
        clamped
    }

    /// Start playback: synchronize the transport to the clock, resume it,
    /// and start the per-frame sampling loop
    pub fn play(&mut self) -> Result<(), SessionError> {
        if self.is_playing() {
            return Ok(());
        }
        let transport = self
            .transport
            .clone()
            .ok_or(SessionError::NoTransport)?;

        transport.seek_to(self.current_time());
        transport.play();
        self.sampler = Some(FrameSampler::start(Arc::clone(&self.clock), transport));
        self.clock.lock().unwrap().set_playing(true);
        log::info!("Playback started at {:.2}s", self.current_time());
        Ok(())
    }

    /// Pause playback
    ///
    /// Cancels the sampling loop synchronously before pausing the transport,
    /// so no stale tick lands on the clock after this returns.
    pub fn pause(&mut self) {
        self.halt_playback();
        log::info!("Playback paused at {:.2}s", self.current_time());
    }

    fn halt_playback(&mut self) {
        if let Some(sampler) = self.sampler.take() {
            sampler.stop();
        }
        if let Some(transport) = &self.transport {
            transport.pause();
        }
        self.clock.lock().unwrap().set_playing(false);
    }

    // ==================== CLOCK ====================

    pub fn current_time(&self) -> f64 {
        self.clock.lock().unwrap().current_time()
    }

    pub fn duration(&self) -> f64 {
        self.clock.lock().unwrap().duration()
    }

    pub fn is_playing(&self) -> bool {
        self.clock.lock().unwrap().is_playing()
    }

    pub fn clock(&self) -> ClockSnapshot {
        self.clock.lock().unwrap().snapshot()
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}
