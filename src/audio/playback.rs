// Audio playback transport
// rodio-backed output device and sink implementing the timeline transport seam

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use std::io::Cursor;
use std::time::Duration;
use thiserror::Error;

use super::ingest::AudioClip;
use crate::timeline::Transport;

#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("No audio output device available: {0}")]
    DeviceError(String),

    #[error("Failed to open playback sink: {0}")]
    PlayError(String),

    #[error("Failed to decode clip: {0}")]
    DecodeError(String),
}

/// Handle to the default audio output device
///
/// Must outlive any transport started on it; dropping the stream silences
/// playback.
pub struct AudioOutput {
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl AudioOutput {
    /// Acquire the default output device
    pub fn open() -> Result<Self, PlaybackError> {
        let (stream, handle) =
            OutputStream::try_default().map_err(|e| PlaybackError::DeviceError(e.to_string()))?;
        Ok(AudioOutput {
            _stream: stream,
            handle,
        })
    }

    /// Decode a clip onto a new sink, paused at position zero
    ///
    /// The session decides when the transport starts rolling.
    pub fn start_clip(&self, clip: &AudioClip) -> Result<SinkTransport, PlaybackError> {
        let source = Decoder::new(Cursor::new(clip.data().to_vec()))
            .map_err(|e| PlaybackError::DecodeError(e.to_string()))?;

        let sink =
            Sink::try_new(&self.handle).map_err(|e| PlaybackError::PlayError(e.to_string()))?;
        sink.pause();
        sink.append(source);

        Ok(SinkTransport { sink })
    }
}

/// A rodio sink exposed through the transport seam
pub struct SinkTransport {
    sink: Sink,
}

impl Transport for SinkTransport {
    fn position_secs(&self) -> f64 {
        self.sink.get_pos().as_secs_f64()
    }

    fn seek_to(&self, secs: f64) {
        if let Err(e) = self.sink.try_seek(Duration::from_secs_f64(secs.max(0.0))) {
            log::warn!("transport seek to {:.2}s failed: {}", secs, e);
        }
    }

    fn play(&self) {
        self.sink.play();
    }

    fn pause(&self) {
        self.sink.pause();
    }
}
