// Audio clip ingestion
// Probes WAV metadata; the clip bytes stay opaque to the rest of the editor

use hound::WavReader;
use serde::{Deserialize, Serialize};
use std::io::Cursor;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Failed to read WAV data: {0}")]
    WavReadError(#[from] hound::Error),

    #[error("Failed to read audio file: {0}")]
    IoError(#[from] std::io::Error),
}

/// Metadata probed from a clip's container
///
/// Only the duration drives the editor; the rest is surfaced for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipInfo {
    /// Sample rate in Hz (e.g., 44100, 48000)
    pub sample_rate: u32,

    /// Number of channels (1 = mono, 2 = stereo)
    pub channels: u16,

    /// Bit depth of the audio (8, 16, 24, 32)
    pub bit_depth: u16,

    /// Duration in milliseconds
    pub duration_ms: i64,
}

impl ClipInfo {
    /// Get duration in seconds as f64
    pub fn duration_secs(&self) -> f64 {
        self.duration_ms as f64 / 1000.0
    }
}

/// An audio clip: raw container bytes plus probed metadata
///
/// Samples are never decoded here; playback hands the bytes to the transport
/// as-is and the timeline consumes only the duration.
#[derive(Debug, Clone)]
pub struct AudioClip {
    data: Vec<u8>,
    info: ClipInfo,
}

impl AudioClip {
    /// Ingest a WAV clip from raw bytes
    pub fn from_wav_bytes(data: Vec<u8>) -> Result<Self, IngestError> {
        let info = probe_wav(&data)?;
        Ok(AudioClip { data, info })
    }

    /// Ingest a WAV clip from a file on disk
    pub fn from_wav_file(path: impl AsRef<Path>) -> Result<Self, IngestError> {
        let data = std::fs::read(path)?;
        Self::from_wav_bytes(data)
    }

    pub fn info(&self) -> ClipInfo {
        self.info
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// Probe WAV metadata from raw bytes
pub fn probe_wav(data: &[u8]) -> Result<ClipInfo, IngestError> {
    let reader = WavReader::new(Cursor::new(data))?;
    let spec = reader.spec();

    // duration() is the frame count (samples per channel)
    let frame_count = reader.duration();
    let duration_secs = frame_count as f64 / spec.sample_rate as f64;
    let duration_ms = (duration_secs * 1000.0) as i64;

    Ok(ClipInfo {
        sample_rate: spec.sample_rate,
        channels: spec.channels,
        bit_depth: spec.bits_per_sample,
        duration_ms,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Build an in-memory mono 16-bit WAV of `secs` seconds of silence
    pub(crate) fn silent_wav_bytes(secs: f64, sample_rate: u32) -> Vec<u8> {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };

        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
            let frames = (secs * sample_rate as f64) as usize;
            for _ in 0..frames {
                writer.write_sample(0i16).unwrap();
            }
            writer.finalize().unwrap();
        }
        cursor.into_inner()
    }

    #[test]
    fn test_probe_wav_metadata() {
        let bytes = silent_wav_bytes(2.0, 44100);
        let info = probe_wav(&bytes).unwrap();

        assert_eq!(info.sample_rate, 44100);
        assert_eq!(info.channels, 1);
        assert_eq!(info.bit_depth, 16);
        assert_eq!(info.duration_ms, 2000);
        assert_eq!(info.duration_secs(), 2.0);
    }

    #[test]
    fn test_from_wav_bytes_keeps_data_opaque() {
        let bytes = silent_wav_bytes(0.5, 48000);
        let clip = AudioClip::from_wav_bytes(bytes.clone()).unwrap();

        assert_eq!(clip.data(), bytes.as_slice());
        assert_eq!(clip.info().duration_ms, 500);
    }

    #[test]
    fn test_from_wav_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.wav");
        std::fs::write(&path, silent_wav_bytes(1.0, 22050)).unwrap();

        let clip = AudioClip::from_wav_file(&path).unwrap();
        assert_eq!(clip.info().sample_rate, 22050);
        assert_eq!(clip.info().duration_ms, 1000);
    }

    #[test]
    fn test_garbage_bytes_are_rejected() {
        let result = AudioClip::from_wav_bytes(vec![0u8; 16]);
        assert!(matches!(result, Err(IngestError::WavReadError(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = AudioClip::from_wav_file("/nonexistent/clip.wav");
        assert!(matches!(result, Err(IngestError::IoError(_))));
    }
}
