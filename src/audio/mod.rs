// Audio module
// Clip ingestion and the rodio playback transport

pub mod ingest;
pub mod playback;

pub use ingest::{probe_wav, AudioClip, ClipInfo, IngestError};
pub use playback::{AudioOutput, PlaybackError, SinkTransport};
