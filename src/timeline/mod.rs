// Timeline module
// Playback clock, transport seam, and the per-frame sampling loop

pub mod clock;
pub mod sampler;
pub mod transport;

pub use clock::{ClockSnapshot, PlaybackClock};
pub use sampler::{FrameSampler, FRAME_INTERVAL};
pub use transport::Transport;
